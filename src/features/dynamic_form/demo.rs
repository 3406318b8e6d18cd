//! Demo Forms
//!
//! Ready-made forms used by the binary when no schema file is given.

use clap::ValueEnum;

use crate::domain::field::{ButtonStyle, Color, TextField};
use crate::domain::form::{FormBuilder, FormDefinition};
use crate::domain::validator::{IntRange, MinLength, NonBlank};
use crate::error::Result;
use crate::features::dynamic_form::MountedForm;
use crate::i18n::{Locale, t};

/// Built-in forms selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DemoForm {
    /// Names, email, age and two buttons
    #[default]
    Registration,
    /// One field longer than 8 characters
    Validated,
}

impl DemoForm {
    /// Build the form with its localized title
    pub fn mount(self, locale: Locale) -> Result<MountedForm> {
        match self {
            DemoForm::Registration => Ok(MountedForm::new(
                t(locale, "demo.title"),
                registration_form(locale)?,
            )),
            DemoForm::Validated => Ok(MountedForm::new(
                t(locale, "demo.validated_title"),
                validated_field_form(locale)?,
            )),
        }
    }
}

/// Registration form: names, email, age and two buttons.
///
/// "Edad" only accepts ages between 1 and 90. The submit button is always
/// enabled; the second one is gated on the validity of the form.
pub fn registration_form(locale: Locale) -> Result<FormDefinition> {
    let submit = t(locale, "demo.submit");
    let disable = t(locale, "demo.disable");

    FormBuilder::with_locale(locale)
        .text_field(
            TextField::new(t(locale, "demo.first_name"), NonBlank)
                .error_message(t(locale, "demo.first_name_error")),
        )
        .text_field(
            TextField::new(t(locale, "demo.last_name"), NonBlank)
                .error_message(t(locale, "demo.last_name_error")),
        )
        .text_field(TextField::email_in("Email", locale).error_message(t(locale, "demo.email_error")))
        .text_field(
            TextField::numeric_in(t(locale, "demo.age"), locale)
                .validator(IntRange::new(1..=90))
                .error_message(t(locale, "demo.age_error")),
        )
        .button(
            submit.clone(),
            ButtonStyle::with_background(Color::GREEN),
            move || tracing::info!(title = %submit, "form submitted"),
        )
        .gated_button(
            disable.clone(),
            ButtonStyle::gated(),
            move || tracing::info!(title = %disable, "button clicked"),
            || true,
        )
        .build()
}

/// A single field that must be longer than 8 characters
pub fn validated_field_form(locale: Locale) -> Result<FormDefinition> {
    FormBuilder::with_locale(locale)
        .text_field(
            TextField::new(t(locale, "demo.validated_label"), MinLength::new(9))
                .error_message(t(locale, "demo.validated_error")),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dynamic_form::FormController;

    #[test]
    fn demos_mount_with_their_titles() {
        let registration = DemoForm::Registration.mount(Locale::EsES).expect("mount");
        assert_eq!(registration.title, "Formulario dinámico");
        assert!(registration.definition.text_field("Nombre").is_some());

        let validated = DemoForm::Validated.mount(Locale::EnUS).expect("mount");
        assert_eq!(validated.title, "Validated field");
        assert!(validated.definition.text_field("Write something").is_some());
    }

    #[test]
    fn registration_form_in_spanish() {
        let form = registration_form(Locale::EsES).expect("form builds");
        let labels: Vec<_> = form.text_fields().map(|field| field.label()).collect();
        assert_eq!(labels, vec!["Nombre", "Apellido", "Email", "Edad"]);

        let titles: Vec<_> = form.buttons().map(|button| button.title()).collect();
        assert_eq!(titles, vec!["Enviar", "Deshabilitar"]);
    }

    #[test]
    fn invalid_email_does_not_touch_age() {
        let mut form = FormController::new(registration_form(Locale::EsES).expect("form"), 10);
        form.edit("Edad", "35").expect("edit");
        form.edit("Email", "no-es-un-email").expect("edit");

        let snapshot = form.snapshot();
        let edad = snapshot.text("Edad").expect("Edad");
        assert_eq!(edad.value, "35");
        assert!(!edad.invalid);

        let email = snapshot.text("Email").expect("Email");
        assert_eq!(email.error.as_deref(), Some("Debe ingresar un email válido"));

        assert!(snapshot.button("Enviar").expect("Enviar").enabled);
        assert!(!snapshot.button("Deshabilitar").expect("Deshabilitar").enabled);
    }

    #[test]
    fn age_limits() {
        let mut form = FormController::new(registration_form(Locale::EnUS).expect("form"), 10);
        for (age, invalid) in [("90", false), ("91", true), ("0", true), ("1", false)] {
            form.edit("Age", age).expect("edit");
            assert_eq!(form.state().is_invalid("Age"), invalid, "age {age}");
        }
    }

    #[test]
    fn validated_field_needs_more_than_eight_characters() {
        let mut form = FormController::new(validated_field_form(Locale::EnUS).expect("form"), 10);
        form.edit("Write something", "12345678").expect("edit");
        assert_eq!(
            form.state().error_message("Write something"),
            Some("The size should be upper 8")
        );
        form.edit("Write something", "123456789").expect("edit");
        assert_eq!(form.state().error_message("Write something"), None);
    }
}
