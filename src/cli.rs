//! Command Line Arguments

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::features::dynamic_form::{DemoForm, MountedForm};
use crate::i18n::Locale;

#[derive(Debug, Parser)]
#[command(name = "compose-patterns", version, about = "Dynamic forms with inline validation")]
pub struct Cli {
    /// Form file to mount (TOML or JSON)
    #[arg(value_name = "FORM_FILE", conflicts_with = "demo")]
    pub form_file: Option<PathBuf>,

    /// Built-in form mounted when no file is given
    #[arg(long, value_enum, default_value_t = DemoForm::Registration)]
    pub demo: DemoForm,

    /// Print the JSON Schema of form files and exit
    #[arg(long)]
    pub json_schema: bool,
}

impl Cli {
    /// The form selected by the arguments
    pub fn mount(&self, locale: Locale) -> Result<MountedForm> {
        match &self.form_file {
            Some(path) => MountedForm::load(path, locale),
            None => self.demo.mount(locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn registration_is_the_default() {
        let cli = Cli::try_parse_from(["compose-patterns"]).expect("parse");
        assert_eq!(cli.demo, DemoForm::Registration);
        assert!(cli.form_file.is_none());
        assert!(!cli.json_schema);

        let form = cli.mount(Locale::EnUS).expect("mount");
        assert_eq!(form.title, "Dynamic form");
    }

    #[test]
    fn demo_flag_selects_validated_form() {
        let cli = Cli::try_parse_from(["compose-patterns", "--demo", "validated"]).expect("parse");
        let form = cli.mount(Locale::EsES).expect("mount");

        assert_eq!(form.title, "Campo validado");
        assert_eq!(form.definition.len(), 1);
        assert!(form.definition.text_field("Escribe algo").is_some());
    }

    #[test]
    fn unknown_demo_is_rejected() {
        assert!(Cli::try_parse_from(["compose-patterns", "--demo", "survey"]).is_err());
    }

    #[test]
    fn form_file_conflicts_with_demo() {
        let result = Cli::try_parse_from(["compose-patterns", "form.toml", "--demo", "validated"]);
        assert!(result.is_err());
    }

    #[test]
    fn form_file_title_is_mounted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("form.toml");
        fs::write(&path, "title = \"Registro\"\n[[fields]]\nkind = \"numeric\"\nlabel = \"Edad\"\n")
            .expect("write");

        let cli = Cli::try_parse_from([
            "compose-patterns".into(),
            path.clone().into_os_string(),
        ])
        .expect("parse");
        assert_eq!(cli.form_file.as_deref(), Some(path.as_path()));

        let form = cli.mount(Locale::EnUS).expect("mount");
        assert_eq!(form.title, "Registro");
        assert!(form.definition.text_field("Edad").is_some());
    }

    #[test]
    fn json_schema_flag() {
        let cli = Cli::try_parse_from(["compose-patterns", "--json-schema"]).expect("parse");
        assert!(cli.json_schema);
    }
}
