//! Mounted Form - A Definition and the Title Shown Above It

use std::path::Path;

use crate::domain::form::FormDefinition;
use crate::domain::schema::FormSchema;
use crate::error::Result;
use crate::i18n::{Locale, t};
use crate::utils::config_store;

/// What a session (console or window) presents
#[derive(Debug, Clone)]
pub struct MountedForm {
    pub title: String,
    pub definition: FormDefinition,
}

impl MountedForm {
    pub fn new(title: impl Into<String>, definition: FormDefinition) -> Self {
        Self {
            title: title.into(),
            definition,
        }
    }

    /// Build a form file; untitled files get a generic title
    pub fn from_schema(schema: &FormSchema, locale: Locale) -> Result<Self> {
        let definition = schema.build(locale)?;
        let title = match &schema.title {
            Some(title) => title.clone(),
            None => t(locale, "form.untitled"),
        };
        Ok(Self::new(title, definition))
    }

    /// Read and build a TOML or JSON form file
    pub fn load(path: &Path, locale: Locale) -> Result<Self> {
        let schema: FormSchema = config_store::load_required(path)?;
        tracing::info!(path = %path.display(), fields = schema.fields.len(), "form file loaded");
        Self::from_schema(&schema, locale)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::error::Error;

    #[test]
    fn schema_title_is_kept() {
        let schema = FormSchema::from_toml(
            "title = \"Registro\"\n[[fields]]\nkind = \"email\"\nlabel = \"Email\"\n",
        )
        .expect("parse");

        let form = MountedForm::from_schema(&schema, Locale::EsES).expect("mount");
        assert_eq!(form.title, "Registro");
        assert_eq!(form.definition.len(), 1);
    }

    #[test]
    fn untitled_schema_gets_generic_title() {
        let schema = FormSchema::from_toml("[[fields]]\nkind = \"email\"\nlabel = \"Email\"\n")
            .expect("parse");

        let form = MountedForm::from_schema(&schema, Locale::EsES).expect("mount");
        assert_eq!(form.title, "Formulario");
    }

    #[test]
    fn load_reads_json_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("form.json");
        fs::write(
            &path,
            r#"{ "title": "Contact", "fields": [ { "kind": "button", "title": "Send" } ] }"#,
        )
        .expect("write");

        let form = MountedForm::load(&path, Locale::EnUS).expect("load");
        assert_eq!(form.title, "Contact");
        assert!(form.definition.button("Send").is_some());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = MountedForm::load(&dir.path().join("missing.toml"), Locale::EnUS);
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
