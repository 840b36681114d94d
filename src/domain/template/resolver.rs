//! Translation lookup for a template and language

use super::types::{Language, Template, TemplateError, TemplateResult, TranslationRecord};

/// Find the translation of `template` for `language`.
pub fn resolve_translation<'a>(
    template: &'a Template,
    language: &Language,
) -> TemplateResult<&'a TranslationRecord> {
    template
        .translation(language)
        .ok_or_else(|| TemplateError::TranslationNotFound {
            template: template.id.clone(),
            language: language.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_existing() {
        let template =
            Template::new("welcome").with_translation("en", TranslationRecord::new("Hi"));

        let record = resolve_translation(&template, &"en".into()).unwrap();
        assert_eq!(record.subject.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_resolve_missing_language() {
        let template =
            Template::new("welcome").with_translation("en", TranslationRecord::new("Hi"));

        let err = resolve_translation(&template, &"fr".into()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::TranslationNotFound {
                template: "welcome".to_string(),
                language: "fr".into(),
            }
        );
    }

    #[test]
    fn test_resolve_empty_template() {
        let template = Template::new("empty");
        assert!(resolve_translation(&template, &"en".into()).is_err());
    }
}
