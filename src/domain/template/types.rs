//! Template types and error definitions

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("A template is required before rendering")]
    TemplateRequired,

    #[error("A language is required before rendering")]
    LanguageRequired,

    #[error("Template {template} has no translation for language {language}")]
    TranslationNotFound { template: String, language: Language },

    #[error("Template {template} has no subject for language {language}")]
    SubjectMissing { template: String, language: Language },

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid template ID: {0}")]
    InvalidId(String),
}

impl TemplateError {
    /// Stable machine-readable code for this error.
    ///
    /// `TranslationNotFound` shares the `LANGUAGE_REQUIRED` code: hosts that
    /// dispatch on codes treat a missing translation like a missing language.
    pub fn code(&self) -> &'static str {
        match self {
            TemplateError::TemplateRequired => "TEMPLATE_REQUIRED",
            TemplateError::LanguageRequired | TemplateError::TranslationNotFound { .. } => {
                "LANGUAGE_REQUIRED"
            }
            TemplateError::SubjectMissing { .. } => "SUBJECT_MISSING",
            TemplateError::NotFound(_) => "TEMPLATE_NOT_FOUND",
            TemplateError::AlreadyExists(_) => "TEMPLATE_EXISTS",
            TemplateError::InvalidId(_) => "INVALID_ID",
        }
    }
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Macro name to substitution value.
pub type Params = HashMap<String, String>;

/// Language code used as the lookup key into a template's translations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Language-specific content of a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Subject pattern, required to render a subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// HTML body pattern (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Plain-text body pattern (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TranslationRecord {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A mail template definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique template identifier (alphanumeric, dash, underscore)
    pub id: String,

    /// Human-readable template name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// One translation per language
    #[serde(default)]
    pub translations: HashMap<Language, TranslationRecord>,
}

impl Template {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            translations: HashMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add or replace the translation for `language`.
    pub fn with_translation(
        mut self,
        language: impl Into<Language>,
        translation: TranslationRecord,
    ) -> Self {
        self.translations.insert(language.into(), translation);
        self
    }

    /// Get the translation for a language, if any
    pub fn translation(&self, language: &Language) -> Option<&TranslationRecord> {
        self.translations.get(language)
    }

    /// Languages this template is translated into, sorted
    pub fn languages(&self) -> Vec<&Language> {
        let mut languages: Vec<_> = self.translations.keys().collect();
        languages.sort();
        languages
    }

    /// Validate the template
    pub fn validate(&self) -> TemplateResult<()> {
        if self.id.is_empty() || self.id.len() > 64 {
            return Err(TemplateError::InvalidId(
                "ID must be 1-64 characters".to_string(),
            ));
        }

        if !self
            .id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TemplateError::InvalidId(
                "ID must contain only alphanumeric, dash, or underscore".to_string(),
            ));
        }

        Ok(())
    }
}

/// All three parts of a message rendered at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    pub subject: String,
    pub html: String,
    pub text: String,
}
