//! Immutable template + language pair that renders message parts

use std::fmt;

use crate::template::{
    resolve_translation, substitute_macros, Language, Params, RenderedMessage, Template,
    TemplateError, TemplateResult, TranslationRecord,
};

/// A renderable part of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePart {
    Subject,
    Html,
    Text,
}

impl MessagePart {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessagePart::Subject => "subject",
            MessagePart::Html => "html",
            MessagePart::Text => "text",
        }
    }
}

impl fmt::Display for MessagePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How stored patterns become output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MacroMode {
    /// Replace `$$name$$` macros that have a value
    #[default]
    Substitute,
    /// Return stored patterns untouched
    Verbatim,
}

/// Template and language bound together for rendering.
///
/// Every render call resolves the translation again; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    template: &'a Template,
    language: &'a Language,
    mode: MacroMode,
}

impl<'a> RenderContext<'a> {
    pub fn new(template: &'a Template, language: &'a Language) -> Self {
        Self {
            template,
            language,
            mode: MacroMode::Substitute,
        }
    }

    pub fn with_mode(mut self, mode: MacroMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn template(&self) -> &'a Template {
        self.template
    }

    pub fn language(&self) -> &'a Language {
        self.language
    }

    pub fn mode(&self) -> MacroMode {
        self.mode
    }

    pub fn translation(&self) -> TemplateResult<&'a TranslationRecord> {
        resolve_translation(self.template, self.language)
    }

    /// Render the subject. A missing or empty subject is an error.
    pub fn render_subject(&self, params: Option<&Params>) -> TemplateResult<String> {
        let translation = self.translation()?;
        match translation.subject.as_deref() {
            Some(subject) if !subject.is_empty() => {
                Ok(self.apply(MessagePart::Subject, subject, params))
            }
            _ => Err(TemplateError::SubjectMissing {
                template: self.template.id.clone(),
                language: self.language.clone(),
            }),
        }
    }

    /// Render the HTML body, or "" when the translation has none.
    pub fn render_body_html(&self, params: Option<&Params>) -> TemplateResult<String> {
        let translation = self.translation()?;
        Ok(self.apply_optional(MessagePart::Html, translation.html.as_deref(), params))
    }

    /// Render the plain-text body, or "" when the translation has none.
    pub fn render_body_text(&self, params: Option<&Params>) -> TemplateResult<String> {
        let translation = self.translation()?;
        Ok(self.apply_optional(MessagePart::Text, translation.text.as_deref(), params))
    }

    pub fn render_message(&self, params: Option<&Params>) -> TemplateResult<RenderedMessage> {
        Ok(RenderedMessage {
            subject: self.render_subject(params)?,
            html: self.render_body_html(params)?,
            text: self.render_body_text(params)?,
        })
    }

    fn apply_optional(
        &self,
        part: MessagePart,
        pattern: Option<&str>,
        params: Option<&Params>,
    ) -> String {
        match pattern {
            Some(pattern) => self.apply(part, pattern, params),
            None => String::new(),
        }
    }

    fn apply(&self, part: MessagePart, pattern: &str, params: Option<&Params>) -> String {
        tracing::debug!(
            template_id = %self.template.id,
            language = %self.language,
            part = %part,
            mode = ?self.mode,
            "Rendering message part"
        );

        match self.mode {
            MacroMode::Substitute => substitute_macros(pattern, params),
            MacroMode::Verbatim => pattern.to_string(),
        }
    }
}
