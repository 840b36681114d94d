//! Stateful render interfaces bound to a template and language

use std::sync::Arc;

use super::context::{MacroMode, RenderContext};
use crate::template::{Language, Params, RenderedMessage, Template, TemplateError, TemplateResult};

/// Registry name of the interface that substitutes macros
pub const BASIC_RENDER_NAME: &str = "NabuMailTemplateBasicRender";

/// Registry name of the interface that returns patterns untouched
pub const VERBATIM_RENDER_NAME: &str = "NabuMailTemplateRender";

/// Renders message parts for the configured template and language.
///
/// Setters overwrite the previous value. Configure-then-render is not atomic,
/// so share a [`RenderContext`] instead of an interface across threads.
pub trait TemplateRenderInterface: Send {
    /// Name this interface is registered under
    fn name(&self) -> &str;

    /// Called once after construction; `false` rejects the instance
    fn init(&mut self) -> bool {
        true
    }

    fn finish(&mut self) {}

    fn set_template(&mut self, template: Arc<Template>);

    fn set_language(&mut self, language: Language);

    /// Bind the configured slots, failing when either is empty.
    fn context(&self) -> TemplateResult<RenderContext<'_>>;

    fn render_subject(&self, params: Option<&Params>) -> TemplateResult<String> {
        self.context()?.render_subject(params)
    }

    fn render_body_html(&self, params: Option<&Params>) -> TemplateResult<String> {
        self.context()?.render_body_html(params)
    }

    fn render_body_text(&self, params: Option<&Params>) -> TemplateResult<String> {
        self.context()?.render_body_text(params)
    }

    fn render_message(&self, params: Option<&Params>) -> TemplateResult<RenderedMessage> {
        self.context()?.render_message(params)
    }
}

/// Render interface with optional template and language slots
#[derive(Debug, Clone)]
pub struct MailRenderInterface {
    name: &'static str,
    mode: MacroMode,
    template: Option<Arc<Template>>,
    language: Option<Language>,
}

impl MailRenderInterface {
    /// Interface that substitutes `$$name$$` macros
    pub fn basic() -> Self {
        Self::with_mode(BASIC_RENDER_NAME, MacroMode::Substitute)
    }

    /// Interface that renders stored patterns without substitution
    pub fn verbatim() -> Self {
        Self::with_mode(VERBATIM_RENDER_NAME, MacroMode::Verbatim)
    }

    fn with_mode(name: &'static str, mode: MacroMode) -> Self {
        Self {
            name,
            mode,
            template: None,
            language: None,
        }
    }

    pub fn mode(&self) -> MacroMode {
        self.mode
    }

    pub fn template(&self) -> Option<&Arc<Template>> {
        self.template.as_ref()
    }

    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }
}

impl TemplateRenderInterface for MailRenderInterface {
    fn name(&self) -> &str {
        self.name
    }

    fn set_template(&mut self, template: Arc<Template>) {
        self.template = Some(template);
    }

    fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }

    fn context(&self) -> TemplateResult<RenderContext<'_>> {
        let Some(template) = self.template.as_deref() else {
            tracing::warn!(interface = self.name, "Render requested without a template");
            return Err(TemplateError::TemplateRequired);
        };
        let Some(language) = self.language.as_ref() else {
            tracing::warn!(
                interface = self.name,
                template_id = %template.id,
                "Render requested without a language"
            );
            return Err(TemplateError::LanguageRequired);
        };

        Ok(RenderContext::new(template, language).with_mode(self.mode))
    }
}
