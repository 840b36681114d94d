//! Registry of named render interface constructors

use std::collections::BTreeMap;

use thiserror::Error;

use super::interface::{
    MailRenderInterface, TemplateRenderInterface, BASIC_RENDER_NAME, VERBATIM_RENDER_NAME,
};

/// Builds a fresh, unconfigured render interface
pub type RenderInterfaceConstructor = fn() -> Box<dyn TemplateRenderInterface>;

/// Registry-specific error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid template render name: {0}")]
    InvalidRenderName(String),

    #[error("Template render already registered: {0}")]
    DuplicateName(String),

    #[error("Template render cannot be instantiated: {0}")]
    InitFailed(String),
}

impl RegistryError {
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::InvalidRenderName(_) => "INVALID_TEMPLATE_RENDER_CLASS_NAME",
            RegistryError::DuplicateName(_) | RegistryError::InitFailed(_) => {
                "TEMPLATE_RENDER_CANNOT_BE_INSTANTIATED"
            }
        }
    }
}

fn basic_constructor() -> Box<dyn TemplateRenderInterface> {
    Box::new(MailRenderInterface::basic())
}

fn verbatim_constructor() -> Box<dyn TemplateRenderInterface> {
    Box::new(MailRenderInterface::verbatim())
}

/// Maps render interface names to their constructors.
///
/// Built once at startup; lookups never load code dynamically.
#[derive(Debug, Clone, Default)]
pub struct RenderInterfaceRegistry {
    constructors: BTreeMap<String, RenderInterfaceConstructor>,
}

impl RenderInterfaceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in basic and verbatim interfaces
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .constructors
            .insert(BASIC_RENDER_NAME.to_string(), basic_constructor);
        registry
            .constructors
            .insert(VERBATIM_RENDER_NAME.to_string(), verbatim_constructor);
        registry
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: RenderInterfaceConstructor,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.constructors.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(name = %name, "Template render registered");
        self.constructors.insert(name, constructor);
        Ok(())
    }

    /// Instantiate and initialise the interface registered as `name`
    pub fn create(&self, name: &str) -> Result<Box<dyn TemplateRenderInterface>, RegistryError> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| RegistryError::InvalidRenderName(name.to_string()))?;

        let mut interface = constructor();
        if !interface.init() {
            tracing::error!(name = %name, "Template render rejected initialisation");
            return Err(RegistryError::InitFailed(name.to_string()));
        }

        tracing::info!(name = %name, "Template render created");
        Ok(interface)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }
}
