//! Render interfaces for mail templates.
//!
//! This module provides:
//! - [`RenderContext`]: an immutable template + language pair, safe to share
//! - [`TemplateRenderInterface`]: the stateful facade hosts configure with
//!   setters before rendering
//! - [`RenderInterfaceRegistry`]: named constructors resolved at startup
//!
//! # Example
//!
//! ```ignore
//! let registry = RenderInterfaceRegistry::with_defaults();
//! let mut render = registry.create(BASIC_RENDER_NAME)?;
//! render.set_template(store.get("welcome")?);
//! render.set_language("en".into());
//!
//! let subject = render.render_subject(Some(&params))?;
//! ```

mod context;
mod interface;
mod registry;

pub use context::{MacroMode, MessagePart, RenderContext};
pub use interface::{
    MailRenderInterface, TemplateRenderInterface, BASIC_RENDER_NAME, VERBATIM_RENDER_NAME,
};
pub use registry::{RegistryError, RenderInterfaceConstructor, RenderInterfaceRegistry};
