//! Mail template system.
//!
//! This module provides:
//! - Template definition with one translation per language
//! - `$$macro$$` scanning and partial substitution
//! - Translation lookup by language
//! - In-memory template storage
//!
//! # Example
//!
//! ```ignore
//! let template = Template::new("order-shipped").with_translation(
//!     "en",
//!     TranslationRecord::new("Order $$order_id$$ shipped")
//!         .with_text("Your order $$order_id$$ is on its way via $$carrier$$"),
//! );
//!
//! let params = Params::from([
//!     ("order_id".to_string(), "ORD-123".to_string()),
//!     ("carrier".to_string(), "FedEx".to_string()),
//! ]);
//!
//! let translation = resolve_translation(&template, &"en".into())?;
//! let subject = substitute_macros(translation.subject.as_deref().unwrap_or(""), Some(&params));
//! ```

mod resolver;
mod store;
mod substitution;
mod types;

pub use resolver::resolve_translation;
pub use store::{TemplateProvider, TemplateStore};
pub use substitution::{scan_macros, substitute_macros};
pub use types::{
    Language, Params, RenderedMessage, Template, TemplateError, TemplateResult, TranslationRecord,
};
