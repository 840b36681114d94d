//! Domain layer modules
//!
//! This module contains the rendering logic:
//! - `template`: Templates, translations and macro substitution
//! - `render`: Render interfaces and their registry

pub mod render;
pub mod template;
