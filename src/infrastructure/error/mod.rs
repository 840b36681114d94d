use thiserror::Error;

use crate::render::RegistryError;
use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl AppError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "INVALID_JSON",
            AppError::Template(e) => e.code(),
            AppError::Registry(e) => e.code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through() {
        let err: AppError = TemplateError::TemplateRequired.into();
        assert_eq!(err.code(), "TEMPLATE_REQUIRED");
        assert_eq!(err.to_string(), "A template is required before rendering");

        let err: AppError = RegistryError::InvalidRenderName("X".to_string()).into();
        assert_eq!(err.code(), "INVALID_TEMPLATE_RENDER_CLASS_NAME");
    }
}
