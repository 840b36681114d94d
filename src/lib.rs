// Infrastructure layer (shared components)
pub mod infrastructure;

pub use infrastructure::config;
pub use infrastructure::error;

// Domain layer (rendering logic)
pub mod domain;

pub use domain::render;
pub use domain::template;

// Supporting modules
pub mod telemetry;
