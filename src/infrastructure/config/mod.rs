mod settings;

pub use settings::{LogConfig, LogFormat, RenderConfig, Settings};
