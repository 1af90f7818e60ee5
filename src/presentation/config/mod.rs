mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{ENVIRONMENT_VAR, LoggingSettings, ServerSettings, Settings, SettingsError};
