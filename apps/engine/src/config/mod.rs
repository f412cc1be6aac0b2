//! Engine configuration.

pub mod settings;

pub use settings::settings_from_env;
