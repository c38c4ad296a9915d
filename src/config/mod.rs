//! Workspace configuration (`.string-tags.json`).
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use types::{
    CatalogConfig,
    ConfigError,
    Settings,
    ValidationError,
};
