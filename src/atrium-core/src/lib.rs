pub mod config;
pub mod logging;
pub mod models;
pub mod paths;
pub mod registry;
pub mod settings;
pub mod store;

pub use config::{Config, ConfigError, LogLevel, LoggingConfig, StoreConfig, ValidationError};
pub use logging::{init_logging, LoggingError, LoggingGuard};
pub use paths::{AppDirs, DirsError};
pub use registry::AssetServices;
pub use settings::{MemorySettings, SettingsStore};
pub use store::{AssetStore, StoreError, StoreResult};

pub const APP_NAME: &str = "atrium";
pub const APP_AUTHOR: &str = "Atrium";
pub const APP_QUALIFIER: &str = "io";
