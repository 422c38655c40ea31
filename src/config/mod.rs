mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    BehaviorConfig, Config, ContentConfig, SourceConfig, SourceKind, StartupPolicy,
};
