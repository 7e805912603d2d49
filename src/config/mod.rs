mod manager;

pub use manager::{
    AuthConfig, ConfigFile, ConfigManager, IvcConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};
