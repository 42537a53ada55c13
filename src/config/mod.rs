pub mod env;
pub mod paths;
pub mod yaml_config;

pub use env::Environment;
pub use paths::{ConfigPaths, ConfigSource, FsConfigSource};
pub use yaml_config::{BrowsirConfig, Profile};
