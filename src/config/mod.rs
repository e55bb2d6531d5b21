mod loader;
mod model;
pub mod presets;
mod validation;

pub use loader::{
    ConfigLoader, ConfigOrigin, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult,
    RealFileSystem,
};
pub use model::{CONFIG_VERSION, Config, ContentEntry, FeatureEntry, QualityConfig};
pub use validation::validate_config_semantics;
