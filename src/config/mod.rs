//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SnapkeepPaths;
pub use settings::Settings;
