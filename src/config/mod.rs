//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SpendbookPaths;
pub use settings::Settings;
