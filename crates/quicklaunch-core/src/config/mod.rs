mod dirs;
mod settings;
mod validation;

pub use dirs::Directories;
pub use settings::{BehaviorConfig, CatalogConfig, Config, LauncherConfig};
