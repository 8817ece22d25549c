pub mod config;
pub mod config_box;

pub use config::{LogSettings, Settings};
pub use config_box::{ConfigBox, ConfigValue};
