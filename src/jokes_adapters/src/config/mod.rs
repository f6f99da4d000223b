pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{ApplicationSetting, JokesSetting, PostgresSetting, SessionSetting};
