pub mod config;
pub mod constants;
pub mod types;

pub use config::{SimConfig, SimulationParameters};
pub use constants::*;
pub use types::*;
