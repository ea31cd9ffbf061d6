pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::{
    factory::{FactorySettings, ObjectFactory},
    inventory::Inventory,
    session::{run_console, Command, Session, SessionState},
};
pub use domain::model::{DangerLevel, ObjectKind, Stability, StatusFormat, StatusSnapshot};
pub use domain::objects::{AntiMatter, Coolable, DarkMatter, DataPacket, QuantumObject};
pub use utils::error::{DepotError, Result};
