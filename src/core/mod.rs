pub mod factory;
pub mod inventory;
pub mod session;

pub use crate::domain::model::{DangerLevel, ObjectKind, Stability, StatusFormat, StatusSnapshot};
pub use crate::domain::objects::{Coolable, QuantumObject};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
