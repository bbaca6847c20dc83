pub mod core;

// Re-export commonly used types
pub use crate::core::capability::CapabilityTable;
pub use crate::core::controller::{Controller, ControllerCounts};
pub use crate::core::error::{ControlError, ErrorKind};
pub use crate::core::types::{FactoryKind, WoodKind, WorkshopKind};
pub use crate::core::workshop::WorkshopState;
