use super::types::{WoodKind, WorkshopKind};

/// Coarse classification of controller errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input (empty factory name)
    InvalidArgument,
    /// Missing factory, workshop, or wood
    NotFound,
    /// Duplicate factory name or workshop kind
    AlreadyExists,
}

/// Errors returned by controller operations.
///
/// Every rejection happens before any state mutation, so a returned
/// error guarantees no partial side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// Factory name is empty or blank
    InvalidName,
    /// A factory with this name already exists
    FactoryExists(String),
    /// No factory with this name
    FactoryNotFound(String),
    /// No pending workshop of this kind in the repository
    WorkshopNotFound(WorkshopKind),
    /// The factory already holds a workshop of this kind
    WorkshopExists(WorkshopKind),
    /// The factory has no active workshop of this kind
    WorkshopNotAttached(WorkshopKind),
    /// No pending wood of this kind in the repository
    WoodNotFound(WoodKind),
    /// The factory has no active workshops to produce with
    NoWorkshops(String),
}

impl ControlError {
    /// Classify this error per the documented error model.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ControlError::InvalidName => ErrorKind::InvalidArgument,
            ControlError::FactoryExists(_) | ControlError::WorkshopExists(_) => {
                ErrorKind::AlreadyExists
            }
            ControlError::FactoryNotFound(_)
            | ControlError::WorkshopNotFound(_)
            | ControlError::WorkshopNotAttached(_)
            | ControlError::WoodNotFound(_)
            | ControlError::NoWorkshops(_) => ErrorKind::NotFound,
        }
    }
}

impl std::fmt::Display for ControlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlError::InvalidName => {
                write!(f, "Factory name cannot be empty")
            }
            ControlError::FactoryExists(name) => {
                write!(f, "Factory '{}' already exists", name)
            }
            ControlError::FactoryNotFound(name) => {
                write!(f, "Factory '{}' not found", name)
            }
            ControlError::WorkshopNotFound(kind) => {
                write!(f, "No {} workshop was found in the repository", kind)
            }
            ControlError::WorkshopExists(kind) => {
                write!(f, "A {} workshop is already in the factory", kind)
            }
            ControlError::WorkshopNotAttached(kind) => {
                write!(f, "No {} workshop was added to the factory", kind)
            }
            ControlError::WoodNotFound(kind) => {
                write!(f, "No {} wood was found in the repository", kind)
            }
            ControlError::NoWorkshops(name) => {
                write!(f, "There are no workshops in factory '{}'", name)
            }
        }
    }
}

impl std::error::Error for ControlError {}
