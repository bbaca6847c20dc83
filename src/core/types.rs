use serde::{Deserialize, Serialize};

/// Factory variants. Closed set; adding a variant forces every match
/// in the crate to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactoryKind {
    Ordinary,
    Advanced,
}

impl std::fmt::Display for FactoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactoryKind::Ordinary => write!(f, "Ordinary"),
            FactoryKind::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Workshop variants. Each kind carries its fixed per-cycle wood
/// reduce factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkshopKind {
    Table,
    Decking,
}

impl WorkshopKind {
    /// Wood amount consumed by one production cycle.
    pub fn reduce_factor(&self) -> u32 {
        match self {
            WorkshopKind::Table => 3,
            WorkshopKind::Decking => 6,
        }
    }
}

impl std::fmt::Display for WorkshopKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkshopKind::Table => write!(f, "Table"),
            WorkshopKind::Decking => write!(f, "Decking"),
        }
    }
}

/// Wood variants. Each kind carries the fixed quantity one purchased
/// unit adds to a workshop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WoodKind {
    Oak,
}

impl WoodKind {
    /// Wood quantity delivered by one purchased unit.
    pub fn unit_quantity(&self) -> u32 {
        match self {
            WoodKind::Oak => 5,
        }
    }
}

impl std::fmt::Display for WoodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WoodKind::Oak => write!(f, "Oak"),
        }
    }
}
