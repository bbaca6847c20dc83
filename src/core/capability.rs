use super::types::{FactoryKind, WorkshopKind};
use serde::{Deserialize, Serialize};

/// Which workshop kinds each factory kind may host.
///
/// Passed to the controller as configuration rather than derived from
/// the entity types, so deployments can change the pairing without
/// touching the entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityTable {
    pub ordinary_workshops: Vec<WorkshopKind>,
    pub advanced_workshops: Vec<WorkshopKind>,
}

impl CapabilityTable {
    /// Whether `workshop` may attach to a factory of `factory` kind.
    pub fn supports(&self, factory: FactoryKind, workshop: WorkshopKind) -> bool {
        match factory {
            FactoryKind::Ordinary => self.ordinary_workshops.contains(&workshop),
            FactoryKind::Advanced => self.advanced_workshops.contains(&workshop),
        }
    }
}

impl Default for CapabilityTable {
    /// Stock pairing: Table workshops in Ordinary factories, Decking
    /// workshops in Advanced factories.
    fn default() -> Self {
        Self {
            ordinary_workshops: vec![WorkshopKind::Table],
            advanced_workshops: vec![WorkshopKind::Decking],
        }
    }
}
