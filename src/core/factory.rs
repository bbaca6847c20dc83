use super::error::ControlError;
use super::types::{FactoryKind, WorkshopKind};
use super::workshop::Workshop;

/// A named factory owning its workshops.
///
/// Active workshops keep insertion order; workshops that run out of
/// wood move to the removed set and never return. The two sets stay
/// disjoint.
#[derive(Debug)]
pub struct Factory {
    name: String,
    kind: FactoryKind,
    workshops: Vec<Workshop>,
    removed_workshops: Vec<Workshop>,
}

impl Factory {
    /// Create a factory. Fails on an empty or blank name.
    pub fn new(kind: FactoryKind, name: &str) -> Result<Self, ControlError> {
        if name.trim().is_empty() {
            return Err(ControlError::InvalidName);
        }
        Ok(Self {
            name: name.to_string(),
            kind,
            workshops: Vec::new(),
            removed_workshops: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FactoryKind {
        self.kind
    }

    /// Active workshops in insertion order.
    pub fn workshops(&self) -> &[Workshop] {
        &self.workshops
    }

    pub fn workshops_mut(&mut self) -> &mut Vec<Workshop> {
        &mut self.workshops
    }

    /// Workshops retired after running out of wood.
    pub fn removed_workshops(&self) -> &[Workshop] {
        &self.removed_workshops
    }

    /// Whether an active workshop of this kind is attached.
    pub fn has_workshop(&self, kind: WorkshopKind) -> bool {
        self.workshops.iter().any(|w| w.kind() == kind)
    }

    pub fn workshop_mut(&mut self, kind: WorkshopKind) -> Option<&mut Workshop> {
        self.workshops.iter_mut().find(|w| w.kind() == kind)
    }

    pub fn add_workshop(&mut self, workshop: Workshop) {
        self.workshops.push(workshop);
    }

    /// Move the active workshop at `index` into the removed set and
    /// return its kind.
    pub fn retire_workshop(&mut self, index: usize) -> WorkshopKind {
        let workshop = self.workshops.remove(index);
        let kind = workshop.kind();
        self.removed_workshops.push(workshop);
        kind
    }
}
