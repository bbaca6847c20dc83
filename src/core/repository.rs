use super::types::{WoodKind, WorkshopKind};
use super::wood::Wood;
use super::workshop::Workshop;

/// In-memory pool of purchased wood not yet assigned to a workshop.
#[derive(Debug, Default)]
pub struct WoodRepository {
    items: Vec<Wood>,
}

impl WoodRepository {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, wood: Wood) {
        self.items.push(wood);
    }

    /// Remove and return the first pending wood of this kind.
    pub fn take(&mut self, kind: WoodKind) -> Option<Wood> {
        let index = self.items.iter().position(|w| w.kind() == kind)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, kind: WoodKind) -> bool {
        self.items.iter().any(|w| w.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// In-memory pool of built workshops not yet attached to a factory.
#[derive(Debug, Default)]
pub struct WorkshopRepository {
    items: Vec<Workshop>,
}

impl WorkshopRepository {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, workshop: Workshop) {
        self.items.push(workshop);
    }

    /// Remove and return the first pending workshop of this kind.
    pub fn take(&mut self, kind: WorkshopKind) -> Option<Workshop> {
        let index = self.items.iter().position(|w| w.kind() == kind)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, kind: WorkshopKind) -> bool {
        self.items.iter().any(|w| w.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
