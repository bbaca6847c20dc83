use super::types::WorkshopKind;
use super::wood::Wood;
use log::debug;
use uuid::Uuid;

/// Production readiness of a workshop, derived from its wood level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkshopState {
    /// Wood at or above the reduce factor; production permitted
    Sufficient,
    /// Wood positive but below the reduce factor; production blocked
    Insufficient,
    /// No wood left; terminal, the next production cycle retires the workshop
    Depleted,
}

/// A production unit consuming wood to create furniture.
///
/// Built unassigned with zero wood, later attached to exactly one
/// factory. Wood quantity is clamped to `0..=capacity`.
#[derive(Debug, Clone)]
pub struct Workshop {
    id: Uuid,
    kind: WorkshopKind,
    capacity: u32,
    wood_quantity: u32,
    produced_count: u64,
}

impl Workshop {
    pub fn new(kind: WorkshopKind, capacity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            capacity,
            wood_quantity: 0,
            produced_count: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> WorkshopKind {
        self.kind
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn wood_quantity(&self) -> u32 {
        self.wood_quantity
    }

    pub fn produced_count(&self) -> u64 {
        self.produced_count
    }

    /// Wood amount consumed by one production cycle.
    pub fn reduce_factor(&self) -> u32 {
        self.kind.reduce_factor()
    }

    /// Current state derived from wood level vs reduce factor.
    ///
    /// Wood exactly equal to the reduce factor is Sufficient: production
    /// is blocked only while `0 < wood < factor`.
    pub fn state(&self) -> WorkshopState {
        if self.wood_quantity == 0 {
            WorkshopState::Depleted
        } else if self.wood_quantity < self.reduce_factor() {
            WorkshopState::Insufficient
        } else {
            WorkshopState::Sufficient
        }
    }

    /// Consume a wood unit, raising the stored quantity by its fixed
    /// amount, clamped at capacity.
    pub fn add_wood(&mut self, wood: Wood) {
        let before = self.wood_quantity;
        self.wood_quantity = self.wood_quantity.saturating_add(wood.quantity()).min(self.capacity);
        debug!(
            "workshop {} ({}): wood {} -> {}",
            self.id, self.kind, before, self.wood_quantity
        );
    }

    /// Run one production cycle: decrement wood by the reduce factor and
    /// increment the produced count. Only valid from Sufficient.
    ///
    /// Returns false without mutating anything when the state forbids it.
    pub fn produce(&mut self) -> bool {
        if self.state() != WorkshopState::Sufficient {
            return false;
        }
        self.wood_quantity -= self.reduce_factor();
        self.produced_count += 1;
        debug!(
            "workshop {} ({}): produced furniture #{}, wood left {}",
            self.id, self.kind, self.produced_count, self.wood_quantity
        );
        true
    }
}
