use super::types::WoodKind;

/// A purchased unit of wood waiting in the pending repository.
///
/// Inert value object: the quantity is fixed by the kind at purchase
/// time and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wood {
    kind: WoodKind,
    quantity: u32,
}

impl Wood {
    pub fn new(kind: WoodKind) -> Self {
        Self {
            kind,
            quantity: kind.unit_quantity(),
        }
    }

    pub fn kind(&self) -> WoodKind {
        self.kind
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
