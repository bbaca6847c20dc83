use super::capability::CapabilityTable;
use super::error::ControlError;
use super::factory::Factory;
use super::repository::{WoodRepository, WorkshopRepository};
use super::types::{FactoryKind, WoodKind, WorkshopKind};
use super::wood::Wood;
use super::workshop::{Workshop, WorkshopState};
use log::{debug, info, warn};

/// Tallies over the controller's collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerCounts {
    pub factories: usize,
    pub pending_workshops: usize,
    pub pending_wood: usize,
}

/// Orchestrates factories, workshops, and wood through their lifecycle.
///
/// Owns all mutable state: the factory list, the pending-workshop pool,
/// and the pending-wood pool. Single-threaded and synchronous. Every
/// operation returns a human-readable status string on success and a
/// [`ControlError`] on rejection; rejections happen before any state
/// mutation.
pub struct Controller {
    factories: Vec<Factory>,
    wood_repository: WoodRepository,
    workshop_repository: WorkshopRepository,
    capabilities: CapabilityTable,
}

impl Controller {
    /// Create a controller with the stock capability table.
    pub fn new() -> Self {
        Self::with_capabilities(CapabilityTable::default())
    }

    /// Create a controller with a custom factory/workshop pairing.
    pub fn with_capabilities(capabilities: CapabilityTable) -> Self {
        Self {
            factories: Vec::new(),
            wood_repository: WoodRepository::new(),
            workshop_repository: WorkshopRepository::new(),
            capabilities,
        }
    }

    /// Build a factory of the given kind under a unique non-empty name.
    pub fn build_factory(
        &mut self,
        kind: FactoryKind,
        name: &str,
    ) -> Result<String, ControlError> {
        if self.factories.iter().any(|f| f.name() == name) {
            return Err(ControlError::FactoryExists(name.to_string()));
        }

        let factory = Factory::new(kind, name)?;
        info!("built {} factory '{}'", kind, name);
        self.factories.push(factory);

        Ok(format!("Successfully built {} factory {}.", kind, name))
    }

    /// Build an unassigned workshop and place it in the pending pool.
    pub fn build_workshop(
        &mut self,
        kind: WorkshopKind,
        capacity: u32,
    ) -> Result<String, ControlError> {
        let workshop = Workshop::new(kind, capacity);
        info!(
            "built {} workshop {} with capacity {}",
            kind,
            workshop.id(),
            capacity
        );
        self.workshop_repository.add(workshop);

        Ok(format!("Successfully built {} workshop.", kind))
    }

    /// Attach a pending workshop to a factory, subject to the
    /// capability table.
    ///
    /// An unsupported pairing is not an error: the status string says
    /// so and the pending workshop stays in the pool.
    pub fn add_workshop_to_factory(
        &mut self,
        factory_name: &str,
        kind: WorkshopKind,
    ) -> Result<String, ControlError> {
        if !self.workshop_repository.contains(kind) {
            return Err(ControlError::WorkshopNotFound(kind));
        }

        let index = self.factory_index(factory_name)?;
        let factory = &self.factories[index];

        if factory.has_workshop(kind) {
            return Err(ControlError::WorkshopExists(kind));
        }

        if !self.capabilities.supports(factory.kind(), kind) {
            warn!(
                "{} workshop not supported in {} factory '{}'",
                kind,
                factory.kind(),
                factory_name
            );
            return Ok(format!(
                "Workshop {} is not supported in factory {}.",
                kind, factory_name
            ));
        }

        match self.workshop_repository.take(kind) {
            Some(workshop) => {
                info!(
                    "attached {} workshop {} to factory '{}'",
                    kind,
                    workshop.id(),
                    factory_name
                );
                self.factories[index].add_workshop(workshop);
                Ok(format!(
                    "Successfully added {} workshop to factory {}.",
                    kind, factory_name
                ))
            }
            None => Err(ControlError::WorkshopNotFound(kind)),
        }
    }

    /// Purchase one unit of wood into the pending pool.
    pub fn buy_wood_for_factory(&mut self, kind: WoodKind) -> Result<String, ControlError> {
        let wood = Wood::new(kind);
        info!("bought {} wood, quantity {}", kind, wood.quantity());
        self.wood_repository.add(wood);

        Ok(format!("Successfully bought {} wood.", kind))
    }

    /// Move pending wood into an attached workshop, consuming it.
    pub fn add_wood_to_workshop(
        &mut self,
        factory_name: &str,
        workshop_kind: WorkshopKind,
        wood_kind: WoodKind,
    ) -> Result<String, ControlError> {
        let index = self.factory_index(factory_name)?;

        let workshop = self.factories[index]
            .workshop_mut(workshop_kind)
            .ok_or(ControlError::WorkshopNotAttached(workshop_kind))?;

        let wood = self
            .wood_repository
            .take(wood_kind)
            .ok_or(ControlError::WoodNotFound(wood_kind))?;

        workshop.add_wood(wood);

        Ok(format!(
            "Successfully added {} wood to the {} workshop.",
            wood_kind, workshop_kind
        ))
    }

    /// Run one production cycle over a factory's active workshops.
    ///
    /// Workshops are visited in insertion order. A workshop below its
    /// reduce factor (but not empty) halts the cycle with an
    /// insufficient-wood notice; an empty workshop is retired to the
    /// removed set and halts the cycle; otherwise the workshop produces
    /// and the cycle moves on. The status string reports whether any
    /// furniture came out.
    pub fn produce_furniture(&mut self, factory_name: &str) -> Result<String, ControlError> {
        let index = self.factory_index(factory_name)?;
        let factory = &mut self.factories[index];

        if factory.workshops().is_empty() {
            return Err(ControlError::NoWorkshops(factory_name.to_string()));
        }

        let mut lines: Vec<String> = Vec::new();
        let mut produced = 0u64;
        let mut position = 0;

        while position < factory.workshops().len() {
            let state = factory.workshops()[position].state();
            match state {
                WorkshopState::Insufficient => {
                    let kind = factory.workshops()[position].kind();
                    debug!(
                        "{} workshop in '{}' below reduce factor, cycle halted",
                        kind, factory_name
                    );
                    lines.push(format!(
                        "There is not enough wood for the {} workshop to produce furniture.",
                        kind
                    ));
                    break;
                }
                WorkshopState::Depleted => {
                    let kind = factory.retire_workshop(position);
                    info!(
                        "{} workshop in '{}' ran out of wood and was retired",
                        kind, factory_name
                    );
                    lines.push(format!(
                        "The {} workshop ran out of wood and stopped working.",
                        kind
                    ));
                    break;
                }
                WorkshopState::Sufficient => {
                    if let Some(workshop) = factory.workshops_mut().get_mut(position) {
                        workshop.produce();
                        produced += 1;
                    }
                    position += 1;
                }
            }
        }

        if produced > 0 {
            lines.push(format!(
                "Produced {} furniture in factory {}.",
                produced, factory_name
            ));
        } else {
            lines.push(format!(
                "Factory {} did not produce any furniture.",
                factory_name
            ));
        }

        Ok(lines.join("\n"))
    }

    /// Produced-furniture report over every factory, covering both
    /// active and retired workshops.
    pub fn report(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        for factory in &self.factories {
            lines.push(format!("Production by {} factory:", factory.name()));

            if factory.workshops().is_empty() && factory.removed_workshops().is_empty() {
                lines.push(" No workshops were added to produce furniture.".to_string());
                continue;
            }

            for workshop in factory.workshops() {
                lines.push(format!(
                    " {} workshop: {} furniture produced",
                    workshop.kind(),
                    workshop.produced_count()
                ));
            }
            for workshop in factory.removed_workshops() {
                lines.push(format!(
                    " {} workshop (stopped): {} furniture produced",
                    workshop.kind(),
                    workshop.produced_count()
                ));
            }
        }

        lines.join("\n")
    }

    /// Look up a factory by name.
    pub fn factory(&self, name: &str) -> Option<&Factory> {
        self.factories.iter().find(|f| f.name() == name)
    }

    /// All factories in build order.
    pub fn factories(&self) -> &[Factory] {
        &self.factories
    }

    /// Tallies over factories and the pending pools.
    pub fn counts(&self) -> ControllerCounts {
        ControllerCounts {
            factories: self.factories.len(),
            pending_workshops: self.workshop_repository.len(),
            pending_wood: self.wood_repository.len(),
        }
    }

    /// Check cross-collection invariants.
    pub fn validate_consistency(&self) -> Result<(), String> {
        let mut names: Vec<&str> = Vec::new();
        for factory in &self.factories {
            if names.contains(&factory.name()) {
                return Err(format!("Duplicate factory name '{}'", factory.name()));
            }
            names.push(factory.name());

            let mut kinds: Vec<WorkshopKind> = Vec::new();
            for workshop in factory.workshops() {
                if kinds.contains(&workshop.kind()) {
                    return Err(format!(
                        "Factory '{}' holds more than one {} workshop",
                        factory.name(),
                        workshop.kind()
                    ));
                }
                kinds.push(workshop.kind());

                if workshop.wood_quantity() > workshop.capacity() {
                    return Err(format!(
                        "Workshop {} holds more wood than its capacity",
                        workshop.id()
                    ));
                }
            }

            for removed in factory.removed_workshops() {
                if factory.workshops().iter().any(|w| w.id() == removed.id()) {
                    return Err(format!(
                        "Workshop {} is both active and removed in factory '{}'",
                        removed.id(),
                        factory.name()
                    ));
                }
            }
        }

        Ok(())
    }

    fn factory_index(&self, name: &str) -> Result<usize, ControlError> {
        self.factories
            .iter()
            .position(|f| f.name() == name)
            .ok_or_else(|| ControlError::FactoryNotFound(name.to_string()))
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
