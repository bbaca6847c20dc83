use crate::core::capability::CapabilityTable;
use crate::core::controller::Controller;
use crate::core::error::{ControlError, ErrorKind};
use crate::core::types::{FactoryKind, WoodKind, WorkshopKind};

#[test]
fn duplicate_factory_name_is_rejected() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();

    let err = controller
        .build_factory(FactoryKind::Advanced, "F1")
        .unwrap_err();
    assert_eq!(err, ControlError::FactoryExists("F1".to_string()));
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(controller.counts().factories, 1);
}

#[test]
fn blank_factory_name_is_rejected() {
    let mut controller = Controller::new();
    let err = controller
        .build_factory(FactoryKind::Ordinary, "  ")
        .unwrap_err();
    assert_eq!(err, ControlError::InvalidName);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(controller.counts().factories, 0);
}

#[test]
fn attach_requires_a_pending_workshop() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();

    let err = controller
        .add_workshop_to_factory("F1", WorkshopKind::Table)
        .unwrap_err();
    assert_eq!(err, ControlError::WorkshopNotFound(WorkshopKind::Table));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn attach_requires_an_existing_factory() {
    let mut controller = Controller::new();
    controller.build_workshop(WorkshopKind::Table, 10).unwrap();

    let err = controller
        .add_workshop_to_factory("missing", WorkshopKind::Table)
        .unwrap_err();
    assert_eq!(err, ControlError::FactoryNotFound("missing".to_string()));
}

#[test]
fn unsupported_pairing_does_not_attach_or_consume() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Advanced, "A1")
        .unwrap();
    controller.build_workshop(WorkshopKind::Table, 10).unwrap();

    let message = controller
        .add_workshop_to_factory("A1", WorkshopKind::Table)
        .unwrap();
    assert!(message.contains("not supported"));
    assert!(!controller.factory("A1").unwrap().has_workshop(WorkshopKind::Table));
    // The pending workshop stays available for a compatible factory.
    assert_eq!(controller.counts().pending_workshops, 1);
}

#[test]
fn duplicate_workshop_kind_in_factory_is_rejected() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();
    controller.build_workshop(WorkshopKind::Table, 10).unwrap();
    controller.build_workshop(WorkshopKind::Table, 10).unwrap();
    controller
        .add_workshop_to_factory("F1", WorkshopKind::Table)
        .unwrap();

    let err = controller
        .add_workshop_to_factory("F1", WorkshopKind::Table)
        .unwrap_err();
    assert_eq!(err, ControlError::WorkshopExists(WorkshopKind::Table));
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(controller.counts().pending_workshops, 1);
}

#[test]
fn attach_moves_workshop_out_of_the_pool() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();
    controller.build_workshop(WorkshopKind::Table, 10).unwrap();
    controller
        .add_workshop_to_factory("F1", WorkshopKind::Table)
        .unwrap();

    assert_eq!(controller.counts().pending_workshops, 0);
    assert!(controller.factory("F1").unwrap().has_workshop(WorkshopKind::Table));
}

#[test]
fn adding_wood_consumes_the_pending_unit() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();
    controller.build_workshop(WorkshopKind::Table, 10).unwrap();
    controller
        .add_workshop_to_factory("F1", WorkshopKind::Table)
        .unwrap();
    controller.buy_wood_for_factory(WoodKind::Oak).unwrap();

    controller
        .add_wood_to_workshop("F1", WorkshopKind::Table, WoodKind::Oak)
        .unwrap();
    assert_eq!(controller.counts().pending_wood, 0);

    let factory = controller.factory("F1").unwrap();
    assert_eq!(
        factory.workshops()[0].wood_quantity(),
        WoodKind::Oak.unit_quantity()
    );

    let err = controller
        .add_wood_to_workshop("F1", WorkshopKind::Table, WoodKind::Oak)
        .unwrap_err();
    assert_eq!(err, ControlError::WoodNotFound(WoodKind::Oak));
}

#[test]
fn adding_wood_requires_an_attached_workshop() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();
    controller.buy_wood_for_factory(WoodKind::Oak).unwrap();

    let err = controller
        .add_wood_to_workshop("F1", WorkshopKind::Table, WoodKind::Oak)
        .unwrap_err();
    assert_eq!(err, ControlError::WorkshopNotAttached(WorkshopKind::Table));
    // The wood was not consumed on the failure path.
    assert_eq!(controller.counts().pending_wood, 1);
}

#[test]
fn producing_without_workshops_is_rejected() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();

    let err = controller.produce_furniture("F1").unwrap_err();
    assert_eq!(err, ControlError::NoWorkshops("F1".to_string()));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn depleted_workshop_is_retired_on_the_next_cycle() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Advanced, "A1")
        .unwrap();
    controller.build_workshop(WorkshopKind::Decking, 6).unwrap();
    controller
        .add_workshop_to_factory("A1", WorkshopKind::Decking)
        .unwrap();
    controller.buy_wood_for_factory(WoodKind::Oak).unwrap();
    controller.buy_wood_for_factory(WoodKind::Oak).unwrap();
    controller
        .add_wood_to_workshop("A1", WorkshopKind::Decking, WoodKind::Oak)
        .unwrap();
    controller
        .add_wood_to_workshop("A1", WorkshopKind::Decking, WoodKind::Oak)
        .unwrap();

    // 6 wood, factor 6: one cycle produces and lands on zero.
    let message = controller.produce_furniture("A1").unwrap();
    assert!(message.contains("Produced 1 furniture"));

    // The next cycle retires the workshop instead of producing.
    let message = controller.produce_furniture("A1").unwrap();
    assert!(message.contains("stopped working"));
    assert!(message.contains("did not produce"));

    let factory = controller.factory("A1").unwrap();
    assert!(factory.workshops().is_empty());
    assert_eq!(factory.removed_workshops().len(), 1);
    assert_eq!(factory.removed_workshops()[0].produced_count(), 1);

    // With the active set empty, further cycles are rejected.
    let err = controller.produce_furniture("A1").unwrap_err();
    assert_eq!(err, ControlError::NoWorkshops("A1".to_string()));
}

#[test]
fn report_covers_active_and_retired_workshops() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();
    controller
        .build_factory(FactoryKind::Advanced, "A1")
        .unwrap();
    controller.build_workshop(WorkshopKind::Table, 10).unwrap();
    controller
        .add_workshop_to_factory("F1", WorkshopKind::Table)
        .unwrap();
    controller.build_workshop(WorkshopKind::Decking, 6).unwrap();
    controller
        .add_workshop_to_factory("A1", WorkshopKind::Decking)
        .unwrap();

    // Deplete the Decking workshop so it shows up as stopped.
    controller.buy_wood_for_factory(WoodKind::Oak).unwrap();
    controller.buy_wood_for_factory(WoodKind::Oak).unwrap();
    controller
        .add_wood_to_workshop("A1", WorkshopKind::Decking, WoodKind::Oak)
        .unwrap();
    controller
        .add_wood_to_workshop("A1", WorkshopKind::Decking, WoodKind::Oak)
        .unwrap();
    controller.produce_furniture("A1").unwrap();
    controller.produce_furniture("A1").unwrap();

    let report = controller.report();
    assert!(report.contains("Production by F1 factory:"));
    assert!(report.contains(" Table workshop: 0 furniture produced"));
    assert!(report.contains("Production by A1 factory:"));
    assert!(report.contains(" Decking workshop (stopped): 1 furniture produced"));
}

#[test]
fn report_notes_factories_without_workshops() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();

    let report = controller.report();
    assert!(report.contains("No workshops were added to produce furniture"));
}

#[test]
fn custom_capability_table_changes_the_pairing() {
    let table = CapabilityTable {
        ordinary_workshops: vec![WorkshopKind::Table, WorkshopKind::Decking],
        advanced_workshops: vec![],
    };
    let mut controller = Controller::with_capabilities(table);
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();
    controller.build_workshop(WorkshopKind::Decking, 6).unwrap();

    let message = controller
        .add_workshop_to_factory("F1", WorkshopKind::Decking)
        .unwrap();
    assert!(message.contains("Successfully added"));
    assert!(controller.factory("F1").unwrap().has_workshop(WorkshopKind::Decking));
}

#[test]
fn consistency_holds_through_a_full_run() {
    let mut controller = Controller::new();
    controller
        .build_factory(FactoryKind::Ordinary, "F1")
        .unwrap();
    controller.build_workshop(WorkshopKind::Table, 10).unwrap();
    controller
        .add_workshop_to_factory("F1", WorkshopKind::Table)
        .unwrap();
    controller.buy_wood_for_factory(WoodKind::Oak).unwrap();
    controller
        .add_wood_to_workshop("F1", WorkshopKind::Table, WoodKind::Oak)
        .unwrap();
    for _ in 0..4 {
        let _ = controller.produce_furniture("F1");
        controller.validate_consistency().unwrap();
    }
}
