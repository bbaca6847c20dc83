use furnsim::{Controller, FactoryKind, WoodKind, WorkshopKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("Starting furniture factory simulation");
    println!();

    let mut controller = Controller::new();

    println!("{}", controller.build_factory(FactoryKind::Ordinary, "Pine Hill")?);
    println!("{}", controller.build_factory(FactoryKind::Advanced, "Iron Oak")?);

    println!("{}", controller.build_workshop(WorkshopKind::Table, 10)?);
    println!("{}", controller.build_workshop(WorkshopKind::Decking, 12)?);

    println!("{}", controller.add_workshop_to_factory("Pine Hill", WorkshopKind::Table)?);
    println!("{}", controller.add_workshop_to_factory("Iron Oak", WorkshopKind::Decking)?);

    for _ in 0..4 {
        println!("{}", controller.buy_wood_for_factory(WoodKind::Oak)?);
    }
    println!("{}", controller.add_wood_to_workshop("Pine Hill", WorkshopKind::Table, WoodKind::Oak)?);
    println!("{}", controller.add_wood_to_workshop("Pine Hill", WorkshopKind::Table, WoodKind::Oak)?);
    println!("{}", controller.add_wood_to_workshop("Iron Oak", WorkshopKind::Decking, WoodKind::Oak)?);
    println!("{}", controller.add_wood_to_workshop("Iron Oak", WorkshopKind::Decking, WoodKind::Oak)?);
    println!();

    // Run production cycles until both factories stop producing.
    for name in ["Pine Hill", "Iron Oak"] {
        for _ in 0..4 {
            match controller.produce_furniture(name) {
                Ok(message) => println!("{}", message),
                Err(err) => {
                    println!("{}", err);
                    break;
                }
            }
        }
        println!();
    }

    println!("{}", controller.report());

    controller.validate_consistency()?;
    let counts = controller.counts();
    println!();
    println!(
        "Factories: {}, pending workshops: {}, pending wood: {}",
        counts.factories, counts.pending_workshops, counts.pending_wood
    );

    Ok(())
}
