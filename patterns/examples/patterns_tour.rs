use log::info;
use patterns::{
    behavioral::iterator::{Novella, Novellas},
    creational::{
        abstract_factory::{MothersFriendSonsFactory, PersonFactory, YourFactory},
        factory_method::{CurrencyConverter, DollarConverter, Euro},
        singleton::DeathStarSuperlaser,
    },
    structural::{
        adapter::{
            DeathStarSuperlaserTarget, OldDeathStarSuperlaserTarget,
            OlderDeathStarSuperlaserAiming,
        },
        decorator::{Coffee, Milk, SimpleCoffee, WhipCoffee},
        facade::Eternal,
        proxy::{CurrentComputer, DoorOperator},
    },
};
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let great_novellas = Novellas::new(vec![Novella {
        name: "The Mist".to_string(),
    }]);
    for novella in &great_novellas {
        info!("I've read: {:?}", novella);
    }

    let factories: [(&str, &dyn PersonFactory); 2] = [
        ("You", &YourFactory),
        ("Mother's friend's son", &MothersFriendSonsFactory),
    ];
    for (who, factory) in factories {
        info!(
            "{who}: marks {}, {}, biceps {}",
            factory.make_record_book().marks(),
            factory.make_partner().cook_meal(),
            factory.make_physique().biceps_size()
        );
    }

    DollarConverter.convert(&Euro);

    let laser = DeathStarSuperlaser::shared_instance();
    let same = std::ptr::eq(laser, DeathStarSuperlaser::shared_instance());
    info!("{}", if same { "OK" } else { "FAIL" });

    let old_format =
        OldDeathStarSuperlaserTarget::from(DeathStarSuperlaserTarget::new(14.0, 12.0));
    info!(
        "Legacy aiming: h={} v={}",
        old_format.angle_h(),
        old_format.angle_v()
    );

    let mut some_coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    info!("Cost : {}; Ingredients: {}", some_coffee.cost(), some_coffee.ingredients());
    some_coffee = Box::new(Milk::new(some_coffee));
    info!("Cost : {}; Ingredients: {}", some_coffee.cost(), some_coffee.ingredients());
    some_coffee = Box::new(WhipCoffee::new(some_coffee));
    info!("Cost : {}; Ingredients: {}", some_coffee.cost(), some_coffee.ingredients());

    let mut eternal = Eternal::new();
    eternal.set("Bishop", "Disconnect me.");
    info!("Bishop: {:?}", eternal.object("Bishop"));

    let mut computer = CurrentComputer::new();
    let pod_bay = "Pod Bay Doors";
    info!("{}", computer.open(pod_bay));
    computer.authenticate("pass");
    info!("{}", computer.open(pod_bay));

    Ok(())
}
