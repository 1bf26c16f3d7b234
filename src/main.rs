//! appliance-demo
//!
//! Walks through the `ArraySet` operations using a household of electric
//! appliances.
//!
//! # Usage
//!
//! ```bash
//! cargo run --features demo --bin appliance-demo
//!
//! # Larger set with faster growth
//! cargo run --features demo --bin appliance-demo -- \
//!   --large-set-size 100 --growth-factor 2.0
//! ```
//!
//! `ARRAY_SET_INITIAL_CAPACITY` and `ARRAY_SET_GROWTH_FACTOR` are read before
//! the command-line overrides are applied.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appliance_set::appliance::ElectricAppliance;
use appliance_set::collection::{ArraySet, SetError};
use appliance_set::config::SetConfig;

#[derive(Parser)]
#[command(name = "appliance-demo")]
#[command(about = "Demonstrates the array-backed appliance set")]
struct Cli {
    /// Number of laptops placed in the large set
    #[arg(long, default_value_t = 20)]
    large_set_size: u32,

    /// Initial capacity of the large set (overrides ARRAY_SET_INITIAL_CAPACITY)
    #[arg(long)]
    initial_capacity: Option<usize>,

    /// Growth factor of the large set (overrides ARRAY_SET_GROWTH_FACTOR)
    #[arg(long)]
    growth_factor: Option<f64>,
}

struct Household {
    fridge: ElectricAppliance,
    laptop: ElectricAppliance,
    dryer: ElectricAppliance,
    mini_bar: ElectricAppliance,
    laptop_duplicate: ElectricAppliance,
}

impl Household {
    fn new() -> anyhow::Result<Self> {
        let laptop = ElectricAppliance::laptop("MacBook Pro", 60, 0.2, 16)?;
        Ok(Self {
            fridge: ElectricAppliance::refrigerator("Samsung Fridge", 150, 0.8, true)?,
            laptop_duplicate: laptop.clone(),
            laptop,
            dryer: ElectricAppliance::hair_dryer("Philips Dryer", 1800, 5.5, 3)?,
            mini_bar: ElectricAppliance::refrigerator("Mini-Bar", 80, 0.5, false)?,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "appliance_set=info,appliance_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::info!(
        initial_capacity = config.initial_capacity,
        growth_factor = config.growth_factor,
        "configuration loaded"
    );

    let mut household = Household::new().context("failed to build the demo appliances")?;
    household.fridge.plug_in();
    household.laptop.plug_in();

    let mut set = show_constructors(&household);
    show_uniqueness(&mut set, &household);
    show_bulk_operations(&mut set, &household)?;
    show_large_set(&config, cli.large_set_size)?;
    show_misuse(&mut set);

    section("Clear");
    set.clear();
    tracing::info!("after clear: size = {}, empty = {}", set.len(), set.is_empty());

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<SetConfig> {
    let mut config = SetConfig::from_env().context("invalid set configuration in environment")?;
    if let Some(initial_capacity) = cli.initial_capacity {
        config = config.with_initial_capacity(initial_capacity);
    }
    if let Some(growth_factor) = cli.growth_factor {
        config = config.with_growth_factor(growth_factor);
    }
    config.validate().context("invalid set configuration on command line")?;
    Ok(config)
}

fn section(title: &str) {
    tracing::info!("=== {title} ===");
}

fn print_set(label: &str, set: &ArraySet<ElectricAppliance>) {
    tracing::info!("{label} (size {}, capacity {}):", set.len(), set.capacity());
    for appliance in set {
        tracing::info!("  {appliance}");
    }
}

fn show_constructors(household: &Household) -> ArraySet<ElectricAppliance> {
    section("Constructors");

    let empty: ArraySet<ElectricAppliance> = ArraySet::new();
    print_set("empty set", &empty);

    let single = ArraySet::singleton(household.dryer.clone());
    print_set("singleton", &single);

    let set = ArraySet::from_source([
        household.fridge.clone(),
        household.laptop.clone(),
        household.fridge.clone(),
    ]);
    print_set("from a source with a duplicate", &set);
    set
}

fn show_uniqueness(set: &mut ArraySet<ElectricAppliance>, household: &Household) {
    section("Uniqueness");

    tracing::info!("add dryer: {}", set.add(household.dryer.clone()));
    tracing::info!(
        "add equal copy of the laptop: {}",
        set.add(household.laptop_duplicate.clone())
    );
    tracing::info!("contains mini-bar: {}", set.contains(&household.mini_bar));
    tracing::info!("remove mini-bar: {}", set.remove(&household.mini_bar));
    tracing::info!("remove laptop: {}", set.remove(&household.laptop));
    tracing::info!("add laptop back: {}", set.add(household.laptop.clone()));
    print_set("current set", set);
}

fn show_bulk_operations(
    set: &mut ArraySet<ElectricAppliance>,
    household: &Household,
) -> anyhow::Result<()> {
    section("Bulk operations");

    let kitchen = [household.fridge.clone(), household.mini_bar.clone()];
    tracing::info!("add all kitchen appliances: {}", set.add_all(kitchen.clone()));
    tracing::info!("contains all kitchen appliances: {}", set.contains_all(&kitchen));

    let ghost = ElectricAppliance::hair_dryer("Ghost Dryer", 1000, 1.0, 2)?;
    let keep = vec![household.mini_bar.clone(), ghost];
    tracing::info!("retain mini-bar and an absent dryer: {}", set.retain_all(&keep));
    print_set("after retain", set);

    tracing::info!("remove all kitchen appliances: {}", set.remove_all(&kitchen));
    tracing::info!("empty after remove: {}", set.is_empty());

    set.add_all([
        household.fridge.clone(),
        household.laptop.clone(),
        household.dryer.clone(),
    ]);
    let snapshot = set.to_array();
    tracing::info!("snapshot holds {} appliances", snapshot.len());
    Ok(())
}

fn show_large_set(config: &SetConfig, size: u32) -> anyhow::Result<()> {
    section("Large set");

    let mut large = ArraySet::with_config(config);
    tracing::info!("initial capacity: {}", large.capacity());
    for index in 0..size {
        let laptop = ElectricAppliance::laptop(format!("Laptop-{index}"), 50 + index, 0.1, 13)?;
        large.add(laptop);
    }
    tracing::info!("size = {}, capacity = {}", large.len(), large.capacity());

    let mut cursor = large.cursor();
    let mut visited = 0;
    while cursor.has_next() {
        let appliance = cursor.next()?;
        visited += 1;
        if visited == 3 {
            tracing::info!("removing during iteration: {}", appliance.name());
            cursor.remove_current()?;
        }
    }
    tracing::info!("size after removing the third laptop: {}", large.len());
    Ok(())
}

fn show_misuse(set: &mut ArraySet<ElectricAppliance>) {
    section("Misuse");

    report("add a missing element", set.try_add(None).map(|_| ()));

    let mut cursor = set.cursor();
    report("remove before next", cursor.remove_current());
    while cursor.next().is_ok() {}
    report("next on an exhausted cursor", cursor.next().map(|_| ()));
}

fn report(action: &str, result: Result<(), SetError>) {
    match result {
        Ok(()) => tracing::info!("{action}: succeeded"),
        Err(error) => tracing::info!("{action}: rejected ({error})"),
    }
}
