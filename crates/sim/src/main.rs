use anyhow::Context;

use gildedrose_sim::{Simulation, SimConfig, generate_inventory};

fn main() -> anyhow::Result<()> {
    let config = SimConfig::from_env().context("invalid simulator configuration")?;

    gildedrose_observability::init_with(config.log_format);

    for key in &config.defaulted {
        tracing::warn!(key = *key, "not set; using default");
    }

    let inventory =
        generate_inventory(config.fixture).context("failed to build sample inventory")?;

    tracing::info!(days = config.days, items = inventory.len(), "simulation starting");

    let mut simulation = Simulation::new(inventory);
    for report in simulation.run(config.days) {
        println!("{}", report.render());
    }

    let expired = simulation
        .inventory()
        .items()
        .iter()
        .filter(|item| item.sell_in < 0)
        .count();
    tracing::info!(days = config.days, expired, "simulation finished");

    Ok(())
}
