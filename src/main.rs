//! Demo driver for the body simulation.
//!
//! Spawns a single body hanging below the void floor, queues one move
//! command, and ticks the schedule while logging position and health.

use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use log::info;

use bodkin::{
    init_logging, Health, MoveCommand, MoveInbox, SimConfig, SimulationPlugin, DEMO_MAX_HEALTH,
};

/// A tiny body simulation built from composable behaviours
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 1)]
    ticks: u32,

    /// Optional JSON file overriding simulation parameters
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => SimConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);
    app.insert_resource(config);

    let body = app
        .world_mut()
        .spawn((
            Transform::from_xyz(0.0, -0.5, 0.0),
            Health::new(DEMO_MAX_HEALTH, DEMO_MAX_HEALTH),
        ))
        .id();
    app.world_mut()
        .resource_mut::<MoveInbox>()
        .push(MoveCommand {
            entity: body,
            dx: 1.0,
            dz: 0.5,
        });

    for tick in 1..=args.ticks {
        app.update();
        report(&app, body, tick)?;
    }
    Ok(())
}

/// Logs the body's position and health after a tick.
fn report(app: &App, body: Entity, tick: u32) -> anyhow::Result<()> {
    let world = app.world();
    let transform = world
        .get::<Transform>(body)
        .context("body lost its transform")?;
    let health = world.get::<Health>(body).context("body lost its health")?;
    info!(
        "tick {tick}: position ({:.2}, {:.2}, {:.2}), health {:.1}/{:.1}",
        transform.translation.x,
        transform.translation.y,
        transform.translation.z,
        health.current,
        health.max
    );
    Ok(())
}
