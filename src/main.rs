use orbit_lab::{ConfigurationIdentity, SelectionController, SessionConfig};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Inspect the orbital system catalog and its seeds")]
struct Args {
    /// Session config (YAML); built-in defaults when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every selectable system
    List,
    /// Print the stored seeds of one system
    Show { name: String },
    /// Select a system and print the resulting live bodies
    Select { name: String },
}

// load here to keep main clean
fn load_controller(file: Option<&PathBuf>) -> Result<SelectionController> {
    let cfg = match file {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("failed to load session config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    let controller = cfg.build_controller().context("invalid session config")?;
    Ok(controller)
}

fn print_bodies(bodies: &[orbit_lab::BodyState]) {
    if bodies.is_empty() {
        println!("  (no bodies)");
    }
    for (i, b) in bodies.iter().enumerate() {
        println!(
            "  [{i}] {} m={:<10} x=({:.2}, {:.2}) v=({:.2}, {:.2})",
            if b.active { "active  " } else { "inactive" },
            b.mass,
            b.position.x,
            b.position.y,
            b.velocity.x,
            b.velocity.y,
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut controller = load_controller(args.file.as_ref())?;
    tracing::info!(initial = %controller.current_identity(), "session ready");

    match args.command {
        Command::List => {
            let registry = controller.registry();
            for id in registry.all_configurations() {
                let cfg = registry.configuration(id);
                println!(
                    "{:<18} {:>2} bodies  {}",
                    id,
                    registry.seeds_for(id).len(),
                    if cfg.is_mutable() { "mutable" } else { "fixed" },
                );
            }
        }
        Command::Show { name } => {
            let seeds = controller.registry().seeds_for_name(&name)?;
            println!("{name}:");
            print_bodies(seeds);
        }
        Command::Select { name } => {
            let identity: ConfigurationIdentity = name.parse()?;
            controller.select(identity);
            println!("{}:", controller.current_identity());
            print_bodies(controller.live_bodies());
            println!("  active bodies: {}", controller.active_count());
            println!("  total mass:    {}", controller.total_mass());
            if let Some(com) = controller.center_of_mass() {
                println!("  center of mass: ({:.3}, {:.3})", com.x, com.y);
            }
        }
    }

    Ok(())
}
