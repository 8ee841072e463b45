use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use glam::IVec3;
use strata_common::{LayerId, Region, Voxel};
use strata_history::{MementoHandler, MementoState, Snapshot, DEFAULT_MAX_STATES};
use strata_volume::RawVolume;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "strata-cli", about = "CLI harness for the strata history engine")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print engine version and crate info
    Info,
    /// Run a scripted editing session and scrub undo/redo through it
    Scrub {
        /// Maximum number of retained history entries
        #[arg(short, long, default_value_t = DEFAULT_MAX_STATES)]
        max_states: usize,
    },
    /// Run the scripted session and dump the history metadata as JSON
    Dump {
        /// Maximum number of retained history entries
        #[arg(short, long, default_value_t = DEFAULT_MAX_STATES)]
        max_states: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("strata-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("default max states: {DEFAULT_MAX_STATES}");
        }
        Commands::Scrub { max_states } => {
            let (mut handler, mut layers) = scripted_session(max_states)?;
            println!(
                "session recorded: {} entries, cursor at {}",
                handler.state_size(),
                handler.state_position()
            );

            println!("scrubbing to the beginning:");
            while handler.can_undo() {
                let state = handler.undo();
                apply(&mut layers, &state)?;
                print_applied(&handler, &state, &layers);
            }

            println!("scrubbing back to the end:");
            while handler.can_redo() {
                let state = handler.redo();
                apply(&mut layers, &state)?;
                print_applied(&handler, &state, &layers);
            }
        }
        Commands::Dump { max_states } => {
            let (handler, _) = scripted_session(max_states)?;
            let entries: Vec<serde_json::Value> = handler
                .states()
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "layer": s.layer.0,
                        "name": s.name,
                        "kind": format!("{:?}", s.kind),
                        "present": !s.snapshot.is_absent(),
                        "width": s.snapshot.region().map(|r| r.width_in_voxels()),
                    })
                })
                .collect();
            let doc = serde_json::json!({
                "max_states": handler.max_states(),
                "size": handler.state_size(),
                "position": handler.state_position(),
                "entries": entries,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}

/// The live scene the handler's returned states are applied against.
type Layers = BTreeMap<LayerId, RawVolume>;

/// Paint a couple of layers and record every step, the way the editor would.
fn scripted_session(max_states: usize) -> anyhow::Result<(MementoHandler, Layers)> {
    let mut handler = MementoHandler::with_max_states(max_states);
    let mut layers = Layers::new();

    let ground = LayerId(0);
    let mut volume = RawVolume::new(Region::cube(4));
    layers.insert(ground, volume.clone());
    handler.mark_undo(ground, "Ground", &volume)?;

    volume.set_voxel(IVec3::new(0, 0, 0), Voxel::solid(1));
    volume.set_voxel(IVec3::new(1, 0, 0), Voxel::solid(1));
    layers.insert(ground, volume.clone());
    handler.mark_undo(ground, "Ground painted", &volume)?;

    let detail = LayerId(1);
    let mut overlay = RawVolume::new(Region::cube(2));
    overlay.set_voxel(IVec3::new(0, 1, 0), Voxel::solid(3));
    layers.insert(detail, overlay.clone());
    handler.mark_layer_added(detail, "Detail", &overlay)?;

    overlay.set_voxel(IVec3::new(1, 1, 1), Voxel::solid(3));
    layers.insert(detail, overlay.clone());
    handler.mark_undo(detail, "Detail painted", &overlay)?;

    handler.mark_layer_deleted(detail, "Detail removed", &overlay)?;
    layers.remove(&detail);

    Ok((handler, layers))
}

/// Apply a returned state to the live scene: absent means "remove the
/// layer", present means "replace/create the layer's content".
fn apply(layers: &mut Layers, state: &MementoState) -> anyhow::Result<()> {
    match &state.snapshot {
        Snapshot::Absent => {
            layers.remove(&state.layer);
        }
        Snapshot::Present(_) => {
            layers.insert(state.layer, state.snapshot.decode()?);
        }
    }
    Ok(())
}

fn print_applied(handler: &MementoHandler, state: &MementoState, layers: &Layers) {
    let content = match state.snapshot.region() {
        Some(r) => format!("{}^3 content", r.width_in_voxels()),
        None => "absent".to_string(),
    };
    println!(
        "  [{}] {:?} {} \"{}\" -> {} ({} layers live)",
        handler.state_position(),
        state.kind,
        state.layer,
        state.name,
        content,
        layers.len()
    );
}
