use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rig_placement_core::{
    allocate, check_placement, classify, compose, evaluate, DeviceDescriptor, RigConfig, Setup,
    SetupType,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> rig_placement_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Classify { name, device_type } => run_classify(name, device_type),
        Commands::Place { setup, device } => run_place(&config, &setup, &device),
        Commands::Check {
            setup,
            device,
            spot,
        } => run_check(&config, &setup, &device, &spot),
        Commands::Readiness { setup } => run_readiness(&setup),
        Commands::Compose { setup, devices } => run_compose(&config, &setup, &devices),
        Commands::Spots { setup_type } => run_spots(&config, &setup_type),
    }
}

fn run_classify(name: String, device_type: Option<String>) -> rig_placement_core::Result<()> {
    let device = DeviceDescriptor {
        name,
        device_type,
        ..Default::default()
    };
    let role = classify(&device);
    tracing::info!(name = %device.name, %role, "classified device");
    print_json(&json!({ "role": role }))
}

fn run_place(config: &RigConfig, setup: &Path, device: &Path) -> rig_placement_core::Result<()> {
    let setup = read_setup(setup)?;
    let device: DeviceDescriptor = read_json(device)?;
    let spots = config.spots_for(setup.setup_type);

    let spot = allocate(&device, setup.setup_type, &setup.devices, spots);
    match spot {
        Some(spot) => tracing::info!(device = %device.name, spot = %spot.spot_type, "allocated spot"),
        None => tracing::warn!(device = %device.name, "no spot available, manual placement needed"),
    }
    print_json(&json!({ "spot": spot }))
}

fn run_check(
    config: &RigConfig,
    setup: &Path,
    device: &Path,
    spot: &str,
) -> rig_placement_core::Result<()> {
    let setup = read_setup(setup)?;
    let device: DeviceDescriptor = read_json(device)?;
    let spot = config.spot(setup.setup_type, spot)?;

    let verdict = check_placement(&device, spot, setup.setup_type, &setup.devices);
    tracing::info!(device = %device.name, spot = %spot.spot_type, ?verdict, "checked placement");
    print_json(&verdict)
}

fn run_readiness(setup: &Path) -> rig_placement_core::Result<()> {
    let setup = read_setup(setup)?;
    let report = evaluate(&setup.devices, setup.setup_type);
    tracing::info!(stage = ?report.stage(), devices = setup.devices.len(), "evaluated readiness");
    print_json(&json!({
        "report": report,
        "stage": report.stage(),
        "missing": report.missing(),
    }))
}

fn run_compose(config: &RigConfig, setup: &Path, devices: &Path) -> rig_placement_core::Result<()> {
    let setup = read_setup(setup)?;
    let devices: Vec<DeviceDescriptor> = read_json(devices)?;
    let spots = config.spots_for(setup.setup_type);

    let composition = compose(&setup, &devices, spots);
    tracing::info!(
        placed = composition.setup.devices.len() - setup.devices.len(),
        unplaced = composition.unplaced.len(),
        "composed setup"
    );
    print_json(&composition)
}

fn run_spots(config: &RigConfig, setup_type: &str) -> rig_placement_core::Result<()> {
    let setup_type: SetupType = setup_type.parse()?;
    print_json(config.catalog(setup_type))
}

fn load_config(path: Option<&Path>) -> rig_placement_core::Result<RigConfig> {
    match path {
        Some(path) => RigConfig::load(path),
        None => Ok(RigConfig::default()),
    }
}

fn read_setup(path: &Path) -> rig_placement_core::Result<Setup> {
    let setup = Setup::from_json_str(&std::fs::read_to_string(path)?)?;
    if setup.setup_type.is_none() {
        tracing::warn!(?path, "unrecognised setup type, priorities disabled");
    }
    Ok(setup)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> rig_placement_core::Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> rig_placement_core::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Place gear into DJ, Producer and Musician rigs", long_about = None)]
struct Cli {
    /// Spot catalog override (JSON). Built-in catalogs are used otherwise.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the role a device resolves to.
    Classify {
        #[arg(short, long, default_value = "")]
        name: String,
        #[arg(short = 't', long = "type")]
        device_type: Option<String>,
    },
    /// Pick the spot a new device should occupy.
    Place {
        /// Setup document with the devices already placed.
        #[arg(short, long)]
        setup: PathBuf,
        /// Descriptor of the device being added.
        #[arg(short, long)]
        device: PathBuf,
    },
    /// Check whether a device may be dragged onto a spot.
    Check {
        #[arg(short, long)]
        setup: PathBuf,
        #[arg(short, long)]
        device: PathBuf,
        /// Spot identifier, e.g. `middle_left`.
        #[arg(long)]
        spot: String,
    },
    /// Report how complete a setup is.
    Readiness {
        #[arg(short, long)]
        setup: PathBuf,
    },
    /// Add a list of devices to a setup one at a time.
    Compose {
        #[arg(short, long)]
        setup: PathBuf,
        /// JSON array of device descriptors.
        #[arg(short, long)]
        devices: PathBuf,
    },
    /// Print the spot catalog for a setup type.
    Spots {
        /// DJ, Producer or Musician.
        setup_type: String,
    },
}
