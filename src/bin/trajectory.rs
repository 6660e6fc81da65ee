use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rocket_performance::console::value_or_prompt;
use rocket_performance::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Variable-mass rocket trajectory simulator",
    allow_negative_numbers = true
)]
struct Cli {
    /// Initial velocity (m/s)
    #[arg(long)]
    initial_velocity: Option<f64>,

    /// Launch angle (degrees)
    #[arg(long)]
    launch_angle: Option<f64>,

    /// Thrust force (N)
    #[arg(long)]
    thrust: Option<f64>,

    /// Initial total mass (kg)
    #[arg(long)]
    initial_mass: Option<f64>,

    /// Fuel mass (kg)
    #[arg(long)]
    fuel_mass: Option<f64>,

    /// Burn time (s)
    #[arg(long)]
    burn_time: Option<f64>,

    /// Total simulation time (s)
    #[arg(long)]
    total_time: Option<f64>,

    /// Launch height above ground (m)
    #[arg(long, default_value_t = 0.0)]
    initial_height: f64,

    /// Integration time step (s)
    #[arg(long, default_value_t = TIME_STEP)]
    timestep: f64,

    /// Gravitational acceleration (m/s^2)
    #[arg(long, default_value_t = GRAVITY)]
    gravity: f64,

    /// Mass used for the thrust-to-weight ratio
    #[arg(long, value_enum, default_value_t = TwrBasis::Initial)]
    twr_basis: TwrBasis,

    /// Directory for trajectory.png, velocity.png and mass.png
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip writing plot images
    #[arg(long, default_value_t = false)]
    no_plots: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum TwrBasis {
    Initial,
    Final,
}

impl From<TwrBasis> for ThrustToWeightBasis {
    fn from(basis: TwrBasis) -> Self {
        match basis {
            TwrBasis::Initial => ThrustToWeightBasis::InitialMass,
            TwrBasis::Final => ThrustToWeightBasis::FinalMass,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = TrajectoryConfig::new(cli.timestep, cli.gravity)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut ask = |value: Option<f64>, prompt: &str| {
        value_or_prompt(value, &mut input, &mut output, prompt)
    };

    let params = LaunchParameters {
        initial_velocity: ask(cli.initial_velocity, "Initial velocity (m/s): ")?,
        launch_angle_degrees: ask(cli.launch_angle, "Launch angle (degrees): ")?,
        thrust: ask(cli.thrust, "Thrust force (N): ")?,
        initial_mass: ask(cli.initial_mass, "Initial total mass (kg): ")?,
        fuel_mass: ask(cli.fuel_mass, "Fuel mass (kg): ")?,
        burn_time: ask(cli.burn_time, "Burn time (s): ")?,
        total_time: ask(cli.total_time, "Total simulation time (s): ")?,
        initial_height: cli.initial_height,
    };
    io::stdout().flush()?;

    let telemetry = TrajectoryIntegrator::new(params, config)?.simulate();

    println!("\nSimulation Complete");
    println!("{}", telemetry.summary());

    if !cli.no_plots {
        let files = save_plots(&telemetry, &cli.output_dir)?;
        let names: Vec<String> = files
            .all()
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        println!("Plots saved: {}", names.join(", "));
    }

    println!(
        "Thrust-to-Weight Ratio: {:.2}",
        telemetry.thrust_to_weight(cli.twr_basis.into())?
    );

    Ok(())
}
