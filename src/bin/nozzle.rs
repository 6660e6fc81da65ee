use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use rocket_performance::console::value_or_prompt;
use rocket_performance::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Isentropic nozzle performance model",
    allow_negative_numbers = true
)]
struct Cli {
    /// Chamber pressure (Pa)
    #[arg(long)]
    chamber_pressure: Option<f64>,

    /// Chamber temperature (K)
    #[arg(long)]
    chamber_temperature: Option<f64>,

    /// Specific heat ratio
    #[arg(long)]
    gamma: Option<f64>,

    /// Throat area (m^2)
    #[arg(long)]
    throat_area: Option<f64>,

    /// Exit area (m^2)
    #[arg(long)]
    exit_area: Option<f64>,

    /// Ambient pressure (Pa)
    #[arg(long)]
    ambient_pressure: Option<f64>,

    /// Specific gas constant of the exhaust (J/kg-K)
    #[arg(long, default_value_t = GAS_CONSTANT)]
    gas_constant: f64,

    /// Reference gravity for specific impulse (m/s^2)
    #[arg(long, default_value_t = STANDARD_GRAVITY)]
    standard_gravity: f64,

    /// Root-finding strategy for the exit Mach number
    #[arg(long, value_enum, default_value_t = Solver::Newton)]
    solver: Solver,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Solver {
    Newton,
    Bisection,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = NozzleConfig::new(cli.gas_constant, cli.standard_gravity)?;

    println!("=== Isentropic Nozzle Performance Model ===\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let inputs = NozzleInputs {
        chamber_pressure: value_or_prompt(
            cli.chamber_pressure,
            &mut input,
            &mut output,
            "Chamber Pressure (Pa): ",
        )?,
        chamber_temperature: value_or_prompt(
            cli.chamber_temperature,
            &mut input,
            &mut output,
            "Chamber Temperature (K): ",
        )?,
        gamma: value_or_prompt(
            cli.gamma,
            &mut input,
            &mut output,
            "Specific Heat Ratio (gamma): ",
        )?,
        throat_area: value_or_prompt(
            cli.throat_area,
            &mut input,
            &mut output,
            "Throat Area (m^2): ",
        )?,
        exit_area: value_or_prompt(cli.exit_area, &mut input, &mut output, "Exit Area (m^2): ")?,
        ambient_pressure: value_or_prompt(
            cli.ambient_pressure,
            &mut input,
            &mut output,
            "Ambient Pressure (Pa): ",
        )?,
    };
    output.flush()?;

    let solver = NozzleSolver::new(config);
    let performance = match cli.solver {
        Solver::Newton => solver.solve(&inputs)?,
        Solver::Bisection => solver
            .with_root_finder(Bisection::default())
            .solve(&inputs)?,
    };

    println!("\n--- Results ---");
    println!("Area Ratio: {:.3}", performance.area_ratio);
    println!("Exit Mach: {:.3}", performance.exit_mach);
    println!("Exit Temperature: {:.2} K", performance.exit_temperature);
    println!("Exit Velocity: {:.2} m/s", performance.exit_velocity);
    println!("Mass Flow Rate: {:.3} kg/s", performance.mass_flow_rate);
    println!("Exit Pressure: {:.2} Pa", performance.exit_pressure);
    println!("Thrust: {:.2} N", performance.thrust);
    println!("Specific Impulse: {:.2} s", performance.specific_impulse);

    Ok(())
}
