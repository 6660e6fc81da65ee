//! PNG rendering of the three flight series.

use std::fmt::Display;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::errors::SimulationError;

use super::telemetry::Telemetry;

const PLOT_SIZE: (u32, u32) = (800, 600);

pub const TRAJECTORY_PLOT: &str = "trajectory.png";
pub const VELOCITY_PLOT: &str = "velocity.png";
pub const MASS_PLOT: &str = "mass.png";

/// Files written by [`save_plots`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFiles {
    pub trajectory: PathBuf,
    pub velocity: PathBuf,
    pub mass: PathBuf,
}

impl PlotFiles {
    pub fn in_dir(dir: &Path) -> Self {
        PlotFiles {
            trajectory: dir.join(TRAJECTORY_PLOT),
            velocity: dir.join(VELOCITY_PLOT),
            mass: dir.join(MASS_PLOT),
        }
    }

    pub fn all(&self) -> [&Path; 3] {
        [
            self.trajectory.as_path(),
            self.velocity.as_path(),
            self.mass.as_path(),
        ]
    }
}

struct LineChart<'a> {
    caption: &'a str,
    x_desc: &'a str,
    y_desc: &'a str,
}

fn plot_error<E: Display>(err: E) -> SimulationError {
    SimulationError::PlotError(err.to_string())
}

/// Writes `trajectory.png`, `velocity.png` and `mass.png` into `dir`, creating it if needed.
pub fn save_plots(telemetry: &Telemetry, dir: &Path) -> Result<PlotFiles, SimulationError> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    let files = PlotFiles::in_dir(dir);

    draw_line_chart(
        &files.trajectory,
        &LineChart {
            caption: "Rocket Trajectory (Variable Mass)",
            x_desc: "Horizontal Distance (m)",
            y_desc: "Vertical Height (m)",
        },
        &telemetry.trajectory_series(),
    )?;
    draw_line_chart(
        &files.velocity,
        &LineChart {
            caption: "Velocity vs Time",
            x_desc: "Time (s)",
            y_desc: "Velocity (m/s)",
        },
        &telemetry.speed_series(),
    )?;
    draw_line_chart(
        &files.mass,
        &LineChart {
            caption: "Mass vs Time",
            x_desc: "Time (s)",
            y_desc: "Mass (kg)",
        },
        &telemetry.mass_series(),
    )?;

    Ok(files)
}

fn draw_line_chart(
    path: &Path,
    chart: &LineChart,
    points: &[(f64, f64)],
) -> Result<(), SimulationError> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let (x_range, y_range) = axis_ranges(points);
    let mut ctx = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            chart.caption,
            FontDesc::new(FontFamily::SansSerif, 24.0, FontStyle::Normal),
        )
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;

    ctx.configure_mesh()
        .x_desc(chart.x_desc)
        .y_desc(chart.y_desc)
        .draw()
        .map_err(plot_error)?;

    ctx.draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

/// Data bounds with a little headroom; flat or empty series get a unit span.
fn axis_ranges(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    let bounds = |values: &mut dyn Iterator<Item = f64>| {
        let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !lo.is_finite() || !hi.is_finite() {
            return 0.0..1.0;
        }
        let span = hi - lo;
        if span <= f64::EPSILON * hi.abs().max(1.0) {
            return (lo - 1.0)..(hi + 1.0);
        }
        let pad = span * 0.05;
        (lo - pad)..(hi + pad)
    };

    (
        bounds(&mut points.iter().map(|p| p.0)),
        bounds(&mut points.iter().map(|p| p.1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory_system::integrator::{simulate, LaunchParameters};

    #[test]
    fn test_axis_ranges_pad_data() {
        let (x, y) = axis_ranges(&[(0.0, 10.0), (100.0, 20.0)]);
        assert!(x.start < 0.0 && x.end > 100.0);
        assert!(y.start < 10.0 && y.end > 20.0);
    }

    #[test]
    fn test_axis_ranges_handle_flat_and_empty_series() {
        let (_, y) = axis_ranges(&[(0.0, 6.0), (1.0, 6.0)]);
        assert_eq!(y, 5.0..7.0);
        let (x, y) = axis_ranges(&[]);
        assert_eq!(x, 0.0..1.0);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn test_save_plots_writes_three_pngs() {
        let telemetry = simulate(LaunchParameters {
            initial_velocity: 50.0,
            launch_angle_degrees: 60.0,
            thrust: 300.0,
            initial_mass: 10.0,
            fuel_mass: 4.0,
            burn_time: 2.0,
            total_time: 30.0,
            initial_height: 0.0,
        })
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let files = save_plots(&telemetry, dir.path()).unwrap();

        for path in files.all() {
            let bytes = std::fs::read(path).unwrap();
            assert_eq!(&bytes[1..4], b"PNG", "{} is not a PNG", path.display());
        }
    }
}
