use std::path::PathBuf;

use astronav::config::{AnomalyKind, find_body, find_scenario, load_bodies, load_scenarios};
use astronav::export::state::{StateSummary, write_json};
use astronav::frames::{AngleUnit, OrbitalElements, kep_to_cart};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert Keplerian elements to an inertial Cartesian state"
)]
struct Cli {
    /// Semi-major axis (m)
    #[arg(long, required_unless_present = "scenario")]
    sma: Option<f64>,

    /// Eccentricity
    #[arg(long, default_value_t = 0.0)]
    ecc: f64,

    /// Inclination
    #[arg(long, default_value_t = 0.0)]
    inc: f64,

    /// Right ascension of the ascending node
    #[arg(long, default_value_t = 0.0)]
    raan: f64,

    /// Argument of perigee
    #[arg(long, default_value_t = 0.0)]
    argp: f64,

    /// True anomaly
    #[arg(long, default_value_t = 0.0)]
    ta: f64,

    /// Treat `--ta` as a mean anomaly
    #[arg(long, default_value_t = false)]
    mean: bool,

    /// Angle units of the element set: "deg" or "rad"
    #[arg(long, default_value = "deg")]
    units: String,

    /// Gravitational parameter (m^3/s^2); overrides --body
    #[arg(long)]
    mu: Option<f64>,

    /// Central body from the catalog (case-insensitive)
    #[arg(long, default_value = "EARTH")]
    body: String,

    /// Body catalog (YAML, TOML, or directory of TOML files)
    #[arg(long, default_value = "configs/bodies")]
    bodies: PathBuf,

    /// Take elements and body from a named scenario instead of the flags
    #[arg(long)]
    scenario: Option<String>,

    /// Scenario file
    #[arg(long, default_value = "configs/scenarios.yaml")]
    scenarios: PathBuf,

    /// Also write the state as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let bodies = load_bodies(&cli.bodies)?;

    let (body_name, units, elements) = match &cli.scenario {
        Some(name) => {
            let scenarios = load_scenarios(&cli.scenarios)?;
            let scenario = find_scenario(&scenarios, name)?;
            let body = find_body(&bodies, &scenario.body)?;
            let units: AngleUnit = scenario.angle_units.parse()?;
            let [sma, ecc, inc, raan, argp, anomaly] = scenario.resolved_elements(body);
            let elements = match scenario.anomaly {
                AnomalyKind::True => {
                    OrbitalElements::from_array([sma, ecc, inc, raan, argp, anomaly])
                }
                AnomalyKind::Mean => {
                    OrbitalElements::with_mean_anomaly(sma, ecc, inc, raan, argp, anomaly, units)?
                }
            };
            info!("scenario '{}' around {}", scenario.name, body.name);
            (body.name.clone(), units, elements)
        }
        None => {
            let units: AngleUnit = cli.units.parse()?;
            let sma = cli
                .sma
                .ok_or_else(|| anyhow::anyhow!("--sma is required without --scenario"))?;
            let elements = if cli.mean {
                OrbitalElements::with_mean_anomaly(
                    sma, cli.ecc, cli.inc, cli.raan, cli.argp, cli.ta, units,
                )?
            } else {
                OrbitalElements::from_array([sma, cli.ecc, cli.inc, cli.raan, cli.argp, cli.ta])
            };
            (cli.body.clone(), units, elements)
        }
    };

    let mu = match cli.mu {
        Some(mu) => mu,
        None => find_body(&bodies, &body_name)?.mu_m3_s2(),
    };

    if !(0.0..1.0).contains(&elements.ecc) {
        anyhow::bail!(
            "eccentricity {} is outside [0, 1); only elliptic orbits are supported",
            elements.ecc
        );
    }

    let state = kep_to_cart(elements, mu, units);

    println!("=== Cartesian State ===");
    println!("Body      : {} (mu = {:.6e} m^3/s^2)", body_name, mu);
    println!(
        "Elements  : sma = {:.3} m, ecc = {:.6}, inc = {}, raan = {}, argp = {}, ta = {} [{}]",
        elements.sma_m,
        elements.ecc,
        elements.inc,
        elements.raan,
        elements.arg_perigee,
        elements.true_anomaly,
        units
    );
    println!(
        "Position  : [{:.6}, {:.6}, {:.6}] m",
        state[0], state[1], state[2]
    );
    println!(
        "Velocity  : [{:.9}, {:.9}, {:.9}] m/s",
        state[3], state[4], state[5]
    );

    if let Some(path) = &cli.json {
        let units_label = units.to_string();
        let summary = StateSummary {
            body: &body_name,
            mu_m3_s2: mu,
            angle_units: &units_label,
            elements: elements.to_array(),
            position_m: [state[0], state[1], state[2]],
            velocity_m_s: [state[3], state[4], state[5]],
        };
        write_json(path, &summary)?;
    }

    Ok(())
}
