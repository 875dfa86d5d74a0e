use std::io::Write;
use std::path::PathBuf;

use astronav::export::{self, hill, residuals};
use astronav::frames::{azel_residuals, inertial_to_hill_series};
use astronav::trajectory::read_trajectory;
use clap::Parser;
use log::{info, warn};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Express a trajectory relative to a reference in the reference's Hill frame"
)]
struct Cli {
    /// Reference (frame centre) trajectory CSV
    #[arg(long)]
    reference: PathBuf,

    /// Relative object trajectory CSV
    #[arg(long)]
    relative: PathBuf,

    /// Output CSV path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Optional azimuth/elevation residual CSV (reference minus relative)
    #[arg(long)]
    residuals: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let reference = read_trajectory(&cli.reference)?;
    let relative = read_trajectory(&cli.relative)?;
    info!(
        "reference: {} epochs, relative: {} epochs",
        reference.len(),
        relative.len()
    );
    if reference.is_empty() || relative.is_empty() {
        anyhow::bail!("trajectory CSV holds no epochs");
    }

    let hill_states = inertial_to_hill_series(&reference.states, &relative.states)?;
    if let Some((i, _)) = reference
        .epochs_s
        .iter()
        .zip(&relative.epochs_s)
        .enumerate()
        .find(|(_, (a, b))| (*a - *b).abs() > 1e-6)
    {
        warn!("epoch columns differ starting at row {}", i + 1);
    }

    let mut writer = export::writer_for_path(&cli.output)?;
    hill::write_header(writer.as_mut())?;
    for (epoch_s, state_m) in reference.epochs_s.iter().zip(&hill_states) {
        hill::Record {
            epoch_s: *epoch_s,
            state_m: *state_m,
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;

    if let Some(path) = &cli.residuals {
        let azel = azel_residuals(&reference.states, &relative.states)?;
        let mut writer = export::writer_for_path(path)?;
        residuals::write_header(writer.as_mut())?;
        for (epoch_s, azel_rad) in reference.epochs_s.iter().zip(azel) {
            residuals::Record {
                epoch_s: *epoch_s,
                azel_rad,
            }
            .write_to(writer.as_mut())?;
        }
        writer.flush()?;
    }

    Ok(())
}
