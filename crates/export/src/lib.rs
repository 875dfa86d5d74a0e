//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod hill {
    use std::io::{self, Write};

    use astronav_core::units::m_to_km;
    use astronav_core::vector::StateVector;

    pub const HEADER: &str = "epoch_s,r_km,t_km,n_km,vr_km_s,vt_km_s,vn_km_s";

    /// Write the Hill-series CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One Hill-frame relative state, stored in metres and written in kilometres.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub epoch_s: f64,
        pub state_m: StateVector,
    }

    impl Record {
        /// Serialize the record to CSV, matching [`HEADER`].
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            let km = self.state_m.map(m_to_km);
            writeln!(
                writer,
                "{},{:.9},{:.9},{:.9},{:.12},{:.12},{:.12}",
                self.epoch_s, km[0], km[1], km[2], km[3], km[4], km[5],
            )
        }
    }
}

pub mod residuals {
    use std::io::{self, Write};

    pub const HEADER: &str = "epoch_s,az_rad,el_rad";

    /// Write the observation-residual CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Azimuth/elevation residual at one epoch.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub epoch_s: f64,
        pub azel_rad: [f64; 2],
    }

    impl Record {
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.12e},{:.12e}",
                self.epoch_s, self.azel_rad[0], self.azel_rad[1]
            )
        }
    }
}

pub mod state {
    use std::io::{self, Write};
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    /// Converted Cartesian state with the inputs that produced it.
    #[derive(Debug, Clone, Serialize)]
    pub struct StateSummary<'a> {
        pub body: &'a str,
        pub mu_m3_s2: f64,
        pub angle_units: &'a str,
        pub elements: [f64; 6],
        pub position_m: [f64; 3],
        pub velocity_m_s: [f64; 3],
    }

    /// Write the summary as pretty-printed JSON (`-` writes to stdout).
    pub fn write_json(path: &Path, summary: &StateSummary<'_>) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        to_writer_pretty(&mut writer, summary)?;
        writeln!(writer)?;
        writer.flush()
    }
}
