use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use nav_core::DistanceUnit;

/// Rank campus buildings by distance from a location fix.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Latitude of the device, in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    /// Longitude of the device, in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    /// Altitude of the device, in metres.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub alt: f64,
    /// Saved Overpass response with the building ways.
    #[arg(long, value_name = "FILE", requires = "nodes")]
    pub ways: Option<PathBuf>,
    /// Saved Overpass response with the outline nodes.
    #[arg(long, value_name = "FILE", requires = "ways")]
    pub nodes: Option<PathBuf>,
    /// Catalog configuration JSON.
    #[arg(short, long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Distance unit [mi, km, m]; overrides the config file.
    #[arg(short, long)]
    pub unit: Option<DistanceUnit>,
    /// Write buildings.csv into this folder.
    #[arg(short, long, value_name = "FOLDER")]
    pub output: Option<PathBuf>,
    /// OSM way id of the building to navigate to.
    #[arg(short, long, value_name = "WAY_ID")]
    pub select: Option<i64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::Cli;

    #[test]
    fn config_flag() {
        let cli = Cli::try_parse_from(["campus", "--lat", "53.38", "--lon", "-6.60", "--config", "cfg.json"]).unwrap();
        assert_eq!(cli.config_file.as_deref(), Some(Path::new("cfg.json")));

        let cli = Cli::try_parse_from(["campus", "--lat", "0", "--lon", "0", "-c", "other.json"]).unwrap();
        assert_eq!(cli.config_file.as_deref(), Some(Path::new("other.json")));
    }

    #[test]
    fn ways_require_nodes() {
        assert!(Cli::try_parse_from(["campus", "--lat", "0", "--lon", "0", "--ways", "w.json"]).is_err());
    }
}
