//! campus — rank buildings around a location fix.
//!
//! Reads two saved Overpass responses (building ways and their outline
//! nodes), resolves every building's centroid, footprint and height, and
//! prints them nearest first the way the on-device list shows them.  With no
//! `--ways/--nodes` it uses the bundled sample campus under `data/`.
//!
//! ```text
//! campus --lat 53.3822 --lon -6.6005 --select 24151003 --output out/
//! ```

mod cli;
mod logger;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use nav_catalog::{BuildingCatalog, CatalogConfig};
use nav_core::{BuildingId, GeoPoint, LocationFix, SharedLocation};
use nav_osm::parse_response;
use nav_output::{CsvListingWriter, ListingWriter, distance_label, listing_rows};

use cli::Cli;

// ── Bundled sample ────────────────────────────────────────────────────────────

const SAMPLE_WAYS: &str = include_str!("../data/ways.json");
const SAMPLE_NODES: &str = include_str!("../data/nodes.json");

fn build_catalog(cli: &Cli, gps: &SharedLocation, config: CatalogConfig) -> Result<BuildingCatalog> {
    match (&cli.ways, &cli.nodes) {
        (Some(ways), Some(nodes)) => BuildingCatalog::from_files(ways, nodes, gps, config)
            .with_context(|| format!("building catalog from {} and {}", ways.display(), nodes.display())),
        _ => {
            info!("no --ways/--nodes given, using the bundled sample campus");
            let ways = parse_response(SAMPLE_WAYS)?;
            let nodes = parse_response(SAMPLE_NODES)?;
            info!(
                "{} way elements, {} node elements",
                ways.ways().count(),
                nodes.elements.len()
            );
            Ok(BuildingCatalog::build(&ways, &nodes, gps, config)?)
        }
    }
}

fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = match &cli.config_file {
        Some(path) => CatalogConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CatalogConfig::default(),
    };
    if let Some(unit) = cli.unit {
        config.unit = unit;
    }
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let epoch = Instant::now();
    let cli = Cli::parse();
    logger::init_logger(cli.log_level, epoch)?;

    // 1. Configuration.
    let config = load_config(&cli)?;

    // 2. Location.  A real device would keep a clone of this handle and push
    //    fixes from its sensor callback.
    let gps = SharedLocation::new(LocationFix::new(GeoPoint::new(cli.lat, cli.lon), cli.alt));

    // 3. Resolve and rank.
    let t0 = Instant::now();
    let catalog = build_catalog(&cli, &gps, config)?;
    info!("catalog built in {:.3} ms", t0.elapsed().as_secs_f64() * 1e3);

    // 4. Listing.
    println!("=== campus — {} buildings near {} ===", catalog.len(), GeoPoint::new(cli.lat, cli.lon));
    println!();
    println!("{:<4} {:<12} {:<24} {:<24} {:>9} {:>8}", "#", "Way", "Name", "Distance", "Scale m", "Height");
    println!("{}", "-".repeat(86));
    let rows = listing_rows(&catalog);
    for row in &rows {
        println!(
            "{:<4} {:<12} {:<24} {:<24} {:>9.2} {:>8.1}",
            row.rank,
            row.building_id,
            row.name,
            distance_label(row.distance, row.unit),
            row.object_scale_m,
            row.height_m,
        );
    }
    println!();

    // 5. Optional CSV export.
    if let Some(dir) = &cli.output {
        export(dir, &rows)?;
        info!("listing written to {}", dir.join(nav_output::csv::LISTING_FILE).display());
    }

    // 6. Optional selection hand-off.
    if let Some(raw) = cli.select {
        match catalog.select(BuildingId(raw)) {
            Some(target) => {
                println!("Navigate to {} ({})", target.name, target.building_id);
                println!("  marker position : {}", target.point);
                println!("  marker altitude : {:.1} m above ground", target.altitude_m);
                println!("  marker scale    : {:.2} m", target.scale);
            }
            None => warn!("way {raw} is not in the catalog"),
        }
    }

    Ok(())
}

fn export(dir: &Path, rows: &[nav_output::ListingRow]) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut writer = CsvListingWriter::new(dir)?;
    writer.write_rows(rows)?;
    writer.finish()?;
    Ok(())
}
