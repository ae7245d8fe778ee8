//! Map marker clustering tool
//!
//! Reads points of interest from a CSV file, clusters them for a given zoom
//! level, and writes one row per map marker.

use anyhow::{Context, bail};
use clap::Parser;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use rust_mapcluster::cluster::{Cluster, LocatedEntity, ZoomPolicy, cluster, zoom_level};


/// Members column separator
const MEMBER_SEPARATOR: &str = ";";

#[derive(Parser)]
#[command(name = "rust_mapcluster")]
#[command(about = "Zoom-adaptive map marker clustering tool", long_about = None)]
struct Args {
    /// Input CSV file with id,name,latitude,longitude columns
    #[arg(short, long, default_value = "points.csv")]
    input: PathBuf,

    /// Output CSV file with one row per cluster (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Viewport zoom level, log2(360 / latitude span); overrides --span
    #[arg(short, long, allow_negative_numbers = true)]
    zoom: Option<f64>,

    /// Viewport latitude span in degrees
    #[arg(short, long, default_value_t = 0.1)]
    span: f64,

    /// Clustering radius in meters; overrides the zoom policy
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Zoom policy as min_zoom=meters pairs
    #[arg(
        short,
        long,
        env = "MAPCLUSTER_POLICY",
        default_value = "0=2000,10=1000,12=500,14=200"
    )]
    policy: ZoomPolicy,

    /// Append the zoom-to-fit region of each cluster
    #[arg(short, long)]
    fit: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let entities = read_entities(&args.input)
        .with_context(|| format!("reading entities from {}", args.input.display()))?;

    if entities.is_empty() {
        bail!("no entities found in {}", args.input.display());
    }

    let zoom = args.zoom.unwrap_or_else(|| zoom_level(args.span));
    let threshold = resolve_threshold(&args.policy, zoom, args.threshold)?;

    tracing::info!(
        entities = entities.len(),
        zoom,
        threshold,
        "clustering {:?}",
        args.input
    );

    let clusters = cluster(&entities, threshold);

    tracing::info!(
        clusters = clusters.len(),
        multi = clusters.iter().filter(|c| !c.is_single()).count(),
        "clustering done"
    );

    let rows = cluster_rows(&clusters, args.fit);

    match args.output {
        None => write_rows(io::stdout().lock(), &rows).context("writing to stdout")?,
        Some(output_file) => {
            let file = File::create(&output_file)
                .with_context(|| format!("creating {}", output_file.display()))?;
            write_rows(file, &rows)
                .with_context(|| format!("writing {}", output_file.display()))?;
            tracing::info!("clusters written to {:?}", output_file);
        }
    }

    Ok(())
}

/// `--debug` forces debug level; otherwise `RUST_LOG`, falling back to warn
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Picks the explicit threshold if given, else the policy's for `zoom`
fn resolve_threshold(
    policy: &ZoomPolicy,
    zoom: f64,
    explicit: Option<f64>,
) -> anyhow::Result<f64> {
    match explicit {
        Some(t) if !t.is_finite() || t < 0.0 => {
            bail!("threshold must be a non-negative number of meters, got {t}")
        }
        Some(t) => Ok(t),
        None => Ok(policy.threshold_meters(zoom)),
    }
}

/// Reads entities from a CSV file
///
/// Expected format: `id,name,latitude,longitude` (header row is optional).
/// Rows that are short or carry invalid coordinates are skipped with a warning.
fn read_entities(filename: &Path) -> anyhow::Result<Vec<LocatedEntity>> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut entities = Vec::new();

    for (line, result) in reader.records().enumerate() {
        let record = result?;

        // Header row: latitude column does not parse
        if line == 0 && record.get(2).is_none_or(|f| f.parse::<f64>().is_err()) {
            continue;
        }

        if record.len() < 4 {
            tracing::warn!(line = line + 1, fields = record.len(), "skipping short row");
            continue;
        }

        let lat = record[2].parse::<f64>();
        let lon = record[3].parse::<f64>();
        let (Ok(lat), Ok(lon)) = (lat, lon) else {
            tracing::warn!(line = line + 1, "skipping row with unparsable coordinates");
            continue;
        };

        match LocatedEntity::try_new(&record[0], &record[1], lat, lon) {
            Ok(entity) => entities.push(entity),
            Err(e) => tracing::warn!(line = line + 1, error = %e, "skipping row"),
        }
    }

    Ok(entities)
}

/// Builds output rows, header first
fn cluster_rows(clusters: &[Cluster], with_fit: bool) -> Vec<Vec<String>> {
    let mut header = vec!["cluster", "size", "latitude", "longitude", "members"];
    if with_fit {
        header.extend([
            "region_latitude",
            "region_longitude",
            "latitude_delta",
            "longitude_delta",
        ]);
    }

    let mut rows = vec![header.into_iter().map(String::from).collect()];

    for c in clusters {
        let centroid = c.centroid();
        let members: Vec<&str> = c.members().iter().map(|e| e.id.as_str()).collect();

        let mut row = vec![
            c.id.to_string(),
            c.len().to_string(),
            format!("{:.6}", centroid.latitude),
            format!("{:.6}", centroid.longitude),
            members.join(MEMBER_SEPARATOR),
        ];

        if with_fit {
            let region = c.region();
            row.extend([
                format!("{:.6}", region.center.latitude),
                format!("{:.6}", region.center.longitude),
                format!("{:.6}", region.latitude_delta),
                format!("{:.6}", region.longitude_delta),
            ]);
        }

        rows.push(row);
    }

    rows
}

/// Writes rows as CSV
fn write_rows<W: Write>(out: W, rows: &[Vec<String>]) -> anyhow::Result<()> {
    let mut writer = WriterBuilder::new().from_writer(out);

    for row in rows {
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(())
}
