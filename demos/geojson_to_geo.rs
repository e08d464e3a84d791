//! Builds a gmsh `.geo` outline from one or more GeoJSON files of boundary lines.
//!
//! ```text
//! cargo run --example geojson_to_geo -- a.geojson b.geojson -o outline.geo
//! cargo run --example geojson_to_geo -- coast.geojson -o outline.geo --tolerance 1e4 --resolution 5e3
//! cargo run --example geojson_to_geo -- coast.geojson --normalized coast-normalized.geojson
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use geomesh::geometry::FeatureCollection;
use geomesh::operations::{ExtractSegments, Normalize, NormalizeParams};
use geomesh::pslg::GeoWriter;

#[derive(Debug, Default)]
struct Args {
    inputs: Vec<String>,
    output: Option<String>,
    normalized: Option<String>,
    tolerance: Option<f64>,
    resolution: Option<f64>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-o" | "--output" => args.output = Some(it.next().ok_or("missing value for --output")?),
            "--normalized" => {
                args.normalized = Some(it.next().ok_or("missing value for --normalized")?);
            }
            "--tolerance" => {
                args.tolerance = Some(it.next().ok_or("missing value for --tolerance")?.parse()?);
            }
            "--resolution" => {
                args.resolution = Some(it.next().ok_or("missing value for --resolution")?.parse()?);
            }
            _ => args.inputs.push(arg),
        }
    }
    if args.inputs.is_empty() {
        return Err("usage: geojson_to_geo <input.geojson>... [-o out.geo] [--normalized out.geojson] [--tolerance t] [--resolution r]".into());
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for geomesh.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geomesh=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geomesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = parse_args()?;

    let mut collections = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let reader = BufReader::new(File::open(path)?);
        let collection: FeatureCollection = serde_json::from_reader(reader)?;
        collections.push(collection);
    }

    let segments = ExtractSegments::from_collections(&collections).execute()?;
    let params = NormalizeParams {
        tolerance: args.tolerance,
    };
    let normalized = Normalize::new(params).execute_segments(&segments)?;

    if let Some(path) = &args.normalized {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &normalized.to_feature_collection())?;
    }

    let pslg = normalized.to_pslg()?;
    let geo = args.resolution.map_or_else(GeoWriter::default, GeoWriter::new);
    match &args.output {
        Some(path) => geo.write(&pslg, &mut BufWriter::new(File::create(path)?))?,
        None => geo.write(&pslg, &mut std::io::stdout().lock())?,
    }
    Ok(())
}
