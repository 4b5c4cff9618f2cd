//! K-Means Binary
//!
//! Clusters points read from a file (or stdin) and prints the centroids.
//!
//! Input holds one point per line, coordinates separated by commas or
//! whitespace. Blank lines and lines starting with `#` are skipped.

use anyhow::Context;
use clap::Parser;
use kmeans::*;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kmeans", about = "Cluster points with k-means")]
struct Args {
    /// File with one point per line; stdin when omitted
    input: Option<PathBuf>,
    /// Number of clusters
    #[arg(short = 'k', long, default_value_t = 2)]
    clusters: usize,
    /// Distance between points
    #[arg(short, long, value_enum, default_value_t = Distance::Euclidean)]
    metric: Distance,
    /// Maximum centroid movement considered converged
    #[arg(short, long, default_value_t = KMEANS_TOLERANCE)]
    tolerance: Energy,
    /// Stop after this many iterations even if not converged
    #[arg(long, default_value_t = KMEANS_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Seed for reproducible initialization
    #[arg(long)]
    seed: Option<u64>,
    /// What to do with a centroid that attracts no points
    #[arg(long, value_enum, default_value_t = Empty::Retain)]
    empty: Empty,
    /// Rescale every dimension into [0, 1] before clustering
    #[arg(short, long)]
    normalize: bool,
    /// Print a JSON summary instead of one centroid per line
    #[arg(long)]
    json: bool,
    /// Log every iteration
    #[arg(short, long)]
    verbose: bool,
}

#[derive(serde::Serialize)]
struct Summary {
    iterations: usize,
    converged: bool,
    variance: Energy,
    centroids: Vec<Cluster>,
}

#[derive(serde::Serialize)]
struct Cluster {
    name: String,
    center: Point,
    points: usize,
    variance: Energy,
}

fn read(input: Option<&std::path::Path>) -> anyhow::Result<String> {
    let mut text = String::new();
    match input {
        Some(path) => {
            text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
        }
    }
    Ok(text)
}

fn parse(text: &str) -> anyhow::Result<Vec<Point>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| Point::try_from(line).with_context(|| format!("line {}", n)))
        .collect()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose);
    let points = parse(&read(args.input.as_deref())?)?;
    log::info!("{:<32}{:<32}", "loaded points", points.len());
    let points = match args.normalize {
        true => normalize(&points)?,
        false => points,
    };
    let mut km = KMeans::with_metric(args.clusters, args.metric)
        .with_tolerance(args.tolerance)
        .with_max_iterations(args.max_iterations)
        .with_empty(args.empty);
    if let Some(seed) = args.seed {
        km = km.with_seed(seed);
    }
    let training = km.train(&points)?;
    match args.json {
        true => {
            let summary = Summary {
                iterations: training.iterations,
                converged: training.converged,
                variance: km.variance()?,
                centroids: km
                    .centroids()
                    .iter()
                    .map(|c| {
                        Ok(Cluster {
                            name: c.name().to_string(),
                            center: c.point().clone(),
                            points: c.number_of_points(),
                            variance: c.variance(km.metric())?,
                        })
                    })
                    .collect::<Result<Vec<_>, ClusterError>>()?,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        false => {
            for centroid in km.centroids() {
                println!("{}", centroid);
            }
        }
    }
    Ok(())
}
