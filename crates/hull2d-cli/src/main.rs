use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hull2d::sample::demo_clusters;
use hull2d::{BoundedStack, FlaggedIndex, Hull2, HullCfg, HullError, Point};
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

use report::{code_rev, parse_points, HullReport, Report};

#[derive(Parser)]
#[command(name = "hull2d-cli")]
#[command(about = "Build two convex hulls and test them for intersection")]
struct Cmd {
    /// Upper bound on points per hull
    #[arg(long, default_value_t = hull2d::hull::MAX_POINTS_PER_HULL)]
    max_points: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Two Gaussian clusters around (-0.5,-0.5) and (0.5,0.5)
    Demo {
        /// RNG seed; defaults to the current UNIX time
        #[arg(long)]
        seed: Option<u64>,
        /// Points per cluster
        #[arg(long, default_value_t = 200)]
        count: usize,
        /// Standard deviation of both clusters on both axes
        #[arg(long, default_value_t = 0.15)]
        sigma: f32,
    },
    /// Literal point lists, e.g. --a "0,0 2,0 2,2 0,2"
    Check {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = HullCfg {
        max_points: cmd.max_points,
    };
    let report = match cmd.action {
        Action::Demo { seed, count, sigma } => demo(cfg, seed, count, sigma)?,
        Action::Check { a, b } => check(cfg, &a, &b)?,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn demo(cfg: HullCfg, seed: Option<u64>, count: usize, sigma: f32) -> Result<Report> {
    let seed = match seed {
        Some(s) => s,
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("system clock before UNIX epoch")?
            .as_secs(),
    };
    tracing::info!(seed, count, sigma, "demo");
    let (a, b) = demo_clusters(seed, count, sigma);
    let mut report = run_pair(cfg, &a, &b)?;
    report.seed = Some(seed);
    Ok(report)
}

fn check(cfg: HullCfg, a: &str, b: &str) -> Result<Report> {
    let a = parse_points(a).context("parsing --a")?;
    let b = parse_points(b).context("parsing --b")?;
    tracing::info!(a = a.len(), b = b.len(), "check");
    run_pair(cfg, &a, &b)
}

/// Fill both hulls, compute them with one shared scratch stack, and test for
/// intersection only when both are clean.
fn run_pair(cfg: HullCfg, a: &[Point], b: &[Point]) -> Result<Report> {
    let mut scratch: BoundedStack<FlaggedIndex> =
        BoundedStack::with_capacity(cfg.max_points).context("allocating scratch stack")?;
    let mut ha = Hull2::with_cfg(cfg);
    let mut hb = Hull2::with_cfg(cfg);
    let ra = fill_and_compute(&mut ha, a, &mut scratch);
    let rb = fill_and_compute(&mut hb, b, &mut scratch);

    let intersect = (!ha.is_dirty() && !hb.is_dirty()).then(|| ha.check_intersect(&hb));
    tracing::info!(
        boundary_a = ha.boundary().len(),
        boundary_b = hb.boundary().len(),
        intersect = ?intersect,
        "hulls"
    );
    Ok(Report {
        code_rev: code_rev(),
        seed: None,
        hulls: vec![HullReport::new(&ha, ra), HullReport::new(&hb, rb)],
        intersect,
    })
}

fn fill_and_compute(
    hull: &mut Hull2,
    points: &[Point],
    scratch: &mut BoundedStack<FlaggedIndex>,
) -> Result<(), HullError> {
    hull.add_points(points)?;
    let r = hull.compute_hull(scratch);
    if let Err(e) = &r {
        tracing::warn!(points = points.len(), error = %e, "hull not computed");
    }
    r
}
