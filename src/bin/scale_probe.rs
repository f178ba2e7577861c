//! Scaling probe: run both strategies over growing boards, time them,
//! record RSS deltas and cross-check against a full-table baseline.
//!
//! Run with:
//! `cargo run --release --bin scale_probe -- --format table --verify-limit 256`

use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use gift_path::{Grid, SolverConfig, Strategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Board shapes probed, as (rows, cols).
const SHAPES: &[(usize, usize)] = &[
    (16, 16),
    (64, 64),
    (256, 256),
    (1024, 1024),
    (2048, 2048),
    (1, 65_536),
    (65_536, 1),
    (64, 16_384),
    (16_384, 64),
];

#[derive(Parser)]
#[command(name = "scale_probe")]
#[command(about = "Timing, memory and correctness probe for both strategies")]
struct Options {
    /// Output format for the measurement rows
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest board side verified against the full-table baseline
    #[arg(long, default_value_t = 512)]
    verify_limit: usize,
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

struct Measurement {
    strategy: Strategy,
    size_desc: String,
    value: u64,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    let options = Options::parse();
    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("gift-path scaling probe");
    eprintln!("{}", "=".repeat(72));

    for (idx, &(rows, cols)) in SHAPES.iter().enumerate() {
        eprintln!("[{}/{}] board {rows}x{cols}", idx + 1, SHAPES.len());
        let grid = deterministic_grid(rows, cols)?;
        let baseline =
            (rows.max(cols) <= options.verify_limit).then(|| full_table_value(&grid));

        for strategy in Strategy::ALL {
            let m = measure(&grid, strategy, baseline, &mut sys);
            eprintln!(
                "      {} {:<9} value={}, time={:.3}s, rss_delta={} KiB, status={}",
                m.status.icon(),
                strategy.as_str(),
                m.value,
                m.wall_s,
                m.rss_delta_kib,
                m.status.label()
            );
            measurements.push(m);
        }
    }

    print_summary(&measurements, options.verify_limit);

    match options.format {
        OutputFormat::Csv => write_csv(&measurements),
        OutputFormat::Table => write_table(&measurements),
        OutputFormat::Json => write_json(&measurements),
    }

    if measurements
        .iter()
        .any(|m| m.status == VerificationStatus::Failed)
    {
        std::process::exit(1);
    }
    Ok(())
}

fn measure(
    grid: &Grid,
    strategy: Strategy,
    baseline: Option<u64>,
    sys: &mut System,
) -> Measurement {
    let config = SolverConfig::new().with_strategy(strategy);
    let before = rss_kib(sys);
    let start = Instant::now();
    let value = config.solve(grid);
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    let (status, detail) = match baseline {
        None => (VerificationStatus::NotChecked, None),
        Some(expected) if expected == value => (VerificationStatus::Passed, None),
        Some(expected) => (
            VerificationStatus::Failed,
            Some(format!("expected {expected}, got {value}")),
        ),
    };

    Measurement {
        strategy,
        size_desc: format!("{}x{}", grid.rows(), grid.cols()),
        value,
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        status,
        detail,
    }
}

fn print_summary(measurements: &[Measurement], verify_limit: usize) {
    let count = |status: VerificationStatus| {
        measurements
            .iter()
            .filter(|m| m.status == status)
            .count()
    };
    let passed = count(VerificationStatus::Passed);
    let failed = count(VerificationStatus::Failed);
    let not_checked = count(VerificationStatus::NotChecked);

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Summary");
    eprintln!("  ✓ passed: {passed}");
    eprintln!("  ✗ failed: {failed}");
    eprintln!("  ○ not checked (side > {verify_limit}): {not_checked}");

    for m in measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
    {
        eprintln!(
            "  ✗ {} {}: {}",
            m.strategy,
            m.size_desc,
            m.detail.as_deref().unwrap_or("")
        );
    }

    let mut by_strategy: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_strategy.entry(m.strategy.as_str()).or_default().push(m);
    }
    for (strategy, ms) in &by_strategy {
        let total: f64 = ms.iter().map(|m| m.wall_s).sum();
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {strategy}: total={total:.3}s, max_rss_delta={max_mem} KiB");
    }
    eprintln!("{}\n", "=".repeat(72));
}

fn write_csv(measurements: &[Measurement]) {
    println!("strategy,size,value,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.strategy,
            m.size_desc,
            m.value,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("").replace('"', "'")
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    let size_w = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .max()
        .unwrap_or(0)
        .max("size".len());

    println!(
        "{:<9}  {:<size_w$}  {:>14}  {:>10}  {:>14}  {:>12}",
        "strategy", "size", "value", "wall_s", "rss_delta_kib", "status"
    );
    println!(
        "{:-<9}  {:-<size_w$}  {:-<14}  {:-<10}  {:-<14}  {:-<12}",
        "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<9}  {:<size_w$}  {:>14}  {:>10.3}  {:>14}  {:>12}",
            m.strategy.as_str(),
            m.size_desc,
            m.value,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label()
        );
    }
}

fn write_json(measurements: &[Measurement]) {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match &m.detail {
            Some(d) => format!("\"{}\"", d.replace('"', "'")),
            None => "null".to_string(),
        };
        println!(
            "  {{\"strategy\":\"{}\",\"size\":\"{}\",\"value\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.strategy,
            m.size_desc,
            m.value,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}

/// Reproducible pseudo-random gifts in 0..100.
fn deterministic_grid(rows: usize, cols: usize) -> Result<Grid> {
    Ok(Grid::from_fn(rows, cols, |cell| {
        let h = (cell.row as u64)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add((cell.col as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F));
        ((h >> 33) % 100) as u32
    })?)
}

/// Reference value from a full rows x cols table.
fn full_table_value(grid: &Grid) -> u64 {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut dp = vec![vec![0u64; cols]; rows];
    for (r, cells) in grid.iter_rows().enumerate() {
        for (c, &v) in cells.iter().enumerate() {
            let best = match (r, c) {
                (0, 0) => 0,
                (0, _) => dp[0][c - 1],
                (_, 0) => dp[r - 1][0],
                _ => dp[r - 1][c].max(dp[r][c - 1]),
            };
            dp[r][c] = best + u64::from(v);
        }
    }
    dp[rows - 1][cols - 1]
}
