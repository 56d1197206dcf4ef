use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use closest_pair::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest pair of points: solve inputs, generate clouds")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Action {
    /// Read `N x1 y1 ... xN yN` and print the minimum distance (-1 if N < 2)
    Solve {
        /// Input file, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write the result here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 4)]
        leaf_size: usize,
        /// Cross-check against the O(n^2) brute force
        #[arg(long)]
        check: bool,
    },
    /// Write a seeded random cloud in the input format
    Gen {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1_000_000)]
        extent: i32,
        /// Share of points duplicated from earlier ones, in [0, 1]
        #[arg(long, default_value_t = 0.0)]
        duplicates: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Result as rendered by `--format json`.
#[derive(Debug, Serialize)]
struct SolveReport {
    n: usize,
    distance: f64,
    dist_sq: Option<String>,
    pair: Option<[(i32, i32); 2]>,
    tag: Option<String>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            format,
            out,
            leaf_size,
            check,
        } => solve(&input, format, out.as_deref(), leaf_size, check, cmd.tag),
        Action::Gen {
            count,
            seed,
            index,
            extent,
            duplicates,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                extent,
                duplicate_frac: duplicates,
            };
            generate(cfg, ReplayToken { seed, index }, out.as_deref(), cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn read_input(input: &str) -> Result<Vec<Point>> {
    if input == "-" {
        return read_points(io::stdin().lock()).context("reading points from stdin");
    }
    let file = File::open(input).with_context(|| format!("opening {input}"))?;
    read_points(BufReader::new(file)).with_context(|| format!("reading points from {input}"))
}

fn solve(
    input: &str,
    format: Format,
    out: Option<&Path>,
    leaf_size: usize,
    check: bool,
    tag: Option<String>,
) -> Result<()> {
    let points = read_input(input)?;
    let n = points.len();
    let reference = check.then(|| brute_force(&points));

    let cfg = SolverCfg::with_leaf_size(leaf_size);
    let mut solver = ClosestPairSolver::with_cfg(cfg);
    solver.extend(points);
    let pair = solver.closest_pair();
    let distance = pair.map_or(NO_PAIR, |p| p.distance());
    tracing::info!(n, distance, leaf_size = cfg.leaf_size, tag = ?tag, "solve");

    if let Some(reference) = reference {
        let got = pair.map(|p| p.dist_sq);
        let want = reference.map(|p| p.dist_sq);
        if got != want {
            bail!("divide-and-conquer gave {got:?}, brute force gave {want:?}");
        }
        tracing::info!(n, "check_passed");
    }

    let report = SolveReport {
        n,
        distance,
        dist_sq: pair.map(|p| p.dist_sq.to_string()),
        pair: pair.map(|p| [p.a.into(), p.b.into()]),
        tag: tag.clone(),
    };
    let body = render(format, &report)?;
    let params = json!({
        "command": "solve",
        "input": input,
        "leaf_size": cfg.leaf_size,
        "check": check,
        "n": n,
    });
    emit(out, &body, params, tag)
}

fn render(format: Format, report: &SolveReport) -> Result<String> {
    Ok(match format {
        Format::Text => format!("{}\n", report.distance),
        Format::Json => {
            let mut s = serde_json::to_string_pretty(report)?;
            s.push('\n');
            s
        }
    })
}

fn generate(
    cfg: CloudCfg,
    tok: ReplayToken,
    out: Option<&Path>,
    tag: Option<String>,
) -> Result<()> {
    let points = draw_cloud(cfg, tok)?;
    tracing::info!(count = points.len(), seed = tok.seed, index = tok.index, "gen");
    let params = json!({
        "command": "gen",
        "count": cfg.count,
        "extent": cfg.extent,
        "duplicate_frac": cfg.duplicate_frac,
        "seed": tok.seed,
        "index": tok.index,
    });
    emit(out, &format_points(&points), params, tag)
}

/// Print to stdout, or write `out` and its provenance sidecar.
fn emit(
    out: Option<&Path>,
    body: &str,
    params: serde_json::Value,
    tag: Option<String>,
) -> Result<()> {
    let Some(path) = out else {
        print!("{body}");
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    let sidecar = provenance::write_sidecar(path, provenance::Payload::new(params).with_tag(tag))?;
    tracing::info!(out = %path.display(), provenance = %sidecar.display(), "wrote");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let block = provenance::report_block(tag.as_deref());
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn text_rendering_matches_plain_float_output() {
        let mut report = SolveReport {
            n: 2,
            distance: 5.0,
            dist_sq: Some("25".into()),
            pair: Some([(0, 0), (3, 4)]),
            tag: None,
        };
        assert_eq!(render(Format::Text, &report).unwrap(), "5\n");
        report.distance = NO_PAIR;
        assert_eq!(render(Format::Text, &report).unwrap(), "-1\n");
    }

    #[test]
    fn solve_writes_json_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("points.txt");
        std::fs::write(&input, "4\n0 0\n5 5\n1 1\n10 10\n").unwrap();
        let out = dir.path().join("out").join("result.json");
        solve(
            input.to_str().unwrap(),
            Format::Json,
            Some(out.as_path()),
            4,
            true,
            Some("t1".into()),
        )
        .unwrap();

        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["n"], 4);
        assert_eq!(parsed["dist_sq"], "2");
        assert!((parsed["distance"].as_f64().unwrap() - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!(out.with_file_name("result.provenance.json").exists());
    }

    #[test]
    fn gen_output_round_trips_through_solve() {
        let dir = tempdir().unwrap();
        let cloud = dir.path().join("cloud.txt");
        let cfg = CloudCfg {
            count: 200,
            extent: 50,
            duplicate_frac: 0.0,
        };
        generate(cfg, ReplayToken { seed: 3, index: 1 }, Some(cloud.as_path()), None).unwrap();
        let pts = read_input(cloud.to_str().unwrap()).unwrap();
        assert_eq!(pts.len(), 200);

        let out = dir.path().join("d.txt");
        solve(cloud.to_str().unwrap(), Format::Text, Some(out.as_path()), 3, true, None).unwrap();
        let d: f64 = std::fs::read_to_string(&out).unwrap().trim().parse().unwrap();
        let expected = brute_force(&pts).unwrap().distance();
        assert_eq!(d, expected);
    }

    #[test]
    fn malformed_input_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.txt");
        std::fs::write(&input, "2 1 1 oops").unwrap();
        let err = solve(input.to_str().unwrap(), Format::Text, None, 4, false, None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("bad.txt"), "{msg}");
        assert!(msg.contains("oops"), "{msg}");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_input("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn cli_parses_solve_flags() {
        let cmd = Cmd::try_parse_from([
            "cli", "--tag", "x", "solve", "--input", "p.txt", "--format", "json", "--check",
        ])
        .unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("x"));
        match cmd.action {
            Action::Solve {
                input,
                format,
                check,
                leaf_size,
                ..
            } => {
                assert_eq!(input, "p.txt");
                assert_eq!(format, Format::Json);
                assert!(check);
                assert_eq!(leaf_size, 4);
            }
            _ => panic!("expected solve"),
        }
    }
}
