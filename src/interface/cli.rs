use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::graph_text_adapter::{read_graph_file, write_report_file, SccReportDto};
use crate::infrastructure::scc_tarjan::TarjanSccDetector;
use crate::usecase::analyze::analyze_graph;
use crate::usecase::event::AppEvent;
use crate::usecase::validate::validate_graph;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::GraphAnalyze {
            input,
            output,
            separator,
            emit_events,
            dry_run,
        } => {
            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let graph = read_graph_file(&input, &separator)
                .await
                .with_context(|| format!("reading input adjacency list: {input}"))?;

            let scc = TarjanSccDetector;
            let (scc_res, stats) = analyze_graph(&graph, &scc, Some(tx)).await?;

            if !dry_run {
                let report = SccReportDto::from_result(&graph, &scc_res);
                write_report_file(&output, &report)
                    .await
                    .with_context(|| format!("writing output report JSON: {output}"))?;
            }

            if let Some(handle) = printer {
                handle.await.ok();
            }

            eprintln!(
                "summary: nodes={} edges={} components={} cyclic={} singletons={} largest={}",
                stats.nodes,
                stats.edges,
                stats.components,
                stats.cyclic_components,
                stats.singleton_components,
                stats.largest_component
            );

            Ok(())
        }

        Cli::GraphValidate { input, separator } => {
            let graph = read_graph_file(&input, &separator)
                .await
                .with_context(|| format!("reading input adjacency list: {input}"))?;

            validate_graph(&graph).with_context(|| format!("validating graph: {input}"))?;

            eprintln!("ok: invariants validated");
            Ok(())
        }
    }
}

#[derive(Debug)]
enum Cli {
    GraphAnalyze {
        input: String,
        output: String,
        separator: String,
        emit_events: bool,
        dry_run: bool,
    },
    GraphValidate {
        input: String,
        separator: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> graph analyze --in/--input <graph.txt> --out/--output <report.json> [--separator <sep>] [--emit-events] [--dry-run]
        // <bin> graph validate --in/--input <graph.txt> [--separator <sep>]
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "graph" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "analyze" => Self::parse_analyze(args),
            "validate" => Self::parse_validate(args),
            "-h" | "--help" => Err(anyhow!(usage())),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_analyze(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut separator: Option<String> = None;
        let mut emit_events = false;
        let mut dry_run = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--separator" => {
                    i += 1;
                    separator = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "--dry-run" => {
                    dry_run = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;
        let output = if dry_run {
            // dry-run mode doesn't require an output path
            output.unwrap_or_default()
        } else {
            output.ok_or_else(|| anyhow!(format!("missing --out/--output\n\n{}", usage())))?
        };

        Ok(Cli::GraphAnalyze {
            input,
            output,
            separator: separator.unwrap_or_else(|| " ".to_string()),
            emit_events,
            dry_run,
        })
    }

    fn parse_validate(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut separator: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--separator" => {
                    i += 1;
                    separator = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::GraphValidate {
            input,
            separator: separator.unwrap_or_else(|| " ".to_string()),
        })
    }
}

fn usage() -> &'static str {
    "Usage:\n  graph analyze --in/--input <graph.txt> --out/--output <report.json> [--separator <sep>] [--emit-events] [--dry-run]\n  graph validate --in/--input <graph.txt> [--separator <sep>]\n\nInput:\n  Line k of the input file lists vertex k's outgoing neighbors, split on the separator (default: a single space). A blank line is a vertex with no neighbors.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr."
}
