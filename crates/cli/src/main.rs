//! Mindset Streams CLI
//!
//! A command-line interface for building and analysing mindset stream graphs.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mindstream_core::{attach_sentiment, load_associations, Association, ValenceLexicon};
use mindstream_graph::{closeness_centrality, ConceptGraph};
use mindstream_stream::{to_dot, MindsetStream, StreamBuilder, StreamConfig, SvgRenderer};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Mindset Streams - Visualise how subjects connect two concepts
#[derive(Parser)]
#[command(name = "mindstream")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every record of an association file is valid
    Validate {
        /// Path to association JSON file
        associations: PathBuf,
    },

    /// Build the mindset stream between two concepts
    Stream {
        /// Path to association JSON file
        associations: PathBuf,

        /// Path to sentiment valence JSON file
        #[arg(long)]
        valences: PathBuf,

        /// Source concept
        #[arg(short, long)]
        source: String,

        /// Target concept
        #[arg(short, long)]
        target: String,

        /// Write the stream figure as SVG
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Write the stream graph as Graphviz DOT
        #[arg(long)]
        dot: Option<PathBuf>,

        /// Write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the path statistics as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List every shortest path between two concepts
    Paths {
        /// Path to association JSON file
        associations: PathBuf,

        /// Source concept
        #[arg(short, long)]
        source: String,

        /// Target concept
        #[arg(short, long)]
        target: String,
    },

    /// Show association graph statistics
    Stats {
        /// Path to association JSON file
        associations: PathBuf,

        /// Path to sentiment valence JSON file
        #[arg(long)]
        valences: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the concepts with the highest closeness centrality
    Centrality {
        /// Path to association JSON file
        associations: PathBuf,

        /// Maximum results
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

/// Stream settings; unset values keep the library defaults
#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// Node size per unit of closeness
    #[arg(long, env = "MINDSTREAM_NODE_SIZE_SCALE")]
    node_size_scale: Option<f64>,

    /// Label font size per unit of closeness
    #[arg(long, env = "MINDSTREAM_LABEL_SIZE_SCALE")]
    label_size_scale: Option<f64>,

    /// Decimal places kept for path betweenness
    #[arg(long, env = "MINDSTREAM_PRECISION")]
    precision: Option<u32>,

    /// Figure width and height in pixels
    #[arg(long, env = "MINDSTREAM_CANVAS_SIZE")]
    canvas_size: Option<u32>,
}

impl ConfigArgs {
    fn to_config(&self) -> StreamConfig {
        let mut config = StreamConfig::default();
        if let Some(scale) = self.node_size_scale {
            config = config.with_node_size_scale(scale);
        }
        if let Some(scale) = self.label_size_scale {
            config = config.with_label_size_scale(scale);
        }
        if let Some(precision) = self.precision {
            config = config.with_precision(precision);
        }
        if let Some(size) = self.canvas_size {
            config = config.with_canvas_size(size);
        }
        config
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env if present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Validate { associations } => {
            cmd_validate(&associations)?;
        }
        Commands::Stream {
            associations,
            valences,
            source,
            target,
            svg,
            dot,
            json,
            csv,
            config,
        } => {
            let outputs = Outputs { svg, dot, json, csv };
            cmd_stream(&associations, &valences, &source, &target, config.to_config(), outputs)?;
        }
        Commands::Paths {
            associations,
            source,
            target,
        } => {
            cmd_paths(&associations, &source, &target)?;
        }
        Commands::Stats {
            associations,
            valences,
            json,
        } => {
            cmd_stats(&associations, valences.as_deref(), json)?;
        }
        Commands::Centrality {
            associations,
            limit,
        } => {
            cmd_centrality(&associations, limit)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_target(false)
        .with_writer(std::io::stderr);

    if std::env::var_os("RUST_LOG").is_some() {
        let subscriber = builder.with_env_filter(EnvFilter::from_default_env()).finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        let subscriber = builder.with_max_level(level).finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}

/// Load associations, attaching sentiment when a lexicon is given
fn load(associations: &Path, valences: Option<&Path>) -> Result<Vec<Association>> {
    let data = load_associations(associations)
        .with_context(|| format!("Failed to import associations from {}", associations.display()))?;

    match valences {
        Some(path) => {
            let lexicon = ValenceLexicon::load(path)
                .with_context(|| format!("Failed to import valences from {}", path.display()))?;
            Ok(attach_sentiment(data, &lexicon))
        }
        None => Ok(data),
    }
}

fn write_output(path: &Path, contents: &[u8], what: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {} to {}", what, path.display()))?;
    println!("✓ Wrote {} to {}", what, path.display());
    Ok(())
}

fn cmd_validate(associations: &Path) -> Result<()> {
    let data = load(associations, None)?;
    println!(
        "✓ {} valid association records in {}",
        data.len(),
        associations.display()
    );
    Ok(())
}

struct Outputs {
    svg: Option<PathBuf>,
    dot: Option<PathBuf>,
    json: Option<PathBuf>,
    csv: Option<PathBuf>,
}

fn cmd_stream(
    associations: &Path,
    valences: &Path,
    source: &str,
    target: &str,
    config: StreamConfig,
    outputs: Outputs,
) -> Result<()> {
    let data = load(associations, Some(valences))?;
    info!("Building stream from {} to {}", source, target);

    let stream = StreamBuilder::new(config)
        .build(&data, source, target)
        .with_context(|| format!("Failed to build stream from {} to {}", source, target))?;

    print_stream(&stream);

    if let Some(path) = outputs.svg {
        let svg = SvgRenderer::from_config(&config).render(&stream)?;
        write_output(&path, svg.as_bytes(), "SVG figure")?;
    }
    if let Some(path) = outputs.dot {
        write_output(&path, to_dot(&stream)?.as_bytes(), "DOT graph")?;
    }
    if let Some(path) = outputs.json {
        let mut buf = Vec::new();
        stream.report().write_json(&mut buf)?;
        write_output(&path, &buf, "JSON report")?;
    }
    if let Some(path) = outputs.csv {
        let mut buf = Vec::new();
        stream.stats.write_csv(&mut buf)?;
        write_output(&path, &buf, "CSV statistics")?;
    }

    Ok(())
}

fn print_stream(stream: &MindsetStream) {
    println!("Mindset stream: {} -> {}", stream.source, stream.target);
    println!("  • Concepts: {}", stream.subgraph.node_count());
    println!("  • Connections: {}", stream.subgraph.edge_count());
    println!("  • Paths: {}", stream.stats.len());
    println!();
    println!("{}", stream.stats.to_table());
    println!();
    println!("Type betweenness centrality:");
    for summary in stream.stats.type_summary() {
        println!(
            "  • {}: {} path{} ({:.1}%), total {}, mean {}",
            summary.path_type,
            summary.paths,
            if summary.paths == 1 { "" } else { "s" },
            summary.frequency * 100.0,
            summary.total_betweenness,
            summary.mean_betweenness,
        );
    }
    println!();
}

fn cmd_paths(associations: &Path, source: &str, target: &str) -> Result<()> {
    let graph = ConceptGraph::from_associations(&load(associations, None)?);
    let source = Association::canonicalize(source);
    let target = Association::canonicalize(target);

    let paths = graph.all_shortest_paths(&source, &target)?;
    let hops = paths.first().map(|p| p.len().saturating_sub(1)).unwrap_or(0);

    println!(
        "{} shortest path{} from {} to {} ({} hop{}):",
        paths.len(),
        if paths.len() == 1 { "" } else { "s" },
        source,
        target,
        hops,
        if hops == 1 { "" } else { "s" },
    );
    for (i, path) in paths.iter().enumerate() {
        println!("{}. {}", i + 1, path.join(" -> "));
    }
    Ok(())
}

fn cmd_stats(associations: &Path, valences: Option<&Path>, json: bool) -> Result<()> {
    let graph = ConceptGraph::from_associations(&load(associations, valences)?);
    let summary = graph.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Graph Statistics:");
    println!("  • Concepts: {}", summary.node_count);
    println!("  • Connections: {}", summary.edge_count);
    println!("  • Self-loops: {}", summary.self_loops);
    println!("  • Components: {}", summary.components);
    if valences.is_some() {
        println!("  • Positive: {}", summary.positive);
        println!("  • Neutral: {}", summary.neutral);
        println!("  • Negative: {}", summary.negative);
        println!("  • Unlabelled: {}", summary.unlabelled);
    }
    Ok(())
}

fn cmd_centrality(associations: &Path, limit: usize) -> Result<()> {
    let graph = ConceptGraph::from_associations(&load(associations, None)?);
    let mut ranked: Vec<(String, f64)> = closeness_centrality(&graph).into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);

    if ranked.is_empty() {
        println!("No concepts found.");
        return Ok(());
    }

    println!("Closeness centrality (top {}):", ranked.len());
    for (i, (label, score)) in ranked.iter().enumerate() {
        println!("{:>3}. {:<24} {:.4}", i + 1, label, score);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_args_override_defaults() {
        let args = ConfigArgs {
            precision: Some(2),
            canvas_size: Some(400),
            ..Default::default()
        };
        let config = args.to_config();

        assert_eq!(config.precision, 2);
        assert_eq!(config.canvas_size, 400);
        assert_eq!(config.node_size_scale, StreamConfig::default().node_size_scale);
    }
}
