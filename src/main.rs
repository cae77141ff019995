use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use graph_sample_generator::config::{GeneratorConfig, SccConfig, DEFAULT_MAX_WEIGHT};
use graph_sample_generator::export::MatrixFormat;
use graph_sample_generator::{generate_clustered_graph, generate_scc_graph, storage};

#[derive(Parser, Debug)]
#[clap(
    name = "graph-sample-generator",
    about = "Synthetic weighted graph generator with CSV export for visualization tools"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Output directory for CSV and summary files
    #[clap(long, global = true, default_value = ".")]
    output_dir: PathBuf,

    /// Console rendering of the adjacency matrix
    #[clap(long, global = true, value_enum, default_value = "plaintext")]
    format: MatrixFormat,

    /// Seed for the random number generator (random when omitted)
    #[clap(long, global = true)]
    seed: Option<u64>,

    /// Verbose logging
    #[clap(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clustered sparse weighted graph, guaranteed connected
    Sparse {
        /// Total number of vertices
        vertices: usize,

        /// Number of clusters with different density
        clusters: usize,

        /// Maximum edge weight
        #[clap(long, default_value_t = DEFAULT_MAX_WEIGHT)]
        max_weight: u32,
    },

    /// Directed graph of strongly connected blocks (10 vertices, sizes 3,4,3)
    Scc,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let written = match args.command {
        Command::Sparse {
            vertices,
            clusters,
            max_weight,
        } => {
            let config = GeneratorConfig::new(vertices, clusters, max_weight);
            log::info!(
                "Generating a sparse graph with {} vertices and {} clusters",
                config.vertex_count,
                config.cluster_count
            );

            let result = generate_clustered_graph(&config, &mut rng)?;
            print!("{}", args.format.render(result.graph.rows()));

            storage::save_clustered(&result, &args.output_dir)?
        }
        Command::Scc => {
            let config = SccConfig::default();
            let graph = generate_scc_graph(&config, &mut rng)?;
            print!("{}", args.format.render(graph.rows()));

            storage::save_scc(&graph, &args.output_dir)?
        }
    };

    for path in written {
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case(&["graph-sample-generator", "sparse", "6"])]
    #[case(&["graph-sample-generator", "sparse"])]
    fn sparse_needs_both_positionals(#[case] argv: &[&str]) {
        let err = Cli::try_parse_from(argv).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = Cli::try_parse_from([
            "graph-sample-generator",
            "sparse",
            "6",
            "2",
            "--format",
            "python",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn parses_sparse_arguments() {
        let cli = Cli::try_parse_from([
            "graph-sample-generator",
            "sparse",
            "6",
            "2",
            "--seed",
            "1",
            "--format",
            "csharp",
        ])
        .unwrap();

        assert_eq!(cli.format, MatrixFormat::CSharp);
        assert_eq!(cli.seed, Some(1));
        match cli.command {
            Command::Sparse {
                vertices,
                clusters,
                max_weight,
            } => {
                assert_eq!((vertices, clusters, max_weight), (6, 2, DEFAULT_MAX_WEIGHT));
            }
            Command::Scc => panic!("expected the sparse subcommand"),
        }
    }

    #[test]
    fn scc_takes_no_positionals() {
        let cli = Cli::try_parse_from(["graph-sample-generator", "scc"]).unwrap();
        assert!(matches!(cli.command, Command::Scc));

        let err = Cli::try_parse_from(["graph-sample-generator", "scc", "10"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
