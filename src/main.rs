use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use threatmark::portfolio;
use threatmark_core::process::{self, Operation};
use threatmark_core::Kind;

#[derive(Parser)]
#[command(name = "tmk")]
#[command(about = "STRIDE threat analysis for the Portfolio App model")]
struct Cli {
    /// Verbose engine logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the data flow diagram in Graphviz dot format
    Dfd,
    /// Print the dataflow sequence diagram in PlantUML format
    Seq,
    /// Print the full threat model report as Markdown
    Report,
    /// Print the model and its findings as JSON
    Json,
    /// List every threat in the built-in catalog
    List,
    /// Show the attribute sheet for an element kind
    Describe {
        /// One of: actor, server, datastore, dataflow
        kind: String,
    },
    /// Dump the model and its findings into a SQLite database
    Sqldump {
        /// Path of the database file to create
        path: PathBuf,
    },
}

/// Diagram and report output goes to stdout; logs stay on stderr.
fn init_tracing(debug: bool) {
    let default = if debug {
        "threatmark=debug,threatmark_core=debug"
    } else {
        "threatmark=info,threatmark_core=info"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let operation = match cli.command {
        None => Operation::Analyze,
        Some(Commands::Dfd) => Operation::Dfd,
        Some(Commands::Seq) => Operation::Sequence,
        Some(Commands::Report) => Operation::Report,
        Some(Commands::Json) => Operation::Json,
        Some(Commands::List) => Operation::List,
        Some(Commands::Describe { kind }) => {
            let kind = Kind::from_str(&kind).ok_or_else(|| {
                anyhow!("unknown element kind \"{kind}\" (expected actor, server, datastore or dataflow)")
            })?;
            Operation::Describe(kind)
        }
        Some(Commands::Sqldump { path }) => Operation::SqlDump(path),
    };

    let model = portfolio::model()?;
    tracing::debug!("declared model \"{}\"", model.name());

    let output = process::run(&model, operation)?;
    println!("{output}");

    Ok(())
}
