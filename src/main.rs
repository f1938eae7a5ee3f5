use clap::Parser;
use classic_algos::demo::{Topic, run_all};
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Runs demonstrations of classic data structures and algorithms
#[derive(Parser, Debug)]
#[command(name = "classic-algos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Topics to demonstrate, in the order given (default: all)
    #[arg(value_enum)]
    topics: Vec<Topic>,

    /// Log to stderr; repeat for more detail (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_all(&cli.topics, &mut out) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // RUST_LOG directives refine the level chosen on the command line.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match level {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_topics_and_verbosity() {
        let cli = Cli::try_parse_from(["classic-algos", "graph", "number-theory", "-dd"]).unwrap();
        assert_eq!(cli.topics, vec![Topic::Graph, Topic::NumberTheory]);
        assert_eq!(cli.debug, 2);

        let cli = Cli::try_parse_from(["classic-algos"]).unwrap();
        assert!(cli.topics.is_empty());
        assert_eq!(cli.debug, 0);

        assert!(Cli::try_parse_from(["classic-algos", "quantum"]).is_err());
    }
}
