use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use propexpr::{
    Context,
    config::load_properties,
    get_result,
    interpreter::evaluator::observer::TracingObserver,
    session::run_session,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// propexpr evaluates expressions against the values of a properties file.
///
/// Without `--expression` it reads one expression per line from standard
/// input until `EXIT`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The properties file providing the root values.
    #[arg(short, long, default_value = "values.properties")]
    properties: PathBuf,

    /// Evaluates a single expression, prints the result and exits.
    #[arg(short, long)]
    expression: Option<String>,

    /// Logs every property read and function call to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let root = load_properties(&args.properties).unwrap_or_else(|e| {
                                                    eprintln!("{e}");
                                                    std::process::exit(1);
                                                });
    let context = Context::with_defaults(root.into()).with_observer(TracingObserver);

    if let Some(expression) = args.expression {
        return match get_result(&expression, &context) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("ERROR: {e} ({})", e.kind());
                ExitCode::FAILURE
            },
        };
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run_session(&context, stdin.lock(), &mut stdout) {
        Ok(summary) => {
            tracing::info!(evaluated = summary.evaluated,
                           failed = summary.failed,
                           "session finished");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
