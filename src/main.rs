// main.rs - CLI entry point

use shpack::cli::{parse_args, usage, validate_options, Command, Config};
use shpack::emit::write_amalgamation;
use shpack::PackError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    if let Err(e) = run_main() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

/// Diagnostics go to stderr; stdout is reserved for the packed document
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_main() -> Result<(), PackError> {
    let tokens: Vec<String> = std::env::args().skip(1).collect();

    let mut args = match parse_args(&tokens)? {
        Command::Help => {
            println!("{}", usage());
            return Ok(());
        }
        Command::GenerateConfig => {
            print!("{}", Config::generate_sample());
            return Ok(());
        }
        Command::Pack(args) => args,
    };

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let options = validate_options(args)?;
    write_amalgamation(&options)
}
