use clap::Parser;
use tracing_subscriber::EnvFilter;

use genzrun_core::{Pipeline, ProcessRunner};

mod args;

use args::Cli;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pipeline = Pipeline::new(ProcessRunner::from_env());
    match pipeline.run(&cli.into_config()) {
        Ok(mean) => println!("{mean}"),
        Err(e) => {
            eprintln!("fatal: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
