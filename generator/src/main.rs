use clap::Parser;
use slot_generator::cli::Cli;
use slot_generator::output::write_artifact;
use slot_generator::{Encoding, GeneratorError, SlotConfig, SlotIndexGenerator};
use std::io::{self, BufWriter};
use tracing::{error, info};

fn run(cli: &Cli) -> Result<(), GeneratorError> {
    let config = SlotConfig::new(cli.endpoints, cli.slots_per_endpoint)?;

    let generator = match cli.seed {
        Some(seed) => SlotIndexGenerator::seeded(config, seed),
        None => SlotIndexGenerator::from_entropy(config),
    };
    let encoding = if cli.length_prefixed {
        Encoding::LengthPrefixed
    } else {
        Encoding::Minimal
    };
    let bin_obj = generator.with_encoding(encoding).generate()?;

    info!(
        endpoints = config.endpoint_count,
        slots_per_endpoint = config.slots_per_endpoint,
        bytes = bin_obj.len(),
        "Generated binary object"
    );

    // Logs go to stderr, stdout carries only the artifact
    //
    let mut writer = BufWriter::new(io::stdout().lock());
    write_artifact(&mut writer, &bin_obj, cli.hex)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("Generation failed: {e}");
        std::process::exit(1);
    }
}
