use ad_normalizer::utils::logger;
use ad_normalizer::{
    apply_transformations, Batch, CliConfig, RegistryOptions, Result, TransformerRegistry,
};
use clap::Parser;
use std::fs;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ad-normalizer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Transformation failed: {}", e);
        eprintln!("❌ Transformation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<()> {
    tracing::info!(
        "📊 Transforming {} for channel: {}",
        config.input,
        config.channel
    );

    let raw = fs::read_to_string(&config.input)?;
    let records: Batch = serde_json::from_str(&raw)?;

    let registry = TransformerRegistry::with_defaults(RegistryOptions {
        yandex_derived_metrics: config.yandex_derived_metrics,
    });
    let transformed = apply_transformations(&registry, records, &config.channel);

    let mut output = serde_json::to_string_pretty(&transformed)?;
    output.push('\n');
    fs::write(&config.output, output)?;

    tracing::info!("✅ Transformed {} records", transformed.len());
    tracing::info!("💾 Saved to: {}", config.output);
    println!("✅ Transformed {} records", transformed.len());
    println!("💾 Saved to: {}", config.output);

    Ok(())
}
