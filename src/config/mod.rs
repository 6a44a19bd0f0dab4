use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ad-normalizer")]
#[command(about = "Normalizes ad-platform performance exports into a canonical record shape")]
pub struct CliConfig {
    /// Input JSON file containing an array of raw records
    pub input: String,

    /// Output JSON file for the normalized records
    pub output: String,

    /// Channel that produced the input: meta, facebook, google, tiktok,
    /// yandex, yandex_direct, noop
    pub channel: String,

    #[arg(
        long,
        help = "Compute derived Yandex metrics (CPC, CPM, CTR, ROAS, ROI) from base counters"
    )]
    pub yandex_derived_metrics: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
