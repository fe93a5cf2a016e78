use clap::Parser;

use crate::config::{DEFAULT_ENDPOINT_COUNT, DEFAULT_SLOTS_PER_ENDPOINT};

#[derive(Parser)]
#[command(name = "slot-generator")]
#[command(about = "Generate the shuffled binary object of available slot indexes")]
pub struct Cli {
    #[arg(
        long,
        help = "Number of endpoints",
        default_value_t = i64::from(DEFAULT_ENDPOINT_COUNT),
        allow_negative_numbers = true
    )]
    pub endpoints: i64,
    #[arg(
        long,
        help = "Number of slots per endpoint",
        default_value_t = i64::from(DEFAULT_SLOTS_PER_ENDPOINT),
        allow_negative_numbers = true
    )]
    pub slots_per_endpoint: i64,
    #[arg(long, help = "Seed for a reproducible shuffle (default: OS entropy)")]
    pub seed: Option<u64>,
    #[arg(
        long,
        help = "Prefix each index with its byte length (zero becomes 0x00)",
        default_value_t = false
    )]
    pub length_prefixed: bool,
    #[arg(
        long,
        help = "Write lowercase hex text instead of raw bytes",
        default_value_t = false
    )]
    pub hex: bool,
    #[arg(long, help = "Verbose output", default_value_t = false)]
    pub verbose: bool,
}
