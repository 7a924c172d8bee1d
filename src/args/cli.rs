use clap::Parser;

use super::parsers::{parse_positive_u64, parse_positive_usize};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fixed-pool HTTP GET load generator. Spreads a call budget across workers and reports latency and throughput.",
    override_usage = "apiload <URL> [-totalCalls <COUNT>] [-numThreads <COUNT>] [-sleepTime <MS>] [-requestTimeOut <MS>] [-connectTimeOut <MS>] [-reuseConnects] [-keepConnectsOpen]",
    after_help = "Load options also accept the single-dash spelling:
  -totalCalls <COUNT>      Total number of calls across all workers [default: 10000]
  -numThreads <COUNT>      Number of concurrent workers [default: 12]
  -sleepTime <MS>          Sleep between calls within a worker [default: 0]
  -requestTimeOut <MS>     HTTP request timeout [default: 10000]
  -connectTimeOut <MS>     HTTP connect timeout [default: 3x request timeout]
  -reuseConnects           Attempt to reuse connections if the server allows it
  -keepConnectsOpen        Force a new connection with every request (not advised)
  -?                       Print help"
)]
pub struct TesterArgs {
    /// Server URL (must start with http)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Total number of calls across all workers
    #[arg(
        long = "totalCalls",
        help_heading = "Load Options",
        value_name = "COUNT",
        default_value = "10000",
        value_parser = parse_positive_usize
    )]
    pub total_calls: PositiveUsize,

    /// Number of concurrent workers
    #[arg(
        long = "numThreads",
        help_heading = "Load Options",
        value_name = "COUNT",
        default_value = "12",
        value_parser = parse_positive_usize
    )]
    pub num_threads: PositiveUsize,

    /// Sleep time in milliseconds between calls within a worker
    #[arg(
        long = "sleepTime",
        value_name = "MS",
        default_value_t = 0,
        help_heading = "Load Options"
    )]
    pub sleep_time_ms: u64,

    /// HTTP request timeout in milliseconds
    #[arg(
        long = "requestTimeOut",
        help_heading = "Load Options",
        value_name = "MS",
        default_value = "10000",
        value_parser = parse_positive_u64
    )]
    pub request_timeout_ms: PositiveU64,

    /// HTTP connect timeout in milliseconds (defaults to 3x the request timeout)
    #[arg(
        long = "connectTimeOut",
        value_name = "MS",
        value_parser = parse_positive_u64,
        help_heading = "Load Options"
    )]
    pub connect_timeout_ms: Option<PositiveU64>,

    /// Attempt to reuse connections if the server allows it
    #[arg(long = "reuseConnects", help_heading = "Load Options")]
    pub reuse_connects: bool,

    /// Force a new connection with every request (not advised)
    #[arg(long = "keepConnectsOpen", help_heading = "Load Options")]
    pub keep_connects_open: bool,

    /// Path to a .toml or .json config file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<String>,

    /// Enable debug diagnostics
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in diagnostics
    #[arg(long = "no-color")]
    pub no_color: bool,
}
