/// Connect timeout multiplier applied to the request timeout when no
/// explicit connect timeout is configured.
pub(crate) const CONNECT_TIMEOUT_FACTOR: u64 = 3;

/// Config filenames picked up from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["apiload.toml", "apiload.json"];

/// Single-dash long flags accepted for compatibility with the classic
/// `-totalCalls 500` spelling.
pub(crate) const SINGLE_DASH_FLAGS: [&str; 7] = [
    "-totalCalls",
    "-numThreads",
    "-sleepTime",
    "-requestTimeOut",
    "-connectTimeOut",
    "-reuseConnects",
    "-keepConnectsOpen",
];
