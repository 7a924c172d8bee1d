use serde::Deserialize;

/// Run settings read from `apiload.toml` / `apiload.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub total_calls: Option<usize>,
    pub num_threads: Option<usize>,
    pub sleep_time: Option<u64>,
    pub request_timeout: Option<u64>,
    pub connect_timeout: Option<u64>,
    pub reuse_connects: Option<bool>,
    pub keep_connects_open: Option<bool>,
}
