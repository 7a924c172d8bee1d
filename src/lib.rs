//! Core library for the `apiload` CLI.
//!
//! A run splits a fixed number of GET calls across a fixed pool of workers.
//! Each worker owns one HTTP client session, issues its share of calls in
//! sequence, and records every latency into its own window of a shared
//! results buffer. The coordinator joins all workers and summarizes the run.
mod adapters;
pub mod args;
pub mod config;
pub mod domain;
pub mod entry;
pub mod error;
pub mod http;
pub mod metrics;
mod system;
