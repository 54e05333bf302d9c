// ABOUTME: Library exports for GitLab CLI modules for testing and external use
// ABOUTME: Makes internal modules available to integration tests and benchmarks

pub mod cli;
pub mod cli_output;
pub mod config;
pub mod constants;
pub mod executor;
pub mod filter;
pub mod hyperlinks;
pub mod identity;
pub mod list;
pub mod output;
pub mod repo;
pub mod types;
