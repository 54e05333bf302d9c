// ABOUTME: Main entry point for the GitLab CLI application
// ABOUTME: Wires argument parsing, configuration, the API client, and the list pipeline together

use anyhow::{Result, anyhow};
use chrono::Utc;
use clap::Parser;
use gitlab_cli::cli::Cli;
use gitlab_cli::cli_output::CliOutput;
use gitlab_cli::config::Config;
use gitlab_cli::constants::env;
use gitlab_cli::filter::FilterSpec;
use gitlab_cli::output::RenderOptions;
use gitlab_cli::{hyperlinks, list, repo};
use gitlab_sdk::{GitLabClient, GitLabError};
use std::io::IsTerminal;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let output = CliOutput::new();
    if let Err(err) = run(cli, &output).await {
        output.error(&format!("{:#}", err));
        if let Some(help) = err.downcast_ref::<GitLabError>().and_then(|e| e.help_text()) {
            output.hint(help);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &CliOutput) -> Result<()> {
    let repo_flag = cli.repo.clone();
    let spec = FilterSpec::build(cli.command.into_raw(), || {
        repo::resolve_project(repo_flag.as_deref())
    })?;
    log::debug!("Listing {}s in {} (page {})", spec.variant, spec.scope, spec.page);

    let config = Config::load()?.with_env_overrides();
    log::debug!("Config: {:?}", config);

    let token = config.token.clone().ok_or_else(|| {
        anyhow!(
            "No GitLab token found. Set {} or add `token` to gitlab-cli.toml",
            env::GITLAB_TOKEN
        )
    })?;

    let client = GitLabClient::builder()
        .auth_token(token)
        .base_url(config.base_url())
        .build()?;

    let stdout_is_terminal = std::io::stdout().is_terminal();
    let forced = hyperlinks::forced_signal_from_env();
    let options = RenderOptions {
        hyperlinks: hyperlinks::decide(
            forced.as_deref(),
            config.display_hyperlinks,
            stdout_is_terminal,
        ),
        use_color: !cli.no_color
            && std::env::var_os(env::NO_COLOR).is_none()
            && std::env::var("TERM").unwrap_or_default() != "dumb"
            && stdout_is_terminal,
        pretty_json: stdout_is_terminal,
        now: Utc::now(),
    };

    let listing = list::run(&client, &spec, &options).await?;
    print!("{}", listing.text);

    if stdout_is_terminal {
        if let Some(hint) = listing.next_page_hint() {
            output.info(&hint);
        }
    }

    Ok(())
}
