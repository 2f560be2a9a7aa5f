use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobmatch::commands;
use jobmatch::config::{Command, Config};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jobmatch=info,tower_http=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::parse();

    match config.resolved_command() {
        Command::Serve { listen_addr } => commands::serve(&config, &listen_addr).await,
        Command::Score { job, candidate } => commands::score(&job, &candidate).await,
        Command::Recommend { candidate, jobs } => {
            commands::recommend(&config, &candidate, &jobs).await
        }
    }
}
