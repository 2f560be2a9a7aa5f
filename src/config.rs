use std::path::PathBuf;

use clap::Parser;

use crate::matching::admin::DEFAULT_MATCH_LIMIT;
use crate::matching::ranker::{DEFAULT_TOP_PERCENT, DEFAULT_WINDOW_DAYS, RankerSettings};

#[derive(Parser, Debug, Clone)]
#[command(name = "jobmatch", about = "Job-candidate compatibility scoring service")]
pub struct Config {
    /// Database connection URL (required by `serve`)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Run database migrations on startup
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = true, action = clap::ArgAction::Set)]
    pub run_migrations: bool,

    /// Hex SHA-256 digest of the admin bearer token
    #[arg(long, env = "ADMIN_TOKEN_SHA256")]
    pub admin_token_sha256: Option<String>,

    #[command(flatten)]
    pub ranking: RankingArgs,

    /// Memoize scores per (job, candidate, updated_at) pair
    #[arg(long, env = "SCORE_CACHE", default_value_t = false, action = clap::ArgAction::Set)]
    pub score_cache: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RankingArgs {
    /// Only recommend jobs created within this many days
    #[arg(long, env = "RECOMMEND_WINDOW_DAYS", default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window_days: i64,

    /// Share of eligible jobs returned as recommendations, in percent
    #[arg(long, env = "RECOMMEND_TOP_PERCENT", default_value_t = DEFAULT_TOP_PERCENT)]
    pub top_percent: u32,

    /// Number of matches returned by admin lookups
    #[arg(long, env = "ADMIN_MATCH_LIMIT", default_value_t = DEFAULT_MATCH_LIMIT)]
    pub admin_match_limit: usize,
}

impl RankingArgs {
    pub fn ranker_settings(&self) -> RankerSettings {
        RankerSettings {
            window_days: self.window_days,
            top_percent: self.top_percent,
        }
    }
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the HTTP API (default when no subcommand given)
    Serve {
        /// Listen address
        #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
        listen_addr: String,
    },
    /// Score one job against one candidate from JSON files
    Score {
        #[arg(long)]
        job: PathBuf,

        #[arg(long)]
        candidate: PathBuf,
    },
    /// Rank a JSON list of jobs for one candidate
    Recommend {
        #[arg(long)]
        candidate: PathBuf,

        #[arg(long)]
        jobs: PathBuf,
    },
}

impl Config {
    /// Resolve the command, defaulting to Serve if none specified.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_preserve_ranking_constants() {
        let config = Config::try_parse_from([
            "jobmatch",
            "score",
            "--job",
            "j.json",
            "--candidate",
            "c.json",
        ])
        .unwrap();
        let settings = config.ranking.ranker_settings();
        assert_eq!(settings, RankerSettings::default());
        assert_eq!(config.ranking.admin_match_limit, 10);
        assert!(matches!(config.resolved_command(), Command::Score { .. }));
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "jobmatch",
            "--window-days",
            "30",
            "--top-percent",
            "25",
            "--score-cache",
            "true",
            "--run-migrations",
            "false",
            "serve",
            "--listen-addr",
            "127.0.0.1:9000",
        ])
        .unwrap();
        assert_eq!(config.ranking.window_days, 30);
        assert_eq!(config.ranking.top_percent, 25);
        assert!(config.score_cache);
        assert!(!config.run_migrations);
        match config.resolved_command() {
            Command::Serve { listen_addr } => assert_eq!(listen_addr, "127.0.0.1:9000"),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
