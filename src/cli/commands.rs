use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "formcast", about = "Strategy-driven player rankings and forecast accuracy")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a JSON dataset (competitors, statistics, matches, availability, outcomes)
    Import {
        /// Path to the dataset file
        path: String,
    },
    /// Register a strategy (or a new version of an existing one)
    StrategyAdd {
        /// Strategy name
        name: String,
        /// JSON config with performance, fixture and availability terms
        json: String,
    },
    /// List registered strategies
    Strategies,
    /// Rank players for a gameweek and store the forecasts
    Rank {
        /// Strategy id or name (latest version)
        #[arg(long)]
        strategy: String,
        /// Gameweek to forecast
        #[arg(long)]
        period: u32,
        /// Only rank this position (gkp, def, mid, fwd)
        #[arg(long)]
        position: Option<String>,
        /// Only print the top N per position
        #[arg(long)]
        top: Option<usize>,
    },
    /// Show how a player's score is built
    Explain {
        #[arg(long)]
        strategy: String,
        #[arg(long)]
        period: u32,
        #[arg(long)]
        competitor: u32,
    },
    /// Record a user's pick sheet
    Pick {
        /// JSON with user, period and picks per position
        json: String,
    },
    /// List stored forecasts
    Forecasts {
        #[arg(long)]
        period: Option<u32>,
        #[arg(long)]
        position: Option<String>,
        /// Source as strategy:<id> or user:<name>
        #[arg(long)]
        source: Option<String>,
        #[arg(long, default_value = "100")]
        limit: usize,
    },
    /// Show one stored forecast
    Forecast {
        /// Forecast id
        id: String,
    },
    /// Score forecast accuracy for a gameweek
    Evaluate {
        #[arg(long)]
        period: u32,
    },
    /// Mean accuracy per source for a gameweek
    Leaderboard {
        #[arg(long)]
        period: u32,
    },
}
