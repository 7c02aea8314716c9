use clap::Parser;
use formcast::application::import::Dataset;
use formcast::application::picks::PickSheet;
use formcast::cli::commands::{Cli, Commands};
use formcast::domain::ports::forecast_repository::ForecastFilter;
use formcast::domain::values::forecast_source::ForecastSource;
use formcast::domain::values::position::Position;
use formcast::domain::values::strategy_config::StrategyConfig;
use formcast::Formcast;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formcast=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = std::env::var("FORMCAST_DB").unwrap_or_else(|_| "./formcast.db".into());

    let fc = match Formcast::new(&db_path) {
        Ok(fc) => fc,
        Err(e) => {
            eprintln!("Error initializing formcast: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(fc, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(fc: Formcast, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Import { path } => {
            let json = std::fs::read_to_string(&path)?;
            let dataset: Dataset = serde_json::from_str(&json)?;
            let summary = fc.import(&dataset)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::StrategyAdd { name, json } => {
            let config = StrategyConfig::from_json(&json)?;
            let strategy = fc.strategy_add(&name, config)?;
            println!("{}", serde_json::to_string_pretty(&strategy)?);
        }
        Commands::Strategies => {
            for s in fc.strategies()? {
                println!("{}  {} v{}", s.id, s.name, s.version);
            }
        }
        Commands::Rank {
            strategy,
            period,
            position,
            top,
        } => {
            let position = parse_position(position)?;
            let mut report = fc.rank(&strategy, period, position)?;
            if let Some(n) = top {
                for table in &mut report.positions {
                    table.rows.truncate(n);
                }
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Explain {
            strategy,
            period,
            competitor,
        } => {
            let breakdown = fc.explain(&strategy, period, competitor)?;
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        Commands::Pick { json } => {
            let sheet: PickSheet = serde_json::from_str(&json)?;
            let forecasts = fc.record_picks(&sheet)?;
            println!("{}", serde_json::to_string_pretty(&forecasts)?);
        }
        Commands::Forecasts {
            period,
            position,
            source,
            limit,
        } => {
            let source = source
                .map(|s| s.parse::<ForecastSource>())
                .transpose()?;
            let filter = ForecastFilter {
                period,
                position: parse_position(position)?,
                source,
                limit: Some(limit),
            };
            let forecasts = fc.forecasts(&filter)?;
            println!("{}", serde_json::to_string_pretty(&forecasts)?);
        }
        Commands::Forecast { id } => {
            let forecast = fc.forecast(&id)?;
            println!("{}", serde_json::to_string_pretty(&forecast)?);
        }
        Commands::Evaluate { period } => {
            let report = fc.evaluate(period)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Leaderboard { period } => {
            let board = fc.leaderboard(period)?;
            for entry in &board {
                println!(
                    "{:<40} {:>6.3}  ({} forecasts)",
                    entry.source.to_string(),
                    entry.mean_accuracy,
                    entry.evaluated
                );
            }
        }
    }
    Ok(())
}

fn parse_position(s: Option<String>) -> Result<Option<Position>, String> {
    s.map(|p| p.parse::<Position>()).transpose()
}
