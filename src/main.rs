use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formcast::application::PredictionService;
use formcast::application::enrichment::StaticInsight;
use formcast::config::Config;
use formcast::infrastructure::{InMemoryMatchStore, InMemoryPredictionRepository, SimulatedOdds};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Football outcome scoring engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every fixture in the built-in catalog
    Demo,
    /// Score a raw feature vector with the lightweight model
    Custom {
        /// Comma-separated features: home_form,away_form,h2h_ratio,
        /// home_goals_for,home_goals_against,away_goals_for,away_goals_against
        #[arg(short, long)]
        features: String,
    },
    /// Score the catalog and print aggregate statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();

    info!("Formcast {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    let service = PredictionService::new(
        Arc::new(InMemoryMatchStore::new()),
        Arc::new(InMemoryPredictionRepository::new()),
        Arc::new(SimulatedOdds::new()),
        Arc::new(StaticInsight::new()),
        config.clone(),
    );

    if config.seed_samples {
        service.seed_samples().await?;
    }

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(&service).await?,
        Commands::Custom { features } => run_custom(&service, &features)?,
        Commands::Stats => run_stats(&service).await?,
    }

    Ok(())
}

async fn run_demo(service: &PredictionService) -> Result<()> {
    let matches = service.matches().await?;
    if matches.is_empty() {
        info!("No fixtures loaded; set FORMCAST_SEED_SAMPLES=true for the demo catalog.");
        return Ok(());
    }

    for match_info in matches {
        let prediction = service.predict_match(&match_info).await?;
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    }
    Ok(())
}

fn run_custom(service: &PredictionService, raw: &str) -> Result<()> {
    let features = parse_features(raw)?;
    let score = service.score_custom(&features)?;
    println!("{}", serde_json::to_string_pretty(&score)?);
    Ok(())
}

async fn run_stats(service: &PredictionService) -> Result<()> {
    for match_info in service.matches().await? {
        service.predict_match(&match_info).await?;
    }

    let stats = service.statistics().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn parse_features(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid feature value: {}", part.trim()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_features_accepts_comma_list() {
        let parsed = parse_features("0.8, 0.5,2.0,1.0,0.5,0.2,0.6").unwrap();
        assert_eq!(parsed.len(), 7);
        assert!((parsed[0] - 0.8).abs() < 1e-9);
        assert!((parsed[6] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_parse_features_rejects_garbage() {
        assert!(parse_features("0.8,oops,1.0").is_err());
    }
}
