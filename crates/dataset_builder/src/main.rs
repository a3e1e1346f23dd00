//! CLI entry point for the dataset builder

#[cfg(feature = "cli")]
mod cli {
    use std::path::PathBuf;

    use anyhow::Result;
    use clap::{Parser, Subcommand};

    use dataset_builder::{build_players_csv, build_teams_csv, FetchConfig};

    #[derive(Parser)]
    #[command(
        name = "dataset_builder",
        about = "Build the club and player CSV datasets for the tactics board",
        version
    )]
    struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Fetch the Premier League club list and write the teams CSV
        Teams {
            /// Output CSV path
            #[arg(short, long, default_value = "data/premier_league_teams.csv")]
            out: PathBuf,
            /// football-data.org API key; defaults to $FOOTBALL_DATA_API_KEY
            #[arg(long)]
            api_key: Option<String>,
        },
        /// Fetch every club's squad and write the players CSV
        Players {
            /// Teams CSV produced by the `teams` command
            #[arg(short, long, default_value = "data/premier_league_teams.csv")]
            teams: PathBuf,
            /// Output CSV path
            #[arg(short, long, default_value = "data/premier_league_players.csv")]
            out: PathBuf,
            /// football-data.org API key; defaults to $FOOTBALL_DATA_API_KEY
            #[arg(long)]
            api_key: Option<String>,
        },
    }

    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        match cli.command {
            Commands::Teams { out, api_key } => {
                let config = FetchConfig::from_env().with_api_key(api_key);
                if !config.has_key() {
                    println!("⚠️  No API key configured, writing the bundled club list");
                }
                println!("🔨 Building teams dataset -> {}", out.display());
                let summary = build_teams_csv(&config, &out)?;
                println!("✅ Wrote {} clubs ({})", summary.rows, summary.source);
            }
            Commands::Players { teams, out, api_key } => {
                let config = FetchConfig::from_env().with_api_key(api_key);
                if !config.has_key() {
                    println!("⚠️  No API key configured, synthesizing every squad");
                }
                println!(
                    "🔨 Building players dataset from {} -> {}",
                    teams.display(),
                    out.display()
                );
                let summary = build_players_csv(&config, &teams, &out)?;
                println!("✅ Wrote {} player records ({})", summary.rows, summary.source);
            }
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("dataset_builder was built without the `cli` feature");
    std::process::exit(1);
}
