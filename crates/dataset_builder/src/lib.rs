//! Dataset builder for the tactics board
//!
//! Fetches Premier League club and squad data from the football-data.org
//! v4 API and writes the CSV datasets consumed by `board_core`. Without an
//! API key, or when the API cannot be reached, it falls back to a bundled
//! club list and synthetic squads so the board always has data to load.

pub mod fallback;
pub mod fetch;

use std::fmt;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use board_core::{read_clubs, ClubRecord, Role};

pub const API_BASE_URL: &str = "https://api.football-data.org/v4";
pub const PREMIER_LEAGUE_ID: u32 = 2021;
pub const API_KEY_ENV: &str = "FOOTBALL_DATA_API_KEY";

const KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub competition_id: u32,
    /// Pause between successive squad requests.
    pub request_delay: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
    /// How long to wait out an HTTP 429 before the next attempt.
    pub rate_limit_backoff: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: API_BASE_URL.to_string(),
            competition_id: PREMIER_LEAGUE_ID,
            request_delay: Duration::from_millis(1000),
            max_retries: 3,
            retry_backoff: Duration::from_secs(2),
            rate_limit_backoff: Duration::from_secs(60),
        }
    }
}

impl FetchConfig {
    /// Read the API key from the environment. The sample placeholder
    /// value counts as no key.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != KEY_PLACEHOLDER);
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Override the key, e.g. from a CLI flag. `None` keeps the current one.
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key {
            let key = key.trim().to_string();
            self.api_key = if key.is_empty() || key == KEY_PLACEHOLDER {
                None
            } else {
                Some(key)
            };
        }
        self
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }
}

// ============================================================================
// API response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct TeamsResponse {
    #[serde(default)]
    teams: Vec<ApiTeam>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiTeam {
    id: u64,
    name: String,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    tla: Option<String>,
    #[serde(default)]
    crest: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    founded: Option<u32>,
    #[serde(default)]
    club_colors: Option<String>,
    #[serde(default)]
    venue: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SquadResponse {
    #[serde(default)]
    squad: Vec<ApiSquadMember>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSquadMember {
    id: u64,
    name: String,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    shirt_number: Option<u32>,
    #[serde(default)]
    date_of_birth: Option<String>,
    #[serde(default)]
    nationality: Option<String>,
}

// ============================================================================
// CSV row shapes
// ============================================================================

/// One club row; headers match what `board_core::read_clubs` expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRow {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub tla: String,
    pub crest: String,
    pub address: String,
    pub website: String,
    pub founded: String,
    pub club_colors: String,
    pub venue: String,
}

/// One player row; headers match what `board_core::read_player_pool`
/// expects. `position` and `role` carry the mapped role code, the raw API
/// label is preserved in `originalPosition`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    pub id: String,
    pub name: String,
    pub position: String,
    pub shirt_number: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub team_id: String,
    pub team_name: String,
    pub priority: i32,
    pub role: String,
    pub original_position: String,
}

/// Where the written rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Api,
    Fallback,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Api => write!(f, "live API data"),
            DataSource::Fallback => write!(f, "bundled fallback data"),
        }
    }
}

#[derive(Debug)]
pub struct BuildSummary {
    pub rows: usize,
    pub source: DataSource,
}

// ============================================================================
// Teams dataset
// ============================================================================

/// Build the club CSV, from the API when a key is configured and from the
/// bundled list otherwise or on failure.
pub fn build_teams_csv(config: &FetchConfig, out_path: &Path) -> Result<BuildSummary> {
    let (rows, source) = if config.has_key() {
        match fetch_teams(config) {
            Ok(rows) if !rows.is_empty() => (rows, DataSource::Api),
            Ok(_) => {
                eprintln!("⚠️  API returned no teams, using the bundled club list");
                (fallback::fallback_clubs(), DataSource::Fallback)
            }
            Err(err) => {
                eprintln!("⚠️  Team fetch failed ({err:#}), using the bundled club list");
                (fallback::fallback_clubs(), DataSource::Fallback)
            }
        }
    } else {
        (fallback::fallback_clubs(), DataSource::Fallback)
    };

    write_teams_csv(&rows, out_path)?;
    Ok(BuildSummary {
        rows: rows.len(),
        source,
    })
}

fn fetch_teams(config: &FetchConfig) -> Result<Vec<TeamRow>> {
    let key = config.api_key.as_deref().context("no API key configured")?;
    let client = fetch::build_client()?;
    let url = format!(
        "{}/competitions/{}/teams",
        config.base_url, config.competition_id
    );
    let response: TeamsResponse = fetch::fetch_json(&client, &url, key, config)?;
    Ok(response.teams.into_iter().map(team_row).collect())
}

fn team_row(team: ApiTeam) -> TeamRow {
    TeamRow {
        id: team.id.to_string(),
        name: team.name,
        short_name: team.short_name.unwrap_or_default(),
        tla: team.tla.unwrap_or_default(),
        crest: team.crest.unwrap_or_default(),
        address: team.address.unwrap_or_default(),
        website: team.website.unwrap_or_default(),
        founded: team.founded.map(|year| year.to_string()).unwrap_or_default(),
        club_colors: team.club_colors.unwrap_or_default(),
        venue: team.venue.unwrap_or_default(),
    }
}

pub fn write_teams_csv(rows: &[TeamRow], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

// ============================================================================
// Players dataset
// ============================================================================

/// Build the player CSV for every club in the teams CSV. Each club's
/// squad is fetched individually; a club that cannot be fetched gets a
/// synthetic squad so the board never meets an empty pool.
pub fn build_players_csv(
    config: &FetchConfig,
    teams_csv: &Path,
    out_path: &Path,
) -> Result<BuildSummary> {
    let clubs = read_clubs(teams_csv)
        .with_context(|| format!("Failed to read club dataset: {}", teams_csv.display()))?;
    let today = Utc::now().date_naive();

    let mut rows: Vec<PlayerRow> = Vec::new();
    let mut fetched_any = false;

    match &config.api_key {
        Some(key) => {
            let client = fetch::build_client()?;
            for (i, club) in clubs.iter().enumerate() {
                let url = format!("{}/teams/{}", config.base_url, club.id);
                match fetch::fetch_json::<SquadResponse>(&client, &url, key, config) {
                    Ok(response) if !response.squad.is_empty() => {
                        rows.extend(squad_rows(&response.squad, club, today));
                        fetched_any = true;
                    }
                    Ok(_) => {
                        eprintln!("⚠️  {}: empty squad, synthesizing one", club.name);
                        rows.extend(fallback::synthetic_squad(&club.id, &club.name, today));
                    }
                    Err(err) => {
                        eprintln!("⚠️  {}: squad fetch failed ({err:#}), synthesizing one", club.name);
                        rows.extend(fallback::synthetic_squad(&club.id, &club.name, today));
                    }
                }
                if i + 1 < clubs.len() {
                    thread::sleep(config.request_delay);
                }
            }
        }
        None => {
            for club in &clubs {
                rows.extend(fallback::synthetic_squad(&club.id, &club.name, today));
            }
        }
    }

    write_players_csv(&rows, out_path)?;
    Ok(BuildSummary {
        rows: rows.len(),
        source: if fetched_any {
            DataSource::Api
        } else {
            DataSource::Fallback
        },
    })
}

fn squad_rows(squad: &[ApiSquadMember], club: &ClubRecord, today: NaiveDate) -> Vec<PlayerRow> {
    squad
        .iter()
        .map(|member| {
            let original = member.position.clone().unwrap_or_default();
            let role = Role::from_label(&original);
            PlayerRow {
                id: member.id.to_string(),
                name: member.name.clone(),
                position: role.code().to_string(),
                shirt_number: member
                    .shirt_number
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                date_of_birth: member.date_of_birth.clone().unwrap_or_default(),
                nationality: member.nationality.clone().unwrap_or_default(),
                team_id: club.id.clone(),
                team_name: club.name.clone(),
                priority: derive_priority(role, member.shirt_number, member.date_of_birth.as_deref(), today),
                role: role.code().to_string(),
                original_position: original,
            }
        })
        .collect()
}

pub fn write_players_csv(rows: &[PlayerRow], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

// ============================================================================
// Priority derivation
// ============================================================================

/// Heuristic starter likelihood, lower is better. A shirt number typical
/// for the role counts most, a single-digit squad number and prime age
/// help, veterans drop back. Records without usable data stay at the
/// neutral base value.
pub fn derive_priority(
    role: Role,
    shirt_number: Option<u32>,
    date_of_birth: Option<&str>,
    today: NaiveDate,
) -> i32 {
    let mut priority = 100;
    if let Some(shirt) = shirt_number {
        if typical_shirt(role, shirt) {
            priority -= 50;
        }
        if (1..=11).contains(&shirt) {
            priority -= 20;
        }
    }
    if let Some(age) = age_on(date_of_birth, today) {
        if (25..=30).contains(&age) {
            priority -= 15;
        } else if age > 35 {
            priority += 25;
        }
    }
    priority
}

fn typical_shirt(role: Role, shirt: u32) -> bool {
    match role {
        Role::GK => shirt == 1,
        Role::DF => (2..=6).contains(&shirt),
        Role::MF => matches!(shirt, 4 | 6 | 8 | 10),
        Role::FW => matches!(shirt, 7 | 9 | 10 | 11),
    }
}

fn age_on(date_of_birth: Option<&str>, today: NaiveDate) -> Option<i32> {
    let dob = NaiveDate::parse_from_str(date_of_birth?.trim(), "%Y-%m-%d").ok()?;
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    Some(age)
}
