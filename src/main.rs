//! Main entry point for the matchday roster tool
//!
//! Opens the roster from the configured data directory, performs one
//! command, and exits. Every roster change is written back before the
//! command returns.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use matchday::config::skills::DEFAULT_PLAYER_NAME;
use matchday::config::AppConfig;
use matchday::matchday::max_rank_spread;
use matchday::roster::{RosterRepository, SelectionOutcome};
use matchday::season::{parse_stat_input, totals, SEASON_ROUNDS};
use matchday::storage::{FileKeyValueStore, RosterStorage};
use matchday::types::{Player, PlayerSkills, PlayerUpdate, Skill, StatField};
use matchday::utils::partition_repeated_ids;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Matchday - squad roster, season ledger and team balancing
#[derive(Parser)]
#[command(
    name = "matchday",
    version,
    about = "Squad roster, season ledger and match-day team balancing",
    long_about = "Matchday keeps a soccer squad with skill ratings, records points and goals \
                  across a ten-round season, and splits a 15-player match-day selection into \
                  three balanced teams."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Data directory override
    #[arg(long, value_name = "DIR", help = "Override the roster data directory")]
    data_dir: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the squad with ranks
    List,
    /// Add a player
    Add {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        #[command(flatten)]
        skills: SkillArgs,
    },
    /// Edit a player's name or skills
    Edit {
        /// Player ID
        id: String,
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
        /// Photo URL
        #[arg(long)]
        photo: Option<String>,
        #[command(flatten)]
        skills: SkillArgs,
    },
    /// Remove a player from the squad
    Remove {
        /// Player ID
        id: String,
    },
    /// Record points or goals for a round
    Stat {
        /// Player ID
        id: String,
        /// Round number (1-10)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=SEASON_ROUNDS as i64))]
        round: u32,
        /// Which cell to set
        #[arg(value_enum)]
        field: FieldArg,
        /// New value; non-numeric input is recorded as 0
        value: String,
    },
    /// Show the season table with totals
    Table,
    /// Select 15 players and split them into three teams
    Balance {
        /// IDs of the selected players
        ids: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FieldArg {
    Points,
    Goals,
}

impl From<FieldArg> for StatField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::Points => StatField::Points,
            FieldArg::Goals => StatField::Goals,
        }
    }
}

/// Skill values; anything outside 30-99 is clamped
#[derive(clap::Args, Debug, Default)]
struct SkillArgs {
    #[arg(long)]
    pace: Option<i32>,
    #[arg(long)]
    shooting: Option<i32>,
    #[arg(long)]
    passing: Option<i32>,
    #[arg(long)]
    defending: Option<i32>,
    #[arg(long)]
    physical: Option<i32>,
    #[arg(long)]
    technique: Option<i32>,
}

impl SkillArgs {
    fn value(&self, skill: Skill) -> Option<i32> {
        match skill {
            Skill::Pace => self.pace,
            Skill::Shooting => self.shooting,
            Skill::Passing => self.passing,
            Skill::Defending => self.defending,
            Skill::Physical => self.physical,
            Skill::Technique => self.technique,
        }
    }

    fn is_empty(&self) -> bool {
        Skill::ALL.iter().all(|skill| self.value(*skill).is_none())
    }

    /// Overlay the given values on `base` and clamp to the slider range
    fn apply(&self, base: PlayerSkills) -> PlayerSkills {
        let mut skills = base;
        for skill in Skill::ALL {
            if let Some(value) = self.value(skill) {
                skills.set(skill, value);
            }
        }
        skills.clamped()
    }
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(data_dir) = &args.data_dir {
        config.storage.data_dir = data_dir.clone();
    }

    matchday::config::validate_config(&config)?;
    Ok(config)
}

fn print_player(player: &Player) {
    println!("{:>15}  {:>3}  {}", player.id, player.rank(), player.name);
}

fn print_player_details(player: &Player) {
    print_player(player);
    for skill in Skill::ALL {
        println!(
            "{:>22} {:<10} {}",
            skill.label(),
            skill.to_string(),
            player.skills().get(skill)
        );
    }
}

fn print_table(repository: &RosterRepository<FileKeyValueStore>) {
    if repository.is_empty() {
        println!("No players in the squad. Add players to record points.");
        return;
    }

    let header: Vec<String> = (1..=SEASON_ROUNDS).map(|r| format!("R{:<5}", r)).collect();
    println!("{:<20} {} Total", "Player", header.join(" "));
    for player in repository.players() {
        let cells: Vec<String> = (1..=SEASON_ROUNDS)
            .map(|round| {
                let stats = player.league_data.get(&round).copied().unwrap_or_default();
                format!("{:<6}", format!("{}/{}", stats.points, stats.goals))
            })
            .collect();
        let total = totals(&player.league_data);
        println!(
            "{:<20} {} {}pts {}g",
            player.name,
            cells.join(" "),
            total.points,
            total.goals
        );
    }
}

fn run(command: Command, repository: &mut RosterRepository<FileKeyValueStore>) -> Result<()> {
    match command {
        Command::List => {
            println!("{} players in the squad", repository.len());
            for player in repository.players() {
                print_player(player);
            }
        }
        Command::Add { name, skills } => {
            let name = name.unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
            let id = repository.add(name, skills.apply(PlayerSkills::default()))?;
            if let Some(player) = repository.get(&id) {
                print_player_details(player);
            }
        }
        Command::Edit {
            id,
            name,
            photo,
            skills,
        } => {
            let Some(current) = repository.get(&id).map(|p| *p.skills()) else {
                warn!("No player with ID {}", id);
                return Ok(());
            };
            let update = PlayerUpdate {
                name,
                photo,
                skills: (!skills.is_empty()).then(|| skills.apply(current)),
            };
            if update.is_empty() {
                warn!("Nothing to update for player {}", id);
                return Ok(());
            }
            repository.update(&id, update)?;
            if let Some(player) = repository.get(&id) {
                print_player_details(player);
            }
        }
        Command::Remove { id } => {
            repository.remove(&id)?;
            println!("{} players in the squad", repository.len());
        }
        Command::Stat {
            id,
            round,
            field,
            value,
        } => {
            let value = parse_stat_input(&value);
            repository.update_ledger_cell(&id, round, field.into(), value)?;
            if let Some(total) = repository.totals_for(&id) {
                println!("{}: {} points, {} goals", id, total.points, total.goals);
            }
        }
        Command::Table => print_table(repository),
        Command::Balance { ids } => {
            let (ids, repeated) = partition_repeated_ids(&ids);
            for id in repeated {
                warn!("Player {} listed more than once; selecting once", id);
            }

            for id in ids {
                match repository.toggle_selection(id) {
                    SelectionOutcome::Selected => {}
                    SelectionOutcome::Deselected => {
                        warn!("Player {} was already selected; now deselected", id)
                    }
                    SelectionOutcome::SelectionFull => warn!(
                        "Selection is limited to {} players; skipping {}",
                        repository.selection().capacity(),
                        id
                    ),
                    SelectionOutcome::UnknownPlayer => warn!("No player with ID {}", id),
                }
            }

            let selection = repository.selection();
            println!("{}/{} selected", selection.len(), selection.capacity());

            let teams = repository.balance_selection();
            if teams.is_empty() {
                println!(
                    "Select exactly {} players to split into teams",
                    selection.capacity()
                );
                return Ok(());
            }

            for team in &teams {
                println!();
                println!("{} [{}] level {}", team.name, team.color, team.total_rank);
                for player in &team.players {
                    println!("  {:<20} {}", player.name, player.rank());
                }
            }
            println!();
            println!("Largest difference between teams: {}", max_rank_spread(&teams));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} {} using {}",
        config.service.name,
        matchday::VERSION,
        config.storage.data_dir.display()
    );

    let store = FileKeyValueStore::new(&config.storage.data_dir);
    let storage = RosterStorage::new(store, config.storage.roster_key.clone());
    let mut repository = match RosterRepository::open_with_settings(storage, &config.matchday) {
        Ok(repository) => repository,
        Err(e) => {
            error!("Failed to open roster: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args.command, &mut repository) {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
