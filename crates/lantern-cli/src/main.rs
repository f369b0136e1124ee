//! Lantern CLI - Values reflection and monster progression
//!
//! Thin client for the Lantern API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use tracing_subscriber::EnvFilter;

use api::{AnalyzeRequest, AnalyzeResponse, LanternClient, Progression, ValueFinding};
use config::Config;

#[derive(Parser)]
#[command(name = "lantern")]
#[command(about = "Lantern CLI - Values reflection and monster progression", long_about = None)]
#[command(version)]
struct Cli {
    /// Debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the server URL and API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
        /// Server base URL
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Show current configuration
    Config,

    /// Show the monster, streak and evolution progress
    Status,

    /// Summon a new monster (replaces the current one)
    Summon {
        /// fire, water, wind, earth, light or dark
        element: String,
        /// Value the monster embodies
        primary_value_id: String,
    },

    /// Log a value-driven action (level 1-5)
    Log {
        level: i64,
    },

    /// Grant experience points
    Xp {
        amount: i64,
    },

    /// Unlock a skill
    Skill {
        skill_id: String,
    },

    /// Record a darkside warning
    Warn {
        warning: String,
    },

    /// Evolve when the XP threshold is met
    Evolve,

    /// List the candidate values
    Values,

    /// Analyze envy/rage/loss answers (prompts when no answers are given)
    Analyze {
        /// Envy answer (repeatable)
        #[arg(long)]
        envy: Vec<String>,
        /// Rage answer (repeatable)
        #[arg(long)]
        rage: Vec<String>,
        /// Loss answer (repeatable)
        #[arg(long)]
        loss: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Login { key, url } => cmd_login(key, url).await,
        Commands::Config => cmd_config(),
        Commands::Status => cmd_status().await,
        Commands::Summon {
            element,
            primary_value_id,
        } => cmd_summon(&element, &primary_value_id).await,
        Commands::Log { level } => cmd_log(level).await,
        Commands::Xp { amount } => {
            let progression = client()?.grant_xp(amount).await?;
            println!("{} +{} XP", "✓".green(), amount);
            print_progression(&progression);
            Ok(())
        }
        Commands::Skill { skill_id } => {
            let progression = client()?.unlock_skill(&skill_id).await?;
            println!("{} Skill '{}' unlocked", "✓".green(), skill_id.cyan());
            print_progression(&progression);
            Ok(())
        }
        Commands::Warn { warning } => {
            client()?.add_warning(&warning).await?;
            println!("{} Darkside warning recorded: {}", "🌑".dimmed(), warning);
            Ok(())
        }
        Commands::Evolve => cmd_evolve().await,
        Commands::Values => cmd_values().await,
        Commands::Analyze { envy, rage, loss } => cmd_analyze(envy, rage, loss).await,
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lantern=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn client() -> Result<LanternClient> {
    let config = Config::load()?;
    Ok(LanternClient::new(&config.base_url, config.api_key.as_deref()))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>, url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(url) = url {
        config.set_base_url(&url);
    }

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key (empty if the server has none)")
            .allow_empty_password(true)
            .interact()
            .context("Failed to read API key")?,
    };

    print!("Testing connection to {}... ", config.base_url);

    let client = LanternClient::new(&config.base_url, Some(&api_key));
    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Lantern API at {}", config.base_url);
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} Configuration saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );

    Ok(())
}

async fn cmd_status() -> Result<()> {
    let progression = client()?.progression().await?;
    print_progression(&progression);
    Ok(())
}

async fn cmd_summon(element: &str, primary_value_id: &str) -> Result<()> {
    let progression = client()?.summon(element, primary_value_id).await?;
    println!("{} A {} monster has been summoned", "🔥".bold(), element.cyan());
    print_progression(&progression);
    Ok(())
}

async fn cmd_log(level: i64) -> Result<()> {
    let logged = client()?.log_action(level).await?;

    println!(
        "{} Lv.{} action logged: +{} XP, streak {}",
        "✓".green(),
        logged.level,
        logged.xp_granted.to_string().green(),
        logged.streak.to_string().yellow()
    );
    if logged.progression.monster.is_none() {
        println!("  {}", "No monster yet - XP was not recorded".dimmed());
    }

    Ok(())
}

async fn cmd_evolve() -> Result<()> {
    let progression = client()?.evolve().await?;
    if let Some(monster) = &progression.monster {
        println!(
            "{} Evolved into {}!",
            "✨".bold(),
            monster.current_form.cyan().bold()
        );
    }
    Ok(())
}

async fn cmd_values() -> Result<()> {
    let values = client()?.values().await?;

    println!("{}", "Values:".bold());
    for value in values {
        println!("  {} {}", value.name.cyan(), value.description.dimmed());
    }

    Ok(())
}

async fn cmd_analyze(envy: Vec<String>, rage: Vec<String>, loss: Vec<String>) -> Result<()> {
    let request = if envy.is_empty() && rage.is_empty() && loss.is_empty() {
        AnalyzeRequest {
            envy_responses: prompt_answers("Envy")?,
            rage_responses: prompt_answers("Rage")?,
            loss_responses: prompt_answers("Loss")?,
        }
    } else {
        AnalyzeRequest {
            envy_responses: envy,
            rage_responses: rage,
            loss_responses: loss,
        }
    };

    println!("{}", "Analyzing...".dimmed());

    match client()?.analyze(&request).await? {
        AnalyzeResponse::Analysis(analysis) => {
            println!("{}", "Values:".bold());
            print_finding("1st", &analysis.primary_value);
            print_finding("2nd", &analysis.secondary_value);
            print_finding("3rd", &analysis.tertiary_value);
            println!("\n{}", analysis.analysis);
        }
        AnalyzeResponse::Unparsed { error, raw } => {
            println!("{} {}", "⚠".yellow(), error);
            println!("{}", raw.dimmed());
        }
    }

    Ok(())
}

/// Read answers until an empty line
fn prompt_answers(phase: &str) -> Result<Vec<String>> {
    let mut answers = Vec::new();
    loop {
        let answer: String = Input::new()
            .with_prompt(format!("{} Q{} (empty to finish)", phase, answers.len() + 1))
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        if answer.trim().is_empty() {
            return Ok(answers);
        }
        answers.push(answer);
    }
}

fn print_finding(rank: &str, finding: &ValueFinding) {
    println!(
        "  {} {} [{}%]",
        rank.dimmed(),
        finding.name.cyan().bold(),
        finding.confidence
    );
    println!("     {}", truncate_string(&finding.evidence, 80).dimmed());
}

fn print_progression(progression: &Progression) {
    let Some(monster) = &progression.monster else {
        println!("No monster yet.");
        println!("\n{}", "Summon one with:".dimmed());
        println!("  lantern summon <element> <value>");
        return;
    };

    println!(
        "{} {} ({}) {} XP",
        monster.current_form.cyan().bold(),
        monster.element,
        monster.primary_value_id.dimmed(),
        monster.total_xp.to_string().green()
    );
    println!("  {}", monster.id.dimmed());

    let stats = &monster.big_five;
    println!(
        "  O{} C{} E{} A{} S{}",
        stats.openness,
        stats.conscientiousness,
        stats.extraversion,
        stats.agreeableness,
        stats.emotional_stability
    );

    println!(
        "  Streak: {} (last: {})",
        progression.streak.to_string().yellow(),
        progression.last_action_date.as_deref().unwrap_or("-")
    );

    if let Some(evolution) = &progression.evolution {
        match (&evolution.next_form, evolution.xp_to_next) {
            (Some(next), _) if evolution.eligible => {
                println!("  Next: {} {}", next, "ready to evolve!".green().bold())
            }
            (Some(next), Some(xp)) => println!(
                "  Next: {} at {} XP ({} to go)",
                next,
                evolution.next_threshold.unwrap_or_default(),
                xp
            ),
            _ => println!("  {} form reached", evolution.current_form.bold()),
        }
    }

    if !monster.unlocked_skills.is_empty() {
        println!("  Skills: {}", monster.unlocked_skills.join(", "));
    }
    for warning in &monster.darkside_warnings {
        println!("  {} {}", "⚠".red(), warning);
    }
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}
