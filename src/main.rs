//! Signup Board CLI
//!
//! Terminal client for the activities API:
//! - List activities and participants
//! - Render the board as HTML
//! - Sign up for an activity
//! - Unregister a participant

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use signup_board::config::generate_default_config;
use signup_board::logging::init_logging;
use signup_board::{
    Action, ActivityCard, BoardSession, Config, Dispatched, ListState, ParticipantRef, ReqwestApi,
    StatusKind, TerminalPrompter, UnregisterResult,
};

#[derive(Parser)]
#[command(name = "signup-board")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse activities, sign up and unregister participants")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List activities with availability and participants
    List,

    /// Print the activity list and dropdown as HTML markup
    Render,

    /// Sign up for an activity
    Signup {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Unregister a participant from an activity
    Unregister {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Signup Board v{}", env!("CARGO_PKG_VERSION"));

    let assume_yes = matches!(cli.command, Commands::Unregister { yes: true, .. });
    let api = ReqwestApi::new(&config.api)?;
    let mut session = BoardSession::new(api, TerminalPrompter::new(assume_yes));

    match cli.command {
        Commands::List => {
            session.refresh().await;
            let view = session.board().view();

            match &view.list {
                ListState::Ready(cards) => {
                    if cli.format == "json" {
                        println!("{}", serde_json::to_string_pretty(&cards_json(cards))?);
                    } else {
                        print_table(cards);
                    }
                }
                ListState::Loading | ListState::Failed => {
                    eprintln!("{}", signup_board::view::LOAD_FAILED_TEXT);
                    std::process::exit(1);
                }
            }
        }

        Commands::Render => {
            session.refresh().await;
            let view = session.board().view();

            println!("<div id=\"activities-list\">");
            print!("{}", view.to_html());
            println!("</div>");
            println!("<select id=\"activity\" name=\"activity\" required>");
            print!("{}", view.options_html());
            println!("</select>");
        }

        Commands::Signup { activity, email } => {
            let form = session.board_mut().form_mut();
            form.activity = activity;
            form.email = email;

            session.dispatch(Action::Submit).await;

            match session.board().status().current() {
                Some(message) if message.kind == StatusKind::Success => {
                    println!("{}", message.text);
                }
                Some(message) => {
                    eprintln!("{}", message.text);
                    std::process::exit(1);
                }
                None => {}
            }
        }

        Commands::Unregister {
            activity, email, ..
        } => {
            let target = ParticipantRef::new(activity, email, 0);

            match session.dispatch(Action::Unregister(target.clone())).await {
                Dispatched::Unregister(UnregisterResult::Removed) => {
                    println!("Unregistered {} from {}", target.email, target.activity);
                }
                Dispatched::Unregister(UnregisterResult::Declined) => {
                    println!("Cancelled");
                }
                // The alert has already been printed
                Dispatched::Unregister(UnregisterResult::Alerted(_)) | Dispatched::Signup(_) => {
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn cards_json(cards: &[ActivityCard]) -> serde_json::Value {
    cards
        .iter()
        .map(|card| {
            serde_json::json!({
                "name": card.name,
                "description": card.description,
                "schedule": card.schedule,
                "spots_left": card.spots_left,
                "participants": card.participants.iter().map(|p| &p.email).collect::<Vec<_>>(),
            })
        })
        .collect()
}

fn print_table(cards: &[ActivityCard]) {
    if cards.is_empty() {
        println!("No activities available.");
        return;
    }

    println!("{:<24} {:<36} {}", "Activity", "Schedule", "Availability");
    println!("{}", "-".repeat(76));

    for card in cards {
        println!(
            "{:<24} {:<36} {}",
            card.name,
            card.schedule,
            card.availability_text()
        );

        if card.participants.is_empty() {
            println!("    {}", signup_board::view::NO_PARTICIPANTS_TEXT);
        }
        for row in &card.participants {
            println!("    - {}", row.email);
        }
    }
}
