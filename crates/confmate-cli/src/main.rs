//! confmate - companion for the Gendering AI Conference 2025
//!
//! This is the entry point for the `confmate` binary. It wires together:
//! - The built-in session catalog
//! - Store initialization under the data directory
//! - The registration and schedule managers
//! - Terminal rendering of the agenda, profile, and personal schedule

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use confmate_catalog::{Catalog, DayId};
use confmate_core::{ProfileDraft, RegistrationManager, ScheduleManager};
use confmate_store::{SqliteStore, Store};
use confmate_util::{CompanionError, SessionId, default_data_dir};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

/// confmate - browse the conference agenda and manage your personal schedule
#[derive(Parser, Debug)]
#[command(name = "confmate")]
#[command(about = "Companion for the Gendering AI Conference 2025", long_about = None)]
struct Args {
    /// Data directory override (or set CONFMATE_DATA_DIR env var)
    #[arg(short, long, env = "CONFMATE_DATA_DIR", default_value_os_t = default_data_dir())]
    data_dir: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show conference information
    Info,

    /// Browse the conference agenda
    Agenda {
        /// Day to show (day1, day2, day3); all days when omitted
        #[arg(short, long)]
        day: Option<DayId>,
    },

    /// Register for the conference, or update an existing registration
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        organization: String,

        /// Professional bio (at least 50 characters)
        #[arg(long)]
        bio: String,
    },

    /// Show your stored registration
    Profile,

    /// Add a session to your personal schedule
    Add {
        /// Session ID as shown in the agenda, e.g. "keynote-day1"
        session_id: String,
    },

    /// Remove a session from your personal schedule
    Remove {
        session_id: String,
    },

    /// Clear your entire personal schedule
    Clear,

    /// Show your personal schedule with the next-event countdown
    Schedule,

    /// Print a shareable text version of your schedule
    Export,
}

/// The wired-up application: catalog plus managers over one store
struct App {
    catalog: &'static Catalog,
    registration: RegistrationManager,
    schedule: ScheduleManager,
}

impl App {
    fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;

        let db_path = data_dir.join("confmate.db");
        let store: Arc<dyn Store> = Arc::new(
            SqliteStore::open(&db_path)
                .with_context(|| format!("Failed to open database {:?}", db_path))?,
        );

        info!(db_path = %db_path.display(), "Store initialized");

        Ok(Self {
            catalog: Catalog::builtin(),
            registration: RegistrationManager::new(store.clone()),
            schedule: ScheduleManager::new(store),
        })
    }

    fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Info => {
                print!("{}", render::render_info(self.catalog.info()));
                Ok(())
            }

            Command::Agenda { day } => {
                print!("{}", render::render_agenda(self.catalog, day));
                Ok(())
            }

            Command::Register {
                name,
                email,
                organization,
                bio,
            } => self.register(ProfileDraft {
                name,
                email,
                organization,
                bio,
            }),

            Command::Profile => self.profile(),
            Command::Add { session_id } => self.add(&session_id),
            Command::Remove { session_id } => self.remove(&session_id),
            Command::Clear => self.clear(),
            Command::Schedule => self.show_schedule(),
            Command::Export => self.export(),
        }
    }

    fn register(&self, draft: ProfileDraft) -> Result<()> {
        match self.registration.submit(&draft, confmate_util::now()) {
            Ok(profile) => {
                println!("Registration complete. Welcome, {}!", profile.name);
                println!("Your participant ID is {}.", profile.participant_id);
                Ok(())
            }
            Err(CompanionError::Validation(message)) => anyhow::bail!("{}", message),
            Err(e) => Err(e).context("Registration failed. Please try again."),
        }
    }

    fn profile(&self) -> Result<()> {
        match self.registration.load_profile() {
            Some(profile) => {
                print!("{}", render::render_profile(&profile));
                Ok(())
            }
            None => {
                println!("Not registered yet. Run `confmate register` to sign up.");
                Ok(())
            }
        }
    }

    fn add(&self, raw_id: &str) -> Result<()> {
        let id = SessionId::new(raw_id);
        let (_, day, session) = self
            .catalog
            .find_session(&id)
            .ok_or(CompanionError::SessionNotFound(id))?;

        match self.schedule.add(session, &day.date, confmate_util::now()) {
            Ok(entry) => {
                println!("Added \"{}\" to your schedule.", entry.session.title);
                Ok(())
            }
            Err(CompanionError::AlreadyScheduled(_)) => {
                println!("This session is already in your schedule.");
                Ok(())
            }
            Err(CompanionError::NotRegistered) => anyhow::bail!(
                "Registration required. Please register before building your schedule."
            ),
            Err(e) => Err(e).context("Failed to add session. Please try again."),
        }
    }

    fn remove(&self, raw_id: &str) -> Result<()> {
        let id = SessionId::new(raw_id);
        self.schedule
            .remove(&id)
            .context("Failed to remove session. Please try again.")?;
        println!("Removed {} from your schedule.", id);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.schedule
            .clear()
            .context("Failed to clear schedule. Please try again.")?;
        println!("Schedule cleared.");
        Ok(())
    }

    fn show_schedule(&self) -> Result<()> {
        let now_millis = confmate_util::now().timestamp_millis();
        let sorted = self.schedule.sorted_for_display()?;
        let next = self.schedule.next_upcoming(now_millis)?;

        print!("{}", render::render_schedule(&sorted, next.as_ref(), now_millis));
        Ok(())
    }

    fn export(&self) -> Result<()> {
        let entries = self.schedule.list()?;
        if entries.is_empty() {
            println!("Your schedule is empty, nothing to export.");
            return Ok(());
        }

        println!("{}", render::export_text(&entries));
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "confmate starting");

    let app = App::open(&args.data_dir)?;
    app.run(args.command)
}
