use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use profile_store::profile::ProfileField;
use profile_store::views::{
    Alert, DetailState, DetailView, EditView, ListView, Navigator, Route,
    SaveOutcome,
};
use profile_store::{FileStorage, Profile, ProfileStore, StoreConfig};

type Store = Arc<ProfileStore<FileStorage>>;

#[derive(Parser, Debug)]
#[clap(name = "profile-cli")]
#[clap(about = "Browse and edit locally stored profiles", long_about = None)]
struct Cli {
    /// JSON file with store settings
    #[clap(long)]
    config: Option<PathBuf>,

    /// Data folder, overrides the config file
    #[clap(long)]
    root: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every profile in display order
    List,

    /// Print a single profile
    Show { id: String },

    /// Create a blank profile and print it
    Add,

    /// Change fields of a profile
    Edit {
        id: String,

        #[clap(long)]
        given: Option<String>,
        #[clap(long)]
        family: Option<String>,
        #[clap(long)]
        age: Option<String>,
        #[clap(long)]
        institution: Option<String>,
        #[clap(long)]
        program: Option<String>,
    },
}

/// Remembers the route requested by the last action
#[derive(Default)]
struct Screen {
    pending: Option<Route>,
}

impl Navigator for Screen {
    fn navigate(&mut self, route: Route) {
        log::debug!("navigate to {}", route);
        self.pending = Some(route);
    }

    fn back(&mut self) {
        log::debug!("navigate back");
        self.pending = None;
    }
}

/// Dialogs printed to the terminal; confirmations are acknowledged at once
struct Dialogs;

impl Alert for Dialogs {
    fn alert(&mut self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }

    fn confirm(&mut self, title: &str, message: &str) {
        println!("{}: {}", title, message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => StoreConfig::load(path).with_context(|| {
            format!("Couldn't load config from {}", path.display())
        })?,
        None => StoreConfig::default(),
    };
    if let Some(root) = args.root {
        config.root = root;
    }

    let store: Store = Arc::new(ProfileStore::with_key(
        config.file_storage(),
        &config.storage_key,
    ));
    let mut screen = Screen::default();

    match args.command {
        Command::List => render(&store, Route::List).await,
        Command::Show { id } => render(&store, Route::Detail { id }).await,
        Command::Add => {
            let mut list = ListView::new(store.clone());
            list.refresh().await;
            if list.add(&mut screen).await.is_none() {
                anyhow::bail!(
                    "Couldn't add a profile: {}",
                    list.last_error().unwrap_or("unknown error")
                );
            }
            if let Some(route) = screen.pending.take() {
                render(&store, route).await?;
            }
            Ok(())
        }
        Command::Edit {
            id,
            given,
            family,
            age,
            institution,
            program,
        } => {
            let mut edit = EditView::new(store.clone(), id.clone());
            if !edit.activate().await {
                anyhow::bail!("Profile {} not found", id);
            }

            let changes = [
                (ProfileField::GivenName, given),
                (ProfileField::FamilyName, family),
                (ProfileField::Age, age),
                (ProfileField::Institution, institution),
                (ProfileField::Program, program),
            ];
            for (field, value) in changes {
                if let Some(value) = value {
                    edit.set_field(field, value);
                }
            }

            match edit.save(&mut screen, &mut Dialogs).await {
                SaveOutcome::Saved => {
                    render(&store, Route::Detail { id }).await
                }
                SaveOutcome::Invalid(err) => anyhow::bail!("{}", err),
                SaveOutcome::NotFound => {
                    anyhow::bail!("Profile {} not found", id)
                }
                SaveOutcome::Failed => anyhow::bail!("Profile was not saved"),
            }
        }
    }
}

async fn render(store: &Store, route: Route) -> anyhow::Result<()> {
    match route {
        Route::List => {
            let mut list = ListView::new(store.clone());
            list.refresh().await;
            if let Some(err) = list.last_error() {
                eprintln!("Couldn't read profiles: {}", err);
            }
            for profile in list.profiles() {
                print_summary(profile);
            }
        }
        Route::Detail { id } | Route::Edit { id } => {
            let mut detail = DetailView::new(store.clone(), id);
            detail.refresh().await;
            match detail.state() {
                DetailState::Loaded(profile) => print_details(profile),
                _ => anyhow::bail!("Profile {} not found", detail.id()),
            }
        }
    }
    Ok(())
}

fn print_summary(profile: &Profile) {
    println!(
        "{:>14}  {:<2}  {:<24} {} / {}",
        profile.id,
        profile.initials(),
        profile.full_name(),
        profile.program_label(),
        profile.institution_label()
    );
}

fn print_details(profile: &Profile) {
    println!(
        "{} {}  {}",
        profile.avatar,
        profile.initials(),
        profile.full_name()
    );
    println!("  id:          {}", profile.id);
    println!("  age:         {}", profile.display_field(ProfileField::Age));
    println!(
        "  institution: {}",
        profile.display_field(ProfileField::Institution)
    );
    println!(
        "  program:     {}",
        profile.display_field(ProfileField::Program)
    );
    println!("  color:       {}", profile.color);
}
