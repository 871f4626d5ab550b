//! Command-line interface for par-term-profile-editor.
//!
//! Each editing subcommand loads the profile file, opens the editor on the
//! requested profile, commits one edit and saves the result. Notifications
//! published by the commit are printed so scripts can follow along.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use par_term_config::storage::{load_profiles_from, profiles_path, save_profiles_to};
use par_term_config::{EditorConfig, ProfileCollection, ProfileGuid, SharedProfileCollection};

use crate::events::ProfileEventBus;
use crate::profile_editor::{FontSelection, ProfileEdit, ProfileEditor};
use crate::traits::ProfileModelProvider;

/// par-term-profile-editor - inspect and edit par-term profiles
#[derive(Parser)]
#[command(name = "par-term-profile-editor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Profile file to edit (default: par-term's profiles.yaml)
    #[arg(long, value_name = "PATH", global = true)]
    pub profiles: Option<PathBuf>,

    /// Editor settings file (YAML)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List profiles in display order
    List,

    /// Rename a profile
    Rename { guid: String, name: String },

    /// Set a profile's session hotkey, or clear it when omitted
    SetHotkey { guid: String, hotkey: Option<String> },

    /// Set a profile's font
    SetFont { guid: String, family: String, size: f32 },

    /// Set a profile's startup command, or clear it when omitted
    SetCommand { guid: String, command: Option<String> },

    /// Copy a profile (the copy gets a new GUID and no hotkey)
    Duplicate { guid: String },
}

/// Owns the collection for the lifetime of one command
struct ProfileStore {
    model: SharedProfileCollection,
}

impl ProfileModelProvider for ProfileStore {
    fn profile_model(&self) -> SharedProfileCollection {
        Arc::clone(&self.model)
    }
}

/// Parse arguments, run the subcommand and return the process exit code
pub fn process_cli() -> i32 {
    let cli = Cli::parse();
    crate::debug::init_log_bridge(cli.log_level);

    match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("par-term-profile-editor: error: {e:#}");
            1
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EditorConfig::load_from(path)
            .with_context(|| format!("Failed to load editor settings from {:?}", path))?,
        None => EditorConfig::default(),
    };
    let path = cli.profiles.clone().unwrap_or_else(profiles_path);
    let collection = load_profiles_from(&path)?;

    let (guid, edit) = match cli.command {
        Commands::List => {
            print_profiles(&collection);
            return Ok(());
        }
        Commands::Duplicate { guid } => {
            let mut collection = collection;
            let copy = collection
                .duplicate(&ProfileGuid::new(guid.as_str()))
                .with_context(|| format!("No profile with GUID {}", guid))?;
            save_profiles_to(&collection, &path)?;
            println!("{}", copy);
            return Ok(());
        }
        Commands::Rename { guid, name } => (guid, ProfileEdit::Name(name)),
        Commands::SetHotkey { guid, hotkey } => (guid, ProfileEdit::Hotkey(hotkey)),
        Commands::SetFont { guid, family, size } => {
            (guid, ProfileEdit::Font(FontSelection::new(family, size)))
        }
        Commands::SetCommand { guid, command } => (guid, ProfileEdit::Command(command)),
    };

    let store: Arc<dyn ProfileModelProvider> = Arc::new(ProfileStore {
        model: collection.into_shared(),
    });
    let bus = ProfileEventBus::new(config.event_buffer_capacity);
    let mut notifications = bus.subscribe();
    let mut editor = ProfileEditor::new(Arc::downgrade(&store), bus, config);

    let guid = ProfileGuid::new(guid);
    editor.open_to_profile_and_edit_component(&guid, edit.component().identifier());
    if editor.selected_guid() != Some(&guid) {
        anyhow::bail!("No profile with GUID {}", guid);
    }
    editor.stage_edit(edit);
    editor.commit_staged_edit()?;
    editor.close();

    let model = store.profile_model();
    save_profiles_to(&model.read(), &path)?;

    while let Ok(envelope) = notifications.try_recv() {
        println!(
            "{} {}",
            envelope.notification.event_name(),
            envelope.notification.guid()
        );
    }
    Ok(())
}

fn print_profiles(collection: &ProfileCollection) {
    for profile in collection.profiles_ordered() {
        println!(
            "{}\t{}\t{}",
            profile.guid,
            profile.display_label(),
            profile.hotkey.as_deref().unwrap_or("-")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_set_hotkey_without_value_clears() {
        let cli = Cli::parse_from(["par-term-profile-editor", "set-hotkey", "A"]);
        match cli.command {
            Commands::SetHotkey { guid, hotkey } => {
                assert_eq!(guid, "A");
                assert!(hotkey.is_none());
            }
            _ => panic!("expected set-hotkey"),
        }
    }

    #[test]
    fn test_log_level_flag_parses() {
        let cli = Cli::parse_from(["par-term-profile-editor", "list", "--log-level", "debug"]);
        assert_eq!(cli.log_level, Some(LevelFilter::Debug));
    }
}
