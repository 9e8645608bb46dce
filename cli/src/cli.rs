use clap::{Parser, Subcommand, ValueEnum};
use engine::{AccentCommand, ThemeFamily};
use std::path::PathBuf;

/// Switch accent colors and theme families on overlay-based Android builds
#[derive(Debug, Parser)]
#[command(name = "tinct", version, about)]
pub struct Cli {
    /// Configuration file (default: ./tinct.toml and the per-user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Overlay catalog file (default: built-in catalog)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// User id to operate on
    #[arg(long, global = true, value_name = "ID")]
    pub user: Option<u32>,

    /// Read overlay state but only log the toggles that would be issued
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Select an accent by catalog index (0 = default)
    Accent {
        index: usize,

        /// Also disable every other enabled accent
        #[arg(long)]
        exclusive: bool,
    },

    /// Disable every accent overlay
    UnloadAccents,

    /// Turn a theme family on or off
    Family {
        #[arg(value_parser = parse_family)]
        family: ThemeFamily,

        state: Switch,
    },

    /// Disable the platform's stock dark overlay
    UnloadStockDark,

    /// Show active families and accents
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the accents and theme families in the catalog
    Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

fn parse_family(value: &str) -> Result<ThemeFamily, String> {
    value.parse::<ThemeFamily>().map_err(|e| e.to_string())
}

/// What one invocation does once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the catalog without touching the overlay service
    ShowCatalog,
    /// Run an engine command against the overlay service
    Execute(AccentCommand),
}

impl Command {
    pub fn action(&self, exclusive_by_default: bool) -> Action {
        let command = match self {
            Command::Accent { index, exclusive } => {
                if *exclusive || exclusive_by_default {
                    AccentCommand::SwitchAccent { index: *index }
                } else {
                    AccentCommand::SelectAccent { index: *index }
                }
            }
            Command::UnloadAccents => AccentCommand::UnloadAccents,
            Command::Family { family, state } => AccentCommand::SetFamilyEnabled {
                family: *family,
                enabled: *state == Switch::On,
            },
            Command::UnloadStockDark => AccentCommand::UnloadStockDark,
            Command::Status { .. } => AccentCommand::GetStatus,
            Command::Catalog => return Action::ShowCatalog,
        };
        Action::Execute(command)
    }
}
