//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod inquire;
pub mod reviews;
pub mod search;
pub mod session;
pub mod share;

use clap::{Args, Subcommand, ValueEnum};

/// Landing page section to list.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Section {
    /// Every product in catalog order.
    All,
    /// "Trending collection".
    Trending,
    /// "New Arrivals".
    NewArrivals,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Product ID to show in detail.
    pub product: Option<u32>,

    /// Section to list.
    #[arg(short, long, value_enum, default_value = "all")]
    pub section: Section,

    /// Expand the section as "show more" would.
    #[arg(long)]
    pub show_all: bool,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Free-text search term.
    pub term: Option<String>,

    /// Navigation label to select (e.g. "Sale", "Shoes & Bags").
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Dispatch intents from a JSON script and print the final state.
    Run {
        /// Script file: a JSON array of intents.
        script: String,

        /// Save a journal of the session.
        #[arg(long)]
        record: bool,
    },
    /// Re-run a recorded journal and report differences.
    Replay {
        /// Journal file.
        journal: String,
    },
    /// List recorded journals.
    List,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Items as ID or ID:SIZE. Repeat an item to add more than one.
    #[arg(required = true)]
    pub items: Vec<String>,

    /// Print the message text instead of the link.
    #[arg(long)]
    pub message: bool,
}

/// Arguments for the inquire command.
#[derive(Args)]
pub struct InquireArgs {
    /// Product ID.
    pub product: u32,

    /// Size selected in the quick view.
    #[arg(short, long)]
    pub size: Option<String>,
}

/// Share destination.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Channel {
    Whatsapp,
    Facebook,
}

/// Arguments for the share command.
#[derive(Args)]
pub struct ShareArgs {
    /// Product ID.
    pub product: u32,

    /// Where to share.
    #[arg(short, long, value_enum, default_value = "whatsapp")]
    pub channel: Channel,
}

/// Arguments for the reviews command.
#[derive(Args)]
pub struct ReviewsArgs {
    /// Viewport width in pixels.
    #[arg(short, long, default_value = "1024")]
    pub width: u32,

    /// Auto-advance ticks to simulate.
    #[arg(short, long, default_value = "0")]
    pub ticks: usize,

    /// Run the real timer instead of simulating ticks.
    #[arg(long)]
    pub live: bool,

    /// Stop a live run after this many seconds.
    #[arg(long, default_value = "20")]
    pub duration: u64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Overwrite an existing config without asking.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
