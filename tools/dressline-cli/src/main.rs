//! Dress Line CLI - Terminal front-end for the storefront core.
//!
//! Commands:
//! - `dressline catalog` - Browse the catalog and landing sections
//! - `dressline search` - Filter products by term or category
//! - `dressline session` - Run or replay a scripted shopping session
//! - `dressline checkout` - Build the WhatsApp order link for a cart
//! - `dressline inquire` - Build a product inquiry link
//! - `dressline share` - Build a product share link
//! - `dressline reviews` - Page through customer reviews
//! - `dressline config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CatalogArgs, CheckoutArgs, ConfigArgs, InquireArgs, ReviewsArgs, SearchArgs, SessionArgs,
    ShareArgs,
};

/// Dress Line CLI - Browse the boutique and build WhatsApp orders
#[derive(Parser)]
#[command(name = "dressline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products and landing page sections
    Catalog(CatalogArgs),

    /// Search the catalog
    Search(SearchArgs),

    /// Run or replay a scripted session
    Session(SessionArgs),

    /// Build the WhatsApp order link for a cart
    Checkout(CheckoutArgs),

    /// Build a WhatsApp inquiry link for a product
    Inquire(InquireArgs),

    /// Build a share link for a product
    Share(ShareArgs),

    /// Page through customer reviews
    Reviews(ReviewsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose || std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "dressline_commerce=debug,dressline=debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Session(args) => commands::session::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Inquire(args) => commands::inquire::run(args, &ctx).await,
        Commands::Share(args) => commands::share::run(args, &ctx).await,
        Commands::Reviews(args) => commands::reviews::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
