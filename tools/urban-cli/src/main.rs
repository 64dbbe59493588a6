//! Urban CLI - terminal storefront for the Urban Style demo shop.
//!
//! Commands:
//! - `urban browse` - Filter and sort the catalog
//! - `urban shop` - Interactive shopping session
//! - `urban demo` - Scripted end-to-end session
//! - `urban inventory` - Stock levels report
//! - `urban coupons` - List available coupons
//! - `urban config` - Show or initialize configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, ConfigArgs, CouponsArgs, DemoArgs, InventoryArgs, ShopArgs};

/// Urban CLI - browse the catalog and run shopping sessions
#[derive(Parser)]
#[command(name = "urban")]
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
    /// Filter and sort the catalog
    Browse(BrowseArgs),

    /// Interactive shopping session
    Shop(ShopArgs),

    /// Scripted end-to-end session
    Demo(DemoArgs),

    /// Stock levels report
    Inventory(InventoryArgs),

    /// List available coupons
    Coupons(CouponsArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and seed the session state
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Demo(args) => commands::demo::run(args, &ctx),
        Commands::Inventory(args) => commands::inventory::run(args, &ctx),
        Commands::Coupons(args) => commands::coupons::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
