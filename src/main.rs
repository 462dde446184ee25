//! Dealer Home CLI
//!
//! Command-line interface for the home screen model:
//! - Summarize pipeline metrics from a data file
//! - Print the composed home view
//! - Dispatch an interaction through a logging navigator
//! - Generate a default config file

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dealer_home::config::generate_default_config;
use dealer_home::data::{self, OpportunityCsvImporter};
use dealer_home::{
    audit, Config, DashboardData, HomeView, Interaction, StatKind, TracingNavigator,
};

#[derive(Parser)]
#[command(name = "dealer-home")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Home screen metrics and view model for the dealer app")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the active pipeline
    Summary {
        /// Dashboard data JSON file
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Opportunities CSV export (replaces the JSON opportunities)
        #[arg(short, long)]
        opportunities: Option<PathBuf>,
    },

    /// Print the composed home view
    Home {
        /// Dashboard data JSON file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Dispatch an interaction: stat:<pipeline|projects|orders>, view-all,
    /// action:<id>, shortcut:<id>, ask:<query>, voice
    Navigate {
        target: String,
        /// Dashboard data JSON file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    init_logging(&config);

    match cli.command {
        Commands::Summary {
            data,
            opportunities,
        } => {
            let mut dashboard = load_data(data.as_deref())?;

            if let Some(path) = opportunities {
                let import = OpportunityCsvImporter::new()
                    .import(&path)
                    .with_context(|| format!("importing {}", path.display()))?;
                for error in &import.errors {
                    tracing::warn!("{}", error);
                }
                tracing::info!(
                    "Imported {} opportunities ({} rows failed)",
                    import.rows_processed,
                    import.rows_failed
                );
                dashboard.opportunities = import.opportunities;
            }

            let report = audit(&dashboard.opportunities);
            for unreadable in &report.unreadable {
                tracing::warn!(
                    index = unreadable.index,
                    stage = ?unreadable.stage,
                    value = ?unreadable.value,
                    "Opportunity value could not be read; counted as 0"
                );
            }

            let metrics = dealer_home::summarize(&dashboard.opportunities, &dashboard.orders);

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&metrics)?),
                _ => {
                    println!("{:<18} {}", StatKind::Pipeline.label(), metrics.pipeline);
                    println!("{:<18} {}", StatKind::Projects.label(), metrics.projects);
                    println!("{:<18} {}", StatKind::Orders.label(), metrics.orders);
                }
            }
        }

        Commands::Home { data } => {
            let dashboard = load_data(data.as_deref())?;
            let view = HomeView::compose(&dashboard, &config, chrono::Local::now().naive_local());

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&view)?),
                _ => print_home(&view),
            }
        }

        Commands::Navigate { target, data } => {
            let interaction = parse_interaction(&target)?;
            let dashboard = load_data(data.as_deref())?;
            let view = HomeView::compose(&dashboard, &config, chrono::Local::now().naive_local());

            if !view.dispatch(&interaction, &TracingNavigator, &TracingNavigator) {
                bail!("Nothing to do for {:?}", target);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("dealer_home={}", config.logging.level)),
    );

    // Logs go to stderr so stdout stays clean for the command output
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_data(path: Option<&Path>) -> anyhow::Result<DashboardData> {
    match path {
        Some(path) => {
            data::load_json(path).with_context(|| format!("loading {}", path.display()))
        }
        None => {
            tracing::info!("No data file given, using empty collections");
            Ok(DashboardData::default())
        }
    }
}

fn parse_interaction(target: &str) -> anyhow::Result<Interaction> {
    let interaction = match target.split_once(':') {
        None if target == "view-all" => Interaction::ViewAllActions,
        None if target == "voice" => Interaction::VoiceActivate,
        Some(("stat", kind)) => Interaction::StatCard(match kind {
            "pipeline" | "sales" => StatKind::Pipeline,
            "projects" => StatKind::Projects,
            "orders" => StatKind::Orders,
            other => bail!("Unknown stat card: {}", other),
        }),
        Some(("action", id)) => Interaction::Action(id.to_string()),
        Some(("shortcut", id)) => Interaction::Shortcut(id.to_string()),
        Some(("ask", query)) => Interaction::AskAi(query.to_string()),
        _ => bail!("Unrecognized interaction: {}", target),
    };
    Ok(interaction)
}

fn print_home(view: &HomeView) {
    println!(
        "{}, {}!  {}",
        view.header.greeting, view.header.user_name, view.header.date_label
    );
    println!();

    for card in &view.stats {
        println!("  {:<18} {:>8}   -> {}", card.label, card.value, card.route);
    }
    println!();

    println!("Actions:");
    for action in &view.actions {
        println!("  [{}] {} ({})", action.category, action.title, action.subtitle);
    }
    println!();

    println!("Quick access:");
    for shortcut in &view.shortcuts {
        println!("  {:<18} -> {}", shortcut.label, shortcut.route);
    }
}
