//! Folio CLI
//!
//! Drives the portfolio page model from the command line: the same state the
//! web app renders, without a browser.
//!
//! ## Usage
//!
//! ```bash
//! # Reply to Alice's comment and show the resulting thread and toast
//! folio demo
//!
//! # Replay a JSON script of interactions
//! folio replay session.json
//!
//! # Print the effective configuration
//! folio --config site.json config
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{
    parse_script, FolioError, NotificationPhase, Page, ReplyField, SiteConfig, ThreadItem,
};

/// Folio - portfolio page interactions
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Replay portfolio page interactions against the page model")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site configuration file (JSON); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reply to Alice's comment on the demo page
    Demo,

    /// Replay a JSON script of actions against the demo page
    Replay {
        /// Path to the script file
        script: PathBuf,
    },

    /// Print the effective configuration as JSON
    Config,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

fn print_thread(page: &Page) {
    println!("Thread:");
    for item in page.thread.project() {
        match item {
            ThreadItem::Comment(comment) => {
                println!("  [{}] {} ({})", comment.id, comment.author, comment.posted);
                println!("      {}", comment.body);
            }
            ThreadItem::Reply(reply) => {
                println!("    [{}] {} ({})", reply.id, reply.author, reply.posted);
                println!("        {}", reply.body);
            }
            ThreadItem::Widget(widget) => {
                println!("    [{}]", widget.heading());
                for field in ReplyField::ALL {
                    println!("        {}: {:?}", field.label(), widget.fields().get(field));
                }
            }
        }
    }
}

fn print_notifications(page: &Page) {
    let notifications = page.notifications.notifications();
    println!(
        "Notifications (at {}ms):",
        page.notifications.now().as_millis()
    );
    if notifications.is_empty() {
        println!("  (none)");
        return;
    }
    for n in notifications {
        let phase = match n.phase {
            NotificationPhase::Created => "pending",
            NotificationPhase::Visible => "visible",
            NotificationPhase::Hidden => "hiding",
        };
        println!("  [{}] {:<8} {}", n.severity, phase, n.message);
    }
}

fn run_demo(config: SiteConfig) -> Result<()> {
    let mut page = Page::demo(config);
    let alice = page.comment_by_author("Alice")?;

    println!("Opening reply widget on Alice's comment");
    page.open_reply(alice)?;
    page.thread.edit(ReplyField::Name, "Bob")?;
    page.thread.edit(ReplyField::Email, "bob@example.com")?;
    page.thread.edit(ReplyField::Body, "Thanks!")?;

    let id = page.submit_reply()?;
    println!("Reply posted: {}", id);

    page.advance(page.config().notifications.show_delay);
    println!();
    print_thread(&page);
    println!();
    print_notifications(&page);
    Ok(())
}

fn run_replay(config: SiteConfig, script: &Path) -> Result<()> {
    let json = std::fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let actions = parse_script(&json)
        .with_context(|| format!("Failed to parse script {}", script.display()))?;

    let mut page = Page::demo(config);
    for (step, action) in actions.iter().enumerate() {
        match page.perform(action) {
            Ok(outcome) => println!("{:>3}. {}", step + 1, outcome),
            Err(FolioError::Validation(failure)) => {
                println!("{:>3}. alert: {}", step + 1, failure);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Step {} failed", step + 1));
            }
        }
    }

    println!();
    print_thread(&page);
    println!();
    print_notifications(&page);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Demo => run_demo(config)?,
        Commands::Replay { script } => run_replay(config, &script)?,
        Commands::Config => println!("{}", config.to_json_pretty()?),
    }

    Ok(())
}
