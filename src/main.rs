use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mailfind::index::seed::load_seed_records;
use mailfind::index::{Mailbox, RecordId, stats};
use mailfind::ingest::{LoadReport, load_mailbox_file};
use mailfind::output::{self, Listing};
use mailfind::utils::{AppConfig, get_config_path};
use std::path::PathBuf;
use termcolor::{ColorChoice, StandardStream};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mailfind")]
#[command(about = "Index a mailbox file and search it by date, sender or keyword")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Mailbox file to load (overrides the configured path)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Do not index the built-in example messages
    #[arg(long, global = true)]
    no_seed: bool,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,

    /// Config file to use instead of the one in the user config directory
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log indexing details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Cli {
    /// Fold command-line flags into the loaded configuration
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(file) = &self.file {
            config.mailbox_path = file.clone();
        }
        if self.no_seed {
            config.load_seed_records = false;
        }
        match self.color {
            ColorWhen::Never => config.color = false,
            ColorWhen::Always => config.color = true,
            ColorWhen::Auto => {}
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every message ordered by date
    List,
    /// List messages from one sender (exact, case-sensitive match)
    From {
        /// Sender address as it appears in the mailbox
        sender: String,
    },
    /// Find messages whose subject or body contains all the given words
    Search {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Show one message in full
    Show {
        /// Message identifier
        id: RecordId,
    },
    /// Show index statistics
    Stats,
    /// Show the effective configuration
    Config {
        /// Write the effective settings, flags included, to the config file
        #[arg(long)]
        write: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorWhen {
    Never,
    Auto,
    Always,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().or_else(get_config_path);
    let mut config = match &config_path {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::default(),
    };
    let color = color_choice(cli.color, config.color);
    cli.apply_overrides(&mut config);

    if let Some(Commands::Config { write }) = cli.command {
        return show_config(&config, config_path, write);
    }

    let mut mailbox = Mailbox::new();
    if config.load_seed_records {
        load_seed_records(&mut mailbox);
    }

    let mailbox_path = config.mailbox_path.clone();
    let mut stderr = StandardStream::stderr(color);
    let (report, load_message) = match load_mailbox_file(&mailbox_path, &mut mailbox) {
        Ok(report) => {
            let message = format!("{} messages loaded from {}", report.loaded, mailbox_path.display());
            if cli.command.is_some() {
                output::print_notice(&mut stderr, &message, true)?;
            }
            (Some(report), message)
        }
        Err(e) => {
            debug!(error = %e, "mailbox file not loaded");
            let message = format!("Could not open the mailbox file: {}", mailbox_path.display());
            if cli.command.is_some() {
                output::print_notice(&mut stderr, &message, false)?;
            }
            (None, message)
        }
    };

    let mut stdout = output::stdout(color);
    match cli.command {
        Some(Commands::List) => {
            let records = mailbox.sorted_by_date();
            output::print_records(&mut stdout, "[ MESSAGES BY DATE ]", &records, Listing::ByDate)?;
        }
        Some(Commands::From { sender }) => {
            let records = mailbox.from_sender(&sender);
            if records.is_empty() {
                output::print_notice(&mut stdout, "No messages from that sender.", false)?;
            } else {
                output::print_records(&mut stdout, "[ RESULTS ]", &records, Listing::BySender)?;
            }
        }
        Some(Commands::Search { words }) => {
            let records = mailbox.search(&words.join(" "));
            if records.is_empty() {
                output::print_notice(&mut stdout, "No matches found.", false)?;
            } else {
                output::print_records(&mut stdout, "[ RESULTS ]", &records, Listing::ByTerm)?;
            }
        }
        Some(Commands::Show { id }) => match mailbox.get(id) {
            Some(record) => output::print_record(&mut stdout, record)?,
            None => output::print_notice(&mut stdout, &format!("No message with id {}.", id), false)?,
        },
        Some(Commands::Stats) => {
            stats::show_stats(&mailbox, &mailbox_path, report)?;
        }
        Some(Commands::Config { .. }) => {}
        None => run_interactive(mailbox, report, load_message, color)?,
    }

    Ok(())
}

#[cfg(feature = "interactive")]
fn run_interactive(
    mailbox: Mailbox,
    report: Option<LoadReport>,
    load_message: String,
    color: ColorChoice,
) -> Result<()> {
    mailfind::tui::run(mailbox, load_message, report.is_some(), color != ColorChoice::Never)
}

#[cfg(not(feature = "interactive"))]
fn run_interactive(
    mailbox: Mailbox,
    report: Option<LoadReport>,
    load_message: String,
    color: ColorChoice,
) -> Result<()> {
    let mut stdout = output::stdout(color);
    output::print_notice(&mut stdout, &load_message, report.is_some())?;
    let records = mailbox.sorted_by_date();
    output::print_records(&mut stdout, "[ MESSAGES BY DATE ]", &records, Listing::ByDate)?;
    Ok(())
}

fn show_config(config: &AppConfig, path: Option<PathBuf>, write: bool) -> Result<()> {
    match &path {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (no config directory on this platform)"),
    }
    println!("{}", serde_json::to_string_pretty(config)?);

    if write {
        let path = path.context("No config directory available to write to")?;
        config.save(&path)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn color_choice(when: ColorWhen, config_color: bool) -> ColorChoice {
    match when {
        ColorWhen::Never => ColorChoice::Never,
        ColorWhen::Always => ColorChoice::Always,
        ColorWhen::Auto if config_color => ColorChoice::Auto,
        ColorWhen::Auto => ColorChoice::Never,
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
