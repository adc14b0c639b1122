//! folio CLI
//!
//! Command-line interface for the portfolio browser. Provides the
//! interactive TUI plus one-shot search and catalog export commands.

use clap::{Parser, Subcommand};
use console::style;
use folio::catalog::{Catalog, Entry, Language, LANGUAGES};
use folio::search::{normalize_query, search, SearchOutcome};
use folio::{highlight, logging, AppConfig};
use indicatif::HumanDuration;
use std::path::PathBuf;
use std::time::Instant;

/// folio - Terminal portfolio browser
///
/// Browses a multi-language portfolio catalog with live search,
/// a localized page shell, and a project showcase.
#[derive(Parser)]
#[command(name = "folio")]
#[command(author = "Folio Contributors")]
#[command(version)]
#[command(about = "Terminal portfolio browser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the portfolio interactively
    Browse {
        /// UI language tag (en, es, it)
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Root directory the entry locations point into
        #[arg(long, default_value = ".")]
        site_root: PathBuf,

        /// Components directory (default: <site-root>/components)
        #[arg(long)]
        components: Option<PathBuf>,
    },

    /// Search the catalog and print highlighted matches
    Search {
        /// Query (use -- before the query if it starts with -)
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// UI language tag (en, es, it)
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Maximum results
        #[arg(short, long, default_value = "20")]
        max: usize,
    },

    /// Print the catalog
    Catalog {
        /// Restrict to one language tag
        #[arg(short, long)]
        lang: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// List supported languages
    Languages,
}

fn main() {
    logging::init();
    logging::separator("session start");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Browse {
            lang,
            site_root,
            components,
        } => cmd_browse(&lang, site_root, components),
        Commands::Search { query, lang, max } => cmd_search(&query, &lang, max),
        Commands::Catalog { lang, output } => cmd_catalog(lang.as_deref(), &output),
        Commands::Languages => cmd_languages(),
    };

    logging::flush();

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_browse(lang: &str, site_root: PathBuf, components: Option<PathBuf>) -> folio::Result<()> {
    let language = Language::from_tag(lang)?;
    let components_dir = components.unwrap_or_else(|| site_root.join("components"));

    folio::tui::run(AppConfig {
        site_root,
        components_dir,
        language,
    })
}

fn cmd_search(query: &str, lang: &str, max: usize) -> folio::Result<()> {
    let language = Language::from_tag(lang)?;
    let catalog = Catalog::builtin();
    let started = Instant::now();

    println!(
        "{} Searching {} entries ({})",
        style("\u{2192}").cyan().bold(),
        catalog.len(),
        style(language.label()).bold()
    );

    let matches = match search(&catalog, language, query) {
        SearchOutcome::Inactive => {
            println!("  {}", style("Empty query - nothing to search").dim());
            return Ok(());
        }
        SearchOutcome::Results(matches) => matches,
    };

    if matches.is_empty() {
        println!("  {}", style(language.no_match_message()).yellow());
        return Ok(());
    }

    let normalized = normalize_query(query).unwrap_or_default();
    for entry in matches.iter().take(max) {
        print!("  ");
        for segment in highlight(&entry.title, &normalized) {
            if segment.matched {
                print!("{}", style(segment.text).black().on_yellow().bold());
            } else {
                print!("{}", segment.text);
            }
        }
        println!("  {}", style(&entry.location).dim());
    }

    println!(
        "\n{} {} matches in {}",
        style("\u{2713}").green().bold(),
        matches.len(),
        HumanDuration(started.elapsed())
    );

    Ok(())
}

fn cmd_catalog(lang: Option<&str>, output: &str) -> folio::Result<()> {
    let language = lang.map(Language::from_tag).transpose()?;
    let catalog = Catalog::builtin();

    let entries: Vec<&Entry> = catalog
        .iter()
        .filter(|e| language.map_or(true, |l| e.language == l))
        .collect();

    match output {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        _ => {
            for entry in entries {
                println!(
                    "  [{}] {}  {}",
                    style(entry.language.tag()).cyan(),
                    entry.title,
                    style(&entry.location).dim()
                );
            }
        }
    }

    Ok(())
}

fn cmd_languages() -> folio::Result<()> {
    for language in LANGUAGES {
        println!("  {}  {}", style(language.tag()).cyan().bold(), language.label());
    }
    Ok(())
}
