mod listing;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use shelfscope_api::{ApiError, Catalog};
use shelfscope_core::{AppConfig, Book, ExitCode, FavoritesStore, GenreSummary};
use shelfscope_tui::LaunchOptions;

use listing::PageSlice;

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "shelfscope",
    about = "Browse bestseller lists from the terminal",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output in JSON format (for scripts).
    /// Also enabled by setting SHELFSCOPE_JSON=1.
    #[arg(long, global = true)]
    json: bool,

    /// Open this list (e.g. `hardcover-fiction`) when the TUI starts.
    #[arg(long, value_name = "LIST_KEY")]
    genre: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List bestseller categories.
    Genres {
        #[command(flatten)]
        page: PageArgs,
    },

    /// List the ranked books of one category.
    Books {
        /// Encoded list name, as shown by `shelfscope genres`.
        genre_key: String,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Config management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information.
    Version,
}

#[derive(Args)]
struct PageArgs {
    /// Case-insensitive substring filter on the title.
    #[arg(long)]
    search: Option<String>,
    #[arg(long, default_value = "1")]
    page: u32,
    /// 5, 10 or 15. Defaults to `ui.default_items_per_page`.
    #[arg(long)]
    per_page: Option<u32>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as TOML.
    Show,
    /// Print the config file location.
    Path,
    /// Write a default config file.
    Init {
        #[arg(long)]
        force: bool,
    },
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = logging::initialize_logging() {
        eprintln!("warning: file logging disabled: {e}");
    }

    let json_output = cli.json || std::env::var("SHELFSCOPE_JSON").as_deref() == Ok("1");

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = match AppConfig::load_from(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, path = %config_path.display(), "config load failed");
            fail(json_output, "config", &e.to_string(), ExitCode::InvalidArgs, start);
        }
    };
    info!(path = %config_path.display(), "config loaded");

    match cli.command {
        None => {
            let runtime = tokio::runtime::Runtime::new()?;
            let catalog = Arc::new(Catalog::from_config(&config)?);
            let favorites = Arc::new(FavoritesStore::new());
            shelfscope_tui::run_tui(
                config,
                catalog,
                favorites,
                runtime.handle().clone(),
                LaunchOptions {
                    initial_genre: cli.genre,
                },
            )?;
            runtime.shutdown_background();
        }

        Some(Commands::Genres { page }) => {
            let runtime = tokio::runtime::Runtime::new()?;
            let catalog = Catalog::from_config(&config)?;
            let genres = match runtime.block_on(catalog.genres()) {
                Ok(g) => g,
                Err(e) => load_failed(json_output, &e, start),
            };
            let slice = page_of(&genres, &page, &config, json_output, start);
            if json_output {
                print_ok(&slice, start)?;
            } else {
                print_genres(&slice);
            }
        }

        Some(Commands::Books { genre_key, page }) => {
            let runtime = tokio::runtime::Runtime::new()?;
            let catalog = Catalog::from_config(&config)?;
            let books = match runtime.block_on(catalog.books(&genre_key)) {
                Ok(b) => b,
                Err(e) => load_failed(json_output, &e, start),
            };
            let slice = page_of(&books, &page, &config, json_output, start);
            if json_output {
                print_ok(&slice, start)?;
            } else {
                print_books(&slice);
            }
        }

        // ── Config ─────────────────────────────────────────────────────────

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => {
                if json_output {
                    print_json(&serde_json::json!({
                        "status": "ok",
                        "data": config,
                        "meta": { "duration_ms": start.elapsed().as_millis() }
                    }))?;
                } else {
                    print!("{}", toml::to_string_pretty(&config)?);
                }
            }
            ConfigAction::Path => {
                if json_output {
                    print_json(&serde_json::json!({
                        "status": "ok",
                        "data": { "path": config_path, "exists": config_path.exists() },
                        "meta": { "duration_ms": start.elapsed().as_millis() }
                    }))?;
                } else {
                    println!("{}", config_path.display());
                }
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    fail(
                        json_output,
                        "exists",
                        &format!("{} already exists (use --force to overwrite)", config_path.display()),
                        ExitCode::GeneralError,
                        start,
                    );
                }
                AppConfig::default().save_to(&config_path)?;
                info!(path = %config_path.display(), "wrote default config");
                if json_output {
                    print_json(&serde_json::json!({
                        "status": "ok",
                        "data": { "path": config_path },
                        "meta": { "duration_ms": start.elapsed().as_millis() }
                    }))?;
                } else {
                    println!("Wrote {}", config_path.display());
                }
            }
        },

        // ── Version ────────────────────────────────────────────────────────

        Some(Commands::Version) => {
            let version = env!("CARGO_PKG_VERSION");
            if json_output {
                print_json(&serde_json::json!({
                    "status": "ok",
                    "data": { "version": version },
                    "meta": { "duration_ms": start.elapsed().as_millis() }
                }))?;
            } else {
                println!("shelfscope v{version}");
            }
        }
    }

    Ok(())
}

// ─── Listing ────────────────────────────────────────────────────────────────

fn page_of<'a, T: shelfscope_core::Searchable>(
    items: &'a [T],
    args: &PageArgs,
    config: &AppConfig,
    json_output: bool,
    start: Instant,
) -> PageSlice<'a, T> {
    let per_page = args.per_page.unwrap_or(config.ui.default_items_per_page);
    match listing::slice(
        items,
        args.search.as_deref(),
        args.page,
        per_page,
        config.ui.max_visible_pages,
    ) {
        Ok(slice) => slice,
        Err(e) => fail(json_output, "invalid_args", &e.to_string(), ExitCode::InvalidArgs, start),
    }
}

fn print_genres(slice: &PageSlice<'_, GenreSummary>) {
    if slice.items.is_empty() {
        println!("No genres found.");
    }
    for g in &slice.items {
        println!(
            "{name:<40}  {key:<36}  {updated:<8}  {newest}",
            name = g.display_name,
            key = g.list_name_encoded,
            updated = g.updated,
            newest = g.newest_published_date,
        );
    }
    println!("\n{}", listing::footer(slice));
}

fn print_books(slice: &PageSlice<'_, Book>) {
    if slice.items.is_empty() {
        println!("No books found.");
    }
    for b in &slice.items {
        let Some(d) = b.primary_detail() else {
            continue;
        };
        println!(
            "#{rank:<3} {title:<36}  {author:<28}  Buy for {price}",
            rank = b.rank,
            title = d.title,
            author = d.author,
            price = d.price,
        );
    }
    println!("\n{}", listing::footer(slice));
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn print_json(val: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}

fn print_ok<T: serde::Serialize>(slice: &PageSlice<'_, T>, start: Instant) -> Result<()> {
    print_json(&serde_json::json!({
        "status": "ok",
        "data": slice,
        "meta": { "duration_ms": start.elapsed().as_millis() }
    }))
}

/// A failed list load: network-class errors exit 6, everything else 1.
fn load_failed(json_output: bool, e: &ApiError, start: Instant) -> ! {
    error!(error = %e, "list load failed");
    let (kind, code) = if e.is_network() {
        ("network", ExitCode::NetworkError)
    } else {
        ("load_failed", ExitCode::GeneralError)
    };
    fail(json_output, kind, &e.to_string(), code, start)
}

fn fail(json_output: bool, kind: &str, message: &str, code: ExitCode, start: Instant) -> ! {
    if json_output {
        let body = serde_json::json!({
            "status": "error",
            "error": kind,
            "message": message,
            "meta": { "duration_ms": start.elapsed().as_millis() }
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("error: {message}");
    }
    std::process::exit(code.code());
}
