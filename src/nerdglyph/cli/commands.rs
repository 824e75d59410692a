use super::print::{print_matches, print_message, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use nerdglyph::api::GlyphApi;
use nerdglyph::config::GlyphConfig;
use nerdglyph::error::{GlyphError, Result};
use nerdglyph::source::HttpSource;
use nerdglyph::store::fs::FileStore;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "NERDGLYPH_HOME";
const SOURCE_URL_ENV: &str = "NERDGLYPH_SOURCE_URL";
const LOG_ENV: &str = "NERDGLYPH_LOG";

struct AppContext {
    api: GlyphApi<FileStore, HttpSource>,
}

pub fn run() -> Result<()> {
    // Usage errors exit with 1 like every other failure; help and version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Search { term, limit } => {
            handle_search(&ctx, term.join(" "), limit)
        }
        Commands::Update { force } => handle_update(&mut ctx, force),
        Commands::Info => handle_info(&ctx),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("nerdglyph=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "nerdglyph", "nerdglyph")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            GlyphError::Config(format!(
                "could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = GlyphConfig::load(&data_dir)?.with_source_url(env::var(SOURCE_URL_ENV).ok());

    let dataset_path = cli
        .data
        .clone()
        .unwrap_or_else(|| config.dataset_path(&data_dir));
    debug!(
        data_dir = %data_dir.display(),
        dataset = %dataset_path.display(),
        source = %config.source_url,
        "resolved context"
    );

    let store = FileStore::new(dataset_path);
    let source = HttpSource::new(
        config.source_url.clone(),
        Duration::from_secs(config.timeout_secs),
    );
    let api = GlyphApi::new(store, source).with_default_limit(config.default_limit);

    Ok(AppContext { api })
}

fn handle_search(ctx: &AppContext, term: String, limit: Option<usize>) -> Result<()> {
    let result = ctx.api.search(&term, limit)?;
    print_matches(&result.matches);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, force: bool) -> Result<()> {
    println!("Checking for Nerd Fonts glyph updates...\n");
    // Messages are printed as they arrive so progress shows even if the download fails.
    ctx.api.update_with_progress(force, print_message)?;
    Ok(())
}

fn handle_info(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.info()?;
    print_messages(&result.messages);
    Ok(())
}
