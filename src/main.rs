use academy::Theme;
use academy::core::config::{self, AcademyConfig, CliOverrides, SavedState};
use academy::core::content::builtin_catalog;
use academy::core::catalog::ContentCatalog;
use academy::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "academy", about = "Survival Code Academy: step-by-step coding courses in the terminal")]
struct Args {
    /// Color scheme (overrides config and ACADEMY_THEME)
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Course to open on start-up, e.g. "python"
    #[arg(short, long)]
    course: Option<String>,

    /// Print the course catalog and exit
    #[arg(long)]
    list: bool,

    /// With --list, print JSON instead of a table
    #[arg(long, requires = "list")]
    json: bool,

    /// Where to write the log
    #[arg(long, default_value = "academy.log")]
    log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let catalog = builtin_catalog().map_err(std::io::Error::other)?;
    log::info!("Academy starting with {} courses", catalog.len());

    if args.list {
        return print_catalog(&catalog, args.json);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        AcademyConfig::default()
    });
    let saved_state = config::load_state().unwrap_or_else(|e| {
        log::warn!("Failed to load saved state, ignoring it: {}", e);
        SavedState::default()
    });
    let cli = CliOverrides {
        theme: args.theme,
        course: args.course,
    };
    let resolved = config::resolve(&file_config, &saved_state, &cli);
    log::info!(
        "Config resolved: user={}, theme={}, start_course={:?}",
        resolved.username,
        resolved.theme.label(),
        resolved.start_course
    );

    tui::run(resolved, Arc::new(catalog))
}

fn print_catalog(catalog: &ContentCatalog, json: bool) -> std::io::Result<()> {
    let summaries = catalog.summaries();
    if json {
        let out = serde_json::to_string_pretty(&summaries).map_err(std::io::Error::other)?;
        println!("{out}");
        return Ok(());
    }
    for summary in &summaries {
        println!(
            "{:<8} {:<16} {:>3} lessons  {}",
            summary.id, summary.title, summary.lessons, summary.tagline
        );
    }
    Ok(())
}
