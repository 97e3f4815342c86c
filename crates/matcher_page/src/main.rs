use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use matcher_core::{KeyPress, PageConfig, SelectedFile};
use matcher_logging::matcher_info;
use matcher_page::platform::clipboard::MemoryClipboard;
use matcher_page::platform::config::load_config;
use matcher_page::platform::logging::{self, LogDestination};
use matcher_page::platform::ui::layout::{results_page, upload_page, KeywordStatus};
use matcher_page::platform::PageApp;
use url::Url;

/// Replays an upload and a results session against the page controller.
#[derive(Debug, Parser)]
#[command(name = "matcher_page", version)]
struct Cli {
    /// RON file with page rules, timings and behaviour switches.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    log: LogDestination,
    /// Log debug output as well.
    #[arg(long)]
    verbose: bool,
    /// Seed for the processing animation; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "http://localhost:5000/")]
    base_url: Url,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(cli.log, level);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PageConfig::default(),
    };

    run_upload_session(&cli, config.clone())?;
    run_results_session(&cli, config)?;
    Ok(())
}

fn load(cli: &Cli, document: matcher_page::platform::dom::Document, config: PageConfig) -> PageApp {
    match cli.seed {
        Some(seed) => PageApp::load_seeded(document, config, seed),
        None => PageApp::load(document, config),
    }
}

fn run_upload_session(cli: &Cli, config: PageConfig) -> anyhow::Result<()> {
    let location = cli.base_url.join("upload").context("invalid base url")?;
    let mut page = load(cli, upload_page(location), config);
    page.advance(Duration::from_millis(40));
    page.window_loaded();

    page.select_file(Some(SelectedFile::new("resume.docx", 48_213)));
    page.select_file(Some(SelectedFile::new("resume.pdf", 231_424)));
    page.type_description("Rust engineer");
    let blocked = !page.submit_form();
    matcher_info!("Short description blocked submit: {}", blocked);

    page.type_description(
        "Senior Rust engineer to build async network services with tokio, \
         PostgreSQL and Kubernetes; experience with observability required.",
    );
    let submitted = page.submit_form();
    matcher_info!("Submitted: {}", submitted);

    page.advance(Duration::from_secs(12));
    let view = page.view();
    matcher_info!(
        "Processing at {:?}% (capped: {}), {} alerts still shown",
        view.processing_percent,
        view.processing_capped,
        view.alerts.len()
    );
    matcher_info!("Upload page:\n{}", page.document().outline());
    Ok(())
}

fn run_results_session(cli: &Cli, config: PageConfig) -> anyhow::Result<()> {
    let location = cli.base_url.join("results/1").context("invalid base url")?;
    let document = results_page(
        location,
        68,
        &[
            ("Rust", KeywordStatus::Matched),
            ("Kubernetes", KeywordStatus::Missing),
            ("Excel", KeywordStatus::Extra),
        ],
    );
    let mut page = load(cli, document, config).with_clipboard(Box::new(MemoryClipboard::default()));
    page.advance(Duration::from_millis(200));

    page.click_badge(1);
    let copied = page.clipboard().and_then(|clipboard| clipboard.read_text());
    matcher_info!("Clipboard holds {:?}", copied);
    page.advance(Duration::from_secs(4));

    page.press_key(KeyPress::plain("Escape"));
    page.press_key(KeyPress::with_ctrl("n"));
    matcher_info!("Now at {}", page.document().location());
    Ok(())
}
