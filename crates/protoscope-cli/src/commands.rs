use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use regex::Regex;
use std::path::Path;

use protoscope_engine::{chunk_requests, resolve_details, summarize_requests};
use protoscope_store::{SessionStore, load_session};

use crate::args::{Cli, Commands};
use crate::views;

pub fn run(cli: Cli) -> Result<()> {
    let color = !cli.no_color && std::io::stdout().is_terminal();

    match cli.command {
        Commands::Timeline { log, filter } => timeline(&log, filter.as_deref(), color),
        Commands::Show { log, chunk } => show(&log, chunk, color),
        Commands::Summary { log } => summary(&log, color),
    }
}

fn load(path: &Path) -> Result<SessionStore> {
    load_session(path).with_context(|| format!("Failed to load session log: {}", path.display()))
}

fn timeline(path: &Path, filter: Option<&str>, color: bool) -> Result<()> {
    let store = load(path)?;

    let mut chunks = chunk_requests(store.requests());
    if let Some(pattern) = filter {
        let re = Regex::new(pattern)
            .with_context(|| format!("Invalid --filter pattern: {}", pattern))?;
        chunks.retain(|chunk| re.is_match(&chunk.method));
    }

    views::timeline::print_timeline(&chunks, color);

    if !store.is_empty() {
        println!();
        let stats = summarize_requests(store.requests());
        views::summary::print_summary(store.meta(), &stats, color);
    }

    Ok(())
}

fn show(path: &Path, index: usize, color: bool) -> Result<()> {
    let store = load(path)?;

    let chunks = chunk_requests(store.requests());
    let Some(chunk) = chunks.get(index) else {
        bail!(
            "Chunk index {} out of range: timeline has {} chunks",
            index,
            chunks.len()
        );
    };

    let resolution = resolve_details(&store, &chunk.ids);
    views::detail::print_details(chunk, &resolution, color)
}

fn summary(path: &Path, color: bool) -> Result<()> {
    let store = load(path)?;

    let stats = summarize_requests(store.requests());
    views::summary::print_summary(store.meta(), &stats, color);

    Ok(())
}
