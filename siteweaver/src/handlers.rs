use anyhow::{Result, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use siteweaver_core::crawl::{CrawlOptions, execute_crawl, extract_url_path};
use siteweaver_core::output::{render, save_output};
use siteweaver_core::{OutputFormat, SiteGraph};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

/// Where rendered output goes: an explicit path, stdout for `-` (or for
/// formats without a default filename), or the per-format default.
pub fn resolve_output_path(
    format: OutputFormat,
    host: &str,
    explicit: Option<&PathBuf>,
) -> Option<PathBuf> {
    match explicit {
        Some(path) if path == Path::new("-") => None,
        Some(path) => Some(path.clone()),
        None => format.default_filename(host).map(PathBuf::from),
    }
}

pub async fn handle_generate(args: &ArgMatches, quiet: bool) -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let start = args.get_one::<Url>("start").unwrap();
    let graph_path = args.get_one::<PathBuf>("graph").unwrap();
    let max_pages = *args.get_one::<usize>("max-pages").unwrap_or(&100);
    let max_depth = *args.get_one::<usize>("max-depth").unwrap_or(&3);
    let format_name = args.get_one::<String>("format").map(String::as_str).unwrap_or("xml");

    if max_pages == 0 {
        return Err(anyhow!("--max-pages must be at least 1"));
    }

    let format = OutputFormat::from_str(format_name)
        .ok_or_else(|| anyhow!("unknown output format: {}", format_name))?;
    let graph = SiteGraph::load(graph_path)?;

    let spinner = if quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting crawl...");
        Some(Arc::new(pb))
    };

    let progress_callback = spinner.as_ref().map(|pb| {
        let pb = pb.clone();
        Arc::new(move |depth: usize, url: String| {
            pb.set_message(format!("depth {}: {}", depth, extract_url_path(&url)));
            pb.tick();
        }) as Arc<dyn Fn(usize, String) + Send + Sync>
    });

    let options = CrawlOptions {
        start: start.as_str().to_string(),
        max_pages,
        max_depth,
    };
    let report = execute_crawl(graph.clone(), &options, progress_callback).await?;

    if let Some(ref pb) = spinner {
        pb.finish_with_message(format!(
            "Crawl complete! {} pages discovered",
            report.pages.len()
        ));
    }

    for issue in &report.issues {
        eprintln!("{} {}: {}", "[!]".yellow(), issue.url, issue.reason);
    }

    let content = render(format, &graph, &report, start.as_str())?;
    let host = start.host_str().unwrap_or("site");

    match resolve_output_path(format, host, args.get_one::<PathBuf>("output")) {
        Some(path) => {
            save_output(&content, &path)?;
            if !quiet {
                println!("{} {}", "Saved".green(), path.display());
            }
        }
        None => print!("{}", content),
    }

    Ok(())
}
