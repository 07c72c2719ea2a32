use clap::{arg, command};
use std::path::PathBuf;
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("siteweaver")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("siteweaver")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress banner and progress output")
                .required(false)
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("generate")
                .about(
                    "Crawl a site described by a site graph file and emit a sitemap, feed or \
                report in the chosen format.",
                )
                .arg(
                    arg!(-s --"start" <URL>)
                        .required(true)
                        .help("The address the crawl starts from; its origin bounds the crawl")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(-g --"graph" <PATH>)
                        .required(true)
                        .help("Path to a JSON site graph describing pages, links and metadata")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(-p --"max-pages" <NUM>)
                        .required(false)
                        .help("Maximum number of pages to record")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("100"),
                )
                .arg(
                    arg!(-d --"max-depth" <NUM>)
                        .required(false)
                        .help("Maximum link depth from the start address (0 = start page only)")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("3"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format")
                        .value_parser([
                            "xml",
                            "html",
                            "rss",
                            "image",
                            "video",
                            "news",
                            "broken-links",
                            "json",
                            "text",
                        ])
                        .default_value("xml"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save output to file; '-' prints to stdout (default: per-format filename)")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}
