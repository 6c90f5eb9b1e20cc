//! Command-line interface for seo-outline
//!
//! Usage:
//!   seo-outline optimize `<path>` --primary `<file>` [--secondary `<file>`] [--to `<format>`]
//!       Restructure headings and write the document, optionally with a report
//!   seo-outline analyze `<path>` --primary `<file>` [--secondary `<file>`]
//!       Print the report only
//!   seo-outline list-formats
//!       List available document formats
//!
//! Keyword files hold one keyword or phrase per line. Logs go to stderr; set `RUST_LOG` or pass
//! `--verbose` for more detail.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use seo_outline::config::Loader;
use seo_outline::formats::{FormatRegistry, HtmlFormat};
use seo_outline::keywords::KeywordSet;
use seo_outline::pipeline::Optimizer;
use seo_outline::report::Report;
use seo_outline::{Document, Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("optimize", sub)) => handle_optimize_command(sub),
        Some(("analyze", sub)) => handle_analyze_command(sub),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!("clap requires a subcommand"),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("seo-outline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Promote keyword paragraphs to headings and analyze document content")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log allocation decisions")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            document_args(Command::new("optimize"))
                .about("Restructure headings and write the optimized document")
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Output format")
                        .default_value("html"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the document here instead of stdout"),
                )
                .arg(
                    Arg::new("report")
                        .long("report")
                        .help("Also write the analysis report to this path"),
                ),
        )
        .subcommand(
            document_args(Command::new("analyze")).about("Print the analysis report only"),
        )
        .subcommand(Command::new("list-formats").about("List available document formats"))
}

/// Arguments shared by commands that read a document and keyword lists
fn document_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("path")
            .help("Document to process")
            .required(true)
            .index(1),
    )
    .arg(
        Arg::new("primary")
            .long("primary")
            .short('p')
            .help("File with primary keywords, one per line")
            .required(true),
    )
    .arg(
        Arg::new("secondary")
            .long("secondary")
            .short('s')
            .help("File with secondary keywords, one per line"),
    )
    .arg(
        Arg::new("from")
            .long("from")
            .short('f')
            .help("Input format (default: detect from extension)"),
    )
    .arg(
        Arg::new("report-format")
            .long("report-format")
            .help("Report serialization")
            .value_parser(["json", "yaml"])
            .default_value("json"),
    )
    .arg(quota_arg("h1-max", "Maximum H1 headings per keyword"))
    .arg(quota_arg("h2-max", "Maximum H2 headings per keyword"))
    .arg(quota_arg("h3-max", "Maximum H3 headings per keyword"))
}

fn quota_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_parser(value_parser!(u32))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("seo_outline=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seo_outline=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the optimize command
fn handle_optimize_command(matches: &ArgMatches) -> Result<()> {
    let optimizer = build_optimizer(matches)?;
    let registry = registry_for(&optimizer);
    let (source, keywords) = load_inputs(matches, &registry)?;

    let result = optimizer.run(&source, &keywords);

    let to = required(matches, "to");
    let rendered = registry.serialize(&result.document, to)?;
    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path = %path, format = %to, "wrote optimized document");
        }
        None => print!("{rendered}"),
    }

    if let Some(path) = matches.get_one::<String>("report") {
        fs::write(path, render_report(&result.report, matches)?)?;
        info!(path = %path, "wrote report");
    }
    Ok(())
}

/// Handle the analyze command
fn handle_analyze_command(matches: &ArgMatches) -> Result<()> {
    let optimizer = build_optimizer(matches)?;
    let registry = registry_for(&optimizer);
    let (source, keywords) = load_inputs(matches, &registry)?;

    let report = optimizer.run(&source, &keywords).report;
    println!("{}", render_report(&report, matches)?.trim_end());
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {name}");
            println!("    {}", format.description());
            println!("    extensions: {}", format.file_extensions().join(", "));
        }
    }
}

fn build_optimizer(matches: &ArgMatches) -> Result<Optimizer> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    for (arg, key) in [
        ("h1-max", "headings.h1_max"),
        ("h2-max", "headings.h2_max"),
        ("h3-max", "headings.h3_max"),
    ] {
        if let Some(value) = matches.get_one::<u32>(arg) {
            loader = loader.set_override(key, i64::from(*value))?;
        }
    }
    let config = loader.build()?;
    debug!(limits = ?config.quota_limits(), "configuration loaded");
    Ok(Optimizer::new(config))
}

/// Default formats, with HTML export following the configuration
fn registry_for(optimizer: &Optimizer) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(HtmlFormat::from(&optimizer.config().export));
    registry
}

fn load_inputs(matches: &ArgMatches, registry: &FormatRegistry) -> Result<(Document, KeywordSet)> {
    let path = required(matches, "path");
    let source = fs::read_to_string(path)?;
    let document = match matches.get_one::<String>("from") {
        Some(name) => registry.parse(&source, name)?,
        None => registry.detect_from_path(Path::new(path))?.parse(&source)?,
    };

    let primary = fs::read_to_string(required(matches, "primary"))?;
    let secondary = match matches.get_one::<String>("secondary") {
        Some(file) => fs::read_to_string(file)?,
        None => String::new(),
    };
    let keywords = KeywordSet::from_lines(&primary, &secondary);
    info!(
        path = %path,
        blocks = document.len(),
        keywords = keywords.primary().len() + keywords.secondary().len(),
        "loaded document"
    );
    Ok((document, keywords))
}

fn render_report(report: &Report, matches: &ArgMatches) -> Result<String> {
    match required(matches, "report-format") {
        "yaml" => report.to_yaml(),
        "json" => report.to_json(),
        other => Err(Error::Report(format!("unknown report format '{other}'"))),
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}
