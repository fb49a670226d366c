// Wed Feb 11 2026 - Alex

use std::collections::VecDeque;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use wiki_route_finder::{
    canonical::{article_path, complete_link, display_title},
    config::SearchConfig,
    fetch::{GraphSnapshot, PageFetcher, SnapshotFetcher},
    frontier::Direction,
    search::{FetchDirective, FetchFailure, PageEvent, SearchSession},
    ui::{Banner, RaceDisplay},
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Bidirectional route finder over a wiki link graph", long_about = None)]
struct Args {
    #[arg(short, long)]
    graph: PathBuf,

    #[arg(short, long)]
    start: String,

    #[arg(short, long)]
    target: String,

    #[arg(long, default_value_t = 5)]
    max_depth: u32,

    #[arg(long, default_value_t = 10_000)]
    max_nodes: usize,

    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if !args.no_banner {
        Banner::print_default();
    }

    println!("{}", "Wiki Route Finder".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let start_time = Instant::now();

    println!("{} Loading link graph: {}", "[*]".blue(), args.graph.display());

    let snapshot = match GraphSnapshot::load(&args.graph) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} Failed to load graph: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    println!("{} {} pages loaded", "[+]".green(), snapshot.page_count());

    let config = SearchConfig::new()
        .with_max_depth(args.max_depth)
        .with_max_nodes(args.max_nodes)
        .with_request_delay_ms(args.delay_ms)
        .with_progress_bars(!args.no_progress)
        .with_verbose_output(args.verbose);

    let start = article_path(&args.start);
    let target = article_path(&args.target);

    println!("{} Start:  {}", "[*]".blue(), complete_link(&config.site_base, &start));
    println!("{} Target: {}", "[*]".blue(), complete_link(&config.site_base, &target));
    println!();

    let fetcher: Arc<dyn PageFetcher> = Arc::new(SnapshotFetcher::new(snapshot));

    let outcome = match run_search(&config, fetcher.as_ref(), &start, &target) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} Search aborted: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    let elapsed = start_time.elapsed();

    match outcome {
        Some(route) => {
            println!("{} Route found in {:.2}s", "[+]".green(), elapsed.as_secs_f64());
            println!();
            for hop in &route {
                println!("  {}", complete_link(&config.site_base, hop));
            }
            println!();
            let titles = route.iter().map(|hop| display_title(hop)).format(" -> ");
            println!("{}", titles.to_string().green().bold());
            println!();
            println!("{}", "=".repeat(50).cyan());
            println!("{} {} hops", "[+]".green(), route.len() - 1);

            if let Some(path) = &args.output {
                if let Err(e) = save_route(&args, &route, path) {
                    eprintln!("{} Failed to save route: {}", "[!]".red(), e);
                } else {
                    println!("{} Route saved to: {}", "[+]".green(), path.display());
                }
            }
        }
        None => {
            eprintln!(
                "{} No route found within bounds (depth {}, {} nodes) after {:.2}s",
                "[!]".red(),
                args.max_depth,
                args.max_nodes,
                elapsed.as_secs_f64()
            );
            std::process::exit(1);
        }
    }
}

/// The coordinator loop: one directive at a time, fetch results fed straight
/// back into the session. All admission happens on this thread.
fn run_search(
    config: &SearchConfig,
    fetcher: &dyn PageFetcher,
    start: &str,
    target: &str,
) -> anyhow::Result<Option<Vec<String>>> {
    let display = RaceDisplay::new(config.enable_progress_bars);
    let mut session = SearchSession::new(config.clone());

    let mut queue: VecDeque<FetchDirective> = VecDeque::new();
    queue.extend(
        session
            .seed(Direction::Forward, start)
            .context("seeding forward frontier")?,
    );
    queue.extend(
        session
            .seed(Direction::Backward, target)
            .context("seeding backward frontier")?,
    );

    while let Some(directive) = queue.pop_front() {
        let frontier = match directive.direction {
            Direction::Forward => session.forward(),
            Direction::Backward => session.backward(),
        };
        display.update(
            directive.direction,
            frontier.node_count(),
            frontier.pending_count(),
            &display_title(&directive.raw_label),
        );

        let next = match fetcher.fetch(directive.direction, &directive.raw_label) {
            Ok(outbound) => session.handle_page(PageEvent {
                direction: directive.direction,
                fetched_label: directive.raw_label,
                outbound_labels: outbound,
            })?,
            Err(err) => session.handle_failure(&FetchFailure {
                direction: directive.direction,
                reason: err.to_string(),
            }),
        };
        queue.extend(next);

        if config.request_delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(config.request_delay_ms));
        }
    }

    display.finish();
    Ok(session.found_route().map(<[String]>::to_vec))
}

#[derive(Serialize)]
struct RouteReport<'a> {
    start: &'a str,
    target: &'a str,
    hops: usize,
    route: &'a [String],
}

fn save_route(args: &Args, route: &[String], path: &PathBuf) -> anyhow::Result<()> {
    let report = RouteReport {
        start: &args.start,
        target: &args.target,
        hops: route.len().saturating_sub(1),
        route,
    };
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, &report)?;
    Ok(())
}
