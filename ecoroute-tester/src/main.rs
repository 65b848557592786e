mod loader;
mod reports;
mod runner;
mod scenario;
mod util;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use ecoroute_core::{Catalog, DataLoader, EcoRouteEngine, TimerDriver};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use loader::AssetDirLoader;
use runner::{DriveRunner, ScenarioResult};
use scenario::{Scenario, get_scenario, list_scenarios};
use util::split_csv;

#[derive(Debug, Parser)]
#[command(name = "ecoroute-tester", version = "0.1.0")]
#[command(about = "Headless drive replays for EcoRoute - real timers, scripted taps, reward checks")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Vehicle ids to drive (comma-separated); defaults to every vehicle
    #[arg(long)]
    vehicles: Option<String>,

    /// Multiplier applied to every screen delay (0 fires timers immediately)
    #[arg(long, default_value_t = 0.05)]
    time_scale: f64,

    /// Directory holding vehicles.json, routes.json, leaderboard.json and certificate.json
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let catalog = load_catalog(&args)?;
    let scenarios = resolve_scenarios(&args.scenarios)?;
    let vehicles = resolve_vehicles(&catalog, args.vehicles.as_deref())?;
    let driver = TimerDriver::new(args.time_scale);
    log::info!(
        target: "ecoroute.tester",
        "{} scenario(s) x {} vehicle(s) at time scale {}",
        scenarios.len(),
        vehicles.len(),
        driver.time_scale()
    );

    let runner = DriveRunner::new(&catalog, driver, args.verbose);
    let results = runner.run_all(&scenarios, &vehicles).await;

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:12} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🌱 EcoRoute Drive Tester".bright_green().bold());
    println!("{}", "========================".green());
}

fn load_catalog(args: &Args) -> Result<Catalog> {
    let loader = args
        .assets
        .clone()
        .map_or_else(AssetDirLoader::default, AssetDirLoader::new);
    let root = loader.root().to_path_buf();
    EcoRouteEngine::new(loader)
        .load_catalog()
        .with_context(|| format!("assets at {}", root.display()))
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        scenarios.extend(Scenario::ALL.iter().map(|s| s.key().to_string()));
    }
    scenarios
}

fn resolve_scenarios(scenarios_arg: &str) -> Result<Vec<Scenario>> {
    let mut resolved = Vec::new();
    for name in expand_scenarios(scenarios_arg) {
        let Some(scenario) = get_scenario(&name) else {
            bail!("unknown scenario `{name}` (try --list-scenarios)");
        };
        if !resolved.contains(&scenario) {
            resolved.push(scenario);
        }
    }
    if resolved.is_empty() {
        bail!("no scenarios selected");
    }
    Ok(resolved)
}

fn resolve_vehicles(catalog: &Catalog, vehicles_arg: Option<&str>) -> Result<Vec<String>> {
    let Some(arg) = vehicles_arg else {
        return Ok(catalog.vehicles.iter().map(|v| v.id.clone()).collect());
    };
    let vehicles = split_csv(arg);
    for id in &vehicles {
        if catalog.vehicles.get_by_id(id).is_none() {
            bail!("unknown vehicle `{id}`");
        }
    }
    Ok(vehicles)
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(output_target.writer(), results)?,
        "markdown" => reports::generate_markdown_report(output_target.writer(), results)?,
        _ => {
            reports::generate_console_report(
                output_target.writer(),
                results,
                start_time.elapsed(),
            )?;
            writeln!(output_target.writer())?;
            writeln!(
                output_target.writer(),
                "🏁 Total time: {:?}",
                start_time.elapsed()
            )?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
