//! Smart Health Advisor - CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use healthadvisor::{
    cli::{Args, Commands, Config},
    collector::TerminalPrompt,
    logging,
    HealthAdvisor,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    let verbosity = args.verbosity(config.verbosity());
    logging::init(verbosity);
    tracing::debug!(verbosity = verbosity.as_str(), "logging initialised");
    tracing::info!(
        source = %Config::source_label(args.config.as_deref()),
        "configuration loaded"
    );

    match &args.command {
        Some(Commands::Config) => show_config(&args, &config),
        Some(Commands::InitConfig { force }) => init_config(&args, *force),
        None => run_assessment(&args, &config),
    }
}

fn run_assessment(args: &Args, config: &Config) -> Result<()> {
    let color = config.display.color_output && !args.no_color;
    let advisor = HealthAdvisor::from_config(config, args.format, color);

    let mut prompt = TerminalPrompt::new().context("Failed to open terminal input")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let report = advisor
        .run(&mut prompt, &mut out)
        .context("Assessment failed")?;

    tracing::info!(
        recommendations = report.recommendations.len(),
        "assessment complete"
    );

    Ok(())
}

fn config_target(args: &Args) -> Result<PathBuf> {
    match &args.config {
        Some(path) => Ok(path.clone()),
        None => Config::default_path().context("Could not determine home directory"),
    }
}

fn init_config(args: &Args, force: bool) -> Result<()> {
    let path = config_target(args)?;

    if path.exists() && !force {
        println!("Config already exists at {:?} (use --force to overwrite)", path);
        return Ok(());
    }

    Config::default()
        .save(&path)
        .with_context(|| format!("Failed to write config to {:?}", path))?;
    println!("{} Wrote default configuration to {:?}", "✓".green(), path);

    Ok(())
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    let source = Config::source_label(args.config.as_deref());

    println!("\n{}", "Smart Health Advisor Configuration".bold().cyan());
    println!("{}\n", format!("Source: {}", source).dimmed());

    println!("Temperature (°C):");
    println!("  Low below:    {}", config.temperature.low_below);
    println!("  Fever above:  {}", config.temperature.fever_above);
    println!();

    println!("Heart Rate (bpm):");
    println!("  Below normal: < {}", config.heart_rate.below_normal);
    println!("  Above normal: > {}", config.heart_rate.above_normal);
    println!();

    println!("Symptom Severity (count):");
    println!("  Mild:         1-{}", config.severity.mild_max);
    println!(
        "  Moderate:     {}-{}",
        config.severity.mild_max + 1,
        config.severity.moderate_max
    );
    println!("  Severe:       {}+", config.severity.moderate_max + 1);
    println!();

    println!("Display:");
    println!("  Color output:    {}", if config.display.color_output { "enabled" } else { "disabled" });
    println!("  Disclaimer:      {}", if config.display.show_disclaimer { "shown" } else { "hidden" });
    println!("  Verbosity:       {}", config.display.default_verbosity);
    println!();

    Ok(())
}
