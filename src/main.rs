//! host-probe - report host capabilities for feature gating.
//!
//! Queries total physical memory, the processor name, and the primary
//! display bounds, and derives two coarse Intel-generation flags from the
//! processor name. Every query is read-only; nothing on the host changes.

mod probe;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use crate::probe::{HostProbe, HostReport};

/// Host capability probe
#[derive(Parser)]
#[command(name = "host-probe")]
#[command(version)]
#[command(about = "Report host memory, processor, and display capabilities")]
struct Cli {
    /// Emit JSON instead of the formatted report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every capability (default)
    Detect,

    /// Report total physical memory in MB
    Memory,

    /// Report the processor name and generation classification
    Cpu,

    /// Report the primary display bounds
    Display,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let probe = HostProbe::native();

    match cli.command.unwrap_or(Commands::Detect) {
        Commands::Detect => detect(&probe, cli.json),
        Commands::Memory => memory(&probe, cli.json),
        Commands::Cpu => cpu(&probe, cli.json),
        Commands::Display => display(&probe, cli.json),
    }
}

fn detect(probe: &HostProbe, json: bool) -> Result<()> {
    let report = HostReport::collect(probe)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Host capabilities".bold());
    println!("  Memory:     {} MB", report.memory_mb);
    match &report.processor {
        Some(name) => println!("  Processor:  {}", name),
        None => println!("  Processor:  {}", "unavailable".dimmed()),
    }
    println!(
        "  Generation: recent={} mid={}",
        flag(report.recent_generation),
        flag(report.mid_generation)
    );
    match &report.display {
        Some(bounds) => println!(
            "  Display:    {}x{} at ({}, {})",
            bounds.width, bounds.height, bounds.x, bounds.y
        ),
        None => println!("  Display:    {}", "unavailable".dimmed()),
    }

    Ok(())
}

fn memory(probe: &HostProbe, json: bool) -> Result<()> {
    let memory_mb = probe.total_physical_memory_mb()?;
    if json {
        println!("{}", serde_json::json!({ "memory_mb": memory_mb }));
    } else {
        println!("{} MB", memory_mb);
    }
    Ok(())
}

fn cpu(probe: &HostProbe, json: bool) -> Result<()> {
    let processor = probe.processor_identity()?;
    let recent = probe.is_recent_generation();
    let mid = probe.is_mid_generation();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "processor": processor,
                "recent_generation": recent,
                "mid_generation": mid,
            })
        );
        return Ok(());
    }

    match processor {
        Some(name) => println!("{name}"),
        None => println!("{}", "unavailable".dimmed()),
    }
    println!("recent generation: {}", flag(recent));
    println!("mid generation:    {}", flag(mid));
    Ok(())
}

fn display(probe: &HostProbe, json: bool) -> Result<()> {
    let bounds = probe.primary_display_bounds()?;
    if json {
        println!("{}", serde_json::to_string(&bounds)?);
    } else {
        println!(
            "{}x{} at ({}, {})",
            bounds.width, bounds.height, bounds.x, bounds.y
        );
    }
    Ok(())
}

fn flag(value: bool) -> ColoredString {
    if value {
        "yes".green()
    } else {
        "no".red()
    }
}
