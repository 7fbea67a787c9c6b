//! metrics-runner: headless performance-metrics report for the dashboard.
//!
//! Usage:
//!   metrics-runner --roster roster.json --format table
//!   metrics-runner --sample 40 --seed 7 --department Sales --department HR
//!   metrics-runner --config dashboard.json --format json

use anyhow::Result;
use perfboard_core::{
    config::{DashboardConfig, OutputFormat},
    format::{format_metric_line, format_progress},
    generate_performance_metrics,
    generator::RosterGenerator,
    roster::load_roster,
    summary::TeamSummary,
    EmployeeRecord, PerformanceMember,
};
use std::env;

#[derive(serde::Serialize)]
struct Report<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    source: String,
    member_count: usize,
    members: &'a [PerformanceMember],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = resolve_config(&args)?;

    let roster_path = flag_value(&args, "--roster");
    let (records, source) = match roster_path {
        Some(path) => (load_roster(path)?, path.to_string()),
        None => {
            log::info!(
                "no --roster given, generating {} mock employees (seed {})",
                config.sample_size,
                config.seed
            );
            let records = RosterGenerator::new(config.seed).generate(config.sample_size);
            (records, format!("mock:seed={}", config.seed))
        }
    };

    let filtered: Vec<EmployeeRecord> = records
        .into_iter()
        .filter(|r| config.includes(&r.department))
        .collect();
    let members = generate_performance_metrics(&filtered);

    match config.format {
        OutputFormat::Json => print_json(&members, source)?,
        OutputFormat::Table => print_table(&members),
        OutputFormat::Summary => print_summary(&members),
    }
    Ok(())
}

/// Config file first, then command-line flags on top.
fn resolve_config(args: &[String]) -> Result<DashboardConfig> {
    let mut config = match flag_value(args, "--config") {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };

    if let Some(format) = flag_value(args, "--format") {
        config.format = OutputFormat::parse_or_default(format);
    }
    config.sample_size = parse_arg(args, "--sample", config.sample_size);
    config.seed = parse_arg(args, "--seed", config.seed);

    let departments: Vec<String> = args
        .windows(2)
        .filter(|w| w[0] == "--department")
        .map(|w| w[1].clone())
        .collect();
    if !departments.is_empty() {
        config.departments = departments;
    }
    config.validate()?;
    Ok(config)
}

fn print_json(members: &[PerformanceMember], source: String) -> Result<()> {
    let report = Report {
        generated_at: chrono::Utc::now(),
        source,
        member_count: members.len(),
        members,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_table(members: &[PerformanceMember]) {
    if members.is_empty() {
        println!("  (No employees matched)");
        return;
    }
    for m in members {
        println!("[{}] {} (#{}) | {} | {}", m.avatar, m.name, m.id, m.department, m.role);
        for metric in &m.metrics {
            println!(
                "    {:<14} {}",
                metric.status.label(),
                format_metric_line(metric)
            );
        }
    }
}

fn print_summary(members: &[PerformanceMember]) {
    let summary = TeamSummary::from_members(members);

    println!("=== TEAM SUMMARY ===");
    for dept in summary.departments.values().chain(std::iter::once(&summary.total)) {
        let name = if dept.department.is_empty() { "(none)" } else { dept.department.as_str() };
        println!(
            "  {:<12} headcount: {:>3} | exceeded: {:>3} | on track: {:>3} | below: {:>3} | avg progress: {}",
            name,
            dept.headcount,
            dept.exceeded,
            dept.on_track,
            dept.below_target,
            format_progress(dept.average_progress),
        );
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
