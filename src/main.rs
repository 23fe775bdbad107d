/// Command-line entry point.
///
///   airwatch_service <o3> <no2>   score one concentration pair (µg/m³)
///   airwatch_service              print the dashboard's critical regions
///                                 and drafted alerts from fallback samples
///
/// Configuration comes from the TOML file named by `AIRWATCH_CONFIG`
/// (a local `.env` is honoured), with defaults when unset.

use std::process::ExitCode;

use chrono::Utc;
use serde_json::json;

use airwatch_service::alert::cooldown::alerted_regions_at;
use airwatch_service::alert::draft::{breakdown_line, draft_alert};
use airwatch_service::config::{self, Config};
use airwatch_service::dashboard::{average_index, fallback_samples, select_critical_regions};
use airwatch_service::logging::{self, LogLevel, LogSource};
use airwatch_service::scoring::calculate_pollution_score;
use airwatch_service::sites::site_name;

fn main() -> ExitCode {
    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = config.log_level().unwrap_or(LogLevel::Info);
    logging::init_logger(level, config.logging.file.as_deref(), config.logging.timestamps);
    logging::debug(
        LogSource::Config,
        None,
        &format!(
            "cooldown={}h critical_index>{} fallback_average={}",
            config.alerts.cooldown_hours,
            config.alerts.critical_index_threshold,
            config.dashboard.fallback_average_index
        ),
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [] => run_dashboard(&config),
        [o3, no2] => score_pair(o3, no2),
        _ => Err("usage: airwatch_service [<o3> <no2>]".to_string()),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(msg) => {
            logging::error(LogSource::System, None, &msg);
            eprintln!("{}", msg);
            ExitCode::FAILURE
        }
    }
}

/// Parses a concentration argument. The scorer trusts its inputs, so
/// negative and non-finite values are rejected here.
fn parse_concentration(name: &str, raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a number, got '{}'", name, raw))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!(
            "{} must be a finite, non-negative concentration, got {}",
            name, raw
        ));
    }
    Ok(value)
}

fn score_pair(o3: &str, no2: &str) -> Result<String, String> {
    let o3 = parse_concentration("o3", o3)?;
    let no2 = parse_concentration("no2", no2)?;
    let result = calculate_pollution_score(o3, no2);
    serde_json::to_string_pretty(&result).map_err(|e| e.to_string())
}

fn run_dashboard(config: &Config) -> Result<String, String> {
    let now = Utc::now();
    let samples = fallback_samples(now);
    let critical =
        select_critical_regions(&[], &samples, config.alerts.critical_index_threshold);
    // No alert store is attached to the CLI, so nothing is cooling down.
    let alerted = alerted_regions_at(&[], config.alerts.cooldown_hours, now);

    let mut drafted = 0;
    let mut in_cooldown = 0;
    let mut cards = Vec::with_capacity(critical.len());

    for region in &critical {
        let name = site_name(&region.region);
        let cooling = alerted.contains(&region.region);
        let draft = if cooling {
            in_cooldown += 1;
            None
        } else {
            draft_alert(region, &name)
        };
        if draft.is_some() {
            drafted += 1;
        }

        cards.push(json!({
            "region": region.region,
            "name": name,
            "index": region.index,
            "forecast": region.forecast,
            "breakdown": region.score.as_ref().map(breakdown_line),
            "alertSent": cooling,
            "draft": draft,
        }));
    }

    logging::log_alert_summary(critical.len(), drafted, in_cooldown);

    let output = json!({
        "averageIndex": average_index(&[], config.dashboard.fallback_average_index),
        "criticalRegions": cards,
    });
    serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
}
