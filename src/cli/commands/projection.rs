use cashflow_core::{ProjectionService, RngSource};
use cashflow_domain::{Feedback, MonthKey, PredictionResult};
use chrono::{Months, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, detail, render_table, section};
use crate::cli::registry::CommandEntry;

const USAGE: &str = "project [months] [--seed <n>] [--json]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "project",
        "Project total assets month by month",
        USAGE,
        cmd_project,
    )]
}

#[derive(Debug, Default, PartialEq)]
struct ProjectArgs {
    months: Option<i64>,
    seed: Option<u64>,
    json: bool,
}

fn parse_args(args: &[&str]) -> Result<ProjectArgs, CommandError> {
    let mut parsed = ProjectArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--seed" => {
                let raw = iter.next().ok_or_else(|| {
                    CommandError::InvalidArguments("`--seed` needs a value".into())
                })?;
                let seed = raw.parse().map_err(|_| {
                    CommandError::InvalidArguments(format!("invalid seed `{raw}`"))
                })?;
                parsed.seed = Some(seed);
            }
            "--json" => parsed.json = true,
            other if other.starts_with("--") => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown flag `{other}`; usage: {USAGE}"
                )))
            }
            other => {
                if parsed.months.is_some() {
                    return Err(CommandError::InvalidArguments(format!("usage: {USAGE}")));
                }
                let months = other.parse().map_err(|_| {
                    CommandError::InvalidArguments(format!("invalid month count `{other}`"))
                })?;
                parsed.months = Some(months);
            }
        }
    }
    Ok(parsed)
}

/// Machine-readable projection output for `--json`.
#[derive(Serialize)]
struct ProjectionReport<'a> {
    ledger: &'a str,
    as_of: NaiveDate,
    seed: Option<u64>,
    result: &'a PredictionResult,
}

fn cmd_project(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let request = parse_args(args)?;
    let ledger = context.ledger()?;
    let today = context.clock.today();
    let seed = request.seed.or(context.config.rng_seed);
    let mut rng = match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    debug!(months = ?request.months, ?seed, "running projection");

    let service = ProjectionService::new(context.config.projection_settings());
    let result = service.project_view(ledger, request.months, context.clock.as_ref(), &mut rng)?;

    if request.json {
        let report = ProjectionReport {
            ledger: &ledger.name,
            as_of: today,
            seed,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let fmt = &context.formatters;
    section(format!(
        "Projection for `{}`: {} months from {}",
        ledger.name,
        result.horizon_months(),
        MonthKey::from(today)
    ));
    detail(format!("  Verdict      : {}", verdict_label(result.feedback())));
    detail(format!(
        "  Regular net  : {} / month",
        fmt.amount(result.regular_monthly_net())
    ));
    detail(format!(
        "  Start assets : {}",
        fmt.amount(result.initial_total_assets())
    ));
    if let Some(last) = result.final_point() {
        detail(format!("  Final assets : {}", fmt.amount(last)));
    }

    match result.feedback() {
        Feedback::InsufficientData | Feedback::BaselineDeficit => {
            output::warning(result.feedback_text())
        }
        _ => output::info(result.feedback_text()),
    }

    let rows: Vec<Vec<String>> = result
        .projection_points()
        .iter()
        .enumerate()
        .map(|(offset, point)| {
            vec![
                format!("+{}", offset),
                period_label(today, offset),
                fmt.amount(*point),
            ]
        })
        .collect();
    render_table(&["Month", "Period", "Projected assets"], &rows);
    Ok(())
}

fn verdict_label(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::BaselineDeficit => "Baseline deficit",
        Feedback::IrregularSpending => "Irregular spending",
        Feedback::OnTrack => "On track",
        Feedback::Flat => "Flat",
        Feedback::InsufficientData => "Insufficient data",
    }
}

fn period_label(today: NaiveDate, offset: usize) -> String {
    u32::try_from(offset)
        .ok()
        .and_then(|months| today.checked_add_months(Months::new(months)))
        .map(|date| MonthKey::from(date).to_string())
        .unwrap_or_else(|| "-".to_string())
}
