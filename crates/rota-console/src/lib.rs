//! Colorful console output for solver metrics.
//!
//! Provides a custom `tracing` layer that formats search events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, each solution found)
//! - **DEBUG**: Configuration fallbacks and model construction
//! - **TRACE**: Individual refuted branches

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "rota_solver=info,rota=info";

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____       _
|  _ \ ___ | |_ __ _
| |_) / _ \| __/ _` |
|  _ < (_) | || (_| |
|_| \_\___/ \__\__,_|
"#;

    let version_line = format!("      v{} - Shift Roster Scheduler\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        // Accept events from the engine and the facade
        if !target.starts_with("rota_solver") && !target.starts_with("rota::") && target != "rota"
        {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    employees: Option<u64>,
    days: Option<u64>,
    team_size: Option<u64>,
    constraints: Option<u64>,
    seed: Option<u64>,
    solution: Option<u64>,
    solutions: Option<u64>,
    branches: Option<u64>,
    failures: Option<u64>,
    duration_ms: Option<u64>,
    terminated: Option<bool>,
    schedules: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "event" {
            let s = format!("{:?}", value);
            self.event = Some(s.trim_matches('"').to_string());
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "employees" => self.employees = Some(value),
            "days" => self.days = Some(value),
            "team_size" => self.team_size = Some(value),
            "constraints" => self.constraints = Some(value),
            "seed" => self.seed = Some(value),
            "solution" => self.solution = Some(value),
            "solutions" => self.solutions = Some(value),
            "branches" => self.branches = Some(value),
            "failures" => self.failures = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "schedules" => self.schedules = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "terminated" {
            self.terminated = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solution_found" => format_solution_found(v),
        "solve_end" => format_solve_end(v),
        "schedules_ready" => format_schedules_ready(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let employees = v.employees.unwrap_or(0);
    let days = v.days.unwrap_or(0);
    let team_size = v.team_size.unwrap_or(0);
    let cells = employees.saturating_mul(days);
    let scale = calculate_problem_scale(cells as usize, 3);

    let mut output = format!(
        "{} {} Solving │ {} employees │ {} days │ team size {} │ scale {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        employees.to_formatted_string(&Locale::en).bright_yellow(),
        days.to_formatted_string(&Locale::en).bright_yellow(),
        team_size.to_formatted_string(&Locale::en).bright_yellow(),
        scale.bright_magenta()
    );

    if let Some(constraints) = v.constraints {
        output.push_str(&format!(
            " │ {} constraints",
            constraints.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }

    if let Some(seed) = v.seed {
        output.push_str(&format!(" │ seed {}", seed.bright_black()));
    }

    output
}

fn format_solution_found(v: &EventVisitor) -> String {
    let solution = v.solution.unwrap_or(0);
    format!(
        "{} {} Solution #{}",
        format_elapsed(),
        "✓".bright_green(),
        solution.to_formatted_string(&Locale::en).white().bold()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let solutions = v.solutions.unwrap_or(0);
    let branches = v.branches.unwrap_or(0);
    let failures = v.failures.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let status = if solutions > 0 {
        "SOLVED".bright_green().bold().to_string()
    } else {
        "NO SOLUTION".bright_red().bold().to_string()
    };
    let stop = if v.terminated.unwrap_or(false) {
        "limit reached"
    } else {
        "search space exhausted"
    };

    let mut output = format!(
        "{} {} Solving complete │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status,
        stop.white()
    );

    output.push_str("\n\n");
    output.push_str(
        &"╔══════════════════════════════════════════════════════════╗"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');
    for (label, value) in [
        ("Solutions:", solutions.to_formatted_string(&Locale::en)),
        ("Branches:", branches.to_formatted_string(&Locale::en)),
        ("Failures:", failures.to_formatted_string(&Locale::en)),
        ("Wall time:", format_duration_ms(duration)),
    ] {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }
    output.push_str(
        &"╚══════════════════════════════════════════════════════════╝"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    output
}

fn format_schedules_ready(v: &EventVisitor) -> String {
    let schedules = v.schedules.unwrap_or(0);
    format!(
        "{} {} {} schedule(s) materialized",
        format_elapsed(),
        "◆".bright_blue(),
        schedules.to_formatted_string(&Locale::en).bright_yellow()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

/// `3^cells` written as `m x 10^e`.
fn calculate_problem_scale(cell_count: usize, value_count: usize) -> String {
    if cell_count == 0 || value_count == 0 {
        return "0".to_string();
    }

    let log_scale = (cell_count as f64) * (value_count as f64).log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}

#[cfg(test)]
mod tests;
