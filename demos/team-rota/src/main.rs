//! Team Rota Example
//!
//! Draws ten staff members from the demo roster and builds a two-week rota
//! in which everyone works at most two shifts in a row, never two nights in
//! a row, and each day has two people on the day shift and two on nights.
//!
//! Solver settings are read from `solver.toml` in the working directory.

use rota::prelude::*;
use rota::{ScheduleDto, ScheduleRequest};
use rota_test::{InMemoryEmployeeRepository, InMemoryRuleSetRepository};

#[tokio::main]
async fn main() {
    rota::console::init();

    let config = SolverConfig::load("solver.toml").unwrap_or_default();
    let service = SchedulerService::new(
        InMemoryEmployeeRepository::demo(),
        InMemoryRuleSetRepository::demo(),
    )
    .with_scheduler(ShiftScheduler::with_config(config));

    let rule_sets = match service.active_rule_sets().await {
        Ok(rule_sets) => rule_sets,
        Err(err) => {
            eprintln!("Could not load rule sets: {}", err);
            return;
        }
    };
    println!("Rule sets:");
    for rule_set in &rule_sets {
        println!("  #{} {}", rule_set.id, rule_set.name);
    }

    let request = ScheduleRequest::new(1, 14, 10, 2)
        .with_min_shifts_per_cycle(2)
        .with_shift_window(7, 12);

    match service.create_schedule(&request).await {
        Ok(response) => {
            println!("\n{}\n", response.statistics);
            match response.schedule {
                Some(schedule) => print_rota(&schedule),
                None => println!("{}", response.error.unwrap_or_default()),
            }
        }
        Err(err) => eprintln!("Invalid request: {}", err),
    }
}

/// Prints one row per employee with a letter per day.
fn print_rota(schedule: &ScheduleDto) {
    println!("{}", schedule.name);
    let days = schedule.days.max(1) as usize;
    for row in schedule.shifts.chunks(days) {
        let Some(first) = row.first() else {
            continue;
        };
        let letters: String = row
            .iter()
            .map(|shift| match shift.shift_type {
                ShiftType::Day => 'D',
                ShiftType::Night => 'N',
                ShiftType::Off => '.',
            })
            .collect();
        println!("  {:<22} {}", first.employee, letters);
    }
}
