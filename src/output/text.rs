use chrono::{DateTime, Utc};

use crate::countdown::time_left_for_date;
use crate::models::{Task, DATE_FORMAT};

fn due_text(t: &Task) -> String {
    t.due_date()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn countdown_text(t: &Task, now: DateTime<Utc>) -> String {
    t.due_date()
        .map(|d| time_left_for_date(d, now).to_string())
        .unwrap_or_default()
}

pub fn print_task(t: &Task, now: DateTime<Utc>) {
    println!("Task: {} ({})", t.name(), t.id);
    println!("  Description: {}", t.desc());
    println!("  Category: {}", t.fields.category.as_str());
    println!("  Priority: {}", t.fields.priority.as_str());
    println!("  Due Date: {}", due_text(t));
    println!("  Status: {}", t.status().as_str());
    if t.due_date().is_some() {
        println!("  Countdown: {}", countdown_text(t, now));
    }
}

pub fn print_task_list(tasks: &[Task], now: DateTime<Utc>) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for t in tasks {
        println!(
            "  {:>4} [{}] {} ({}, {}) due {}  {}",
            t.id,
            t.status().as_str(),
            t.name(),
            t.fields.category.as_str(),
            t.fields.priority.as_str(),
            due_text(t),
            countdown_text(t, now)
        );
    }
}
