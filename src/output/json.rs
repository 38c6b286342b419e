use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::countdown::{time_left_for_date, Countdown};
use crate::error::TaskError;
use crate::models::Task;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn print(v: &Value) {
    match serde_json::to_string_pretty(v) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

/// The task as the store returns it, plus its countdown at `now`.
pub fn task_json(t: &Task, now: DateTime<Utc>) -> Value {
    let mut v = json!(t);
    v["countdown"] = match t.due_date() {
        Some(date) => countdown_json(&time_left_for_date(date, now)),
        None => Value::Null,
    };
    v
}

pub fn countdown_json(c: &Countdown) -> Value {
    match c {
        Countdown::Overdue => json!({ "state": "overdue", "display": c.to_string() }),
        Countdown::TimesUp => json!({ "state": "times_up", "display": c.to_string() }),
        Countdown::Remaining(left) => json!({
            "state": "remaining",
            "days": left.days,
            "hours": left.hours,
            "minutes": left.minutes,
            "seconds": left.seconds,
            "display": c.to_string()
        }),
    }
}
