use chrono::Utc;
use serde_json::json;
use tokio::sync::mpsc;

use crate::client::{HttpTaskApi, TaskClient};
use crate::countdown::{due_instant, time_left, CountdownTimer};
use crate::error::TaskError;
use crate::output;

pub async fn run(id: i64, watch: bool, server: &str, json_output: bool) -> i32 {
    match run_inner(id, watch, server, json_output).await {
        Ok(code) => code,
        Err(e) => super::report(&e, json_output),
    }
}

async fn run_inner(id: i64, watch: bool, server: &str, json_output: bool) -> Result<i32, TaskError> {
    let mut client = TaskClient::new(HttpTaskApi::new(server));
    if let Err(e) = client.load().await {
        return Err(super::user_facing(client.state.error.take(), e));
    }
    let task = client
        .state
        .find(id)
        .cloned()
        .ok_or_else(|| TaskError::task_not_found(id))?;
    let due = task
        .due_date()
        .map(due_instant)
        .ok_or_else(|| TaskError::validation(format!("Task {id} has no due date")))?;

    if !watch {
        let left = time_left(due, Utc::now());
        if json_output {
            output::json::print(&output::json::success(json!({
                "id": task.id,
                "countdown": output::json::countdown_json(&left)
            })));
        } else {
            println!("{}: {left}", task.name());
        }
        return Ok(0);
    }

    let (tx, mut rx) = mpsc::channel(1);
    let timer = CountdownTimer::spawn(due, tx);
    loop {
        tokio::select! {
            next = rx.recv() => match next {
                Some(left) if json_output => println!("{}", output::json::countdown_json(&left)),
                Some(left) => println!("{}: {left}", task.name()),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    drop(timer);
    Ok(0)
}
