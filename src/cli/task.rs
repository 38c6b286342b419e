use std::io::{self, BufRead, Write};

use chrono::{NaiveDate, Utc};
use serde_json::json;

use crate::cli::commands::Commands;
use crate::client::{HttpTaskApi, SortOrder, StatusFilter, TaskClient};
use crate::error::TaskError;
use crate::models::{parse_date, Category, Priority, TaskStatus};
use crate::output;

type Client = TaskClient<HttpTaskApi>;

/// Client-side subcommands. Each one loads the full list first, then acts.
pub async fn run(cmd: Commands, server: &str, json_output: bool) -> i32 {
    let mut client = TaskClient::new(HttpTaskApi::new(server));
    let result = match client.load().await {
        Err(e) => Err(e),
        Ok(()) => match cmd {
            Commands::List { filter, search, sort } => {
                run_list(&mut client, &filter, &search, &sort, json_output)
            }
            Commands::Add { name, desc, due, category, priority } => {
                run_add(&mut client, name, desc, due.as_deref(), &category, &priority, json_output).await
            }
            Commands::Edit { id, name, desc, due, category, priority, status } => {
                let edits = Edits { name, desc, due, category, priority, status };
                run_edit(&mut client, id, edits, json_output).await
            }
            Commands::Delete { id, yes } => run_delete(&mut client, id, yes, json_output).await,
            Commands::Toggle { id } => run_toggle(&mut client, id, json_output).await,
            _ => Err(TaskError::validation("not a task command")),
        },
    };
    match result {
        Ok(code) => code,
        Err(e) => super::report(&super::user_facing(client.state.error.take(), e), json_output),
    }
}

fn run_list(
    client: &mut Client,
    filter: &str,
    search: &str,
    sort: &str,
    json_output: bool,
) -> Result<i32, TaskError> {
    client.state.view.filter = StatusFilter::from_str(filter)
        .ok_or_else(|| TaskError::validation(format!("Unknown filter: {filter}")))?;
    client.state.view.sort_order = SortOrder::from_str(sort)
        .ok_or_else(|| TaskError::validation(format!("Unknown sort order: {sort}")))?;
    client.state.view.set_search(search);

    let tasks = client.visible();
    let now = Utc::now();
    if json_output {
        let tasks_json: Vec<_> = tasks.iter().map(|t| output::json::task_json(t, now)).collect();
        let view = &client.state.view;
        output::json::print(&output::json::success(json!({
            "filter": view.filter.as_str(),
            "sort": view.sort_order.as_str(),
            "tasks": tasks_json
        })));
    } else {
        output::text::print_task_list(&tasks, now);
    }
    Ok(0)
}

async fn run_add(
    client: &mut Client,
    name: String,
    desc: String,
    due: Option<&str>,
    category: &str,
    priority: &str,
    json_output: bool,
) -> Result<i32, TaskError> {
    let draft = &mut client.state.draft;
    draft.name = name;
    draft.desc = desc;
    draft.due_date = due.map(parse_due).transpose()?;
    draft.category = parse_category(category)?;
    draft.priority = parse_priority(priority)?;

    let task = client.submit_create().await?;
    print_changed(client, &task, json_output);
    Ok(0)
}

struct Edits {
    name: Option<String>,
    desc: Option<String>,
    due: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    status: Option<String>,
}

async fn run_edit(client: &mut Client, id: i64, edits: Edits, json_output: bool) -> Result<i32, TaskError> {
    if !client.begin_edit(id) {
        return Err(TaskError::task_not_found(id));
    }
    let due = edits.due.as_deref().map(parse_due).transpose()?;
    let category = edits.category.as_deref().map(parse_category).transpose()?;
    let priority = edits.priority.as_deref().map(parse_priority).transpose()?;
    let status = edits
        .status
        .as_deref()
        .map(|s| TaskStatus::from_str(s).ok_or_else(|| TaskError::validation(format!("Unknown status: {s}"))))
        .transpose()?;

    if let Some(buffer) = client.state.editing_mut() {
        let fields = &mut buffer.fields;
        if let Some(name) = edits.name {
            fields.name = name;
        }
        if let Some(desc) = edits.desc {
            fields.desc = desc;
        }
        if due.is_some() {
            fields.due_date = due;
        }
        if let Some(category) = category {
            fields.category = category;
        }
        if let Some(priority) = priority {
            fields.priority = priority;
        }
        if let Some(status) = status {
            fields.status = status;
        }
    }

    let task = client.submit_edit().await?;
    print_changed(client, &task, json_output);
    Ok(0)
}

async fn run_delete(client: &mut Client, id: i64, yes: bool, json_output: bool) -> Result<i32, TaskError> {
    if client.state.find(id).is_none() {
        return Err(TaskError::task_not_found(id));
    }
    let deleted = client.delete(id, |_| yes || confirm_on_stdin()).await?;

    if json_output {
        output::json::print(&output::json::success(json!({ "deleted": deleted, "id": id })));
    } else if deleted {
        println!("{}", client.state.success_message().unwrap_or("Task deleted"));
    } else {
        println!("Cancelled.");
    }
    Ok(0)
}

async fn run_toggle(client: &mut Client, id: i64, json_output: bool) -> Result<i32, TaskError> {
    let task = client
        .toggle_status(id)
        .await?
        .ok_or_else(|| TaskError::task_not_found(id))?;
    print_changed(client, &task, json_output);
    Ok(0)
}

fn print_changed(client: &Client, task: &crate::models::Task, json_output: bool) {
    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(task, Utc::now())
        })));
    } else {
        if let Some(message) = client.state.success_message() {
            println!("{message}");
        }
        output::text::print_task(task, Utc::now());
    }
}

fn confirm_on_stdin() -> bool {
    eprint!("Are you sure you want to delete this task? [y/N] ");
    if io::stderr().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}

fn parse_due(s: &str) -> Result<NaiveDate, TaskError> {
    parse_date(s).ok_or_else(|| TaskError::validation(format!("Invalid due date '{s}', expected YYYY-MM-DD")))
}

fn parse_category(s: &str) -> Result<Category, TaskError> {
    Category::from_str(s).ok_or_else(|| TaskError::validation(format!("Unknown category: {s}")))
}

fn parse_priority(s: &str) -> Result<Priority, TaskError> {
    Priority::from_str(s).ok_or_else(|| TaskError::validation(format!("Unknown priority: {s}")))
}
