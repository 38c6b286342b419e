//! Derived view over the in-memory task list.
//!
//! [`derive_view`] is pure: the same tasks and parameters always produce the
//! same output, and it is recomputed from scratch on every change.

use std::cmp::Ordering;

use crate::models::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    InProgress,
    Completed,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    fn admits(&self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::InProgress => status == TaskStatus::InProgress,
            Self::Completed => status == TaskStatus::Completed,
        }
    }
}

/// Due-date sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub filter: StatusFilter,
    search_query: String,
    pub sort_order: SortOrder,
}

impl ViewParams {
    pub fn new(filter: StatusFilter, search: &str, sort_order: SortOrder) -> Self {
        let mut params = Self {
            filter,
            search_query: String::new(),
            sort_order,
        };
        params.set_search(search);
        params
    }

    /// Stored lowercased; matching is case-insensitive.
    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_lowercase();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }
}

pub fn derive_view(tasks: &[Task], params: &ViewParams) -> Vec<Task> {
    let query = params.search_query();
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|t| params.filter.admits(t.status()))
        .filter(|t| matches_query(t, query))
        .cloned()
        .collect();
    view.sort_by(|a, b| compare_due(a, b, params.sort_order));
    view
}

fn matches_query(task: &Task, query: &str) -> bool {
    task.name().to_lowercase().contains(query) || task.desc().to_lowercase().contains(query)
}

// Tasks without a due date sort before dated ones when ascending.
fn compare_due(a: &Task, b: &Task, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => a.due_date().cmp(&b.due_date()),
        SortOrder::Desc => b.due_date().cmp(&a.due_date()),
    }
}
