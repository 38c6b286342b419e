use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Calendar format used for `dueDate` on the wire and in the table.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Work,
    Personal,
    Urgent,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Urgent => "Urgent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Work" => Some(Self::Work),
            "Personal" => Some(Self::Personal),
            "Urgent" => Some(Self::Urgent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::InProgress => Self::Completed,
            Self::Completed => Self::InProgress,
        }
    }
}

/// The editable part of a task. Body of both create and update requests.
///
/// Every field has a default so a partial body is accepted and stored as-is;
/// presence checks happen on the client before anything is sent. Missing
/// keys, `null` values and an empty `dueDate` all read as the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFields {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: Category,
    #[serde(deserialize_with = "null_as_default")]
    pub priority: Priority,
    #[serde(rename = "dueDate", deserialize_with = "blank_date_as_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: TaskStatus,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    #[serde(flatten)]
    pub fields: TaskFields,
}

impl Task {
    pub fn new(id: i64, fields: TaskFields) -> Self {
        Self { id, fields }
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn desc(&self) -> &str {
        &self.fields.desc
    }

    pub fn status(&self) -> TaskStatus {
        self.fields.status
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.fields.due_date
    }
}

/// Parse a stored or user-supplied `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Confirmation body returned by a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
    pub id: i64,
}

impl Deleted {
    pub fn new(id: i64) -> Self {
        Self {
            message: "Task deleted".to_string(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_serializes_with_flat_camel_case_due_date() {
        let task = Task::new(
            3,
            TaskFields {
                name: "Write report".into(),
                desc: "Quarterly numbers".into(),
                category: Category::Urgent,
                priority: Priority::High,
                due_date: parse_date("2024-05-01"),
                status: TaskStatus::Completed,
            },
        );
        let v = serde_json::to_value(&task).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 3,
                "name": "Write report",
                "desc": "Quarterly numbers",
                "category": "Urgent",
                "priority": "High",
                "dueDate": "2024-05-01",
                "status": "completed"
            })
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let fields: TaskFields = serde_json::from_value(json!({ "name": "only a name" })).unwrap();
        assert_eq!(fields.name, "only a name");
        assert_eq!(fields.desc, "");
        assert_eq!(fields.category, Category::Work);
        assert_eq!(fields.priority, Priority::Medium);
        assert_eq!(fields.due_date, None);
        assert_eq!(fields.status, TaskStatus::InProgress);
    }

    #[test]
    fn null_fields_and_blank_due_date_fall_back_to_defaults() {
        let fields: TaskFields = serde_json::from_value(json!({
            "name": null,
            "desc": "d",
            "category": null,
            "priority": null,
            "dueDate": "",
            "status": null
        }))
        .unwrap();
        assert_eq!(fields, TaskFields { desc: "d".into(), ..TaskFields::default() });

        let fields: TaskFields = serde_json::from_value(json!({ "dueDate": null })).unwrap();
        assert_eq!(fields.due_date, None);
    }

    #[test]
    fn task_with_null_fields_reads_through_flatten() {
        let task: Task = serde_json::from_value(json!({ "id": 7, "name": null, "dueDate": "2024-05-01" })).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.name(), "");
        assert_eq!(task.due_date(), parse_date("2024-05-01"));
    }

    #[test]
    fn status_toggles_both_ways() {
        assert_eq!(TaskStatus::InProgress.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::InProgress);
    }

    #[test]
    fn string_forms_match_wire_values() {
        for c in [Category::Work, Category::Personal, Category::Urgent] {
            assert_eq!(Category::from_str(c.as_str()), Some(c));
        }
        for p in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(Priority::from_str(p.as_str()), Some(p));
        }
        assert_eq!(TaskStatus::from_str("in-progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::from_str("done"), None);
        assert_eq!(parse_date("not a date"), None);
    }
}
