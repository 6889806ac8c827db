use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::list::{
    Categorized, CsvExportable, ListEntity, ListSchema, Searchable, SortKeyDef, SortValue,
    Sortable,
};

// ============================================================================
// Status / Priority
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "待办")]
    Todo,
    #[serde(rename = "进行中")]
    InProgress,
    #[serde(rename = "已完成")]
    Done,
    #[serde(rename = "已逾期")]
    Overdue,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "待办",
            TaskStatus::InProgress => "进行中",
            TaskStatus::Done => "已完成",
            TaskStatus::Overdue => "已逾期",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "待办" => Some(TaskStatus::Todo),
            "进行中" => Some(TaskStatus::InProgress),
            "已完成" => Some(TaskStatus::Done),
            "已逾期" => Some(TaskStatus::Overdue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    #[serde(rename = "高")]
    High,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "低")]
    Low,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::High => "高",
            TaskPriority::Medium => "中",
            TaskPriority::Low => "低",
        }
    }

    /// Числовой вес для сортировки: чем выше, тем важнее
    pub fn rank(&self) -> u32 {
        match self {
            TaskPriority::High => 3,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 1,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Прогресс, 0..=100
    pub progress: u32,
    pub due_date: NaiveDate,
}

static TASK_SORT_KEYS: &[SortKeyDef] = &[
    SortKeyDef::descending("priority", "优先级"),
    SortKeyDef::descending("progress", "进度"),
    SortKeyDef::descending("dueDate", "截止日期"),
];

static TASK_SCHEMA: ListSchema = ListSchema {
    entity: "tasks",
    title: "任务管理",
    categories: &["待办", "进行中", "已完成", "已逾期"],
    sort_keys: TASK_SORT_KEYS,
    default_sort_key: "dueDate",
};

impl Searchable for Task {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.assignee.as_str()]
    }
}

impl Categorized for Task {
    fn category(&self) -> &str {
        self.status.label()
    }
}

impl Sortable for Task {
    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "priority" => Some(self.priority.rank().into()),
            "progress" => Some(self.progress.into()),
            "dueDate" => Some(self.due_date.into()),
            _ => None,
        }
    }
}

impl ListEntity for Task {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn schema() -> &'static ListSchema {
        &TASK_SCHEMA
    }
}

impl CsvExportable for Task {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "标题", "负责人", "状态", "优先级", "进度", "截止日期"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.assignee.clone(),
            self.status.label().to_string(),
            self.priority.label().to_string(),
            format!("{}%", self.progress),
            self.due_date.format("%Y-%m-%d").to_string(),
        ]
    }
}
