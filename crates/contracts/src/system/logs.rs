use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::list::{
    Categorized, CsvExportable, ListEntity, ListSchema, Searchable, SortKeyDef, SortValue,
    Sortable,
};

/// Уровень записи системного журнала
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    #[serde(rename = "信息")]
    Info,
    #[serde(rename = "警告")]
    Warning,
    #[serde(rename = "错误")]
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "信息",
            LogLevel::Warning => "警告",
            LogLevel::Error => "错误",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "信息" => Some(LogLevel::Info),
            "警告" => Some(LogLevel::Warning),
            "错误" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// Запись лога системы
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Модуль-источник ("auth", "billing", ...)
    pub module: String,
    pub message: String,
}

static LOG_SORT_KEYS: &[SortKeyDef] = &[SortKeyDef::descending("timestamp", "时间")];

static LOG_SCHEMA: ListSchema = ListSchema {
    entity: "logs",
    title: "系统日志",
    categories: &["信息", "警告", "错误"],
    sort_keys: LOG_SORT_KEYS,
    default_sort_key: "timestamp",
};

impl Searchable for LogEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.message.as_str(), self.module.as_str()]
    }
}

impl Categorized for LogEntry {
    fn category(&self) -> &str {
        self.level.label()
    }
}

impl Sortable for LogEntry {
    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "timestamp" => Some(self.timestamp.into()),
            _ => None,
        }
    }
}

impl ListEntity for LogEntry {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn schema() -> &'static ListSchema {
        &LOG_SCHEMA
    }
}

impl CsvExportable for LogEntry {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "时间", "级别", "模块", "内容"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.level.label().to_string(),
            self.module.clone(),
            self.message.clone(),
        ]
    }
}
