use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::list::{
    Categorized, CsvExportable, ListEntity, ListSchema, Searchable, SortKeyDef, SortValue,
    Sortable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigCategory {
    #[serde(rename = "系统")]
    System,
    #[serde(rename = "安全")]
    Security,
    #[serde(rename = "通知")]
    Notification,
    #[serde(rename = "存储")]
    Storage,
}

impl ConfigCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ConfigCategory::System => "系统",
            ConfigCategory::Security => "安全",
            ConfigCategory::Notification => "通知",
            ConfigCategory::Storage => "存储",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "系统" => Some(ConfigCategory::System),
            "安全" => Some(ConfigCategory::Security),
            "通知" => Some(ConfigCategory::Notification),
            "存储" => Some(ConfigCategory::Storage),
            _ => None,
        }
    }
}

/// Параметр конфигурации в разделе "Управление системой"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    pub id: String,
    pub key: String,
    pub value: String,
    pub description: String,
    pub category: ConfigCategory,
    pub updated_at: DateTime<Utc>,
}

static CONFIG_SORT_KEYS: &[SortKeyDef] = &[SortKeyDef::descending("updatedAt", "更新时间")];

static CONFIG_SCHEMA: ListSchema = ListSchema {
    entity: "configs",
    title: "系统配置",
    categories: &["系统", "安全", "通知", "存储"],
    sort_keys: CONFIG_SORT_KEYS,
    default_sort_key: "updatedAt",
};

impl Searchable for ConfigEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.key.as_str(), self.description.as_str()]
    }
}

impl Categorized for ConfigEntry {
    fn category(&self) -> &str {
        self.category.label()
    }
}

impl Sortable for ConfigEntry {
    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "updatedAt" => Some(self.updated_at.into()),
            _ => None,
        }
    }
}

impl ListEntity for ConfigEntry {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn schema() -> &'static ListSchema {
        &CONFIG_SCHEMA
    }
}

impl CsvExportable for ConfigEntry {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "配置项", "值", "说明", "分类", "更新时间"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.key.clone(),
            self.value.clone(),
            self.description.clone(),
            self.category.label().to_string(),
            self.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_schema() {
        for label in CONFIG_SCHEMA.categories {
            assert_eq!(ConfigCategory::from_label(label).unwrap().label(), *label);
        }
        assert!(ConfigCategory::from_label("all").is_none());
    }
}
