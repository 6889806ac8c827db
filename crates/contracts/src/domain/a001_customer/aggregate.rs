use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::list::export::format_decimal;
use crate::shared::list::{
    Categorized, CsvExportable, ListEntity, ListSchema, Searchable, SortKeyDef, SortValue,
    Sortable,
};

// ============================================================================
// Status
// ============================================================================

/// Статус клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    #[serde(rename = "活跃")]
    Active,
    #[serde(rename = "潜在")]
    Potential,
    #[serde(rename = "流失")]
    Churned,
}

impl CustomerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "活跃",
            CustomerStatus::Potential => "潜在",
            CustomerStatus::Churned => "流失",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "活跃" => Some(CustomerStatus::Active),
            "潜在" => Some(CustomerStatus::Potential),
            "流失" => Some(CustomerStatus::Churned),
            _ => None,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Клиент на странице "Клиенты"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: CustomerStatus,
    /// Сумма сделок
    pub value: f64,
    pub last_activity: DateTime<Utc>,
}

static CUSTOMER_SORT_KEYS: &[SortKeyDef] = &[
    SortKeyDef::descending("value", "客户价值"),
    SortKeyDef::descending("lastActivity", "最近活动"),
];

static CUSTOMER_SCHEMA: ListSchema = ListSchema {
    entity: "customers",
    title: "客户管理",
    categories: &["活跃", "潜在", "流失"],
    sort_keys: CUSTOMER_SORT_KEYS,
    default_sort_key: "value",
};

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.company.as_str()]
    }
}

impl Categorized for Customer {
    fn category(&self) -> &str {
        self.status.label()
    }
}

impl Sortable for Customer {
    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "value" => Some(self.value.into()),
            "lastActivity" => Some(self.last_activity.into()),
            _ => None,
        }
    }
}

impl ListEntity for Customer {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn schema() -> &'static ListSchema {
        &CUSTOMER_SCHEMA
    }
}

impl CsvExportable for Customer {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "姓名", "公司", "邮箱", "电话", "状态", "价值", "最近活动"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.company.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.status.label().to_string(),
            format_decimal(self.value),
            self.last_activity.format("%Y-%m-%d %H:%M").to_string(),
        ]
    }
}
