use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::list::{
    Categorized, CsvExportable, ListEntity, ListSchema, Searchable, SortKeyDef, SortValue,
    Sortable,
};

/// Состояние арендатора (tenant) в разделе администрирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenantStatus {
    #[serde(rename = "正常")]
    Active,
    #[serde(rename = "试用")]
    Trial,
    #[serde(rename = "已停用")]
    Suspended,
}

impl TenantStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TenantStatus::Active => "正常",
            TenantStatus::Trial => "试用",
            TenantStatus::Suspended => "已停用",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "正常" => Some(TenantStatus::Active),
            "试用" => Some(TenantStatus::Trial),
            "已停用" => Some(TenantStatus::Suspended),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub domain: String,
    #[serde(default)]
    pub plan: String,
    pub status: TenantStatus,
    pub user_count: u32,
    pub storage_used_gb: f64,
    pub created_at: DateTime<Utc>,
}

static TENANT_SORT_KEYS: &[SortKeyDef] = &[
    SortKeyDef::descending("users", "用户数"),
    SortKeyDef::descending("storage", "存储用量"),
    SortKeyDef::descending("createdAt", "创建时间"),
];

static TENANT_SCHEMA: ListSchema = ListSchema {
    entity: "tenants",
    title: "租户管理",
    categories: &["正常", "试用", "已停用"],
    sort_keys: TENANT_SORT_KEYS,
    default_sort_key: "createdAt",
};

impl Searchable for Tenant {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.domain.as_str()]
    }
}

impl Categorized for Tenant {
    fn category(&self) -> &str {
        self.status.label()
    }
}

impl Sortable for Tenant {
    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "users" => Some(self.user_count.into()),
            "storage" => Some(self.storage_used_gb.into()),
            "createdAt" => Some(self.created_at.into()),
            _ => None,
        }
    }
}

impl ListEntity for Tenant {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn schema() -> &'static ListSchema {
        &TENANT_SCHEMA
    }
}

impl CsvExportable for Tenant {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "租户名称", "域名", "套餐", "状态", "用户数", "存储(GB)", "创建时间"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.domain.clone(),
            self.plan.clone(),
            self.status.label().to_string(),
            self.user_count.to_string(),
            format!("{:.1}", self.storage_used_gb),
            self.created_at.format("%Y-%m-%d").to_string(),
        ]
    }
}
