use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::list::export::format_decimal;
use crate::shared::list::{
    Categorized, CsvExportable, ListEntity, ListSchema, Searchable, SortKeyDef, SortValue,
    Sortable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "规划中")]
    Planning,
    #[serde(rename = "进行中")]
    Active,
    #[serde(rename = "已完成")]
    Completed,
    #[serde(rename = "已暂停")]
    OnHold,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "规划中",
            ProjectStatus::Active => "进行中",
            ProjectStatus::Completed => "已完成",
            ProjectStatus::OnHold => "已暂停",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "规划中" => Some(ProjectStatus::Planning),
            "进行中" => Some(ProjectStatus::Active),
            "已完成" => Some(ProjectStatus::Completed),
            "已暂停" => Some(ProjectStatus::OnHold),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub manager: String,
    pub status: ProjectStatus,
    pub progress: u32,
    pub budget: f64,
    pub end_date: NaiveDate,
}

static PROJECT_SORT_KEYS: &[SortKeyDef] = &[
    SortKeyDef::descending("progress", "进度"),
    SortKeyDef::descending("budget", "预算"),
    SortKeyDef::descending("endDate", "结束日期"),
];

static PROJECT_SCHEMA: ListSchema = ListSchema {
    entity: "projects",
    title: "项目管理",
    categories: &["规划中", "进行中", "已完成", "已暂停"],
    sort_keys: PROJECT_SORT_KEYS,
    default_sort_key: "progress",
};

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.manager.as_str()]
    }
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.status.label()
    }
}

impl Sortable for Project {
    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "progress" => Some(self.progress.into()),
            "budget" => Some(self.budget.into()),
            "endDate" => Some(self.end_date.into()),
            _ => None,
        }
    }
}

impl ListEntity for Project {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn schema() -> &'static ListSchema {
        &PROJECT_SCHEMA
    }
}

impl CsvExportable for Project {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "项目名称", "负责人", "状态", "进度", "预算", "结束日期"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.manager.clone(),
            self.status.label().to_string(),
            format!("{}%", self.progress),
            format_decimal(self.budget),
            self.end_date.format("%Y-%m-%d").to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{derive_view, ListQuery};

    #[test]
    fn test_labels_match_schema() {
        for label in PROJECT_SCHEMA.categories {
            assert_eq!(ProjectStatus::from_label(label).unwrap().label(), *label);
        }
        assert!(ProjectStatus::from_label("all").is_none());
    }

    #[test]
    fn test_end_date_sort_is_latest_first() {
        let project = |id: &str, day: u32| Project {
            id: id.to_string(),
            name: format!("项目{}", id),
            manager: "赵六".to_string(),
            status: ProjectStatus::Active,
            progress: 50,
            budget: 1000.0,
            end_date: NaiveDate::from_ymd_opt(2024, 12, day).unwrap(),
        };
        let projects = vec![project("a", 5), project("b", 25), project("c", 15)];

        let view = derive_view(&projects, &ListQuery::for_entity::<Project>().with_sort("endDate"));
        let ids: Vec<&str> = view.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
