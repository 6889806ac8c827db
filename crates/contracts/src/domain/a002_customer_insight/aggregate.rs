use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::list::export::format_decimal;
use crate::shared::list::{
    Categorized, CsvExportable, ListEntity, ListSchema, Searchable, SortKeyDef, SortValue,
    Sortable,
};

// ============================================================================
// Segment
// ============================================================================

/// Сегмент клиента в разделе "AI-данные клиентов"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerSegment {
    #[serde(rename = "高价值")]
    HighValue,
    #[serde(rename = "成长型")]
    Growth,
    #[serde(rename = "风险")]
    AtRisk,
    #[serde(rename = "新客户")]
    New,
}

impl CustomerSegment {
    pub fn label(&self) -> &'static str {
        match self {
            CustomerSegment::HighValue => "高价值",
            CustomerSegment::Growth => "成长型",
            CustomerSegment::AtRisk => "风险",
            CustomerSegment::New => "新客户",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "高价值" => Some(CustomerSegment::HighValue),
            "成长型" => Some(CustomerSegment::Growth),
            "风险" => Some(CustomerSegment::AtRisk),
            "新客户" => Some(CustomerSegment::New),
            _ => None,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Клиент с аналитическими показателями (риск оттока, удовлетворённость)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInsight {
    pub id: String,
    pub name: String,
    pub company: String,
    pub segment: CustomerSegment,
    pub value: f64,
    /// Риск оттока, 0..=100
    pub churn_risk: u32,
    /// Оценка удовлетворённости, 0.0..=5.0
    pub satisfaction: f64,
    pub last_activity: DateTime<Utc>,
}

static INSIGHT_SORT_KEYS: &[SortKeyDef] = &[
    SortKeyDef::descending("value", "客户价值"),
    SortKeyDef::descending("churnRisk", "流失风险"),
    SortKeyDef::descending("satisfaction", "满意度"),
    SortKeyDef::descending("lastActivity", "最近活动"),
];

static INSIGHT_SCHEMA: ListSchema = ListSchema {
    entity: "customer-insights",
    title: "AI客户数据",
    categories: &["高价值", "成长型", "风险", "新客户"],
    sort_keys: INSIGHT_SORT_KEYS,
    default_sort_key: "churnRisk",
};

impl Searchable for CustomerInsight {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.company.as_str()]
    }
}

impl Categorized for CustomerInsight {
    fn category(&self) -> &str {
        self.segment.label()
    }
}

impl Sortable for CustomerInsight {
    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "value" => Some(self.value.into()),
            "churnRisk" => Some(self.churn_risk.into()),
            "satisfaction" => Some(self.satisfaction.into()),
            "lastActivity" => Some(self.last_activity.into()),
            _ => None,
        }
    }
}

impl ListEntity for CustomerInsight {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn schema() -> &'static ListSchema {
        &INSIGHT_SCHEMA
    }
}

impl CsvExportable for CustomerInsight {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "姓名", "公司", "分群", "价值", "流失风险", "满意度", "最近活动"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.company.clone(),
            self.segment.label().to_string(),
            format_decimal(self.value),
            self.churn_risk.to_string(),
            format!("{:.1}", self.satisfaction),
            self.last_activity.format("%Y-%m-%d %H:%M").to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{derive_view, ListQuery};
    use chrono::TimeZone;

    fn insight(id: &str, churn_risk: u32, satisfaction: f64, day: u32) -> CustomerInsight {
        CustomerInsight {
            id: id.to_string(),
            name: format!("客户{}", id),
            company: "示例公司".to_string(),
            segment: CustomerSegment::Growth,
            value: 100000.0,
            churn_risk,
            satisfaction,
            last_activity: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_segment_labels_match_schema() {
        for label in INSIGHT_SCHEMA.categories {
            assert_eq!(CustomerSegment::from_label(label).unwrap().label(), *label);
        }
    }

    #[test]
    fn test_default_sort_is_churn_risk_descending() {
        let items = vec![
            insight("a", 20, 4.5, 1),
            insight("b", 85, 2.1, 2),
            insight("c", 40, 3.8, 3),
        ];
        let view = derive_view(&items, &ListQuery::for_entity::<CustomerInsight>());
        let ids: Vec<&str> = view.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_last_activity_is_most_recent_first() {
        let items = vec![
            insight("a", 20, 4.5, 1),
            insight("b", 85, 2.1, 20),
            insight("c", 40, 3.8, 10),
        ];
        let query = ListQuery::for_entity::<CustomerInsight>().with_sort("lastActivity");
        let view = derive_view(&items, &query);
        let ids: Vec<&str> = view.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
