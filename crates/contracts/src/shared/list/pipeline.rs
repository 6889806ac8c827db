//! Построение отображаемого списка: поиск → фильтр категории → сортировка.
//!
//! Все функции чистые: исходный срез не изменяется, результат
//! пересчитывается целиком при каждом изменении запроса.

use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error;

use super::query::{ListQuery, CATEGORY_ALL};
use super::schema::{ListEntity, SortDirection};

/// Ошибка строгой проверки запроса списка
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidQueryError {
    #[error("unknown sort key '{key}' for {entity}")]
    UnknownSortKey { entity: &'static str, key: String },

    #[error("unknown category '{value}' for {entity}")]
    UnknownCategory { entity: &'static str, value: String },
}

/// Результат построения списка вместе со счётчиками
#[derive(Debug, Clone, Serialize)]
pub struct ListView<T> {
    pub items: Vec<T>,
    /// Количество записей в источнике
    pub total: usize,
    /// Количество записей после фильтрации
    pub matched: usize,
}

fn passes_filters<T: ListEntity>(record: &T, query: &ListQuery) -> bool {
    if !record.matches_search(&query.search_term) {
        return false;
    }
    query.category_filter == CATEGORY_ALL || record.category() == query.category_filter
}

/// Фильтрует и сортирует записи, возвращая ссылки в порядке отображения.
///
/// Неизвестный ключ сортировки оставляет порядок источника,
/// неизвестная категория даёт пустой список.
pub fn derive_view_refs<'a, T: ListEntity>(records: &'a [T], query: &ListQuery) -> Vec<&'a T> {
    let filtered: Vec<&T> = records
        .iter()
        .filter(|record| passes_filters(*record, query))
        .collect();

    let Some(sort_def) = T::schema().find_sort_key(&query.sort_key) else {
        return filtered;
    };

    let mut keyed: Vec<_> = filtered
        .into_iter()
        .map(|record| (record.sort_value(sort_def.key), record))
        .collect();

    // sort_by стабилен: равные значения сохраняют порядок источника
    keyed.sort_by(|(a, _), (b, _)| {
        let cmp = match (a, b) {
            (Some(a), Some(b)) => a.compare(b),
            _ => Ordering::Equal,
        };
        match sort_def.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// То же, что [`derive_view_refs`], но с клонированием записей
pub fn derive_view<T: ListEntity + Clone>(records: &[T], query: &ListQuery) -> Vec<T> {
    derive_view_refs(records, query)
        .into_iter()
        .cloned()
        .collect()
}

/// Список вместе со счётчиками total/matched
pub fn list_view<T: ListEntity + Clone>(records: &[T], query: &ListQuery) -> ListView<T> {
    let items = derive_view(records, query);
    ListView {
        total: records.len(),
        matched: items.len(),
        items,
    }
}

/// Строгая проверка запроса: ключ сортировки и категория должны быть из схемы
pub fn validate_query<T: ListEntity>(query: &ListQuery) -> Result<(), InvalidQueryError> {
    let schema = T::schema();

    if schema.find_sort_key(&query.sort_key).is_none() {
        return Err(InvalidQueryError::UnknownSortKey {
            entity: schema.entity,
            key: query.sort_key.clone(),
        });
    }

    if !query.is_category_all() && !schema.has_category(&query.category_filter) {
        return Err(InvalidQueryError::UnknownCategory {
            entity: schema.entity,
            value: query.category_filter.clone(),
        });
    }

    Ok(())
}

pub fn try_derive_view<T: ListEntity + Clone>(
    records: &[T],
    query: &ListQuery,
) -> Result<Vec<T>, InvalidQueryError> {
    validate_query::<T>(query)?;
    Ok(derive_view(records, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::aggregate::{Customer, CustomerStatus};
    use crate::shared::list::schema::{
        Categorized, ListSchema, Searchable, SortKeyDef, SortValue, Sortable,
    };
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    #[derive(Debug, Clone)]
    struct Row {
        id: &'static str,
        name: &'static str,
        company: &'static str,
        status: &'static str,
        value: f64,
    }

    static ROW_SORT_KEYS: &[SortKeyDef] = &[
        SortKeyDef::descending("value", "Value"),
        SortKeyDef {
            key: "name",
            label: "Name",
            direction: SortDirection::Ascending,
        },
    ];

    static ROW_SCHEMA: ListSchema = ListSchema {
        entity: "rows",
        title: "Rows",
        categories: &["进行中", "已完成"],
        sort_keys: ROW_SORT_KEYS,
        default_sort_key: "value",
    };

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.company]
        }
    }

    impl Categorized for Row {
        fn category(&self) -> &str {
            self.status
        }
    }

    impl Sortable for Row {
        fn sort_value(&self, key: &str) -> Option<SortValue> {
            match key {
                "value" => Some(SortValue::Number(self.value)),
                "name" => Some(SortValue::Text(self.name.to_string())),
                _ => None,
            }
        }
    }

    impl ListEntity for Row {
        fn record_id(&self) -> &str {
            self.id
        }

        fn schema() -> &'static ListSchema {
            &ROW_SCHEMA
        }
    }

    fn row(id: &'static str, name: &'static str, status: &'static str, value: f64) -> Row {
        Row {
            id,
            name,
            company: "ACME",
            status,
            value,
        }
    }

    fn ids<T: ListEntity>(items: &[T]) -> Vec<&str> {
        items.iter().map(|r| r.record_id()).collect()
    }

    fn customer(
        id: &str,
        name: &str,
        company: &str,
        status: CustomerStatus,
        value: f64,
    ) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            company: company.to_string(),
            email: format!("{}@example.com", id),
            phone: String::new(),
            status,
            value,
            last_activity: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_identity_query_keeps_all_ids() {
        let rows = vec![
            row("1", "a", "进行中", 10.0),
            row("2", "b", "已完成", 50.0),
            row("3", "c", "进行中", 30.0),
        ];
        let view = derive_view(&rows, &ListQuery::for_entity::<Row>());

        let source: HashSet<_> = rows.iter().map(|r| r.id).collect();
        let derived: HashSet<_> = view.iter().map(|r| r.id).collect();
        assert_eq!(source, derived);
        assert_eq!(view.len(), rows.len());
        assert_eq!(ids(&view), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring_across_fields() {
        let customers = vec![customer("1", "张三", "ABC科技", CustomerStatus::Active, 1.0)];

        let hit = derive_view(&customers, &ListQuery::for_entity::<Customer>().with_search("abc"));
        assert_eq!(ids(&hit), vec!["1"]);

        let by_name = derive_view(
            &customers,
            &ListQuery::for_entity::<Customer>().with_search("张"),
        );
        assert_eq!(ids(&by_name), vec!["1"]);

        let miss = derive_view(&customers, &ListQuery::for_entity::<Customer>().with_search("zzz"));
        assert!(miss.is_empty());
    }

    #[test]
    fn test_category_is_exact_match() {
        let rows = vec![row("1", "a", "进行中", 1.0)];
        let base = ListQuery::for_entity::<Row>();

        assert!(derive_view(&rows, &base.clone().with_category("进行")).is_empty());
        assert_eq!(derive_view(&rows, &base.clone().with_category("进行中")).len(), 1);
        assert_eq!(derive_view(&rows, &base.with_category(CATEGORY_ALL)).len(), 1);
    }

    #[test]
    fn test_sort_descending_by_value() {
        let rows = vec![
            row("a", "a", "进行中", 10.0),
            row("b", "b", "进行中", 50.0),
            row("c", "c", "进行中", 30.0),
        ];
        let view = derive_view(&rows, &ListQuery::for_entity::<Row>().with_sort("value"));
        let values: Vec<f64> = view.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![50.0, 30.0, 10.0]);
    }

    #[test]
    fn test_ascending_key_and_stable_ties() {
        let rows = vec![
            row("1", "b", "进行中", 5.0),
            row("2", "a", "进行中", 5.0),
            row("3", "c", "进行中", 5.0),
        ];
        let by_value = derive_view(&rows, &ListQuery::for_entity::<Row>());
        assert_eq!(ids(&by_value), vec!["1", "2", "3"]);

        let by_name = derive_view(&rows, &ListQuery::for_entity::<Row>().with_sort("name"));
        assert_eq!(ids(&by_name), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_unknown_sort_key_keeps_input_order() {
        let rows = vec![
            row("1", "a", "进行中", 10.0),
            row("2", "b", "已完成", 50.0),
            row("3", "c", "进行中", 30.0),
        ];
        let query = ListQuery::for_entity::<Row>()
            .with_sort("nope")
            .with_category("进行中");
        assert_eq!(ids(&derive_view(&rows, &query)), vec!["1", "3"]);
    }

    #[test]
    fn test_unknown_category_yields_empty_view() {
        let rows = vec![row("1", "a", "进行中", 10.0)];
        let query = ListQuery::for_entity::<Row>().with_category("archived");
        assert!(derive_view(&rows, &query).is_empty());
    }

    #[test]
    fn test_search_and_category_are_combined_with_and() {
        let rows = vec![
            row("1", "alpha", "进行中", 1.0),
            row("2", "alpha", "已完成", 2.0),
            row("3", "beta", "进行中", 3.0),
        ];
        let query = ListQuery::for_entity::<Row>()
            .with_search("ALP")
            .with_category("进行中");
        assert_eq!(ids(&derive_view(&rows, &query)), vec!["1"]);
    }

    #[test]
    fn test_end_to_end_customer_search() {
        let customers = vec![
            customer("1", "张三", "ABC", CustomerStatus::Active, 500000.0),
            customer("2", "李四", "XYZ", CustomerStatus::Potential, 300000.0),
        ];
        let query = ListQuery::default().with_search("李").with_sort("value");
        let view = derive_view(&customers, &query);
        assert_eq!(ids(&view), vec!["2"]);
        assert_eq!(view[0].name, "李四");
    }

    #[test]
    fn test_source_is_not_mutated() {
        let rows = vec![row("1", "a", "进行中", 10.0), row("2", "b", "进行中", 50.0)];
        let _ = derive_view_refs(&rows, &ListQuery::for_entity::<Row>());
        assert_eq!(ids(&rows), vec!["1", "2"]);
    }

    #[test]
    fn test_list_view_counts() {
        let rows = vec![
            row("1", "a", "进行中", 1.0),
            row("2", "b", "已完成", 2.0),
            row("3", "c", "进行中", 3.0),
        ];
        let view = list_view(&rows, &ListQuery::for_entity::<Row>().with_category("已完成"));
        assert_eq!(view.total, 3);
        assert_eq!(view.matched, 1);
        assert_eq!(ids(&view.items), vec!["2"]);
    }

    #[test]
    fn test_validate_query_rejects_unknown_values() {
        let ok = ListQuery::for_entity::<Row>().with_category("已完成");
        assert!(validate_query::<Row>(&ok).is_ok());

        let bad_sort = ListQuery::for_entity::<Row>().with_sort("lastActivity");
        assert_eq!(
            validate_query::<Row>(&bad_sort),
            Err(InvalidQueryError::UnknownSortKey {
                entity: "rows",
                key: "lastActivity".to_string(),
            })
        );

        let bad_category = ListQuery::for_entity::<Row>().with_category("进行");
        let err = try_derive_view(&[row("1", "a", "进行中", 1.0)], &bad_category).unwrap_err();
        assert_eq!(err.to_string(), "unknown category '进行' for rows");
    }
}
