//! Описание списков сущностей: какие поля участвуют в поиске,
//! какое поле является категорией и какие ключи сортировки доступны.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Направление сортировки для ключа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Ключ сортировки списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortKeyDef {
    /// Значение, которое приходит из выпадающего списка (например, "churnRisk")
    pub key: &'static str,
    /// Подпись для UI
    pub label: &'static str,
    pub direction: SortDirection,
}

impl SortKeyDef {
    pub const fn descending(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            direction: SortDirection::Descending,
        }
    }
}

/// Статическая схема списка сущности
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListSchema {
    /// Имя сущности в командах и логах (например, "customers")
    pub entity: &'static str,
    /// Заголовок списка для UI
    pub title: &'static str,
    /// Допустимые значения категории (без "all")
    pub categories: &'static [&'static str],
    pub sort_keys: &'static [SortKeyDef],
    pub default_sort_key: &'static str,
}

impl ListSchema {
    pub fn find_sort_key(&self, key: &str) -> Option<&SortKeyDef> {
        self.sort_keys.iter().find(|def| def.key == key)
    }

    pub fn has_category(&self, value: &str) -> bool {
        self.categories.contains(&value)
    }
}

/// Значение поля, по которому идёт сортировка
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl SortValue {
    /// Сравнение двух значений одного вида.
    /// Разные виды и NaN считаются равными.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            (SortValue::Timestamp(a), SortValue::Timestamp(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<NaiveDate> for SortValue {
    fn from(value: NaiveDate) -> Self {
        SortValue::Date(value)
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(value: DateTime<Utc>) -> Self {
        SortValue::Timestamp(value)
    }
}

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Текстовые поля, по которым ищет строка поиска
    fn search_fields(&self) -> Vec<&str>;

    /// Регистронезависимое вхождение подстроки хотя бы в одно поле.
    /// Пустая строка поиска подходит под любую запись.
    fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Trait для типов с категорией (статус, сегмент, уровень)
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Значение поля для ключа сортировки; `None` для неизвестного ключа
    fn sort_value(&self, key: &str) -> Option<SortValue>;
}

/// Запись, которую можно показать в списке дашборда
pub trait ListEntity: Searchable + Categorized + Sortable {
    fn record_id(&self) -> &str;

    fn schema() -> &'static ListSchema;
}
