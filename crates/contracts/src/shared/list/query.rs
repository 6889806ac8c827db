use serde::{Deserialize, Serialize};

use super::schema::ListEntity;

/// Значение фильтра категории, которое не исключает ни одной записи
pub const CATEGORY_ALL: &str = "all";

/// Состояние запроса списка: строка поиска, фильтр категории и ключ сортировки
///
/// Создаётся со значениями по умолчанию при открытии страницы и меняется
/// только пользовательским вводом.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub search_term: String,

    #[serde(default = "default_category_filter")]
    pub category_filter: String,

    #[serde(default)]
    pub sort_key: String,
}

fn default_category_filter() -> String {
    CATEGORY_ALL.to_string()
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category_filter: default_category_filter(),
            sort_key: String::new(),
        }
    }
}

impl ListQuery {
    /// Запрос по умолчанию для сущности: пустой поиск, "all", ключ сортировки из схемы
    pub fn for_entity<T: ListEntity>() -> Self {
        Self {
            sort_key: T::schema().default_sort_key.to_string(),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_filter = category.into();
        self
    }

    pub fn with_sort(mut self, key: impl Into<String>) -> Self {
        self.sort_key = key.into();
        self
    }

    /// Пустой ключ сортировки заменяется ключом по умолчанию из схемы
    pub fn or_default_sort<T: ListEntity>(mut self) -> Self {
        if self.sort_key.is_empty() {
            self.sort_key = T::schema().default_sort_key.to_string();
        }
        self
    }

    pub fn is_category_all(&self) -> bool {
        self.category_filter == CATEGORY_ALL
    }
}
