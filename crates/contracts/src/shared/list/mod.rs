//! Универсальный конвейер списков: поиск, фильтр по категории, сортировка

pub mod export;
pub mod pipeline;
pub mod query;
pub mod schema;

pub use export::CsvExportable;
pub use pipeline::{
    derive_view, derive_view_refs, list_view, try_derive_view, validate_query, InvalidQueryError,
    ListView,
};
pub use query::{ListQuery, CATEGORY_ALL};
pub use schema::{
    Categorized, ListEntity, ListSchema, Searchable, SortDirection, SortKeyDef, SortValue,
    Sortable,
};
