use anyhow::Context;
use std::sync::Arc;

use contracts::shared::list::{list_view, validate_query, ListEntity, ListQuery, ListView};

use crate::shared::data::source::EntitySource;

/// Loads one entity collection from the injected source and derives the view.
pub struct ListService<T> {
    source: Arc<dyn EntitySource<T>>,
    strict: bool,
}

impl<T> ListService<T>
where
    T: ListEntity + Clone + Send + Sync + 'static,
{
    pub fn new(source: Arc<dyn EntitySource<T>>, strict: bool) -> Self {
        Self { source, strict }
    }

    pub async fn list(&self, query: ListQuery) -> anyhow::Result<ListView<T>> {
        let schema = T::schema();
        let query = query.or_default_sort::<T>();

        // In permissive mode an invalid query still runs and degrades:
        // unknown sort key keeps source order, unknown category matches nothing.
        if let Err(e) = validate_query::<T>(&query) {
            if self.strict {
                return Err(e.into());
            }
            tracing::warn!(entity = schema.entity, "Query accepted in permissive mode: {}", e);
        }

        let records = self
            .source
            .load()
            .await
            .with_context(|| format!("load {} from {}", schema.entity, self.source.describe()))?;

        let view = list_view(&records, &query);
        tracing::debug!(
            entity = schema.entity,
            search = %query.search_term,
            category = %query.category_filter,
            sort = %query.sort_key,
            total = view.total,
            matched = view.matched,
            "List view derived"
        );
        Ok(view)
    }
}
