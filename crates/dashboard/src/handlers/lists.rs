use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_customer_insight::aggregate::CustomerInsight;
use contracts::domain::a003_task::aggregate::Task;
use contracts::domain::a004_project::aggregate::Project;
use contracts::domain::a005_tenant::aggregate::Tenant;
use contracts::shared::list::{CsvExportable, ListEntity, ListQuery};
use contracts::system::config_entries::ConfigEntry;
use contracts::system::logs::LogEntry;

use crate::shared::config::{get_fixtures_dir, Config};
use crate::shared::data::fixtures;
use crate::shared::data::source::{EntitySource, JsonFileSource, StaticSource};
use crate::shared::list::debounce::SearchDebouncer;
use crate::shared::list::export::to_csv;
use crate::shared::list::service::ListService;

/// Lists available in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customers,
    CustomerInsights,
    Tasks,
    Projects,
    Tenants,
    Configs,
    Logs,
}

impl EntityKind {
    pub fn all() -> Vec<EntityKind> {
        vec![
            EntityKind::Customers,
            EntityKind::CustomerInsights,
            EntityKind::Tasks,
            EntityKind::Projects,
            EntityKind::Tenants,
            EntityKind::Configs,
            EntityKind::Logs,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Customers => Customer::schema().entity,
            EntityKind::CustomerInsights => CustomerInsight::schema().entity,
            EntityKind::Tasks => Task::schema().entity,
            EntityKind::Projects => Project::schema().entity,
            EntityKind::Tenants => Tenant::schema().entity,
            EntityKind::Configs => ConfigEntry::schema().entity,
            EntityKind::Logs => LogEntry::schema().entity,
        }
    }
}

impl FromStr for EntityKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::all()
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown list '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Shared settings for building list services
pub struct DashboardContext {
    fixtures_dir: Option<PathBuf>,
    strict: bool,
    debounce: Duration,
}

impl DashboardContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            fixtures_dir: get_fixtures_dir(config),
            strict: config.list.strict_queries,
            debounce: Duration::from_millis(config.list.search_debounce_ms),
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = self.strict || strict;
        self
    }

    fn service<T>(&self, builtin: &Lazy<Vec<T>>) -> ListService<T>
    where
        T: ListEntity + Clone + Send + Sync + serde::de::DeserializeOwned + 'static,
    {
        let source: Arc<dyn EntitySource<T>> = match &self.fixtures_dir {
            Some(dir) => {
                let path = dir.join(format!("{}.json", T::schema().entity));
                Arc::new(JsonFileSource::new(path))
            }
            None => Arc::new(StaticSource::new(Vec::clone(builtin))),
        };
        ListService::new(source, self.strict)
    }
}

async fn render<T>(
    service: ListService<T>,
    query: ListQuery,
    format: OutputFormat,
) -> anyhow::Result<String>
where
    T: ListEntity + CsvExportable + Serialize + Clone + Send + Sync + 'static,
{
    let view = service.list(query).await?;
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&view).context("serialize view"),
        OutputFormat::Csv => to_csv(&view.items),
    }
}

/// Derives one list view and renders it
pub async fn run_list(
    ctx: &DashboardContext,
    kind: EntityKind,
    query: ListQuery,
    format: OutputFormat,
) -> anyhow::Result<String> {
    tracing::info!(list = kind.name(), "Rendering list");
    match kind {
        EntityKind::Customers => render(ctx.service(&fixtures::CUSTOMERS), query, format).await,
        EntityKind::CustomerInsights => {
            render(ctx.service(&fixtures::CUSTOMER_INSIGHTS), query, format).await
        }
        EntityKind::Tasks => render(ctx.service(&fixtures::TASKS), query, format).await,
        EntityKind::Projects => render(ctx.service(&fixtures::PROJECTS), query, format).await,
        EntityKind::Tenants => render(ctx.service(&fixtures::TENANTS), query, format).await,
        EntityKind::Configs => render(ctx.service(&fixtures::CONFIG_ENTRIES), query, format).await,
        EntityKind::Logs => render(ctx.service(&fixtures::LOG_ENTRIES), query, format).await,
    }
}

/// Reads search terms from stdin, one per line, and re-renders the list
/// once typing settles. An empty line clears the search immediately.
pub async fn run_interactive(
    ctx: &DashboardContext,
    kind: EntityKind,
    base: ListQuery,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (mut debouncer, mut settled) = SearchDebouncer::new(ctx.debounce);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", run_list(ctx, kind, base.clone(), format).await?);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("read stdin")? {
                    Some(line) if line.trim().is_empty() => debouncer.clear(),
                    Some(line) => debouncer.submit(line.trim()),
                    None => {
                        debouncer.flush();
                        break;
                    }
                }
            }
            changed = settled.changed() => {
                if changed.is_err() {
                    break;
                }
                let term = settled.borrow_and_update().clone();
                let query = base.clone().with_search(term);
                println!("{}", run_list(ctx, kind, query, format).await?);
            }
        }
    }

    if settled.has_changed().unwrap_or(false) {
        let term = settled.borrow_and_update().clone();
        println!("{}", run_list(ctx, kind, base.with_search(term), format).await?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;

    fn context() -> DashboardContext {
        DashboardContext::from_config(&parse_config("").unwrap())
    }

    #[test]
    fn test_entity_kind_names_round_trip() {
        for kind in EntityKind::all() {
            assert_eq!(kind.name().parse::<EntityKind>().unwrap(), kind);
        }
        assert!("orders".parse::<EntityKind>().is_err());
    }

    #[tokio::test]
    async fn test_run_list_json_for_tasks() {
        let query = ListQuery::default().with_category("进行中");
        let out = run_list(&context(), EntityKind::Tasks, query, OutputFormat::Json)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["total"], 5);
        assert_eq!(json["matched"], 2);
        // default sort for tasks is due date, latest first
        assert_eq!(json["items"][0]["id"], "5");
        assert_eq!(json["items"][1]["id"], "1");
    }

    #[tokio::test]
    async fn test_run_list_csv_for_logs() {
        let query = ListQuery::default().with_category("错误");
        let out = run_list(&context(), EntityKind::Logs, query, OutputFormat::Csv)
            .await
            .unwrap();
        let lines: Vec<&str> = out.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("5;"));
        assert!(lines[2].starts_with("3;"));
    }

    #[tokio::test]
    async fn test_strict_context_rejects_bad_category() {
        let ctx = context().with_strict(true);
        let query = ListQuery::default().with_category("进行");
        let result = run_list(&ctx, EntityKind::Projects, query, OutputFormat::Json).await;
        assert!(result.is_err());
    }
}
