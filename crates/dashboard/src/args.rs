use thiserror::Error;

use contracts::shared::list::ListQuery;

use crate::handlers::lists::{EntityKind, OutputFormat};

pub const USAGE: &str = "usage: dashboard <list> [query-string] [--csv] [--strict] [--interactive]
       dashboard schemas

lists: customers, customer-insights, tasks, projects, tenants, configs, logs
query: searchTerm=...&categoryFilter=...&sortKey=...";

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("missing list name")]
    MissingList,

    #[error("unknown list '{0}'")]
    UnknownList(String),

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("unexpected argument '{0}'")]
    Unexpected(String),

    #[error("invalid query string: {0}")]
    InvalidQuery(#[from] serde_qs::Error),
}

#[derive(Debug)]
pub enum Command {
    Schemas,
    List(ListArgs),
}

#[derive(Debug)]
pub struct ListArgs {
    pub kind: EntityKind,
    pub query: ListQuery,
    pub format: OutputFormat,
    pub strict: bool,
    pub interactive: bool,
}

/// Parses arguments without the program name
pub fn parse_args<I>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let list = args.next().ok_or(ArgsError::MissingList)?;
    if list == "schemas" {
        return Ok(Command::Schemas);
    }

    let kind = list
        .parse::<EntityKind>()
        .map_err(|_| ArgsError::UnknownList(list.clone()))?;

    let mut parsed = ListArgs {
        kind,
        query: ListQuery::default(),
        format: OutputFormat::Json,
        strict: false,
        interactive: false,
    };
    let mut query_seen = false;

    for arg in args {
        match arg.as_str() {
            "--csv" => parsed.format = OutputFormat::Csv,
            "--strict" => parsed.strict = true,
            "--interactive" => parsed.interactive = true,
            flag if flag.starts_with("--") => return Err(ArgsError::UnknownFlag(arg)),
            _ if !query_seen => {
                parsed.query = serde_qs::from_str(arg.trim_start_matches('?'))?;
                query_seen = true;
            }
            _ => return Err(ArgsError::Unexpected(arg)),
        }
    }

    Ok(Command::List(parsed))
}
