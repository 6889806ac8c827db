#![allow(clippy::too_many_arguments)]

pub mod args;
pub mod handlers;
pub mod shared;
pub mod system;

use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_customer_insight::aggregate::CustomerInsight;
use contracts::domain::a003_task::aggregate::Task;
use contracts::domain::a004_project::aggregate::Project;
use contracts::domain::a005_tenant::aggregate::Tenant;
use contracts::shared::list::{ListEntity, ListSchema};
use contracts::system::config_entries::ConfigEntry;
use contracts::system::logs::LogEntry;

use args::{parse_args, Command, USAGE};
use handlers::lists::{run_interactive, run_list, DashboardContext};

fn schemas() -> Vec<&'static ListSchema> {
    vec![
        Customer::schema(),
        CustomerInsight::schema(),
        Task::schema(),
        Project::schema(),
        Tenant::schema(),
        ConfigEntry::schema(),
        LogEntry::schema(),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    match command {
        Command::Schemas => {
            println!("{}", serde_json::to_string_pretty(&schemas())?);
        }
        Command::List(list) => {
            let ctx = DashboardContext::from_config(&config).with_strict(list.strict);
            if list.interactive {
                run_interactive(&ctx, list.kind, list.query, list.format).await?;
            } else {
                println!("{}", run_list(&ctx, list.kind, list.query, list.format).await?);
            }
        }
    }

    Ok(())
}
