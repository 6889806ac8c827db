pub mod a001_customer;
pub mod a002_customer_insight;
pub mod a003_task;
pub mod a004_project;
pub mod a005_tenant;
