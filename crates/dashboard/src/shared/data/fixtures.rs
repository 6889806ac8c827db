//! Built-in datasets shown when no fixtures directory is configured.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;

use contracts::domain::a001_customer::aggregate::{Customer, CustomerStatus};
use contracts::domain::a002_customer_insight::aggregate::{CustomerInsight, CustomerSegment};
use contracts::domain::a003_task::aggregate::{Task, TaskPriority, TaskStatus};
use contracts::domain::a004_project::aggregate::{Project, ProjectStatus};
use contracts::domain::a005_tenant::aggregate::{Tenant, TenantStatus};
use contracts::system::config_entries::{ConfigCategory, ConfigEntry};
use contracts::system::logs::{LogEntry, LogLevel};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid fixture timestamp {year}-{month}-{day} {hour}:{minute}"))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}

fn customer(
    id: &str,
    name: &str,
    company: &str,
    email: &str,
    phone: &str,
    status: CustomerStatus,
    value: f64,
    last_activity: DateTime<Utc>,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status,
        value,
        last_activity,
    }
}

pub static CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    use CustomerStatus::*;
    vec![
        customer(
            "1",
            "张三",
            "ABC科技有限公司",
            "zhangsan@abc.com",
            "138-0000-0001",
            Active,
            500000.0,
            at(2024, 1, 15, 10, 30),
        ),
        customer(
            "2",
            "李四",
            "XYZ贸易公司",
            "lisi@xyz.com",
            "138-0000-0002",
            Potential,
            300000.0,
            at(2024, 1, 14, 16, 0),
        ),
        customer(
            "3",
            "王五",
            "创新软件集团",
            "wangwu@chuangxin.cn",
            "138-0000-0003",
            Active,
            850000.0,
            at(2024, 1, 12, 9, 15),
        ),
        customer(
            "4",
            "赵六",
            "远航物流",
            "zhaoliu@yuanhang.cn",
            "138-0000-0004",
            Churned,
            120000.0,
            at(2023, 11, 3, 14, 45),
        ),
        customer(
            "5",
            "钱七",
            "星辰制造",
            "qianqi@xingchen.com",
            "138-0000-0005",
            Potential,
            450000.0,
            at(2024, 1, 10, 11, 0),
        ),
        customer(
            "6",
            "孙八",
            "ABC科技有限公司",
            "sunba@abc.com",
            "138-0000-0006",
            Active,
            230000.0,
            at(2024, 1, 16, 8, 20),
        ),
    ]
});

fn insight(
    id: &str,
    name: &str,
    company: &str,
    segment: CustomerSegment,
    value: f64,
    churn_risk: u32,
    satisfaction: f64,
    last_activity: DateTime<Utc>,
) -> CustomerInsight {
    CustomerInsight {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        segment,
        value,
        churn_risk,
        satisfaction,
        last_activity,
    }
}

pub static CUSTOMER_INSIGHTS: Lazy<Vec<CustomerInsight>> = Lazy::new(|| {
    use CustomerSegment::*;
    vec![
        insight(
            "1",
            "张三",
            "ABC科技有限公司",
            HighValue,
            500000.0,
            15,
            4.8,
            at(2024, 1, 15, 10, 30),
        ),
        insight("2", "李四", "XYZ贸易公司", Growth, 300000.0, 35, 4.2, at(2024, 1, 14, 16, 0)),
        insight("3", "王五", "创新软件集团", HighValue, 850000.0, 8, 4.9, at(2024, 1, 12, 9, 15)),
        insight("4", "赵六", "远航物流", AtRisk, 120000.0, 78, 2.6, at(2023, 11, 3, 14, 45)),
        insight("5", "钱七", "星辰制造", Growth, 450000.0, 42, 3.9, at(2024, 1, 10, 11, 0)),
        insight("6", "周九", "蓝海咨询", New, 60000.0, 55, 3.5, at(2024, 1, 17, 13, 10)),
    ]
});

fn task(
    id: &str,
    title: &str,
    assignee: &str,
    status: TaskStatus,
    priority: TaskPriority,
    progress: u32,
    due_date: NaiveDate,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        assignee: assignee.to_string(),
        status,
        priority,
        progress,
        due_date,
    }
}

pub static TASKS: Lazy<Vec<Task>> = Lazy::new(|| {
    use TaskPriority::*;
    use TaskStatus::*;
    vec![
        task("1", "完成季度销售报告", "张三", InProgress, High, 60, date(2024, 1, 31)),
        task("2", "客户回访计划", "李四", Todo, Medium, 0, date(2024, 2, 5)),
        task("3", "更新产品目录", "王五", Done, Low, 100, date(2024, 1, 20)),
        task("4", "合同续签审批", "赵六", Overdue, High, 30, date(2024, 1, 10)),
        task("5", "系统权限梳理", "张三", InProgress, Medium, 45, date(2024, 2, 15)),
    ]
});

fn project(
    id: &str,
    name: &str,
    manager: &str,
    status: ProjectStatus,
    progress: u32,
    budget: f64,
    end_date: NaiveDate,
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        manager: manager.to_string(),
        status,
        progress,
        budget,
        end_date,
    }
}

pub static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    use ProjectStatus::*;
    vec![
        project("1", "CRM系统升级", "张三", Active, 65, 800000.0, date(2024, 6, 30)),
        project("2", "数据中台建设", "王五", Planning, 10, 1500000.0, date(2024, 12, 31)),
        project("3", "移动端应用开发", "李四", Active, 40, 600000.0, date(2024, 8, 15)),
        project("4", "官网改版", "赵六", Completed, 100, 200000.0, date(2023, 12, 20)),
        project("5", "供应链优化", "钱七", OnHold, 25, 950000.0, date(2024, 10, 1)),
    ]
});

fn tenant(
    id: &str,
    name: &str,
    domain: &str,
    plan: &str,
    status: TenantStatus,
    user_count: u32,
    storage_used_gb: f64,
    created_at: DateTime<Utc>,
) -> Tenant {
    Tenant {
        id: id.to_string(),
        name: name.to_string(),
        domain: domain.to_string(),
        plan: plan.to_string(),
        status,
        user_count,
        storage_used_gb,
        created_at,
    }
}

pub static TENANTS: Lazy<Vec<Tenant>> = Lazy::new(|| {
    use TenantStatus::*;
    vec![
        tenant(
            "1",
            "ABC科技有限公司",
            "abc.example.com",
            "企业版",
            Active,
            120,
            45.5,
            at(2023, 3, 1, 9, 0),
        ),
        tenant(
            "2",
            "XYZ贸易公司",
            "xyz.example.com",
            "专业版",
            Active,
            45,
            12.3,
            at(2023, 6, 15, 9, 0),
        ),
        tenant(
            "3",
            "创新软件集团",
            "chuangxin.example.com",
            "企业版",
            Trial,
            8,
            1.2,
            at(2024, 1, 5, 9, 0),
        ),
        tenant(
            "4",
            "远航物流",
            "yuanhang.example.com",
            "基础版",
            Suspended,
            20,
            6.8,
            at(2022, 11, 20, 9, 0),
        ),
    ]
});

fn config_entry(
    id: &str,
    key: &str,
    value: &str,
    description: &str,
    category: ConfigCategory,
    updated_at: DateTime<Utc>,
) -> ConfigEntry {
    ConfigEntry {
        id: id.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        description: description.to_string(),
        category,
        updated_at,
    }
}

pub static CONFIG_ENTRIES: Lazy<Vec<ConfigEntry>> = Lazy::new(|| {
    use ConfigCategory::*;
    vec![
        config_entry(
            "1",
            "session.timeout",
            "30",
            "会话超时时间（分钟）",
            Security,
            at(2024, 1, 10, 9, 0),
        ),
        config_entry(
            "2",
            "mail.smtp.host",
            "smtp.example.com",
            "邮件服务器地址",
            Notification,
            at(2024, 1, 8, 15, 30),
        ),
        config_entry(
            "3",
            "storage.quota.default",
            "50",
            "默认存储配额（GB）",
            Storage,
            at(2023, 12, 28, 11, 0),
        ),
        config_entry("4", "system.locale", "zh-CN", "系统默认语言", System, at(2024, 1, 12, 10, 0)),
        config_entry(
            "5",
            "password.min_length",
            "8",
            "密码最小长度",
            Security,
            at(2023, 12, 1, 8, 0),
        ),
    ]
});

fn log_entry(
    id: &str,
    timestamp: DateTime<Utc>,
    level: LogLevel,
    module: &str,
    message: &str,
) -> LogEntry {
    LogEntry {
        id: id.to_string(),
        timestamp,
        level,
        module: module.to_string(),
        message: message.to_string(),
    }
}

pub static LOG_ENTRIES: Lazy<Vec<LogEntry>> = Lazy::new(|| {
    use LogLevel::*;
    vec![
        log_entry("1", at(2024, 1, 16, 10, 30), Info, "auth", "用户 admin 登录成功"),
        log_entry(
            "2",
            at(2024, 1, 16, 10, 35),
            Warning,
            "storage",
            "租户 XYZ贸易公司 存储使用率超过 80%",
        ),
        log_entry("3", at(2024, 1, 16, 10, 40), Error, "mail", "SMTP 连接超时"),
        log_entry("4", at(2024, 1, 16, 11, 0), Info, "billing", "月度账单生成完成"),
        log_entry("5", at(2024, 1, 16, 11, 5), Error, "auth", "用户 guest 登录失败：密码错误"),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_not_epoch() {
        let timestamps = CUSTOMERS
            .iter()
            .map(|c| c.last_activity)
            .chain(CUSTOMER_INSIGHTS.iter().map(|i| i.last_activity))
            .chain(TENANTS.iter().map(|t| t.created_at))
            .chain(CONFIG_ENTRIES.iter().map(|c| c.updated_at))
            .chain(LOG_ENTRIES.iter().map(|l| l.timestamp));
        for ts in timestamps {
            assert!(ts.year() >= 2023, "unexpected fixture timestamp {ts}");
        }

        let dates = TASKS
            .iter()
            .map(|t| t.due_date)
            .chain(PROJECTS.iter().map(|p| p.end_date));
        for d in dates {
            assert!(d.year() >= 2023, "unexpected fixture date {d}");
        }
    }

    #[test]
    #[should_panic(expected = "invalid fixture date 2024-2-30")]
    fn test_invalid_fixture_date_panics() {
        date(2024, 2, 30);
    }
}
