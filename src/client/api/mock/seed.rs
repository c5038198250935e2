//! Initial dataset of the simulated backend.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::model::{
    billing::{
        InvoiceDto, InvoiceItemDto, InvoiceStatus, PaymentGateway, TransactionDto,
        TransactionKind, TransactionStatus,
    },
    catalog::{OsTemplateDto, PlanDto},
    node::{NodeDto, NodeStatus},
    proxmox::ProxmoxConfigDto,
    server::{ServerDto, ServerStatus},
    user::{Role, UserDto},
};

use super::MockDatabase;

pub const ADMIN_EMAIL: &str = "admin@vps-panel.local";
pub const ADMIN_PASSWORD: &str = "changeme";
pub const ADMIN_ID: &str = "1";

pub fn database() -> MockDatabase {
    let now = Utc::now();

    let users = vec![
        user(ADMIN_ID, ADMIN_EMAIL, "Admin", Role::Admin, now - Duration::days(120)),
        user("2", "jane@example.com", "Jane Cooper", Role::User, now - Duration::days(60)),
        user("3", "john@example.com", "John Smith", Role::User, now - Duration::days(30)),
    ];

    let mut credentials = HashMap::new();
    credentials.insert(ADMIN_ID.to_string(), ADMIN_PASSWORD.to_string());

    MockDatabase {
        users,
        credentials,
        session_user_id: None,
        servers: servers(now),
        nodes: nodes(),
        os_templates: os_templates(),
        plans: plans(),
        invoices: invoices(now),
        transactions: transactions(now),
        orders: Vec::new(),
        proxmox: ProxmoxConfigDto {
            api_url: "https://proxmox.example.com:8006/api2/json".to_string(),
            username: Some("root@pam".to_string()),
            password: None,
            token: None,
            token_name: None,
            verify_ssl: true,
            node_list: vec![
                "node01".to_string(),
                "node02".to_string(),
                "node03".to_string(),
            ],
        },
        next_id: 100,
    }
}

fn user(id: &str, email: &str, name: &str, role: Role, created_at: DateTime<Utc>) -> UserDto {
    UserDto {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        created_at,
    }
}

fn servers(now: DateTime<Utc>) -> Vec<ServerDto> {
    let server = |id: &str, name: &str, status, vmid, node: &str, ip: &str, os: &str, days| {
        ServerDto {
            id: id.to_string(),
            name: name.to_string(),
            status,
            vmid,
            node: node.to_string(),
            cpu: 2,
            memory: 4,
            storage: 50,
            ip_address: ip.to_string(),
            os_template: os.to_string(),
            user_id: ADMIN_ID.to_string(),
            created_at: now - Duration::days(days),
        }
    };

    vec![
        server("1", "Web Server", ServerStatus::Running, 101, "node01", "192.168.1.100", "ubuntu-22.04", 30),
        server("2", "Database Server", ServerStatus::Stopped, 102, "node02", "192.168.1.101", "debian-11", 20),
        server("3", "Mail Server", ServerStatus::Failed, 103, "node01", "192.168.1.102", "centos-8", 10),
    ]
}

fn nodes() -> Vec<NodeDto> {
    let node = |id: &str, name: &str, status, cpu_used, memory_used, storage_used| NodeDto {
        id: id.to_string(),
        name: name.to_string(),
        status,
        cpu_total: 32.0,
        cpu_used,
        memory_total: 128.0,
        memory_used,
        storage_total: 2000.0,
        storage_used,
    };

    vec![
        node("1", "node01", NodeStatus::Online, 12.0, 48.0, 750.0),
        node("2", "node02", NodeStatus::Online, 6.0, 24.0, 400.0),
        node("3", "node03", NodeStatus::Maintenance, 0.0, 0.0, 120.0),
    ]
}

fn os_templates() -> Vec<OsTemplateDto> {
    let template = |id: &str, name: &str, description: &str, file: &str| OsTemplateDto {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        file: file.to_string(),
    };

    vec![
        template("ubuntu-22.04", "Ubuntu 22.04 LTS", "Long-term support release", "ubuntu-22.04-standard_22.04-1_amd64.tar.zst"),
        template("debian-11", "Debian 11", "Stable Debian release", "debian-11-standard_11.7-1_amd64.tar.zst"),
        template("centos-8", "CentOS 8", "Enterprise Linux", "centos-8-default_20201210_amd64.tar.xz"),
        template("alpine-3.18", "Alpine Linux 3.18", "Minimal footprint", "alpine-3.18-default_20230607_amd64.tar.xz"),
    ]
}

fn plans() -> Vec<PlanDto> {
    let plan = |id: &str, name: &str, cpu, memory, storage, bandwidth, price| PlanDto {
        id: id.to_string(),
        name: name.to_string(),
        cpu,
        memory,
        storage,
        bandwidth,
        price,
    };

    vec![
        plan("basic", "Basic", 1, 2, 20, 1000, 10.0),
        plan("standard", "Standard", 2, 4, 50, 2000, 20.0),
        plan("premium", "Premium", 4, 8, 100, 5000, 40.0),
    ]
}

fn invoices(now: DateTime<Utc>) -> Vec<InvoiceDto> {
    vec![
        InvoiceDto {
            id: "INV-001".to_string(),
            user_id: ADMIN_ID.to_string(),
            amount: 40.0,
            status: InvoiceStatus::Paid,
            items: vec![
                InvoiceItemDto {
                    description: "Web Server - Standard plan".to_string(),
                    amount: 20.0,
                    quantity: 1,
                },
                InvoiceItemDto {
                    description: "Database Server - Standard plan".to_string(),
                    amount: 20.0,
                    quantity: 1,
                },
            ],
            created_at: now - Duration::days(35),
            due_date: now - Duration::days(21),
            paid_at: Some(now - Duration::days(30)),
        },
        InvoiceDto {
            id: "INV-002".to_string(),
            user_id: ADMIN_ID.to_string(),
            amount: 60.0,
            status: InvoiceStatus::Pending,
            items: vec![InvoiceItemDto {
                description: "Standard plan".to_string(),
                amount: 20.0,
                quantity: 3,
            }],
            created_at: now - Duration::days(5),
            due_date: now + Duration::days(9),
            paid_at: None,
        },
    ]
}

fn transactions(now: DateTime<Utc>) -> Vec<TransactionDto> {
    vec![
        TransactionDto {
            id: "TX-002".to_string(),
            user_id: ADMIN_ID.to_string(),
            amount: 50.0,
            kind: TransactionKind::Credit,
            status: TransactionStatus::Completed,
            gateway: PaymentGateway::Credit,
            gateway_transaction_id: None,
            created_at: now - Duration::days(15),
        },
        TransactionDto {
            id: "TX-001".to_string(),
            user_id: ADMIN_ID.to_string(),
            amount: 40.0,
            kind: TransactionKind::Payment,
            status: TransactionStatus::Completed,
            gateway: PaymentGateway::Paypal,
            gateway_transaction_id: Some("PAYPAL-7XK21".to_string()),
            created_at: now - Duration::days(30),
        },
    ]
}
