use std::rc::Rc;

use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    client::{
        api::{
            mock::seed::{ADMIN_EMAIL, ADMIN_PASSWORD},
            AuthApi, BillingApi, ResourceGateway, ServerApi,
        },
        config::{ApiMode, Config, TransitionMode},
        model::{
            error::AppError,
            session::{Capability, SessionState},
        },
        router::Route,
        store::{MemoryStore, NotificationLog, Notifier},
    },
    model::{
        billing::{
            InvoiceDto, InvoiceStatus, PaymentGateway, TransactionDto, TransactionKind,
            TransactionStatus,
        },
        catalog::{OsTemplateDto, PlanDto},
        node::{NodeDto, NodeStatus},
        proxmox::ProxmoxConfigDto,
        server::{ServerAction, ServerDto, ServerStatus},
        user::{Role, UserDto},
    },
};

use super::{
    billing::{prepend_transaction, top_up},
    guard::{evaluate, GuardDecision},
    lifecycle::{ServerChange, ServerLifecycle, TransitionOutcome},
    provision::{custom_price, PlanChoice, Resources, ServerWizard, WizardStep},
    summary::{servers_per_node, ClusterSummary, ServerCounts},
    validation::{
        is_valid_email, FieldErrors, LoginForm, ProfileForm, ProxmoxAuth, ProxmoxForm, TopUpForm,
        UserForm,
    },
};

mod billing;

fn identity(role: Role) -> UserDto {
    UserDto {
        id: "42".to_string(),
        email: "someone@example.com".to_string(),
        name: "Someone".to_string(),
        role,
        created_at: Utc::now(),
    }
}

fn server(id: &str, status: ServerStatus) -> ServerDto {
    ServerDto {
        id: id.to_string(),
        name: format!("server-{}", id),
        status,
        vmid: 100,
        node: "node01".to_string(),
        cpu: 1,
        memory: 2,
        storage: 20,
        ip_address: "192.168.1.100".to_string(),
        os_template: "ubuntu-22.04".to_string(),
        user_id: "1".to_string(),
        created_at: Utc::now(),
    }
}

fn node(name: &str, status: NodeStatus) -> NodeDto {
    NodeDto {
        id: name.to_string(),
        name: name.to_string(),
        status,
        cpu_total: 16.0,
        cpu_used: 4.0,
        memory_total: 64.0,
        memory_used: 32.0,
        storage_total: 1000.0,
        storage_used: 100.0,
    }
}

/// Logged-in gateway over the seeded simulated backend.
async fn mock_gateway() -> (ResourceGateway, Notifier, NotificationLog) {
    let (notifier, log) = Notifier::recording();
    let gateway = ResourceGateway::new(
        &Config::default(),
        Rc::new(MemoryStore::new()),
        notifier.clone(),
    );
    gateway.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    (gateway, notifier, log)
}

fn lifecycle(gateway: &ResourceGateway, notifier: &Notifier, mode: TransitionMode) -> ServerLifecycle {
    let config = Config {
        transition_mode: mode,
        ..Config::default()
    };
    ServerLifecycle::new(gateway.clone(), &config, notifier.clone())
}
