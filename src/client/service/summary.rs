//! Aggregates shown on the dashboard, admin and statistics pages.

use crate::model::{
    billing::{InvoiceDto, InvoiceStatus},
    node::{NodeDto, NodeStatus},
    server::{ServerDto, ServerStatus},
};

/// Used and total amount of one resource across nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Capacity {
    pub used: f64,
    pub total: f64,
}

impl Capacity {
    pub fn percent(&self) -> f64 {
        if self.total <= 0.0 {
            0.0
        } else {
            (self.used / self.total * 100.0).clamp(0.0, 100.0)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerCounts {
    pub running: usize,
    pub stopped: usize,
    pub failed: usize,
}

impl ServerCounts {
    pub fn from_servers(servers: &[ServerDto]) -> Self {
        servers.iter().fold(Self::default(), |mut counts, server| {
            match server.status {
                ServerStatus::Running => counts.running += 1,
                ServerStatus::Stopped => counts.stopped += 1,
                ServerStatus::Failed => counts.failed += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.running + self.stopped + self.failed
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterSummary {
    pub servers: ServerCounts,
    pub online_nodes: usize,
    pub total_nodes: usize,
    pub pending_invoices: usize,
    pub cpu: Capacity,
    pub memory: Capacity,
    pub storage: Capacity,
}

impl ClusterSummary {
    pub fn new(servers: &[ServerDto], nodes: &[NodeDto], invoices: &[InvoiceDto]) -> Self {
        let sum = |used: fn(&NodeDto) -> f64, total: fn(&NodeDto) -> f64| Capacity {
            used: nodes.iter().map(used).sum(),
            total: nodes.iter().map(total).sum(),
        };

        Self {
            servers: ServerCounts::from_servers(servers),
            online_nodes: nodes
                .iter()
                .filter(|n| n.status == NodeStatus::Online)
                .count(),
            total_nodes: nodes.len(),
            pending_invoices: invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Pending)
                .count(),
            cpu: sum(|n| n.cpu_used, |n| n.cpu_total),
            memory: sum(|n| n.memory_used, |n| n.memory_total),
            storage: sum(|n| n.storage_used, |n| n.storage_total),
        }
    }
}

/// Servers hosted per node name, in node order.
pub fn servers_per_node<'a>(servers: &[ServerDto], nodes: &'a [NodeDto]) -> Vec<(&'a str, usize)> {
    nodes
        .iter()
        .map(|node| {
            let hosted = servers.iter().filter(|s| s.node == node.name).count();
            (node.name.as_str(), hosted)
        })
        .collect()
}
