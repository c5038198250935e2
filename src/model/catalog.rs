use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsTemplateDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub file: String,
}

/// A predefined server size. Resources in cores / GB, price per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDto {
    pub id: String,
    pub name: String,
    pub cpu: u32,
    pub memory: u32,
    pub storage: u32,
    pub bandwidth: u32,
    pub price: f64,
}
