use crate::{
    client::{
        api::{CatalogApi, MockBackend},
        model::error::AppError,
    },
    model::catalog::{OsTemplateDto, PlanDto},
};

impl CatalogApi for MockBackend {
    async fn get_os_templates(&self) -> Result<Vec<OsTemplateDto>, AppError> {
        self.read(|db| Ok(db.os_templates.clone()))
    }

    async fn get_plans(&self) -> Result<Vec<PlanDto>, AppError> {
        self.read(|db| Ok(db.plans.clone()))
    }
}
