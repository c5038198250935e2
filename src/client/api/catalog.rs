use crate::{
    client::{
        api::{
            helper::{parse_response, send_request, Api},
            HttpBackend, ResourceGateway,
        },
        model::error::AppError,
    },
    model::catalog::{OsTemplateDto, PlanDto},
};

/// Read-only catalogs offered by the provisioning wizard.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    async fn get_os_templates(&self) -> Result<Vec<OsTemplateDto>, AppError>;

    async fn get_plans(&self) -> Result<Vec<PlanDto>, AppError>;
}

impl CatalogApi for HttpBackend {
    async fn get_os_templates(&self) -> Result<Vec<OsTemplateDto>, AppError> {
        let response = send_request(self.get(Api::Management, "/os-templates")).await?;
        parse_response(response, Api::Management).await
    }

    async fn get_plans(&self) -> Result<Vec<PlanDto>, AppError> {
        let response = send_request(self.get(Api::Management, "/plans")).await?;
        parse_response(response, Api::Management).await
    }
}

impl CatalogApi for ResourceGateway {
    async fn get_os_templates(&self) -> Result<Vec<OsTemplateDto>, AppError> {
        dispatch!(self, get_os_templates())
    }

    async fn get_plans(&self) -> Result<Vec<PlanDto>, AppError> {
        dispatch!(self, get_plans())
    }
}
