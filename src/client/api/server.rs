use crate::{
    client::{
        api::{
            helper::{parse_empty_response, parse_response, send_request, serialize_json, Api},
            HttpBackend, ResourceGateway,
        },
        model::error::AppError,
    },
    model::server::{
        CreateServerDto, MetricsPeriod, ServerAction, ServerDto, ServerUsageDto, UpdateServerDto,
    },
};

#[allow(async_fn_in_trait)]
pub trait ServerApi {
    async fn get_servers(&self) -> Result<Vec<ServerDto>, AppError>;

    async fn get_server(&self, id: &str) -> Result<ServerDto, AppError>;

    async fn create_server(&self, payload: &CreateServerDto) -> Result<ServerDto, AppError>;

    async fn update_server(&self, id: &str, payload: &UpdateServerDto)
        -> Result<ServerDto, AppError>;

    async fn delete_server(&self, id: &str) -> Result<(), AppError>;

    /// Asks the hypervisor to start, stop or restart a server.
    ///
    /// Success only means the request was accepted; the resulting status has to
    /// be observed separately.
    async fn server_action(&self, id: &str, action: ServerAction) -> Result<(), AppError>;

    async fn get_server_metrics(
        &self,
        id: &str,
        period: MetricsPeriod,
    ) -> Result<ServerUsageDto, AppError>;
}

impl ServerApi for HttpBackend {
    async fn get_servers(&self) -> Result<Vec<ServerDto>, AppError> {
        let response = send_request(self.get(Api::Management, "/servers")).await?;
        parse_response(response, Api::Management).await
    }

    async fn get_server(&self, id: &str) -> Result<ServerDto, AppError> {
        let path = format!("/servers/{}", id);

        let response = send_request(self.get(Api::Management, &path)).await?;
        parse_response(response, Api::Management).await
    }

    async fn create_server(&self, payload: &CreateServerDto) -> Result<ServerDto, AppError> {
        let body = serialize_json(payload)?;

        let response = send_request(self.post(Api::Management, "/servers").body(body)).await?;
        parse_response(response, Api::Management).await
    }

    async fn update_server(
        &self,
        id: &str,
        payload: &UpdateServerDto,
    ) -> Result<ServerDto, AppError> {
        let path = format!("/servers/{}", id);
        let body = serialize_json(payload)?;

        let response = send_request(self.put(Api::Management, &path).body(body)).await?;
        parse_response(response, Api::Management).await
    }

    async fn delete_server(&self, id: &str) -> Result<(), AppError> {
        let path = format!("/servers/{}", id);

        let response = send_request(self.delete(Api::Management, &path)).await?;
        parse_empty_response(response, Api::Management).await
    }

    async fn server_action(&self, id: &str, action: ServerAction) -> Result<(), AppError> {
        let path = format!("/servers/{}/{}", id, action.as_str());

        let response = send_request(self.post(Api::Management, &path)).await?;
        parse_empty_response(response, Api::Management).await
    }

    async fn get_server_metrics(
        &self,
        id: &str,
        period: MetricsPeriod,
    ) -> Result<ServerUsageDto, AppError> {
        let path = format!("/servers/{}/metrics?period={}", id, period.as_str());

        let response = send_request(self.get(Api::Management, &path)).await?;
        parse_response(response, Api::Management).await
    }
}

impl ServerApi for ResourceGateway {
    async fn get_servers(&self) -> Result<Vec<ServerDto>, AppError> {
        dispatch!(self, get_servers())
    }

    async fn get_server(&self, id: &str) -> Result<ServerDto, AppError> {
        dispatch!(self, get_server(id))
    }

    async fn create_server(&self, payload: &CreateServerDto) -> Result<ServerDto, AppError> {
        dispatch!(self, create_server(payload))
    }

    async fn update_server(
        &self,
        id: &str,
        payload: &UpdateServerDto,
    ) -> Result<ServerDto, AppError> {
        dispatch!(self, update_server(id, payload))
    }

    async fn delete_server(&self, id: &str) -> Result<(), AppError> {
        dispatch!(self, delete_server(id))
    }

    async fn server_action(&self, id: &str, action: ServerAction) -> Result<(), AppError> {
        dispatch!(self, server_action(id, action))
    }

    async fn get_server_metrics(
        &self,
        id: &str,
        period: MetricsPeriod,
    ) -> Result<ServerUsageDto, AppError> {
        dispatch!(self, get_server_metrics(id, period))
    }
}
