use crate::{
    client::{
        api::{
            helper::{parse_response, send_request, Api},
            HttpBackend, ResourceGateway,
        },
        model::error::AppError,
    },
    model::node::NodeDto,
};

#[allow(async_fn_in_trait)]
pub trait NodeApi {
    async fn get_nodes(&self) -> Result<Vec<NodeDto>, AppError>;

    async fn get_node(&self, id: &str) -> Result<NodeDto, AppError>;
}

impl NodeApi for HttpBackend {
    async fn get_nodes(&self) -> Result<Vec<NodeDto>, AppError> {
        let response = send_request(self.get(Api::Management, "/nodes")).await?;
        parse_response(response, Api::Management).await
    }

    async fn get_node(&self, id: &str) -> Result<NodeDto, AppError> {
        let path = format!("/nodes/{}", id);

        let response = send_request(self.get(Api::Management, &path)).await?;
        parse_response(response, Api::Management).await
    }
}

impl NodeApi for ResourceGateway {
    async fn get_nodes(&self) -> Result<Vec<NodeDto>, AppError> {
        dispatch!(self, get_nodes())
    }

    async fn get_node(&self, id: &str) -> Result<NodeDto, AppError> {
        dispatch!(self, get_node(id))
    }
}
