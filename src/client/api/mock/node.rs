use crate::{
    client::{
        api::{MockBackend, NodeApi},
        model::error::AppError,
    },
    model::node::NodeDto,
};

impl NodeApi for MockBackend {
    async fn get_nodes(&self) -> Result<Vec<NodeDto>, AppError> {
        self.read(|db| Ok(db.nodes.clone()))
    }

    async fn get_node(&self, id: &str) -> Result<NodeDto, AppError> {
        self.read(|db| {
            db.nodes
                .iter()
                .find(|n| n.id == id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Node not found".to_string()))
        })
    }
}
