use crate::{
    client::{
        api::{
            helper::{parse_empty_response, parse_response, send_request, serialize_json, Api},
            HttpBackend, ResourceGateway,
        },
        model::error::AppError,
    },
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
};

#[allow(async_fn_in_trait)]
pub trait UserApi {
    async fn get_users(&self) -> Result<Vec<UserDto>, AppError>;

    async fn get_user(&self, id: &str) -> Result<UserDto, AppError>;

    async fn create_user(&self, payload: &CreateUserDto) -> Result<UserDto, AppError>;

    /// Applies a partial update. A password change must carry the current password.
    async fn update_user(&self, id: &str, payload: &UpdateUserDto) -> Result<UserDto, AppError>;

    async fn delete_user(&self, id: &str) -> Result<(), AppError>;
}

impl UserApi for HttpBackend {
    async fn get_users(&self) -> Result<Vec<UserDto>, AppError> {
        let response = send_request(self.get(Api::Management, "/users")).await?;
        parse_response(response, Api::Management).await
    }

    async fn get_user(&self, id: &str) -> Result<UserDto, AppError> {
        let path = format!("/users/{}", id);

        let response = send_request(self.get(Api::Management, &path)).await?;
        parse_response(response, Api::Management).await
    }

    async fn create_user(&self, payload: &CreateUserDto) -> Result<UserDto, AppError> {
        let body = serialize_json(payload)?;

        let response = send_request(self.post(Api::Management, "/users").body(body)).await?;
        parse_response(response, Api::Management).await
    }

    async fn update_user(&self, id: &str, payload: &UpdateUserDto) -> Result<UserDto, AppError> {
        let path = format!("/users/{}", id);
        let body = serialize_json(payload)?;

        let response = send_request(self.put(Api::Management, &path).body(body)).await?;
        parse_response(response, Api::Management).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let path = format!("/users/{}", id);

        let response = send_request(self.delete(Api::Management, &path)).await?;
        parse_empty_response(response, Api::Management).await
    }
}

impl UserApi for ResourceGateway {
    async fn get_users(&self) -> Result<Vec<UserDto>, AppError> {
        dispatch!(self, get_users())
    }

    async fn get_user(&self, id: &str) -> Result<UserDto, AppError> {
        dispatch!(self, get_user(id))
    }

    async fn create_user(&self, payload: &CreateUserDto) -> Result<UserDto, AppError> {
        dispatch!(self, create_user(payload))
    }

    async fn update_user(&self, id: &str, payload: &UpdateUserDto) -> Result<UserDto, AppError> {
        dispatch!(self, update_user(id, payload))
    }

    async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        dispatch!(self, delete_user(id))
    }
}
