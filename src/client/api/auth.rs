use crate::{
    client::{
        api::{
            helper::{parse_empty_response, parse_response, send_request, serialize_json, Api},
            HttpBackend, ResourceGateway,
        },
        model::error::AppError,
    },
    model::user::{LoginDto, UserDto},
};

#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchanges credentials for the authenticated identity.
    async fn login(&self, email: &str, password: &str) -> Result<UserDto, AppError>;

    async fn logout(&self) -> Result<(), AppError>;

    /// Identity of the current remote session.
    async fn me(&self) -> Result<UserDto, AppError>;
}

impl AuthApi for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<UserDto, AppError> {
        let payload = LoginDto {
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = serialize_json(&payload)?;

        let response = send_request(self.post(Api::Management, "/auth/login").body(body)).await?;
        parse_response(response, Api::Management).await
    }

    async fn logout(&self) -> Result<(), AppError> {
        let response = send_request(self.post(Api::Management, "/auth/logout")).await?;
        parse_empty_response(response, Api::Management).await
    }

    async fn me(&self) -> Result<UserDto, AppError> {
        let response = send_request(self.get(Api::Management, "/auth/me")).await?;
        parse_response(response, Api::Management).await
    }
}

impl AuthApi for ResourceGateway {
    async fn login(&self, email: &str, password: &str) -> Result<UserDto, AppError> {
        dispatch!(self, login(email, password))
    }

    async fn logout(&self) -> Result<(), AppError> {
        dispatch!(self, logout())
    }

    async fn me(&self) -> Result<UserDto, AppError> {
        dispatch!(self, me())
    }
}
