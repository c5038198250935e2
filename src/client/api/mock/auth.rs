use crate::{
    client::{
        api::{AuthApi, MockBackend},
        model::error::{AppError, AuthError},
    },
    model::user::UserDto,
};

impl AuthApi for MockBackend {
    async fn login(&self, email: &str, password: &str) -> Result<UserDto, AppError> {
        self.write(|db| {
            let user = db
                .users
                .iter()
                .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
                .cloned()
                .ok_or(AuthError::InvalidCredentials)?;

            if db.credentials.get(&user.id).map(String::as_str) != Some(password) {
                return Err(AuthError::InvalidCredentials.into());
            }

            db.session_user_id = Some(user.id.clone());
            Ok(user)
        })
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.write(|db| {
            db.session_user_id = None;
            Ok(())
        })
    }

    async fn me(&self) -> Result<UserDto, AppError> {
        self.read(|db| db.session_user().cloned())
    }
}
