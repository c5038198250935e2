use chrono::Utc;

use crate::{
    client::{
        api::{MockBackend, UserApi},
        model::error::AppError,
    },
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
};

use super::MockDatabase;

const MIN_PASSWORD_LEN: usize = 8;

fn not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn ensure_email_free(db: &MockDatabase, email: &str, except: Option<&str>) -> Result<(), AppError> {
    let taken = db
        .users
        .iter()
        .any(|u| u.email.eq_ignore_ascii_case(email) && Some(u.id.as_str()) != except);

    if taken {
        return Err(AppError::Rejected(
            "A user with this email already exists".to_string(),
        ));
    }
    Ok(())
}

fn ensure_password_length(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Rejected(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

impl UserApi for MockBackend {
    async fn get_users(&self) -> Result<Vec<UserDto>, AppError> {
        self.read(|db| Ok(db.users.clone()))
    }

    async fn get_user(&self, id: &str) -> Result<UserDto, AppError> {
        self.read(|db| {
            db.users
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or_else(not_found)
        })
    }

    async fn create_user(&self, payload: &CreateUserDto) -> Result<UserDto, AppError> {
        self.write(|db| {
            let email = payload.email.trim();
            ensure_email_free(db, email, None)?;
            ensure_password_length(&payload.password)?;

            let user = UserDto {
                id: db.allocate_id(),
                email: email.to_string(),
                name: payload.name.trim().to_string(),
                role: payload.role,
                created_at: Utc::now(),
            };

            db.credentials
                .insert(user.id.clone(), payload.password.clone());
            db.users.push(user.clone());
            Ok(user)
        })
    }

    async fn update_user(&self, id: &str, payload: &UpdateUserDto) -> Result<UserDto, AppError> {
        self.write(|db| {
            if !db.users.iter().any(|u| u.id == id) {
                return Err(not_found());
            }

            if let Some(email) = &payload.email {
                ensure_email_free(db, email.trim(), Some(id))?;
            }

            if let Some(new_password) = &payload.new_password {
                ensure_password_length(new_password)?;

                let current = db.credentials.get(id).map(String::as_str);
                if current.is_none() || payload.current_password.as_deref() != current {
                    return Err(AppError::Rejected(
                        "Current password is incorrect".to_string(),
                    ));
                }
                db.credentials.insert(id.to_string(), new_password.clone());
            }

            let user = db
                .users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(not_found)?;

            if let Some(name) = &payload.name {
                user.name = name.trim().to_string();
            }
            if let Some(email) = &payload.email {
                user.email = email.trim().to_string();
            }
            if let Some(role) = payload.role {
                user.role = role;
            }

            Ok(user.clone())
        })
    }

    async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        self.write(|db| {
            let index = db
                .users
                .iter()
                .position(|u| u.id == id)
                .ok_or_else(not_found)?;

            db.users.remove(index);
            db.credentials.remove(id);
            if db.session_user_id.as_deref() == Some(id) {
                db.session_user_id = None;
            }
            Ok(())
        })
    }
}
