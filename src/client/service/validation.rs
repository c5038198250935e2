//! Client-side form validation.
//!
//! Failures are collected per field in `FieldErrors` and shown inline next to the
//! field. They never leave the form and are never sent to the notifier.

use std::collections::BTreeMap;

use url::Url;

use crate::model::{
    proxmox::ProxmoxConfigDto,
    user::{CreateUserDto, Role, UpdateUserDto, UserDto},
};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_TOP_UP: f64 = 1.0;

/// Validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Adds the other set's messages for fields not already flagged.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn check_email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if !is_valid_email(value) {
        errors.add(field, "Please enter a valid email");
    }
}

fn check_name(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().chars().count() < MIN_NAME_LEN {
        errors.add(
            field,
            format!("Name must be at least {} characters", MIN_NAME_LEN),
        );
    }
}

fn check_password(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            field,
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        );
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors
    }
}

/// The account page's profile form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    pub fn from_user(user: &UserDto) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_name(&mut errors, "name", &self.name);
        check_email(&mut errors, "email", &self.email);

        if !self.new_password.is_empty() {
            check_password(&mut errors, "new_password", &self.new_password);
            if self.current_password.is_empty() {
                errors.add(
                    "current_password",
                    "Current password is required when setting a new password",
                );
            }
            if self.new_password != self.confirm_password {
                errors.add("confirm_password", "Passwords do not match");
            }
        }
        errors
    }

    /// Builds the partial update: only changed fields, passwords only when a new
    /// one is set.
    pub fn to_update(&self, current: &UserDto) -> Result<UpdateUserDto, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let changing_password = !self.new_password.is_empty();

        self.validate().into_result(UpdateUserDto {
            name: (name != current.name).then(|| name.to_string()),
            email: (email != current.email).then(|| email.to_string()),
            role: None,
            current_password: changing_password.then(|| self.current_password.clone()),
            new_password: changing_password.then(|| self.new_password.clone()),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProxmoxAuth {
    #[default]
    Password,
    Token,
}

/// Hypervisor connection form on the settings page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProxmoxForm {
    pub api_url: String,
    pub auth: ProxmoxAuth,
    pub username: String,
    /// Left empty to keep the stored password.
    pub password: String,
    pub token_name: String,
    pub token: String,
    pub verify_ssl: bool,
}

impl ProxmoxForm {
    pub fn from_config(config: &ProxmoxConfigDto) -> Self {
        Self {
            api_url: config.api_url.clone(),
            auth: if config.uses_token() {
                ProxmoxAuth::Token
            } else {
                ProxmoxAuth::Password
            },
            username: config.username.clone().unwrap_or_default(),
            password: String::new(),
            token_name: config.token_name.clone().unwrap_or_default(),
            token: config.token.clone().unwrap_or_default(),
            verify_ssl: config.verify_ssl,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if Url::parse(self.api_url.trim()).is_err() {
            errors.add("api_url", "Must be a valid URL");
        }

        match self.auth {
            ProxmoxAuth::Token => {
                if self.token_name.trim().is_empty() {
                    errors.add("token_name", "Token name is required");
                }
                if self.token.trim().is_empty() {
                    errors.add("token", "Token is required");
                }
            }
            ProxmoxAuth::Password => {
                if self.username.trim().is_empty() {
                    errors.add("username", "Username is required");
                }
            }
        }
        errors
    }

    /// Config to save or test. Credentials of the unused method are dropped.
    pub fn to_config(&self, node_list: Vec<String>) -> Result<ProxmoxConfigDto, FieldErrors> {
        let token_auth = self.auth == ProxmoxAuth::Token;

        self.validate().into_result(ProxmoxConfigDto {
            api_url: self.api_url.trim().to_string(),
            username: if token_auth { None } else { optional(&self.username) },
            password: if token_auth || self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
            token: if token_auth { optional(&self.token) } else { None },
            token_name: if token_auth { optional(&self.token_name) } else { None },
            verify_ssl: self.verify_ssl,
            node_list,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopUpForm {
    pub amount: String,
}

impl TopUpForm {
    pub fn parse(&self) -> Result<f64, FieldErrors> {
        let mut errors = FieldErrors::new();

        match self.amount.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= MIN_TOP_UP => return Ok(amount),
            Ok(_) => errors.add("amount", format!("Amount must be at least {:.2}", MIN_TOP_UP)),
            Err(_) => errors.add("amount", "Please enter a valid amount"),
        }

        Err(errors)
    }
}

/// Admin form for new accounts.
#[derive(Clone, Debug, PartialEq)]
pub struct UserForm {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            role: Role::User,
            password: String::new(),
        }
    }
}

impl UserForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, "email", &self.email);
        check_name(&mut errors, "name", &self.name);
        check_password(&mut errors, "password", &self.password);
        errors
    }

    pub fn to_create(&self) -> Result<CreateUserDto, FieldErrors> {
        self.validate().into_result(CreateUserDto {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            role: self.role,
            password: self.password.clone(),
        })
    }
}
