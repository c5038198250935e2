//! Session store.
//!
//! Owns the current identity. Views read it through `state()` (or the signal the
//! app mirrors it into via `on_change`) and change it only through the
//! operations below. A session is authenticated exactly when an identity is
//! present.

use std::{cell::RefCell, rc::Rc};

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{AuthApi, ResourceGateway, UserApi},
        config::ApiMode,
        model::{
            error::{AppError, AuthError},
            session::SessionState,
        },
        store::{Notifier, SessionPersistence},
    },
    model::user::{UpdateUserDto, UserDto},
};

type Listener = Rc<dyn Fn(&SessionState)>;

#[derive(Clone)]
pub struct SessionStore {
    state: Rc<RefCell<SessionState>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
    gateway: ResourceGateway,
    persistence: Rc<dyn SessionPersistence>,
    notifier: Notifier,
}

impl SessionStore {
    pub fn new(
        gateway: ResourceGateway,
        persistence: Rc<dyn SessionPersistence>,
        notifier: Notifier,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(SessionState::default())),
            listeners: Rc::new(RefCell::new(Vec::new())),
            gateway,
            persistence,
            notifier,
        }
    }

    /// Registers a callback invoked with the new state after every change.
    pub fn on_change(&self, listener: impl Fn(&SessionState) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_identity(&self) -> Option<UserDto> {
        self.state.borrow().identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Authenticates and replaces the current identity.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - New identity, already persisted
    /// - `Err(AppError)` - Bad credentials or transport failure, already notified
    pub async fn login(&self, email: &str, password: &str) -> Result<UserDto, AppError> {
        self.update(|state| state.is_loading = true);

        let user = match self.gateway.login(email, password).await {
            Ok(user) => user,
            Err(err) => {
                self.update(|state| state.is_loading = false);
                return Err(err);
            }
        };

        self.persist(&user);
        self.update(|state| {
            state.identity = Some(user.clone());
            state.is_loading = false;
        });

        tracing::info!("Logged in as user {}", user.id);
        self.notifier
            .success(format!("Welcome back, {}!", user.display_name()));

        Ok(user)
    }

    /// Ends the session. Local state is cleared even when the remote call fails.
    pub async fn logout(&self) {
        if let Err(err) = self.gateway.quiet().logout().await {
            tracing::warn!("Remote logout failed, clearing local session anyway: {}", err);
        }

        self.clear_persistence();
        self.update(|state| {
            state.identity = None;
            state.is_loading = false;
        });

        tracing::info!("Logged out");
        self.notifier.success("You have been successfully logged out.");
    }

    /// Hydrates the identity once at startup, before protected views render.
    ///
    /// Without a backend the persisted identity is kept only while the simulated
    /// dataset still holds it as its session user; against a live API the remote
    /// session is the source of truth. Never notifies.
    pub async fn restore_on_startup(&self) {
        let identity = match self.gateway.mode() {
            ApiMode::Mock => match self.persistence.load() {
                Ok(Some(persisted)) => match self.gateway.quiet().me().await {
                    Ok(user) if user.id == persisted.id => {
                        self.persist(&user);
                        Some(user)
                    }
                    _ => {
                        tracing::warn!(
                            "Persisted user {} has no session in the simulated dataset",
                            persisted.id
                        );
                        self.clear_persistence();
                        None
                    }
                },
                Ok(None) => None,
                Err(err) => {
                    tracing::warn!("Discarding persisted session: {}", err);
                    self.clear_persistence();
                    None
                }
            },
            ApiMode::Live => match self.gateway.quiet().me().await {
                Ok(user) => {
                    self.persist(&user);
                    Some(user)
                }
                Err(_) => {
                    self.clear_persistence();
                    None
                }
            },
        };

        match &identity {
            Some(user) => tracing::info!("Restored session for user {}", user.id),
            None => tracing::info!("No session to restore"),
        }

        self.update(|state| {
            state.identity = identity;
            state.is_loading = false;
        });
    }

    /// Re-reads the current identity. Failure ends the session.
    pub async fn refresh(&self) -> Result<UserDto, AppError> {
        let result = match self.gateway.mode() {
            ApiMode::Live => self.gateway.me().await,
            ApiMode::Mock => {
                let id = self.require_user_id()?;
                self.gateway.get_user(&id).await
            }
        };

        match result {
            Ok(user) => {
                self.persist(&user);
                self.update(|state| state.identity = Some(user.clone()));
                Ok(user)
            }
            Err(err) => {
                tracing::info!("Session ended by failed identity check");
                self.clear_persistence();
                self.update(|state| state.identity = None);
                Err(err)
            }
        }
    }

    /// Updates the logged-in user's own account and replaces the identity.
    pub async fn update_profile(&self, update: &UpdateUserDto) -> Result<UserDto, AppError> {
        let id = self.require_user_id()?;
        let user = self.gateway.update_user(&id, update).await?;

        self.persist(&user);
        self.update(|state| state.identity = Some(user.clone()));
        self.notifier.success("Profile updated successfully");

        Ok(user)
    }

    fn require_user_id(&self) -> Result<String, AppError> {
        let id = self.state.borrow().user_id().map(str::to_string);

        id.ok_or_else(|| {
            let err = AppError::from(AuthError::NotLoggedIn);
            self.notifier.error(err.to_string());
            err
        })
    }

    fn persist(&self, user: &UserDto) {
        if let Err(err) = self.persistence.save(user) {
            tracing::warn!("Failed to persist session: {}", err);
        }
    }

    fn clear_persistence(&self) {
        if let Err(err) = self.persistence.clear() {
            tracing::warn!("Failed to clear persisted session: {}", err);
        }
    }

    fn update(&self, f: impl FnOnce(&mut SessionState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };

        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
