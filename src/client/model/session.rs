use crate::model::user::UserDto;

/// Snapshot of the session as seen by the route guard and the views.
///
/// Authentication is derived: a session is authenticated exactly when it holds an
/// identity.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// True until startup hydration finishes, and while a login or logout is in flight.
    pub is_loading: bool,
    pub identity: Option<UserDto>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_loading: true,
            identity: None,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|user| user.is_admin())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|user| user.id.as_str())
    }
}

/// What a destination requires of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Authenticated,
    AdminOnly,
}
