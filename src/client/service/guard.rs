use crate::client::{
    model::session::{Capability, SessionState},
    router::Route,
};

/// What a protected layout should do for the current navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    /// Session still hydrating; show a loading indicator and decide later.
    Pending,
    Redirect(Route),
    Render,
}

/// Decides whether a destination requiring `required` may render.
///
/// Not logged in always leads to the login view. Logged in without the admin
/// role leads to the dashboard, so missing privileges are never mistaken for a
/// missing session.
pub fn evaluate(state: &SessionState, required: Capability) -> GuardDecision {
    if state.is_loading {
        return GuardDecision::Pending;
    }

    let Some(identity) = &state.identity else {
        return GuardDecision::Redirect(Route::Login {});
    };

    match required {
        Capability::Authenticated => GuardDecision::Render,
        Capability::AdminOnly if identity.is_admin() => GuardDecision::Render,
        Capability::AdminOnly => GuardDecision::Redirect(Route::Dashboard {}),
    }
}
