pub mod form;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod protected_layout;
pub mod status_badge;
pub mod toast;

pub use form::{Field, FieldError};
pub use header::{Header, Sidebar};
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn};
pub use status_badge::{StatusBadge, UsageBar};
pub use toast::ToastHost;
