pub mod account;
pub mod admin;
pub mod billing;
pub mod dashboard;
pub mod login;
pub mod new_server;
pub mod nodes;
pub mod not_found;
pub mod servers;
pub mod settings;
pub mod statistics;
pub mod users;

pub use account::Account;
pub use admin::Admin;
pub use billing::Billing;
pub use dashboard::Dashboard;
pub use login::Login;
pub use new_server::NewServer;
pub use nodes::Nodes;
pub use not_found::NotFound;
pub use servers::Servers;
pub use settings::Settings;
pub use statistics::Statistics;
pub use users::Users;
