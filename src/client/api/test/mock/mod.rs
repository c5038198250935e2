use super::*;

mod auth;
mod billing;
mod proxmox;
mod server;
mod storage;
mod user;

async fn logged_in_gateway() -> (ResourceGateway, MemoryStore, NotificationLog) {
    let (gateway, store, log) = mock_gateway();
    gateway.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    log.clear();
    (gateway, store, log)
}
