use reqwest::{Client, RequestBuilder};

use crate::client::{
    api::helper::{self, Api},
    config::Config,
};

/// Live backend: the remote management and hypervisor-proxy APIs over HTTP.
///
/// No client-side timeout is set; the transport's own limits apply. Clones share
/// one client, and with it the session cookie.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    api_url: String,
    proxmox_url: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            client: helper::client(),
            api_url: config.api_url.clone(),
            proxmox_url: config.proxmox_url.clone(),
        }
    }

    fn url(&self, api: Api, path: &str) -> String {
        match api {
            Api::Management => format!("{}{}", self.api_url, path),
            Api::Proxmox => format!("{}{}", self.proxmox_url, path),
        }
    }

    pub(super) fn get(&self, api: Api, path: &str) -> RequestBuilder {
        helper::get(&self.client, &self.url(api, path))
    }

    pub(super) fn post(&self, api: Api, path: &str) -> RequestBuilder {
        helper::post(&self.client, &self.url(api, path))
    }

    pub(super) fn put(&self, api: Api, path: &str) -> RequestBuilder {
        helper::put(&self.client, &self.url(api, path))
    }

    pub(super) fn delete(&self, api: Api, path: &str) -> RequestBuilder {
        helper::delete(&self.client, &self.url(api, path))
    }
}
