pub const SITE_NAME: &str = "VPS Panel";

/// Storage key of the persisted session identity.
pub const SESSION_STORAGE_KEY: &str = "panel:session";
/// Storage key of the simulated backend's dataset.
pub const MOCK_DATABASE_KEY: &str = "panel:mock-db";

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_PROXMOX_URL: &str = "http://localhost:3000/proxmox/api";

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 4_000;
