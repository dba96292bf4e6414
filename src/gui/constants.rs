use std::time::Duration;

pub const API_BASE_URL: &str = "http://localhost:3000";  // REST backend, not configurable
pub const APP_DIR_NAME: &str = "pulse-robot-admin";
pub const STORAGE_FILE_NAME: &str = "local_storage.db";
pub const LOGIN_DELAY: Duration = Duration::from_millis(1000);   // Simulated authentication round-trip
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);
pub const TOAST_TICK: Duration = Duration::from_millis(500);
