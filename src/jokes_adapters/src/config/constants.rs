pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const SESSION_SECRET_ENV_VAR: &str = "SESSION_SECRET";
    pub const SETTINGS_ENV_PREFIX: &str = "JOKES";
}

pub const CONFIG_DIR: &str = "config";
pub const DEFAULT_ENVIRONMENT: &str = "local";

pub const SESSION_COOKIE_NAME: &str = "jokes_session";
/// Thirty days.
pub const SESSION_TTL_IN_SECONDS: i64 = 60 * 60 * 24 * 30;

pub const DEFAULT_REDIRECT: &str = "/jokes";
pub const ASSETS_DIR: &str = "assets";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
