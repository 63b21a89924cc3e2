use crate::error::{BadEnvVarSnafu, ParseNumberSnafu, RollcallResult};
use dotenvy::var;
use snafu::ResultExt;
use std::{sync::Arc, time::Duration};

const DEFAULT_API_URL: &str = "http://localhost:8080/api/students";
const DEFAULT_SERVER_IP: &str = "127.0.0.1:3000";

#[derive(Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    ui_config: UiConfig,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> RollcallResult<Self> {
        Ok(Self {
            api_config: Arc::new(ApiConfig::from_env()?),
            ui_config: UiConfig::from_env()?,
            server_ip: optional_env_var("ROLLCALL_SERVER_IP")?
                .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string()),
        })
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub const fn ui_config(&self) -> UiConfig {
        self.ui_config
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug)]
pub struct ApiConfig {
    collection_url: String,
    request_timeout: Duration,
}

impl ApiConfig {
    pub const fn new(collection_url: String, request_timeout: Duration) -> Self {
        Self {
            collection_url,
            request_timeout,
        }
    }

    fn from_env() -> RollcallResult<Self> {
        Ok(Self::new(
            optional_env_var("ROLLCALL_API_URL")?.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            Duration::from_secs(optional_env_number("ROLLCALL_REQUEST_TIMEOUT_SECS")?.unwrap_or(10)),
        ))
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

/// Timings for the page itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiConfig {
    pub search_debounce: Duration,
    pub toast_lifetime: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(500),
            toast_lifetime: Duration::from_millis(3000),
        }
    }
}

impl UiConfig {
    fn from_env() -> RollcallResult<Self> {
        let default = Self::default();

        Ok(Self {
            search_debounce: optional_env_number("ROLLCALL_SEARCH_DEBOUNCE_MS")?
                .map_or(default.search_debounce, Duration::from_millis),
            toast_lifetime: optional_env_number("ROLLCALL_TOAST_MS")?
                .map_or(default.toast_lifetime, Duration::from_millis),
        })
    }
}

fn optional_env_var(name: &'static str) -> RollcallResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}

fn optional_env_number(name: &'static str) -> RollcallResult<Option<u64>> {
    optional_env_var(name)?
        .map(|value| value.trim().parse().context(ParseNumberSnafu { name }))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollcallError;
    use std::sync::{Mutex, PoisonError};

    const ROLLCALL_VARS: [&str; 5] = [
        "ROLLCALL_API_URL",
        "ROLLCALL_REQUEST_TIMEOUT_SECS",
        "ROLLCALL_SEARCH_DEBOUNCE_MS",
        "ROLLCALL_TOAST_MS",
        "ROLLCALL_SERVER_IP",
    ];

    //the process environment is shared between test threads
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set(name: &str, value: &str) {
        unsafe { std::env::set_var(name, value) }
    }

    fn unset(name: &str) {
        unsafe { std::env::remove_var(name) }
    }

    fn clear_rollcall_vars() {
        for name in ROLLCALL_VARS {
            unset(name);
        }
    }

    #[test]
    fn unset_number_is_none() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        unset("ROLLCALL_TEST_UNSET_NUMBER");

        assert_eq!(optional_env_number("ROLLCALL_TEST_UNSET_NUMBER").unwrap(), None);
    }

    #[test]
    fn numbers_are_trimmed() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        set("ROLLCALL_TEST_PADDED_NUMBER", " 750 ");

        assert_eq!(optional_env_number("ROLLCALL_TEST_PADDED_NUMBER").unwrap(), Some(750));
        unset("ROLLCALL_TEST_PADDED_NUMBER");
    }

    #[test]
    fn non_numeric_value_names_the_variable() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        set("ROLLCALL_TEST_BAD_NUMBER", "abc");

        let err = optional_env_number("ROLLCALL_TEST_BAD_NUMBER").unwrap_err();
        unset("ROLLCALL_TEST_BAD_NUMBER");
        assert!(matches!(
            err,
            RollcallError::ParseNumber { name: "ROLLCALL_TEST_BAD_NUMBER", .. }
        ));
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_rollcall_vars();

        let config = RuntimeConfiguration::new().unwrap();
        assert_eq!(config.server_ip(), DEFAULT_SERVER_IP);
        assert_eq!(config.ui_config(), UiConfig::default());
        assert_eq!(config.ui_config().search_debounce, Duration::from_millis(500));
        assert_eq!(config.ui_config().toast_lifetime, Duration::from_millis(3000));
        assert_eq!(config.api_config().collection_url(), DEFAULT_API_URL);
        assert_eq!(config.api_config().request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn overrides_are_read() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_rollcall_vars();
        set("ROLLCALL_API_URL", "http://students.internal/api/students");
        set("ROLLCALL_REQUEST_TIMEOUT_SECS", "3");
        set("ROLLCALL_SEARCH_DEBOUNCE_MS", " 250");
        set("ROLLCALL_SERVER_IP", "0.0.0.0:8000");

        let config = RuntimeConfiguration::new();
        clear_rollcall_vars();
        let config = config.unwrap();

        assert_eq!(config.server_ip(), "0.0.0.0:8000");
        assert_eq!(config.ui_config().search_debounce, Duration::from_millis(250));
        assert_eq!(config.ui_config().toast_lifetime, Duration::from_millis(3000));
        assert_eq!(
            config.api_config().collection_url(),
            "http://students.internal/api/students"
        );
        assert_eq!(config.api_config().request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn bad_toast_lifetime_is_rejected() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_rollcall_vars();
        set("ROLLCALL_TOAST_MS", "abc");

        let result = RuntimeConfiguration::new();
        clear_rollcall_vars();
        assert!(matches!(
            result,
            Err(RollcallError::ParseNumber { name: "ROLLCALL_TOAST_MS", .. })
        ));
    }
}
