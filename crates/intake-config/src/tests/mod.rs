mod config;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - restores the prior value on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        unsafe { env::set_var(key, value) };
        Self { key, original }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let original = env::var(key).ok();
        unsafe { env::remove_var(key) };
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match self.original.take() {
                Some(val) => env::set_var(self.key, &val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point INTAKE_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("INTAKE_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
