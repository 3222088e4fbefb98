//! Environment lookup behind a trait so resolution logic can be tested
//! without mutating the real process environment.

use std::collections::HashMap;
use std::ffi::OsString;

/// Read-only view of environment variables.
pub trait EnvSource {
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// The real process environment, read at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl EnvSource for HashMap<String, OsString> {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.get(key).cloned()
    }
}

impl EnvSource for [(&str, &str)] {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| OsString::from(v))
    }
}

impl<const N: usize> EnvSource for [(&str, &str); N] {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.as_slice().var_os(key)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}
