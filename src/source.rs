use std::{
    collections::HashMap,
    ffi::{OsStr, OsString},
};

/// Read-only view of a set of environment variables.
pub trait EnvSource: Send + Sync {
    fn var_os(&self, name: &str) -> Option<OsString>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var_os(&self, name: &str) -> Option<OsString> {
        (**self).var_os(name)
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

/// In-memory environment, for tests that shouldn't touch the process environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        MapEnv::default()
    }

    #[must_use]
    pub fn with<K: Into<String>, V: AsRef<OsStr>>(mut self, name: K, value: V) -> Self {
        self.set(name, value);
        self
    }

    pub fn set<K: Into<String>, V: AsRef<OsStr>>(&mut self, name: K, value: V) {
        self.vars.insert(name.into(), value.as_ref().to_owned());
    }

    pub fn remove(&mut self, name: &str) -> Option<OsString> {
        self.vars.remove(name)
    }
}

impl EnvSource for MapEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }
}

impl<K: Into<String>, V: AsRef<OsStr>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = MapEnv::new();
        for (name, value) in iter {
            env.set(name, value);
        }
        env
    }
}
