use std::collections::HashMap;

use log::trace;

/// Key-value store with a two step write: values are staged by `set` and
/// only become readable after `synchronize`.
#[derive(Debug, Default)]
struct Defaults {
    pending: HashMap<String, String>,
    stored: HashMap<String, String>,
}

impl Defaults {
    fn set(&mut self, key: &str, value: &str) {
        self.pending.insert(key.to_string(), value.to_string());
    }

    fn synchronize(&mut self) {
        trace!("Synchronizing {} pending defaults", self.pending.len());
        self.stored.extend(self.pending.drain());
    }

    fn object(&self, key: &str) -> Option<&str> {
        self.stored.get(key).map(String::as_str)
    }
}

/// Facade hiding the staging protocol of [`Defaults`].
#[derive(Debug, Default)]
pub struct Eternal {
    defaults: Defaults,
}

impl Eternal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.defaults.set(key, value);
        self.defaults.synchronize();
    }

    pub fn object(&self, key: &str) -> Option<&str> {
        self.defaults.object(key)
    }
}
