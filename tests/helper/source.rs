//! Version source test utilities

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use aports_watch::monitor::source::{SourceError, UpstreamResult, VersionSource};

/// Scripted version source for pipeline tests
///
/// Unknown names answer as a miss, mirroring how the real service
/// responds to packages it does not track.
pub struct ScriptedSource {
    versions: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            versions: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_version(mut self, name: &str, version: &str) -> Self {
        self.versions.insert(name.to_string(), version.to_string());
        self
    }

    /// Names queried so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VersionSource for ScriptedSource {
    async fn latest_version(&self, name: &str) -> Result<UpstreamResult, SourceError> {
        self.calls.lock().unwrap().push(name.to_string());
        Ok(UpstreamResult {
            latest_version: self.versions.get(name).cloned(),
        })
    }
}
