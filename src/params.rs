//! Parameter index data structures
//!
//! [`ParamIndex`] is the accumulator folded over every parsed test file. Once
//! the walk is done it is turned into a [`TestParams`] record, which is what
//! gets serialized to `test_params.json`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameter name -> names of the files declaring it, in first-seen order
pub type ParamMap = IndexMap<String, Vec<String>>;

/// Scope a parameter was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Top-level key of a test file
    General,
    /// Key nested inside a workload definition
    Workload,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::General => write!(f, "general"),
            Namespace::Workload => write!(f, "workload"),
        }
    }
}

/// Accumulates parameter occurrences across all scanned files
#[derive(Debug, Clone, Default)]
pub struct ParamIndex {
    general: ParamMap,
    workload: ParamMap,
}

impl ParamIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `file` declares `key` in `namespace`
    ///
    /// A file is listed at most once per key. Returns `true` when the file was
    /// newly added for that key.
    pub fn insert(&mut self, namespace: Namespace, key: &str, file: &str) -> bool {
        let files = self.map_mut(namespace).entry(key.to_string()).or_default();
        if files.iter().any(|f| f == file) {
            return false;
        }
        files.push(file.to_string());
        true
    }

    pub fn get(&self, namespace: Namespace, key: &str) -> Option<&[String]> {
        self.map(namespace).get(key).map(Vec::as_slice)
    }

    pub fn len(&self, namespace: Namespace) -> usize {
        self.map(namespace).len()
    }

    fn map(&self, namespace: Namespace) -> &ParamMap {
        match namespace {
            Namespace::General => &self.general,
            Namespace::Workload => &self.workload,
        }
    }

    fn map_mut(&mut self, namespace: Namespace) -> &mut ParamMap {
        match namespace {
            Namespace::General => &mut self.general,
            Namespace::Workload => &mut self.workload,
        }
    }

    /// Consumes the index and derives the sorted key listings
    pub fn finalize(self) -> TestParams {
        let all_general_params = sorted_keys(&self.general);
        let all_workload_params = sorted_keys(&self.workload);

        TestParams {
            general: self.general,
            workload: self.workload,
            all_general_params,
            all_workload_params,
        }
    }
}

fn sorted_keys(map: &ParamMap) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();
    keys.dedup();
    keys
}

/// Final parameter report
///
/// Field order is the key order of the serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestParams {
    pub general: ParamMap,
    pub workload: ParamMap,
    pub all_general_params: Vec<String>,
    pub all_workload_params: Vec<String>,
}
