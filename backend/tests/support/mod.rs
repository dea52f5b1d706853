//! Shared helpers for the integration tests.

#![allow(dead_code)]

#[cfg(feature = "postgres-repo")]
pub mod fixture;

use std::collections::HashSet;
use std::sync::Mutex;

use person_api::api::CreatePersonRequest;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Access to the process environment is serialized across tests and the
/// previous values are restored even if `f` panics.
///
/// `Some(v)` sets a variable, `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::apply(changes);
    f()
}

struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let saved = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (key, value) in changes {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }

        Self { saved }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// The request used by most scenarios.
pub fn frank_tank() -> CreatePersonRequest {
    CreatePersonRequest::new("Frank", "Tank", "Programmer")
}

/// Requests that each omit exactly one required field, labelled by the
/// field that is missing.
pub fn requests_missing_one_field() -> Vec<(&'static str, serde_json::Value)> {
    vec![
        (
            "firstName",
            serde_json::json!({ "lastName": "Tank", "occupation": "Programmer" }),
        ),
        (
            "lastName",
            serde_json::json!({ "firstName": "Frank", "occupation": "Programmer" }),
        ),
        (
            "occupation",
            serde_json::json!({ "firstName": "Frank", "lastName": "Tank" }),
        ),
    ]
}
