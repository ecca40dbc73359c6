use criterion::Criterion;
use model_collections::Model;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::OnceLock;
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl User {
    pub fn new(id: i64) -> Self {
        Self {
            name: format!("user_{id}"),
            age: id % 90,
            email: format!("user{id}@company.com"),
        }
    }
}

impl Model for User {}

pub fn realistic_users() -> &'static Vec<User> {
    static INSTANCE: OnceLock<Vec<User>> = OnceLock::new();
    INSTANCE.get_or_init(|| (0..1000).map(User::new).collect())
}

pub fn realistic_records() -> &'static Vec<Value> {
    static INSTANCE: OnceLock<Vec<Value>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        (0..1000)
            .map(|id| {
                json!({
                    "name": format!("user_{id}"),
                    "age": id % 90,
                    "email": format!("user{id}@company.com"),
                })
            })
            .collect()
    })
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
