//! In-memory store
//!
//! Process-lifetime storage for policies and risks. Nothing survives a
//! restart; a database replaces this in production deployments.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::models::Risk;

/// In-memory store holding the policy map and the risk log.
///
/// Policies are keyed by category and upsert-only; risks are append-only
/// in insertion order. Both collections sit behind their own lock so
/// concurrent request tasks cannot lose writes.
pub struct Store {
    policies: RwLock<BTreeMap<String, String>>,
    risks: RwLock<Vec<Risk>>,
}

impl Store {
    /// Empty store with no seed data.
    pub fn new() -> Self {
        Self {
            policies: RwLock::new(BTreeMap::new()),
            risks: RwLock::new(Vec::new()),
        }
    }

    /// Store pre-loaded with the three example policies served at startup.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut policies = store.policies.write();
            policies.insert(
                "Healthcare".to_string(),
                "Outlines the company's commitment to employee health, medical coverage, and safety protocols.".to_string(),
            );
            policies.insert(
                "Data Privacy".to_string(),
                "Ensures protection of user data, compliance with GDPR and internal data handling practices.".to_string(),
            );
            policies.insert(
                "IT Security".to_string(),
                "Defines rules for protecting digital infrastructure, including access control and encryption.".to_string(),
            );
        }
        store
    }

    /// Snapshot of the full policy map.
    pub fn policies(&self) -> BTreeMap<String, String> {
        self.policies.read().clone()
    }

    /// Insert or overwrite the policy stored under `category`.
    pub fn upsert_policy(&self, category: &str, description: String) {
        self.policies.write().insert(category.to_string(), description);
    }

    /// Snapshot of all registered risks, oldest first.
    pub fn risks(&self) -> Vec<Risk> {
        self.risks.read().clone()
    }

    /// Append a risk record to the log.
    pub fn append_risk(&self, risk: Risk) {
        self.risks.write().push(risk);
    }

    /// Number of registered risks.
    pub fn risk_count(&self) -> usize {
        self.risks.read().len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
