//! Role Catalog: read-only `role name → RoleProfile` lookup consumed by the analysis core.
//!
//! Default: `StaticRoleCatalog::builtin()` (the four shipped roles).
//! Alternative: `StaticRoleCatalog::from_path()` loads a JSON array of roles at startup.
//!
//! `AppState` holds an `Arc<dyn RoleCatalog>`, so the scoring code never sees where roles come from.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use builtin::BUILTIN_ROLES;

/// Skills and description a role name resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    /// Canonical (display) casing, in catalog order.
    pub skills: Vec<String>,
    pub description: String,
}

/// Catalog record as it appears in a JSON catalog file.
#[derive(Debug, Clone, Deserialize)]
struct RoleRecord {
    name: String,
    skills: Vec<String>,
    description: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read role catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed role catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Role catalog contains no roles")]
    Empty,

    #[error("Role catalog contains a role with a blank name")]
    BlankName,

    #[error("Role '{0}' is defined more than once")]
    DuplicateRole(String),

    #[error("Role '{role}' lists skill '{skill}' more than once")]
    DuplicateSkill { role: String, skill: String },
}

/// Synchronous lookup by exact role name.
pub trait RoleCatalog: Send + Sync {
    fn lookup(&self, name: &str) -> Option<&RoleProfile>;

    /// Every known role name, in catalog order.
    fn role_names(&self) -> Vec<String>;
}

/// In-memory catalog preserving definition order.
#[derive(Debug, Clone)]
pub struct StaticRoleCatalog {
    roles: Vec<(String, RoleProfile)>,
}

impl StaticRoleCatalog {
    /// Validates and wraps an ordered list of roles.
    pub fn new(roles: Vec<(String, RoleProfile)>) -> Result<Self, CatalogError> {
        if roles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen_names = HashSet::new();
        for (name, profile) in &roles {
            if name.trim().is_empty() {
                return Err(CatalogError::BlankName);
            }
            if !seen_names.insert(name.as_str()) {
                return Err(CatalogError::DuplicateRole(name.clone()));
            }

            let mut seen_skills = HashSet::new();
            for skill in &profile.skills {
                if !seen_skills.insert(skill.as_str()) {
                    return Err(CatalogError::DuplicateSkill {
                        role: name.clone(),
                        skill: skill.clone(),
                    });
                }
            }
        }

        Ok(Self { roles })
    }

    pub fn builtin() -> Self {
        let roles = BUILTIN_ROLES
            .iter()
            .map(|role| {
                (
                    role.name.to_string(),
                    RoleProfile {
                        skills: role.skills.iter().map(|s| s.to_string()).collect(),
                        description: role.description.to_string(),
                    },
                )
            })
            .collect();
        Self { roles }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<RoleRecord> = serde_json::from_str(raw)?;
        Self::new(
            records
                .into_iter()
                .map(|r| {
                    (
                        r.name,
                        RoleProfile {
                            skills: r.skills,
                            description: r.description,
                        },
                    )
                })
                .collect(),
        )
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }
}

impl RoleCatalog for StaticRoleCatalog {
    fn lookup(&self, name: &str) -> Option<&RoleProfile> {
        self.roles
            .iter()
            .find(|(role_name, _)| role_name == name)
            .map(|(_, profile)| profile)
    }

    fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|(name, _)| name.clone()).collect()
    }
}
