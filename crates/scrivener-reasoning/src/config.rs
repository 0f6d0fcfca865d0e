//! Validator configuration

use serde::{Deserialize, Serialize};

/// Configuration for completeness checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Flag a missing company name
    pub require_company_name: bool,

    /// Flag a missing registered office
    pub require_registered_office: bool,

    /// Flag a record with no key clauses
    pub require_key_clauses: bool,

    /// Flag a record with no objectives
    pub require_objectives: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_company_name: true,
            require_registered_office: true,
            require_key_clauses: true,
            require_objectives: true,
        }
    }
}

impl ValidationConfig {
    /// Only check company identity (name and registered office)
    ///
    /// Suited to correspondence, which rarely carries clauses or objects.
    pub fn permissive() -> Self {
        Self {
            require_company_name: true,
            require_registered_office: true,
            require_key_clauses: false,
            require_objectives: false,
        }
    }
}
