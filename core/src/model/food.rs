use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::expiry::parse_expiry_code;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FoodEntry {
    pub id: Uuid,
    pub name: String,

    /// The code exactly as the user typed it, kept for display and audit.
    pub expiry_code: String,

    /// Canonical expiry instant: the final moment (23:59:59.999 local) of
    /// the day the code names. Always derivable from `expiry_code`.
    pub expires_at: DateTime<Utc>,
}

impl FoodEntry {
    /// Build an entry from a raw expiry code. Fails when the code does not
    /// parse, so an entry with an underivable expiry never exists.
    pub fn from_code(name: String, expiry_code: String) -> Result<Self> {
        let expires_at = parse_expiry_code(&expiry_code)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            expiry_code,
            expires_at,
        })
    }
}
