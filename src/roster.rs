//! Legislator roster loading.

use crate::district::district_to_str;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One elected official from the roster snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Legislator {
    pub legislator_name: String,
    pub state: String,
    /// 1-based district number. At-large states are already encoded as 1.
    pub congressional_district: u32,
}

impl Legislator {
    /// 2-character join key form of the district.
    pub fn district(&self) -> String {
        district_to_str(self.congressional_district)
    }
}

/// Read the roster CSV. Any unreadable row is fatal for the run.
pub fn load_roster(path: &Path) -> Result<Vec<Legislator>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut legislators = Vec::new();
    for record in reader.deserialize() {
        legislators.push(record?);
    }
    Ok(legislators)
}
