//! # Grantline
//!
//! Fetches federal research award records from a funding agency's public
//! paginated API, joins them against a roster of elected legislators by
//! (state, congressional district), and writes a combined CSV report showing
//! which awards fall within each legislator's district.
//!
//! ## Usage
//!
//! ```bash
//! grantline [--config report.toml] [-v]
//! ```
//!
//! ## Modules
//!
//! - `config` - Run configuration (agency, states, fiscal years, exclusions)
//! - `district` - Jurisdiction-key normalization rules
//! - `error` - Crate-wide error type
//! - `fetch` - Paginated award API client
//! - `join` - Legislator/award left outer join
//! - `pipeline` - End-to-end batch run
//! - `report` - CSV report writer
//! - `roster` - Legislator roster loading

pub mod config;
pub mod district;
pub mod error;
pub mod fetch;
pub mod join;
pub mod pipeline;
pub mod report;
pub mod roster;
