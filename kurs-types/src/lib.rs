//! Shared error taxonomy, security references, tabular results and
//! configuration primitives for the kurs workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod security;
mod table;

pub use config::{CacheConfig, DEFAULT_USER_AGENT, Endpoints, HttpConfig, KursConfig};
pub use error::KursError;
pub use security::{Frequency, Security, SecurityType};
pub use table::Table;
