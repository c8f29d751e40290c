//! Core types for the days event log.
//!
//! This crate holds everything with real logic in it:
//! - `DateValue` for strict `YYYY-MM-DD` dates and day arithmetic
//! - `EventRecord` and loading records from raw storage rows
//! - `ListFilter` predicates evaluated against a reference "today"
//! - the list engine that turns records into display lines
//! - `store` for reading and rewriting the CSV events file

pub mod constants;
pub mod date;
pub mod error;
pub mod event;
pub mod filter;
pub mod query;
pub mod store;

pub use date::{DateValue, days_between};
pub use error::{DaysError, DaysResult};
pub use event::{EventRecord, LoadReport, RowDiagnostic};
pub use filter::{DateArg, ListFilter, Verdict};
pub use query::{ListOutcome, list_events};
