//! Command implementations

pub mod audit;
pub mod score;
pub mod simple;
pub mod words;

pub use audit::{AuditResult, LengthAudit, run_audit};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
pub use words::{CatalogReport, LengthCount, catalog_report};
