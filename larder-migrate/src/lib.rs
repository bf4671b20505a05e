//! Bulk conversion of legacy tag lists to canonical tag ids

pub mod planner;
pub mod records;
pub mod report;

pub use planner::{deduplicate_in_order, MigrationPlanner};
pub use records::{read_records, write_records, LegacyRecord, TagField, Tagged};
pub use report::{Mapping, MigrationReport, ValidationReport, ValidationWarning};

pub use larder_core::MigrationStrategy;
