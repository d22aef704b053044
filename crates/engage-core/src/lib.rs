//! engage-core: Core library for MediaSpace attendance reporting
//!
//! This library provides functionality to:
//! - Parse a tab-delimited class list into a roster of students
//! - Validate and parse MediaSpace user-engagement export preambles
//! - Aggregate the exports of an assignment directory
//! - Join engagement data against the roster into gradebook report rows

pub mod assignment;
pub mod error;
pub mod export;
pub mod report;
pub mod roster;
pub mod split;

pub use assignment::{discover_assignments, list_exports, parse_assignment};
pub use error::{Error, Result};
pub use export::{parse_export, VideoStats, VideoStudentStats};
pub use report::{join_roster, write_gradebook_csv, AssignmentReport, OrphanRow, ReportRow};
pub use roster::{parse_roster, IdField, Roster, RosterWarning, Student};
pub use split::{split_on, split_whitespace_fields};
