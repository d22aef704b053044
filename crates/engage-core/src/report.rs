//! Roster–engagement join and gradebook output
//!
//! Produces the rows the D2L gradebook import expects: one row per enrolled
//! student per video, with an explicit ungraded sentinel for students who
//! have no engagement row. Engagement rows that match no enrolled student
//! are kept aside as orphans so data-entry mismatches stay visible.

use crate::error::Result;
use crate::export::VideoStats;
use crate::roster::Roster;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One gradebook row: a student's completion for one video.
///
/// `completion` is `None` when the student had no engagement row for the
/// video; the CSV writer emits an empty cell for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub star_id: String,
    pub tech_id: String,
    pub student_name: String,
    pub video: String,
    pub completion: Option<i64>,
}

/// An engagement row whose Star ID matched no enrolled student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrphanRow {
    pub video: String,
    pub star_id: String,
    pub completion: i64,
}

impl std::fmt::Display for OrphanRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "video '{}': star ID '{}' is not in the class list",
            self.video, self.star_id
        )
    }
}

/// The joined report for one assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentReport {
    /// Assignment name (the directory name)
    pub assignment: String,
    pub generated_at: DateTime<Utc>,
    /// Gradebook rows, roster order within each video
    pub rows: Vec<ReportRow>,
    /// Engagement rows excluded from the gradebook
    pub orphans: Vec<OrphanRow>,
}

impl AssignmentReport {
    /// Rows that carry a completion value
    pub fn graded_count(&self) -> usize {
        self.rows.iter().filter(|r| r.completion.is_some()).count()
    }
}

/// Join a roster against one assignment's parsed exports.
///
/// Matching is exact, case-sensitive Star ID equality. Every enrolled
/// student appears once per video; an assignment with no exports produces
/// no rows.
pub fn join_roster(assignment: &str, roster: &Roster, videos: &[VideoStats]) -> AssignmentReport {
    let mut rows = Vec::new();
    let mut orphans = Vec::new();

    for video in videos {
        for student in &roster.students {
            let completion = video
                .student_stats
                .iter()
                .find(|s| s.star_id == student.star_id)
                .map(|s| s.completion);
            rows.push(ReportRow {
                star_id: student.star_id.clone(),
                tech_id: student.tech_id.clone(),
                student_name: student.name.clone(),
                video: video.name.clone(),
                completion,
            });
        }

        for stat in &video.student_stats {
            if roster.find_by_star_id(&stat.star_id).is_none() {
                orphans.push(OrphanRow {
                    video: video.name.clone(),
                    star_id: stat.star_id.clone(),
                    completion: stat.completion,
                });
            }
        }
    }

    AssignmentReport {
        assignment: assignment.to_string(),
        generated_at: Utc::now(),
        rows,
        orphans,
    }
}

/// Write an assignment report as gradebook CSV
pub fn write_gradebook_csv<W: Write>(report: &AssignmentReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Star ID", "Tech ID", "Name", "Video", "Completion"])?;
    for row in &report.rows {
        let completion = row.completion.map(|c| c.to_string()).unwrap_or_default();
        csv_writer.write_record([
            row.star_id.as_str(),
            row.tech_id.as_str(),
            row.student_name.as_str(),
            row.video.as_str(),
            completion.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
