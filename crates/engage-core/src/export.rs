//! MediaSpace user-engagement export parser
//!
//! Each export is a `.csv` download whose first six lines form a fixed
//! preamble. Only the preamble is validated; the body format is not
//! documented by MediaSpace, so `length` and `student_stats` stay at their
//! defaults until a body parser exists.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const REPORT_TYPE_PREFIX: &str = "Report: User Engagement";
const VIDEO_NAME_PREFIX: &str = "Filtered entries: ";

/// One student's engagement with one video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStudentStats {
    pub star_id: String,
    pub name: String,
    pub completion: i64,
}

/// Parsed engagement export for a single video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStats {
    /// Video name, taken from the `Filtered entries:` preamble line
    pub name: String,
    /// Video length in seconds; not present in the preamble
    pub length: f64,
    /// Per-student completion rows; empty until a body parser exists
    pub student_stats: Vec<VideoStudentStats>,
}

/// Parse the engagement export at `path`
pub fn parse_export<P: AsRef<Path>>(path: P) -> Result<VideoStats> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_export_reader(BufReader::new(file), path)
}

/// Parse an engagement export from any buffered reader.
///
/// `path` is used only for error messages.
pub fn parse_export_reader<R: BufRead>(reader: R, path: &Path) -> Result<VideoStats> {
    let mut lines = reader.lines();

    let mut next_line = |line_no: usize| -> Result<String> {
        match lines.next() {
            Some(line) => Ok(line?),
            None => Err(Error::ExportTruncated {
                path: path.to_path_buf(),
                line: line_no,
            }),
        }
    };

    let invalid = |line_no: usize, reason: &str| Error::ExportPreamble {
        path: path.to_path_buf(),
        line: line_no,
        reason: reason.to_string(),
    };

    let line = next_line(1)?;
    if !line.starts_with('#') {
        return Err(invalid(1, "expected a '#' marker line"));
    }

    let line = next_line(2)?;
    if !line.starts_with(REPORT_TYPE_PREFIX) {
        return Err(invalid(2, "wrong report type"));
    }

    next_line(3)?;
    next_line(4)?;

    let line = next_line(5)?;
    let name = line
        .strip_prefix(VIDEO_NAME_PREFIX)
        .ok_or_else(|| invalid(5, "improper format"))?;
    if name.is_empty() {
        return Err(invalid(5, "empty video name"));
    }

    let line = next_line(6)?;
    if !line.starts_with('#') {
        return Err(invalid(6, "expected a '#' marker line"));
    }

    Ok(VideoStats {
        name: name.to_string(),
        length: 0.0,
        student_stats: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(s: &str) -> Result<VideoStats> {
        parse_export_reader(s.as_bytes(), &PathBuf::from("test.csv"))
    }

    #[test]
    fn test_parse_well_formed_preamble() {
        let stats = parse(
            "#x\nReport: User Engagement Summary\nL3\nL4\nFiltered entries: Week1 Lecture\n#end",
        )
        .unwrap();
        assert_eq!(stats.name, "Week1 Lecture");
        assert_eq!(stats.length, 0.0);
        assert!(stats.student_stats.is_empty());
    }

    #[test]
    fn test_parse_ignores_body_after_preamble() {
        let stats = parse(
            "# header\nReport: User Engagement\nA\nB\nFiltered entries: Intro\n# end\nbody,rows,here\n",
        )
        .unwrap();
        assert_eq!(stats.name, "Intro");
        assert!(stats.student_stats.is_empty());
    }

    #[test]
    fn test_empty_first_line_fails() {
        let err = parse("\nReport: User Engagement\nL3\nL4\nFiltered entries: V\n#e").unwrap_err();
        match err {
            Error::ExportPreamble { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_report_type_fails_on_line_two() {
        let err = parse("#x\nReport: Plays\nL3\nL4\nFiltered entries: V\n#e").unwrap_err();
        match err {
            Error::ExportPreamble { line, reason, .. } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "wrong report type");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_truncated_file_fails_distinctly() {
        let err = parse("#x\nReport: User Engagement\nL3\n").unwrap_err();
        match err {
            Error::ExportTruncated { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_fifth_line_prefix_fails() {
        let err = parse("#x\nReport: User Engagement\nL3\nL4\nEntries: V\n#e").unwrap_err();
        match err {
            Error::ExportPreamble { line, reason, .. } => {
                assert_eq!(line, 5);
                assert_eq!(reason, "improper format");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_video_name_fails() {
        let err = parse("#x\nReport: User Engagement\nL3\nL4\nFiltered entries: \n#e").unwrap_err();
        match err {
            Error::ExportPreamble { line, reason, .. } => {
                assert_eq!(line, 5);
                assert_eq!(reason, "empty video name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_sixth_line_fails() {
        let err = parse("#x\nReport: User Engagement\nL3\nL4\nFiltered entries: V\nend").unwrap_err();
        match err {
            Error::ExportPreamble { line, .. } => assert_eq!(line, 6),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
