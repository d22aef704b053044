//! Class-list parser
//!
//! The class list is a tab-delimited text file with at least three columns:
//! Star ID, Tech ID, student name. Extra columns are ignored. It is usually
//! produced by pasting an eservices class list into a text file.

use crate::error::{Error, Result};
use crate::split::split_on;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Expected length of Star and Tech IDs
const ID_LEN: usize = 8;

/// One enrolled student from the class list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub star_id: String,
    pub tech_id: String,
    pub name: String,
}

/// Which roster ID column a warning refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdField {
    StarId,
    TechId,
}

impl std::fmt::Display for IdField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdField::StarId => write!(f, "Star ID"),
            IdField::TechId => write!(f, "Tech ID"),
        }
    }
}

/// Advisory diagnostic for an ID whose length is not the expected 8.
///
/// Never fatal: the ID is stored verbatim and parsing continues. Callers
/// decide whether to surface these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterWarning {
    /// 1-based line number in the class list
    pub line: usize,
    pub field: IdField,
    /// Observed length of the ID
    pub len: usize,
}

impl std::fmt::Display for RosterWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "classlist line {}: the {} length is {}",
            self.line, self.field, self.len
        )
    }
}

/// A parsed class list: students in file order plus advisory warnings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub students: Vec<Student>,
    pub warnings: Vec<RosterWarning>,
}

impl Roster {
    /// Number of enrolled students
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Find a student by Star ID (exact, case-sensitive)
    pub fn find_by_star_id(&self, star_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.star_id == star_id)
    }
}

/// Parse the class list at `path`
pub fn parse_roster<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_roster_reader(BufReader::new(file))
}

/// Parse a class list from any buffered reader
pub fn parse_roster_reader<R: BufRead>(reader: R) -> Result<Roster> {
    let mut students = Vec::new();
    let mut warnings = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.is_empty() {
            continue;
        }

        let fields = split_on(&line, '\t');
        if fields.len() < 3 {
            return Err(Error::MalformedRoster {
                line: line_no,
                fields: fields.len(),
            });
        }

        if fields[0].len() != ID_LEN {
            warnings.push(RosterWarning {
                line: line_no,
                field: IdField::StarId,
                len: fields[0].len(),
            });
        }
        if fields[1].len() != ID_LEN {
            warnings.push(RosterWarning {
                line: line_no,
                field: IdField::TechId,
                len: fields[1].len(),
            });
        }

        students.push(Student {
            star_id: fields[0].clone(),
            tech_id: fields[1].clone(),
            name: fields[2].clone(),
        });
    }

    Ok(Roster { students, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Roster> {
        parse_roster_reader(s.as_bytes())
    }

    #[test]
    fn test_parse_three_fields() {
        let roster = parse("aa112233\tbb445566\tDoe, Jane\n").unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students[0].star_id, "aa112233");
        assert_eq!(roster.students[0].tech_id, "bb445566");
        assert_eq!(roster.students[0].name, "Doe, Jane");
        assert!(roster.warnings.is_empty());
    }

    #[test]
    fn test_parse_extra_fields_ignored() {
        let roster = parse("aa112233\tbb445566\tDoe, Jane\temail@x\tmore\n").unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students[0].name, "Doe, Jane");
    }

    #[test]
    fn test_parse_empty_name_field_preserved() {
        let roster = parse("aa112233\tbb445566\t\n").unwrap();
        assert_eq!(roster.students[0].name, "");
    }

    #[test]
    fn test_parse_two_fields_fails_with_line_and_count() {
        let err = parse("aa112233\tbb445566\tDoe, Jane\nxx\tyy\n").unwrap_err();
        match err {
            Error::MalformedRoster { line, fields } => {
                assert_eq!(line, 2);
                assert_eq!(fields, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_short_and_long_ids_load_with_warnings() {
        // 7- and 9-char IDs must load unchanged; the length check is advisory
        let roster = parse("aa11223\tbb4455667\tDoe, Jane\n").unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students[0].star_id, "aa11223");
        assert_eq!(roster.students[0].tech_id, "bb4455667");

        assert_eq!(roster.warnings.len(), 2);
        assert_eq!(
            roster.warnings[0],
            RosterWarning {
                line: 1,
                field: IdField::StarId,
                len: 7
            }
        );
        assert_eq!(
            roster.warnings[1],
            RosterWarning {
                line: 1,
                field: IdField::TechId,
                len: 9
            }
        );
    }

    #[test]
    fn test_blank_lines_skipped_but_counted() {
        let err = parse("aa112233\tbb445566\tDoe, Jane\n\nbad line\n").unwrap_err();
        match err {
            Error::MalformedRoster { line, fields } => {
                assert_eq!(line, 3);
                assert_eq!(fields, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicates_kept_in_file_order() {
        let roster = parse(
            "aa112233\tbb445566\tDoe, Jane\naa112233\tbb445566\tDoe, Jane\n",
        )
        .unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_find_by_star_id_exact_match_only() {
        let roster = parse("aa112233\tbb445566\tDoe, Jane\n").unwrap();
        assert!(roster.find_by_star_id("aa112233").is_some());
        assert!(roster.find_by_star_id("AA112233").is_none());
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = parse_roster("/nonexistent/classlist.txt").unwrap_err();
        match err {
            Error::SourceUnavailable { path, .. } => {
                assert!(path.to_string_lossy().contains("classlist.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
