//! # Course Catalog Records
//!
//! This module is the record source for the planner: it defines the [`Course`]
//! value type and parses comma-delimited catalog files into courses, feeding
//! them to a [`ChainedHashTable`] one row at a time.
//!
//! ## Format
//! One course per line: `id,title[,prerequisite...]`. Fields are trimmed of
//! surrounding whitespace; blank lines are ignored.
//!
//! ## Error recovery
//! A malformed row (fewer than two fields, or an empty id or title) is
//! skipped with a warning and loading continues, so one dirty row does not
//! discard the rest of the catalog. I/O failures abort the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::error::{Error, Result};
use crate::hashing::chained::ChainedHashTable;

/// A single course offering: unique id, human-readable title, and the ids of
/// any prerequisite courses in catalog order. Immutable once constructed;
/// the table stores its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub course_id: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Parses one catalog row. Returns `Ok(None)` for a blank line.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Course>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 2 {
            return Err(Error::MalformedRow {
                line: line_number,
                reason: "expected at least a course id and a title",
            });
        }
        if fields[0].is_empty() {
            return Err(Error::MalformedRow {
                line: line_number,
                reason: "empty course id",
            });
        }
        if fields[1].is_empty() {
            return Err(Error::MalformedRow {
                line: line_number,
                reason: "empty course title",
            });
        }
        Ok(Some(Course {
            course_id: fields[0].to_string(),
            title: fields[1].to_string(),
            // A trailing comma produces an empty prerequisite field; drop it.
            prerequisites: fields[2..]
                .iter()
                .filter(|field| !field.is_empty())
                .map(|field| field.to_string())
                .collect(),
        }))
    }
}

/// Loads a catalog file into `table`, returning the number of courses
/// inserted. Malformed rows are skipped with a warning; I/O errors abort.
pub fn load_courses<P: AsRef<Path>>(path: P, table: &mut ChainedHashTable) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut loaded = 0;
    let mut skipped = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match Course::parse_line(&line, index + 1) {
            Ok(Some(course)) => {
                table.insert(course);
                loaded += 1;
            }
            Ok(None) => {}
            Err(err) => {
                skipped += 1;
                warn!("skipping row: {err}");
            }
        }
    }
    if skipped > 0 {
        warn!("{skipped} malformed row(s) skipped in {}", path.display());
    }
    Ok(loaded)
}
