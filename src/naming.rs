//! Output file names.
//!
//! Single-chunk downloads and archive entries share one scheme so they can
//! never disagree:
//!
//! ```text
//! report.csv   ->  report_part_1.csv, report_part_2.csv, ...  report_split.zip
//! notes        ->  notes_part_1.txt, ...                      notes_split.zip
//! a.tar.gz     ->  a.tar_part_1.gz, ...                       a.tar_split.zip
//! ```

/// Name used when the source has no name.
pub const DEFAULT_SOURCE_NAME: &str = "split_file.txt";

/// Extension used when the source name has none.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Extension of bulk archives.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Split a file name on its last `.` into `(base, ext)`.
///
/// ```rust
/// use context_splitter::naming::split_file_name;
///
/// assert_eq!(split_file_name("a.b.c"), ("a.b", "c"));
/// assert_eq!(split_file_name("notes"), ("notes", "txt"));
/// assert_eq!(split_file_name(".env"), ("", "env"));
/// ```
#[must_use]
pub fn split_file_name(name: &str) -> (&str, &str) {
    match name.rsplit_once('.') {
        Some((base, ext)) => (base, ext),
        None => (name, DEFAULT_EXTENSION),
    }
}

/// `<base>_part_<index>.<ext>`
#[must_use]
pub fn part_file_name(source_name: &str, index: usize) -> String {
    let (base, ext) = split_file_name(source_name);
    format!("{base}_part_{index}.{ext}")
}

/// `<base>_split.zip`
#[must_use]
pub fn archive_file_name(source_name: &str) -> String {
    let (base, _) = split_file_name(source_name);
    format!("{base}_split.{ARCHIVE_EXTENSION}")
}
