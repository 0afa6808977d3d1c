//! Writing chunks out.
//!
//! Single chunks go to plain files; a whole split goes into one zip archive
//! with an entry per chunk. Both use the names from [`crate::naming`].
//!
//! ```text
//! report_split.zip
//! ├── report_part_1.csv
//! ├── report_part_2.csv
//! └── report_part_3.csv
//! ```

use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::naming::{archive_file_name, part_file_name};
use crate::{Chunk, Error, Result};

/// Write one chunk to `dir/<base>_part_<index>.<ext>`.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be written.
pub fn write_part(dir: impl AsRef<Path>, source_name: &str, chunk: &Chunk) -> Result<PathBuf> {
    let path = dir
        .as_ref()
        .join(part_file_name(source_name, chunk.index()));
    std::fs::write(&path, chunk.content()).map_err(|e| Error::io(&path, e))?;
    debug!(path = %path.display(), bytes = chunk.len(), "wrote part");
    Ok(path)
}

/// Write every chunk as its own file in `dir`.
///
/// # Errors
///
/// [`Error::NothingToExport`] for an empty list, [`Error::Io`] on the first
/// failed write.
pub fn write_parts(dir: impl AsRef<Path>, source_name: &str, chunks: &[Chunk]) -> Result<Vec<PathBuf>> {
    if chunks.is_empty() {
        return Err(Error::NothingToExport);
    }
    let dir = dir.as_ref();
    let paths = chunks
        .iter()
        .map(|chunk| write_part(dir, source_name, chunk))
        .collect::<Result<Vec<_>>>()?;
    info!(dir = %dir.display(), parts = paths.len(), "wrote parts");
    Ok(paths)
}

/// Write a zip archive of `chunks` into `writer` and hand the writer back.
///
/// Entries are deflated and named `<base>_part_<index>.<ext>` after
/// `source_name`.
///
/// # Errors
///
/// [`Error::NothingToExport`] for an empty list, [`Error::Archive`] if the
/// archive cannot be written.
pub fn write_archive<W: Write + Seek>(writer: W, source_name: &str, chunks: &[Chunk]) -> Result<W> {
    if chunks.is_empty() {
        return Err(Error::NothingToExport);
    }

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut zip = ZipWriter::new(writer);
    for chunk in chunks {
        zip.start_file(part_file_name(source_name, chunk.index()), options)?;
        zip.write_all(chunk.content().as_bytes())
            .map_err(ZipError::from)?;
    }
    Ok(zip.finish()?)
}

/// Write `dir/<base>_split.zip` holding every chunk.
///
/// # Errors
///
/// As [`write_archive`], plus [`Error::Io`] if the file cannot be created.
pub fn write_archive_to_dir(
    dir: impl AsRef<Path>,
    source_name: &str,
    chunks: &[Chunk],
) -> Result<PathBuf> {
    if chunks.is_empty() {
        return Err(Error::NothingToExport);
    }
    let path = dir.as_ref().join(archive_file_name(source_name));
    let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
    let mut file = write_archive(file, source_name, chunks)?;
    file.flush().map_err(|e| Error::io(&path, e))?;

    info!(path = %path.display(), entries = chunks.len(), "wrote archive");
    Ok(path)
}
