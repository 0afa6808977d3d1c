#![cfg(feature = "export")]
//! Export tests: part files and archives on disk.

use std::fs::File;
use std::io::Read;

use context_splitter::export::{write_archive_to_dir, write_part};
use context_splitter::naming::part_file_name;
use context_splitter::{Session, Source, SplitConfig};
use zip::ZipArchive;

fn session_for(text: &str, name: &str, size: usize) -> Session {
    let mut session = Session::new(SplitConfig::chars(size));
    session.load(Source::new(text, name));
    session
}

#[test]
fn archive_round_trips_every_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let text = "id,value\n".to_string() + &"1,abc\n".repeat(500);
    let session = session_for(&text, "table.csv", 700);
    let chunks = session.chunks();
    assert!(chunks.len() > 3);

    let path = write_archive_to_dir(dir.path(), "table.csv", chunks).unwrap();
    assert_eq!(path.file_name().unwrap(), "table_split.zip");

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    assert_eq!(archive.len(), chunks.len());

    let mut rebuilt = String::new();
    for chunk in chunks {
        let mut entry = archive
            .by_name(&part_file_name("table.csv", chunk.index()))
            .unwrap();
        entry.read_to_string(&mut rebuilt).unwrap();
    }
    assert_eq!(rebuilt, text);
}

#[test]
fn single_part_matches_archive_naming() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_for("first line\nsecond line\n", "log", 11);

    let chunk = session.chunk(2).unwrap();
    let path = write_part(dir.path(), "log", chunk).unwrap();

    assert_eq!(path.file_name().unwrap(), "log_part_2.txt");
    assert_eq!(std::fs::read_to_string(path).unwrap(), "second line\n");
}

#[test]
fn pasted_text_archive_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(SplitConfig::tokens(2));
    session.load(Source::from_pasted("hello world, again").unwrap());

    let source_name = session.source().unwrap().file_name();
    let path = write_archive_to_dir(dir.path(), source_name, session.chunks()).unwrap();
    assert_eq!(path.file_name().unwrap(), "pasted-content_split.zip");
}
