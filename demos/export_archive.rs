//! Archive Export
//!
//! Split a file and write every part into one zip next to it.
//!
//! ```bash
//! cargo run --example export_archive -- path/to/file.txt
//! ```

use context_splitter::export::write_archive_to_dir;
use context_splitter::{Session, Source, SplitConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: export_archive <file>")?;

    let mut session = Session::new(SplitConfig::tokens(31_000));
    session.load(Source::from_path(&path)?);

    if let Some(summary) = session.summary() {
        println!("{summary}");
    }

    let source = session.source().ok_or("no source loaded")?;
    let archive = write_archive_to_dir(".", source.file_name(), session.chunks())?;
    println!("wrote {}", archive.display());
    Ok(())
}
