//! Basic Splitting
//!
//! Split a document into parts that fit a model's context window.
//!
//! ```bash
//! cargo run --example basic_split
//! ```

use context_splitter::{split_content, Preset, SplitConfig, DEFAULT_PREVIEW_LEN};

fn main() {
    let document = "timestamp,level,message\n".to_string()
        + &"2024-05-01T12:00:00Z,INFO,request served in 12ms\n".repeat(2_000);

    // A character budget
    let chunks = split_content(&document, &SplitConfig::chars(20_000));
    println!("Document: {} chars", document.chars().count());
    println!("Parts at 20,000 chars: {}\n", chunks.len());

    for chunk in &chunks {
        println!("{}", chunk.card(chunks.len()));
    }

    // A model preset: token budget with headroom for the system prompt
    let preset = Preset::find("standard-8k").expect("built-in preset");
    let config = SplitConfig::default().apply_preset(preset);
    let chunks = split_content(&document, &config);

    println!("\n{} ({} tokens): {} parts", preset.label, preset.size, chunks.len());
    if let Some(first) = chunks.first() {
        println!("{}", first.preview(DEFAULT_PREVIEW_LEN.min(120)));
    }
}
