//! Split sessions.
//!
//! A [`Session`] holds the current source and configuration and the chunk
//! list derived from them. Any change replaces the whole list; nothing is
//! re-split incrementally.
//!
//! ## Off-thread splitting
//!
//! Large inputs can be split away from a latency-sensitive thread. Every
//! state change bumps a generation counter and yields a [`SplitRequest`]
//! stamped with it. Only the outcome of the latest request is installed;
//! older ones are discarded:
//!
//! ```rust
//! use context_splitter::{Change, Session, Source, SplitConfig};
//!
//! let mut session = Session::new(SplitConfig::chars(4));
//! let first = session.update(Change::Load(Source::from_pasted("abcdefgh")?)).unwrap();
//! let second = session.update(Change::Config(SplitConfig::chars(2))).unwrap();
//!
//! let stale = std::thread::spawn(move || first.run()).join().unwrap();
//! let fresh = std::thread::spawn(move || second.run()).join().unwrap();
//!
//! assert!(session.complete(fresh));
//! assert!(!session.complete(stale));
//! assert_eq!(session.chunks().len(), 4);
//! # Ok::<(), context_splitter::Error>(())
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::chunk::group_thousands;
use crate::{Chunk, Error, Preset, Result, Source, SplitConfig, SplitMode, Splitter};

/// A change to session state.
#[derive(Debug, Clone)]
pub enum Change {
    /// Replace the source.
    Load(Source),
    /// Replace the configuration.
    Config(SplitConfig),
    /// Switch to a preset budget (forces token mode).
    Preset(&'static Preset),
    /// Drop the source and all chunks.
    Clear,
}

/// A split to run, possibly on another thread.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    generation: u64,
    content: Arc<str>,
    splitter: Splitter,
}

impl SplitRequest {
    /// The state generation this request was made for.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run the split to completion.
    #[must_use]
    pub fn run(self) -> SplitOutcome {
        SplitOutcome {
            generation: self.generation,
            chunks: self.splitter.split(&self.content),
        }
    }
}

/// The result of a [`SplitRequest`].
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    generation: u64,
    chunks: Vec<Chunk>,
}

impl SplitOutcome {
    /// Generation of the request that produced this.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The produced chunks.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}

/// Current source, configuration and chunks.
#[derive(Debug, Clone)]
pub struct Session {
    source: Option<Source>,
    splitter: Splitter,
    chunks: Vec<Chunk>,
    generation: u64,
}

impl Session {
    /// An empty session with the default newline lookback.
    #[must_use]
    pub fn new(config: SplitConfig) -> Self {
        Self::with_splitter(Splitter::new(config))
    }

    /// An empty session using `splitter`'s break-point strategy and config.
    #[must_use]
    pub fn with_splitter(splitter: Splitter) -> Self {
        Self {
            source: None,
            splitter,
            chunks: Vec::new(),
            generation: 0,
        }
    }

    /// Apply a change and return the split it calls for, if any.
    ///
    /// Returns `None` when there is no source to split, or when the change
    /// leaves the configuration as it was.
    pub fn update(&mut self, change: Change) -> Option<SplitRequest> {
        match change {
            Change::Load(source) => {
                debug!(file = source.file_name(), "source loaded");
                self.source = Some(source);
            }
            Change::Config(config) => {
                if config == *self.config() {
                    return None;
                }
                self.splitter = self.splitter.with_config(config);
            }
            Change::Preset(preset) => {
                let config = self.config().apply_preset(preset);
                debug!(preset = preset.key, size = preset.size, "preset applied");
                return self.update(Change::Config(config));
            }
            Change::Clear => {
                self.source = None;
                self.chunks.clear();
            }
        }

        self.generation += 1;
        self.request()
    }

    /// A request for the current state without changing it.
    #[must_use]
    pub fn request(&self) -> Option<SplitRequest> {
        self.source.as_ref().map(|source| SplitRequest {
            generation: self.generation,
            content: source.shared_content(),
            splitter: self.splitter.clone(),
        })
    }

    /// Install `outcome` if it belongs to the current generation.
    ///
    /// Returns `false` and drops the outcome if the state moved on since the
    /// request was made.
    pub fn complete(&mut self, outcome: SplitOutcome) -> bool {
        if outcome.generation != self.generation {
            debug!(
                stale = outcome.generation,
                current = self.generation,
                "discarding stale split"
            );
            return false;
        }
        self.chunks = outcome.chunks;
        true
    }

    /// Apply a change and split synchronously.
    pub fn apply(&mut self, change: Change) {
        if let Some(request) = self.update(change) {
            let outcome = request.run();
            self.complete(outcome);
        }
    }

    /// Load a source and split it.
    pub fn load(&mut self, source: Source) {
        self.apply(Change::Load(source));
    }

    /// Change the configuration and re-split.
    pub fn set_config(&mut self, config: SplitConfig) {
        self.apply(Change::Config(config));
    }

    /// Switch to a preset and re-split.
    pub fn apply_preset(&mut self, preset: &'static Preset) {
        self.apply(Change::Preset(preset));
    }

    /// Drop the source and chunks.
    pub fn clear(&mut self) {
        self.apply(Change::Clear);
    }

    /// The loaded source.
    #[must_use]
    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &SplitConfig {
        self.splitter.config()
    }

    /// The chunks of the latest completed split.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Chunk by 1-based index.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if there is no such chunk.
    pub fn chunk(&self, index: usize) -> Result<&Chunk> {
        index
            .checked_sub(1)
            .and_then(|i| self.chunks.get(i))
            .ok_or(Error::IndexOutOfRange {
                index,
                count: self.chunks.len(),
            })
    }

    /// Current generation stamp.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Status line data, if a source is loaded.
    #[must_use]
    pub fn summary(&self) -> Option<Summary<'_>> {
        self.source.as_ref().map(|source| Summary {
            file_name: source.file_name(),
            chunk_count: self.chunks.len(),
            mode: self.config().mode,
            size: self.config().size,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}

/// What is being split, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary<'a> {
    /// Source file name.
    pub file_name: &'a str,
    /// Number of chunks produced.
    pub chunk_count: usize,
    /// Unit of `size`.
    pub mode: SplitMode,
    /// Configured size.
    pub size: usize,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Splitting {} into {} parts, {} limit {}",
            self.file_name,
            self.chunk_count,
            self.mode,
            group_thousands(self.size)
        )
    }
}
