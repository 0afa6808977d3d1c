//! Model presets.
//!
//! Each preset is a model's context window minus a reserve of 1k-2k tokens
//! for the system prompt and conversation overhead, so a chunk that exactly
//! fills the budget still fits.

use crate::{Error, Result};

/// A named token budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Short lookup key, e.g. `gpt-4o`.
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Token budget with the reserve already subtracted.
    pub size: usize,
}

/// Curated presets, largest first.
pub const PRESETS: &[Preset] = &[
    Preset {
        key: "gemini-3",
        label: "Gemini 3.0 (2M, safe mode)",
        size: 1_998_000,
    },
    Preset {
        key: "gemini-1.5",
        label: "Gemini 1.5 Pro/Flash (1M)",
        size: 998_000,
    },
    Preset {
        key: "claude-4.5",
        label: "Claude 4.5 (500k, estimated)",
        size: 498_000,
    },
    Preset {
        key: "claude-3.5-sonnet",
        label: "Claude 3.5 Sonnet (200k)",
        size: 198_000,
    },
    Preset {
        key: "gpt-4o",
        label: "GPT-5.2 / GPT-4o (128k)",
        size: 126_000,
    },
    Preset {
        key: "deepseek-3.2",
        label: "DeepSeek 3.2 (128k)",
        size: 126_000,
    },
    Preset {
        key: "deepseek-v3",
        label: "DeepSeek V3 (64k)",
        size: 62_000,
    },
    Preset {
        key: "standard-32k",
        label: "Standard 32k",
        size: 31_000,
    },
    Preset {
        key: "standard-8k",
        label: "Standard 8k",
        size: 7_000,
    },
];

impl Preset {
    /// Look up a preset by key, ignoring ASCII case.
    ///
    /// ```rust
    /// use context_splitter::Preset;
    ///
    /// assert_eq!(Preset::find("GPT-4o").unwrap().size, 126_000);
    /// assert!(Preset::find("gpt-2").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPreset`] if no key matches.
    pub fn find(key: &str) -> Result<&'static Preset> {
        let key = key.trim();
        PRESETS
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::UnknownPreset(key.to_string()))
    }

    /// All presets.
    #[must_use]
    pub fn all() -> &'static [Preset] {
        PRESETS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_unique() {
        let mut keys: Vec<_> = PRESETS.iter().map(|p| p.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), PRESETS.len());
    }

    #[test]
    fn test_sizes_largest_first() {
        assert!(PRESETS.iter().all(|p| p.size > 0));
        for pair in PRESETS.windows(2) {
            assert!(pair[0].size >= pair[1].size);
        }
    }

    #[test]
    fn test_find_unknown() {
        assert!(matches!(
            Preset::find("nope"),
            Err(Error::UnknownPreset(k)) if k == "nope"
        ));
    }
}
