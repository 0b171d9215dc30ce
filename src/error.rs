//! Error taxonomy (C10) unifying every fatal condition the core can raise.

use crate::config::LayoutTag;

/// Every fatal condition the automaton core can raise.
///
/// Query operations never produce an error: a missing string is simply
/// reported as `false` by [`crate::Automaton::contains`]. Everything else —
/// building, saving, loading — is fallible and funnels through this enum.
#[derive(Debug, thiserror::Error)]
pub enum AutomatonError {
    /// The backing stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A lexicon line was lexicographically smaller than the previous one.
    #[error("lexicon line {line} is out of sorted order")]
    Unsorted {
        /// 1-based index of the offending line.
        line: u64,
    },

    /// A lexicon line exceeded `max_str_len`.
    #[error("lexicon line {line} exceeds the maximum length of {max} bytes")]
    TooLong {
        /// 1-based index of the offending line.
        line: u64,
        /// The configured maximum.
        max: usize,
    },

    /// The arena grew past the address space its layout's `dest` field can
    /// encode.
    #[error("automaton grew too large for its {layout:?} layout (limit: {limit} words)")]
    TooLarge {
        /// Which layout was being built.
        layout: LayoutTag,
        /// The capacity that was exceeded.
        limit: usize,
    },

    /// A loaded automaton file failed the structural sanity checks of §4.6.
    #[error("corrupt automaton file: {reason}")]
    Corrupt {
        /// Human-readable description of what was wrong.
        reason: String,
    },

    /// The register could not allocate another bucket chain entry.
    #[error("register ran out of memory while interning a state")]
    OutOfMemory,
}
