//! Errors surfaced by the codec.

/// Errors the encoder or decoder can report.
///
/// The encoder never returns [`Error::InvalidCode`] or [`Error::InputUnderrun`];
/// dictionary fill is expected behavior handled by a reset, never an error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The encoder tried to reset an already-empty dictionary. Unreachable
    /// in correct code; if this fires, the dictionary bookkeeping has a bug.
    #[error("dictionary full and reset did not recover space")]
    DictionaryFull,
    /// The decoder read a code greater than `max + 1`.
    #[error("invalid code {code} (dictionary max is {max})")]
    InvalidCode { code: usize, max: usize },
    /// The decoder has leftover bits that don't form a complete trailing code.
    #[error("trailing bits do not form a complete code")]
    InputUnderrun,
    /// The wrapped reader or writer failed.
    #[error("I/O failure")]
    Io(#[from] std::io::Error),
}
