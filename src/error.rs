#[cfg(not(feature = "std"))]
use core::*;
#[cfg(feature = "std")]
use std::*;

/// Base error type
///
/// To be replaced with [`core::error`] when feature [`error_in_core`](https://github.com/rust-lang/rust/issues/103765) gets pushed to `stable`
pub trait Error: fmt::Debug + fmt::Display {}

#[cfg(feature = "std")]
impl Error for std::io::Error {}

/// Base IO error type
pub trait IOError: Error {
    /// The type of the kind of this [`IOError`]
    type Kind: IOErrorKind;

    /// Get the kind of this [`IOError`]
    fn kind(&self) -> Self::Kind;
}

#[cfg(feature = "std")]
impl IOError for std::io::Error {
    type Kind = std::io::ErrorKind;

    #[inline]
    fn kind(&self) -> Self::Kind {
        self.kind()
    }
}

/// The kind of an [`IOError`]
pub trait IOErrorKind: PartialEq + Sized {
    /// Create a new `UnexpectedEOF` [`IOErrorKind`]
    fn new_unexpected_eof() -> Self;

    #[inline]
    /// Check whether this [`IOErrorKind`] is of kind `UnexpectedEOF`
    fn is_unexpected_eof(&self) -> bool {
        self == &Self::new_unexpected_eof()
    }
}

#[cfg(feature = "std")]
impl IOErrorKind for std::io::ErrorKind {
    #[inline]
    fn new_unexpected_eof() -> Self {
        std::io::ErrorKind::UnexpectedEof
    }
}

/// An error indicating that reading the boot sector has failed
///
/// Every variant aborts the whole read: no partially populated
/// [`BootSectorInfo`](crate::BootSectorInfo) is ever returned
#[derive(Debug, displaydoc::Display)]
pub enum BootSectorError<I>
where
    I: IOError,
{
    /// Couldn't seek to byte {offset} of the boot sector: {error}
    SeekFailure {
        /// The sector-relative offset we tried to reach
        offset: u64,
        /// The underlying IO error
        error: I,
    },
    /// Couldn't read {width} byte(s) at byte {offset} of the boot sector: {error}
    ReadFailure {
        /// The sector-relative offset of the field
        offset: u64,
        /// How many bytes the field spans
        width: usize,
        /// The underlying IO error
        error: I,
    },
    // this should NEVER be raised, since the whole header is read before decoding
    /// bincode errored out while decoding the BIOS Parameter Block: {0}
    DecodeFailure(bincode::error::DecodeError),
}

impl<I> BootSectorError<I>
where
    I: IOError,
{
    /// Whether this error was caused by the storage medium ending too early
    pub fn is_truncated(&self) -> bool {
        match self {
            BootSectorError::SeekFailure { error, .. }
            | BootSectorError::ReadFailure { error, .. } => error.kind().is_unexpected_eof(),
            BootSectorError::DecodeFailure(_) => false,
        }
    }
}

#[cfg(feature = "std")]
impl<I> std::error::Error for BootSectorError<I> where I: IOError {}

impl<I> From<bincode::error::DecodeError> for BootSectorError<I>
where
    I: IOError,
{
    #[inline]
    fn from(value: bincode::error::DecodeError) -> Self {
        BootSectorError::DecodeFailure(value)
    }
}

/// An alias for a [`Result`] with a [`BootSectorError`] error type
pub type BSResult<T, E> = Result<T, BootSectorError<E>>;
