//! Minimal IO traits the boot sector reader is generic over
//!
//! Under the `std` feature, every type implementing both [`std::io::Read`]
//! and [`std::io::Seek`] (a [`File`](std::fs::File), a [`Cursor`](std::io::Cursor)...)
//! implements these traits too

use crate::error::IOError;

pub mod prelude {
    pub use super::{IOBase, Read, Seek, SeekFrom};
}

// Some things here were borrowed from the Rust Standard Library and the source code of the `ciborium-io` crate

/// The base trait on which [`Read`] and [`Seek`] build
/// Mainly used to provide a shared error type
pub trait IOBase {
    /// The error type
    type Error: IOError;
}

/// A simplified version of [`std::io::Read`] for use within a `no_std` context
pub trait Read: IOBase {
    /// Read the exact number of bytes required to fill `buf`.
    ///
    /// Blocks until enough bytes could be read
    ///
    /// Returns an error if EOF is met.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// A literal copy of the `std::io::Seekfrom` enum for use within a `no_std` context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),

    /// Sets the offset to the size of this object plus the specified number of
    /// bytes.
    End(i64),

    /// Sets the offset to the current position plus the specified number of
    /// bytes.
    Current(i64),
}

#[cfg(feature = "std")]
impl From<SeekFrom> for std::io::SeekFrom {
    fn from(value: SeekFrom) -> Self {
        match value {
            SeekFrom::Start(offset) => std::io::SeekFrom::Start(offset),
            SeekFrom::Current(offset) => std::io::SeekFrom::Current(offset),
            SeekFrom::End(offset) => std::io::SeekFrom::End(offset),
        }
    }
}

/// A simplified version of `std::io::Seek` for use within a `no_std` context
pub trait Seek: IOBase {
    /// Seek to an offset, in bytes, in a stream.
    ///
    /// If the seek operation completed successfully, this method returns the new position from the start of the stream.
    ///
    /// # Errors
    /// Seeking to a negative offset is considered an error.
    ///
    /// Whether seeking beyond the end of the stream is an error is up to the implementor:
    /// if it isn't, the next [`Read::read_exact`] will fail instead
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error>;

    /// Rewind to the beginning of a stream.
    ///
    /// This is a convenience method, equivalent to `seek(SeekFrom::Start(0))`.
    fn rewind(&mut self) -> Result<(), Self::Error> {
        self.seek(SeekFrom::Start(0))?;

        Ok(())
    }
}

#[cfg(feature = "std")]
impl<T> IOBase for T
where
    T: std::io::Read + std::io::Seek,
{
    type Error = std::io::Error;
}

#[cfg(feature = "std")]
impl<T> Read for T
where
    T: std::io::Read + IOBase<Error = std::io::Error>,
{
    #[inline]
    fn read_exact(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        std::io::Read::read_exact(self, data)
    }
}

#[cfg(feature = "std")]
impl<T> Seek for T
where
    T: std::io::Seek + IOBase<Error = std::io::Error>,
{
    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        std::io::Seek::seek(self, pos.into())
    }

    #[inline]
    fn rewind(&mut self) -> Result<(), Self::Error> {
        std::io::Seek::rewind(self)
    }
}

// https://github.com/rust-lang/rust/issues/31844 open for 8 years, not yet stabilized (as of 2024)
#[cfg(not(feature = "std"))]
impl<T> IOBase for &mut T
where
    T: IOBase,
{
    type Error = T::Error;
}

#[cfg(not(feature = "std"))]
impl<R: Read + IOBase> Read for &mut R {
    #[inline]
    fn read_exact(&mut self, data: &mut [u8]) -> Result<(), R::Error> {
        (**self).read_exact(data)
    }
}

#[cfg(not(feature = "std"))]
impl<S: Seek + IOBase> Seek for &mut S {
    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, S::Error> {
        (**self).seek(pos)
    }

    #[inline]
    fn rewind(&mut self) -> Result<(), S::Error> {
        (**self).rewind()
    }
}
