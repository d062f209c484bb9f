#![cfg_attr(not(feature = "std"), no_std)]

mod decode;
mod error;
mod fat;
pub mod io;
mod utils;

pub use decode::*;
pub use error::*;
pub use fat::*;
