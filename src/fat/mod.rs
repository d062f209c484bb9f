mod bpb;
mod consts;
mod reader;

pub use bpb::*;
pub use consts::*;
pub use reader::*;
