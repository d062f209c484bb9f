use bincode::{config::standard as StandardOptions, error::DecodeError, Decode};

use crate::decode::ByteOrder;

/// Decode a fixed-layout structure from `bytes`
///
/// Integers use fixed-width encoding in the requested [`ByteOrder`],
/// so the layout matches the on-disk one byte for byte
pub(crate) fn decode_from_slice<D>(bytes: &[u8], order: ByteOrder) -> Result<D, DecodeError>
where
    D: Decode<()>,
{
    // also check https://docs.rs/bincode/2.0.1/bincode/config/index.html
    let options = StandardOptions().with_fixed_int_encoding().with_no_limit();

    let (decoded, _bytes_read) = match order {
        ByteOrder::BigEndian => bincode::decode_from_slice(bytes, options.with_big_endian())?,
        ByteOrder::LittleEndian => {
            bincode::decode_from_slice(bytes, options.with_little_endian())?
        }
    };

    Ok(decoded)
}
