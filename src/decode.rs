/// The order in which the bytes of a multi-byte field are laid out
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// The first byte is the most significant one
    ///
    /// This is what [`BootSectorReader`](crate::BootSectorReader) uses unless told otherwise
    #[default]
    BigEndian,
    /// The first byte is the least significant one
    ///
    /// This is how the FAT specification actually stores integers on disk
    LittleEndian,
}

/// The widest field the decoder handles, in bytes
pub const MAX_FIELD_WIDTH: usize = 4;

/// Decode a sector-relative field of 1 up to [`MAX_FIELD_WIDTH`] bytes into a [`u32`]
///
/// The caller is expected to pass exactly the bytes of the field, nothing more, nothing less.
/// Passing more than [`MAX_FIELD_WIDTH`] bytes silently drops the most significant ones.
pub fn decode_field(bytes: &[u8], order: ByteOrder) -> u32 {
    let pack = |value: u32, byte: &u8| (value << 8) | u32::from(*byte);

    match order {
        ByteOrder::BigEndian => bytes.iter().fold(0, pack),
        ByteOrder::LittleEndian => bytes.iter().rev().fold(0, pack),
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn single_byte() {
        assert_eq!(decode_field(&[0x04], ByteOrder::BigEndian), 4);
        assert_eq!(decode_field(&[0xFF], ByteOrder::LittleEndian), 255);
    }

    #[test]
    fn big_endian_words() {
        assert_eq!(decode_field(&[0x02, 0x00], ByteOrder::BigEndian), 512);
        assert_eq!(decode_field(&[0x0B, 0xB8], ByteOrder::BigEndian), 3000);
        assert_eq!(
            decode_field(&[0x00, 0x00, 0x10, 0x00], ByteOrder::BigEndian),
            4096
        );
        assert_eq!(
            decode_field(&[0x00, 0x4C, 0x4B, 0x40], ByteOrder::BigEndian),
            5_000_000
        );
    }

    #[test]
    fn little_endian_words() {
        assert_eq!(decode_field(&[0x00, 0x02], ByteOrder::LittleEndian), 512);
        assert_eq!(
            decode_field(&[0x40, 0x4B, 0x4C, 0x00], ByteOrder::LittleEndian),
            5_000_000
        );
    }

    #[test]
    fn full_width_does_not_overflow() {
        assert_eq!(decode_field(&[0xFF; 4], ByteOrder::BigEndian), u32::MAX);
        assert_eq!(
            decode_field(&0xDEAD_BEEF_u32.to_be_bytes(), ByteOrder::BigEndian),
            0xDEAD_BEEF
        );
        assert_eq!(
            decode_field(&0xDEAD_BEEF_u32.to_le_bytes(), ByteOrder::LittleEndian),
            0xDEAD_BEEF
        );
    }

    #[test]
    fn oversized_slice_keeps_low_bytes() {
        assert_eq!(
            decode_field(&[0x01, 0x02, 0x03, 0x04, 0x05], ByteOrder::BigEndian),
            0x0203_0405
        );
        assert_eq!(
            decode_field(&[0x05, 0x04, 0x03, 0x02, 0x01], ByteOrder::LittleEndian),
            0x0203_0405
        );
    }

    #[test]
    fn empty_slice_is_zero() {
        assert_eq!(decode_field(&[], ByteOrder::BigEndian), 0);
    }
}
