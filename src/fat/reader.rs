use super::*;

use crate::{decode::*, error::*, io::prelude::*, utils};

/// Reads the BIOS Parameter Block of a FAT16 boot sector out of a storage medium
///
/// The storage medium is assumed to begin with the boot sector.
/// The reader only borrows it: closing it is up to the caller
#[derive(Debug)]
pub struct BootSectorReader<'s, S>
where
    S: Read + Seek,
{
    storage: &'s mut S,
    byte_order: ByteOrder,
}

impl<'s, S> BootSectorReader<'s, S>
where
    S: Read + Seek,
{
    /// Create a new [`BootSectorReader`] that decodes fields as [`ByteOrder::BigEndian`]
    pub fn new(storage: &'s mut S) -> Self {
        Self {
            storage,
            byte_order: ByteOrder::default(),
        }
    }

    /// Decode multi-byte fields using `byte_order` instead
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    #[inline]
    /// The [`ByteOrder`] used to decode multi-byte fields
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Seek to a single field and decode it
    pub fn read_field(&mut self, field: BootSectorField) -> BSResult<u32, <S as IOBase>::Error> {
        let offset = field.offset;
        let width = field.width.bytes();

        self.storage.seek(SeekFrom::Start(offset)).map_err(|error| {
            log::error!("Couldn't seek to byte {} ({})", offset, field.label);
            BootSectorError::SeekFailure { offset, error }
        })?;

        let mut buffer = [0_u8; MAX_FIELD_WIDTH];
        let bytes = &mut buffer[..width];
        self.storage.read_exact(bytes).map_err(|error| {
            if error.kind().is_unexpected_eof() {
                log::error!(
                    "Storage medium ended before the end of field \"{}\" (byte {})",
                    field.label,
                    offset + width as u64
                );
            } else {
                log::error!("Couldn't read field \"{}\"", field.label);
            }
            BootSectorError::ReadFailure {
                offset,
                width,
                error,
            }
        })?;

        let value = decode_field(bytes, self.byte_order);
        log::trace!(
            "{} (bytes {}-{}): {}",
            field.label,
            offset,
            offset + width as u64 - 1,
            value
        );

        Ok(value)
    }

    /// Read the total sector count, falling back to the 32-bit field if the 16-bit one is 0
    ///
    /// If both fields are 0, the result is 0: the sector is reported as is, not rejected
    pub fn read_total_sectors(&mut self) -> BSResult<u32, <S as IOBase>::Error> {
        let total_sectors_16 = self.read_field(BootSectorField::TOTAL_SECTORS_16)?;
        if total_sectors_16 != 0 {
            return Ok(total_sectors_16);
        }

        log::debug!("16-bit sector count is 0, reading the 32-bit one");
        let total_sectors_32 = self.read_field(BootSectorField::TOTAL_SECTORS_32)?;
        if total_sectors_32 == 0 {
            log::warn!("Both sector counts are 0");
        }

        Ok(total_sectors_32)
    }

    /// Read every field of the BIOS Parameter Block, one at a time
    pub fn read_info(&mut self) -> BSResult<BootSectorInfo, <S as IOBase>::Error> {
        // the narrowing casts below are lossless: a field can't decode to more than its width allows
        let bytes_per_sector = self.read_field(BootSectorField::BYTES_PER_SECTOR)? as u16;
        let sectors_per_cluster = self.read_field(BootSectorField::SECTORS_PER_CLUSTER)? as u8;
        let reserved_area_sectors =
            self.read_field(BootSectorField::RESERVED_AREA_SECTORS)? as u16;
        let fat_count = self.read_field(BootSectorField::FAT_COUNT)? as u8;
        let root_dir_max_entries = self.read_field(BootSectorField::ROOT_DIR_MAX_ENTRIES)? as u16;
        let total_sectors = self.read_total_sectors()?;
        let sectors_before_partition =
            self.read_field(BootSectorField::SECTORS_BEFORE_PARTITION)?;
        let sectors_per_fat = self.read_field(BootSectorField::SECTORS_PER_FAT)? as u16;

        Ok(BootSectorInfo {
            bytes_per_sector,
            sectors_per_cluster,
            reserved_area_sectors,
            fat_count,
            root_dir_max_entries,
            total_sectors,
            sectors_before_partition,
            sectors_per_fat,
        })
    }

    /// Read the whole BIOS Parameter Block at once and decode it
    ///
    /// This yields the same [`BootSectorInfo`] as [`read_info`](Self::read_info),
    /// but requires the storage medium to be at least 36 bytes long.
    /// It issues a single seek and a single read, which suits storage media
    /// where each access is expensive (a block device behind a slow bus, for example)
    pub fn read_header(&mut self) -> BSResult<BootSectorInfo, <S as IOBase>::Error> {
        self.storage.rewind().map_err(|error| {
            log::error!("Couldn't rewind the storage medium");
            BootSectorError::SeekFailure { offset: 0, error }
        })?;

        let mut buffer = [0_u8; BPBFAT_SIZE];
        self.storage.read_exact(&mut buffer).map_err(|error| {
            log::error!("Couldn't read the first {} bytes of the boot sector", BPBFAT_SIZE);
            BootSectorError::ReadFailure {
                offset: 0,
                width: BPBFAT_SIZE,
                error,
            }
        })?;

        let bpb: BpbFat = utils::bincode::decode_from_slice(&buffer, self.byte_order)?;
        log::trace!("{:?}", bpb);

        Ok(bpb.into())
    }
}
