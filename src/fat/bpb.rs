use super::*;

use core::fmt;

use bincode::Decode;

/// How many bytes a [`BootSectorField`] spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// A single byte
    Byte = 1,
    /// Two bytes
    Word = 2,
    /// Four bytes
    DoubleWord = 4,
}

impl FieldWidth {
    #[inline]
    /// The width in bytes
    pub const fn bytes(self) -> usize {
        self as usize
    }
}

/// The location of a BIOS Parameter Block field inside the boot sector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootSectorField {
    /// A human-readable name of the field
    pub label: &'static str,
    /// Offset of the first byte, relative to the start of the boot sector
    pub offset: u64,
    /// How many bytes the field spans
    pub width: FieldWidth,
}

impl BootSectorField {
    const fn new(label: &'static str, offset: u64, width: FieldWidth) -> Self {
        Self {
            label,
            offset,
            width,
        }
    }

    /// Bytes 11-12
    pub const BYTES_PER_SECTOR: Self = Self::new("Bytes per sector", 11, FieldWidth::Word);
    /// Byte 13
    pub const SECTORS_PER_CLUSTER: Self =
        Self::new("Sectors per cluster", 13, FieldWidth::Byte);
    /// Bytes 14-15
    pub const RESERVED_AREA_SECTORS: Self =
        Self::new("Size in sectors of reserved area", 14, FieldWidth::Word);
    /// Byte 16
    pub const FAT_COUNT: Self = Self::new("Number of FATs", 16, FieldWidth::Byte);
    /// Bytes 17-18
    pub const ROOT_DIR_MAX_ENTRIES: Self =
        Self::new("Max num files in root directory", 17, FieldWidth::Word);
    /// Bytes 19-20. If this is 0, check [`TOTAL_SECTORS_32`](Self::TOTAL_SECTORS_32)
    pub const TOTAL_SECTORS_16: Self =
        Self::new("Number of sectors in filesystem", 19, FieldWidth::Word);
    /// Bytes 22-23
    pub const SECTORS_PER_FAT: Self =
        Self::new("Size in sectors of each fat", 22, FieldWidth::Word);
    /// Bytes 28-31
    pub const SECTORS_BEFORE_PARTITION: Self = Self::new(
        "Number of sectors before start of partition",
        28,
        FieldWidth::DoubleWord,
    );
    /// Bytes 32-35
    pub const TOTAL_SECTORS_32: Self =
        Self::new("Number of sectors in filesystem", 32, FieldWidth::DoubleWord);
}

/// The geometry of a FAT16 volume, as read from its boot sector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootSectorInfo {
    /// Bytes per sector
    pub bytes_per_sector: u16,
    /// Sectors per cluster
    pub sectors_per_cluster: u8,
    /// Size in sectors of the reserved area (the boot sector included)
    pub reserved_area_sectors: u16,
    /// Number of FAT copies
    pub fat_count: u8,
    /// Maximum number of entries the root directory can hold
    pub root_dir_max_entries: u16,
    /// Total sectors in volume, taken from the 32-bit field if the 16-bit one is 0
    pub total_sectors: u32,
    /// Number of sectors preceding the partition (also known as hidden sectors)
    pub sectors_before_partition: u32,
    /// Size in sectors of each FAT
    pub sectors_per_fat: u16,
}

impl BootSectorInfo {
    /// The values of the record, in the order they are printed
    pub fn fields(&self) -> [(BootSectorField, u32); 8] {
        [
            (
                BootSectorField::BYTES_PER_SECTOR,
                self.bytes_per_sector.into(),
            ),
            (
                BootSectorField::SECTORS_PER_CLUSTER,
                self.sectors_per_cluster.into(),
            ),
            (
                BootSectorField::RESERVED_AREA_SECTORS,
                self.reserved_area_sectors.into(),
            ),
            (BootSectorField::FAT_COUNT, self.fat_count.into()),
            (
                BootSectorField::ROOT_DIR_MAX_ENTRIES,
                self.root_dir_max_entries.into(),
            ),
            (BootSectorField::TOTAL_SECTORS_16, self.total_sectors),
            (
                BootSectorField::SECTORS_BEFORE_PARTITION,
                self.sectors_before_partition,
            ),
            (BootSectorField::SECTORS_PER_FAT, self.sectors_per_fat.into()),
        ]
    }

    #[inline]
    /// The first sector in the File Allocation Table
    pub fn first_fat_sector(&self) -> u16 {
        self.reserved_area_sectors
    }

    #[inline]
    /// How many sectors all FAT copies occupy together
    pub fn fat_area_sectors(&self) -> u32 {
        u32::from(self.fat_count) * u32::from(self.sectors_per_fat)
    }

    #[inline]
    /// The size of the root directory in sectors, rounded up
    ///
    /// Returns [`None`] if the sector size is 0
    pub fn root_dir_sectors(&self) -> Option<u32> {
        let bytes_per_sector = u32::from(self.bytes_per_sector);
        if bytes_per_sector == 0 {
            return None;
        }

        Some((u32::from(self.root_dir_max_entries) * DIRENTRY_SIZE).div_ceil(bytes_per_sector))
    }

    #[inline]
    /// The first sector of the root directory
    pub fn first_root_dir_sector(&self) -> u32 {
        u32::from(self.first_fat_sector()) + self.fat_area_sectors()
    }

    #[inline]
    /// The first data sector (that is, the first sector in which directories and files may be stored)
    pub fn first_data_sector(&self) -> Option<u32> {
        self.first_root_dir_sector()
            .checked_add(self.root_dir_sectors()?)
    }

    #[inline]
    /// The total number of data sectors
    ///
    /// Returns [`None`] if the metadata regions claim more sectors than the volume has
    pub fn data_sectors(&self) -> Option<u32> {
        self.total_sectors.checked_sub(self.first_data_sector()?)
    }

    #[inline]
    /// The total number of clusters in the data region
    pub fn cluster_count(&self) -> Option<u32> {
        self.data_sectors()?
            .checked_div(self.sectors_per_cluster.into())
    }

    #[inline]
    /// The size of the volume in bytes
    pub fn volume_size(&self) -> u64 {
        u64::from(self.total_sectors) * u64::from(self.bytes_per_sector)
    }

    /// Whether the cluster count falls within the range the FAT specification reserves for FAT16
    pub fn is_fat16_sized(&self) -> bool {
        self.cluster_count()
            .is_some_and(|clusters| (MIN_FAT16_CLUSTERS..MAX_FAT16_CLUSTERS).contains(&clusters))
    }
}

impl fmt::Display for BootSectorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Boot Sector stats:")?;
        for (field, value) in self.fields() {
            writeln!(f, "{}: {}", field.label, value)?;
        }

        Ok(())
    }
}

pub(crate) const BPBFAT_SIZE: usize = 36;
/// The BIOS Parameter Block exactly as it is laid out in the first [`BPBFAT_SIZE`] bytes of the sector
#[derive(Decode, Debug, Clone, Copy)]
pub(crate) struct BpbFat {
    pub _jmpboot: [u8; 3],
    pub _oem_identifier: [u8; 8],
    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sector_count: u16,
    pub table_count: u8,
    pub root_entry_count: u16,
    // If this is 0, check `total_sectors_32`
    pub total_sectors_16: u16,
    pub _media_type: u8,
    pub table_size_16: u16,
    pub _sectors_per_track: u16,
    pub _head_side_count: u16,
    pub hidden_sector_count: u32,
    pub total_sectors_32: u32,
}

impl BpbFat {
    #[inline]
    /// Total sectors in volume (including VBR)
    pub(crate) fn total_sectors(&self) -> u32 {
        if self.total_sectors_16 == 0 {
            log::debug!("16-bit sector count is 0, using the 32-bit one");
            self.total_sectors_32
        } else {
            self.total_sectors_16.into()
        }
    }
}

impl From<BpbFat> for BootSectorInfo {
    fn from(bpb: BpbFat) -> Self {
        Self {
            bytes_per_sector: bpb.bytes_per_sector,
            sectors_per_cluster: bpb.sectors_per_cluster,
            reserved_area_sectors: bpb.reserved_sector_count,
            fat_count: bpb.table_count,
            root_dir_max_entries: bpb.root_entry_count,
            total_sectors: bpb.total_sectors(),
            sectors_before_partition: bpb.hidden_sector_count,
            sectors_per_fat: bpb.table_size_16,
        }
    }
}
