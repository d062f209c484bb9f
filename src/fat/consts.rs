/// The minimum size (in bytes) a sector is allowed to have
pub(crate) const MIN_SECTOR_SIZE: usize = 512;

/// The size (in bytes) of a directory entry
pub(crate) const DIRENTRY_SIZE: u32 = 32;

/// A volume with fewer clusters than this is FAT12
pub(crate) const MIN_FAT16_CLUSTERS: u32 = 4085;
/// A volume with this many clusters or more is FAT32
pub(crate) const MAX_FAT16_CLUSTERS: u32 = 65525;
