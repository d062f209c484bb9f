use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

pub const IMGS_SUBDIR: &str = "fat16-bootinfo-imgs/";

/// get the pathbuf to the temporary dir where the generated .img files are placed
pub fn get_imgs_path() -> PathBuf {
    let mut path_buf = env::temp_dir();
    path_buf.push(IMGS_SUBDIR);
    fs::create_dir_all(&path_buf).unwrap();
    path_buf
}

/// write `contents` to a uniquely named image file and return its path
pub fn write_img(name: &str, contents: &[u8]) -> PathBuf {
    let mut path_buf = get_imgs_path();
    path_buf.push(format!("{}-{}.img", name, std::process::id()));
    fs::write(&path_buf, contents).unwrap();
    path_buf
}

/// run the CLI with the provided arguments
pub fn run_cli<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_fat16-bootinfo"))
        .args(args)
        .output()
        .unwrap()
}

/// A 512-byte sector with the given big-endian `total_sectors_16` and `total_sectors_32` fields
pub fn sector(total_sectors_16: u16, total_sectors_32: u32) -> Vec<u8> {
    let mut sector = vec![0_u8; 512];
    sector[..3].copy_from_slice(&[0xEB, 0x3C, 0x90]);
    sector[3..11].copy_from_slice(b"MSDOS5.0");
    sector[11..13].copy_from_slice(&512_u16.to_be_bytes());
    sector[13] = 4;
    sector[14..16].copy_from_slice(&1_u16.to_be_bytes());
    sector[16] = 2;
    sector[17..19].copy_from_slice(&512_u16.to_be_bytes());
    sector[19..21].copy_from_slice(&total_sectors_16.to_be_bytes());
    sector[21] = 0xF8;
    sector[22..24].copy_from_slice(&100_u16.to_be_bytes());
    sector[28..32].copy_from_slice(&2048_u32.to_be_bytes());
    sector[32..36].copy_from_slice(&total_sectors_32.to_be_bytes());
    sector[510..].copy_from_slice(&[0x55, 0xAA]);
    sector
}

#[test]
fn img_dir_exists() {
    assert!(get_imgs_path().is_dir());
}
