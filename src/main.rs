use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use fat16_bootinfo::{BootSectorError, BootSectorReader};

#[derive(Debug, displaydoc::Display)]
enum CliError {
    /// usage: fat16-bootinfo <device or image path>
    Usage,
    /// Error opening drive {path}: {error}
    OpenFailure { path: String, error: io::Error },
    /// Error reading FAT16 boot sector information: {0}
    BootSector(BootSectorError<io::Error>),
}

impl From<BootSectorError<io::Error>> for CliError {
    #[inline]
    fn from(value: BootSectorError<io::Error>) -> Self {
        CliError::BootSector(value)
    }
}

fn run() -> Result<(), CliError> {
    let mut args = env::args_os().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => PathBuf::from(path),
        _ => return Err(CliError::Usage),
    };

    let mut storage = File::open(&path).map_err(|error| CliError::OpenFailure {
        path: path.display().to_string(),
        error,
    })?;

    let info = BootSectorReader::new(&mut storage).read_info()?;
    if !info.is_fat16_sized() {
        eprintln!(
            "warning: {} doesn't have the geometry of a FAT16 volume",
            path.display()
        );
    }

    print!("{info}");

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
