use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use directories::ProjectDirs;
use env_logger::{Builder, Env, Target, WriteStyle};

use crate::error::{DoccmpError, Result};

pub const LOG_ENV: &str = "DOCCMP_LOG";
pub const LOG_FILENAME: &str = "doccmp.log";

fn log_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "doccmp").ok_or_else(|| {
        DoccmpError::Io(std::io::Error::other("Could not determine data directory"))
    })?;

    let data_dir = proj_dirs.data_dir().to_path_buf();
    fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}

fn open_log_file(path: &PathBuf) -> Result<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// The terminal belongs to the UI, so records go to a file in the data dir.
/// Level comes from `DOCCMP_LOG` (default `info`).
pub fn init_logging() -> Option<PathBuf> {
    let path = log_dir().ok()?.join(LOG_FILENAME);
    let file = open_log_file(&path).ok()?;

    let result = Builder::from_env(Env::new().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .format_timestamp_secs()
        .try_init();

    result.ok().map(|_| path)
}
