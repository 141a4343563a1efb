//! File-backed logging.
//!
//! The terminal belongs to the UI, so log records go to a file instead of
//! stderr. The level comes from `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::AppError;

pub fn init(path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qb.log");

        // Another test may have installed the logger already.
        let _ = init(&path);
        assert!(path.exists());
    }

    #[test]
    fn test_init_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = init(&dir.path().join("missing").join("qb.log")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
