/// Result file delivery
///
/// The popup reports the chosen action by overwriting a single well-known
/// file with the action's label. Delivery is best effort: callers log
/// failures and carry on.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultFileError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Destination for the selected action's label
pub trait ResultSink {
    fn deliver(&self, label: &str) -> Result<(), ResultFileError>;
}

/// Writes the label to a fixed path, replacing any previous content
#[derive(Debug, Clone)]
pub struct ResultFile {
    path: PathBuf,
}

impl ResultFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ResultFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the label is staged in before being renamed over `path`
    fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path
            .with_file_name(format!("{}.{}.tmp", name, std::process::id()))
    }

    fn write_direct(&self, label: &str) -> Result<(), ResultFileError> {
        fs::write(&self.path, label).map_err(|source| ResultFileError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl ResultSink for ResultFile {
    fn deliver(&self, label: &str) -> Result<(), ResultFileError> {
        let staging = self.staging_path();

        if let Err(e) = fs::write(&staging, label) {
            tracing::debug!("Staging {} failed ({}), writing in place", staging.display(), e);
            return self.write_direct(label);
        }

        match fs::rename(&staging, &self.path) {
            Ok(()) => Ok(()),
            Err(source) => {
                if let Err(e) = fs::remove_file(&staging) {
                    tracing::debug!("Could not remove {}: {}", staging.display(), e);
                }
                tracing::debug!("Rename onto {} failed ({}), writing in place", self.path.display(), source);
                self.write_direct(label).map_err(|e| match e {
                    ResultFileError::Write { path, .. } => ResultFileError::Persist { path, source },
                    other => other,
                })
            }
        }
    }
}

/// Deliver `label`, logging instead of failing
///
/// Returns whether the label reached the sink.
pub fn deliver_best_effort<S: ResultSink + ?Sized>(sink: &S, label: &str) -> bool {
    match sink.deliver(label) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Could not record power action '{}': {}", label, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_exact_label() {
        let dir = tempfile::tempdir().unwrap();
        let file = ResultFile::new(dir.path().join("choice"));

        file.deliver("Shut Down").unwrap();

        let bytes = fs::read(file.path()).unwrap();
        assert_eq!(bytes, b"Shut Down");
    }

    #[test]
    fn test_overwrites_instead_of_appending() {
        let dir = tempfile::tempdir().unwrap();
        let file = ResultFile::new(dir.path().join("choice"));
        fs::write(file.path(), "a much longer previous value").unwrap();

        file.deliver("Sleep").unwrap();
        file.deliver("Log Out").unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "Log Out");
    }

    #[test]
    fn test_no_staging_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let file = ResultFile::new(dir.path().join("choice"));

        file.deliver("Restart").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("choice")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_rename_cleans_up_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory in the way makes both the rename and the
        // direct write fail
        let target = dir.path().join("choice");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();
        let file = ResultFile::new(&target);

        let err = file.deliver("Sleep").unwrap_err();
        assert!(matches!(err, ResultFileError::Persist { .. }));

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "stale staging files: {:?}", leftovers);
    }

    #[test]
    fn test_utf8_label_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let file = ResultFile::new(dir.path().join("choice"));

        file.deliver("Veille ⏾").unwrap();

        assert_eq!(fs::read(file.path()).unwrap(), "Veille ⏾".as_bytes());
    }

    #[test]
    fn test_missing_directory_is_an_error_but_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let file = ResultFile::new(dir.path().join("missing").join("choice"));

        assert!(file.deliver("Sleep").is_err());
        assert!(!deliver_best_effort(&file, "Sleep"));
    }
}
