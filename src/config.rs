use std::path::PathBuf;

/// Input/output locations for one batch run.
///
/// The directories are ordinary parameters instead of hard-coded paths so the
/// batch can be pointed at any corpus copy (and at temp folders in tests).
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl BatchConfig {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("files"),
            output_dir: PathBuf::from("files_converted"),
        }
    }
}
