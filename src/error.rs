use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode {file} as {encoding}")]
    Decode { file: String, encoding: String },

    #[error("Forced utf-8 decode failed for {file}")]
    FallbackDecode { file: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
