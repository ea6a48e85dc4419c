use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Document not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocsDir(String),
}

/// Read a document and return its content
pub fn read_document(relative_path: &RelativePath, docs_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(docs_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a document, creating parent directories as needed
pub fn write_document(
    relative_path: &RelativePath,
    docs_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(docs_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

pub fn validate_docs_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
