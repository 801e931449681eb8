//! Upload classification helpers for the upload-and-audit view.
//!
//! Uploads are simulated; these helpers only classify and describe the
//! selected files.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// What an uploaded file contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Model,
    Dataset,
}

impl FileKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Dataset => "Dataset",
        }
    }
}

/// A file accepted by the simulated upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client-generated identifier.
    pub id: String,
    pub name: String,
    /// Human-readable size, e.g. `"12.34 MB"`.
    pub size: String,
    pub kind: FileKind,
}

/// ML frameworks selectable for the audit run.
pub const FRAMEWORKS: &[&str] = &["tensorflow", "pytorch", "scikit-learn", "xgboost", "onnx"];

/// Serialized-model extensions; anything else is treated as a dataset.
const MODEL_EXTENSIONS: &[&str] = &[".pkl", ".h5", ".joblib"];

/// Classify a file by its name.
pub fn classify_file(name: &str) -> FileKind {
    let lower = name.to_lowercase();
    if MODEL_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        FileKind::Model
    } else {
        FileKind::Dataset
    }
}

/// Format a byte count as megabytes with two decimals.
pub fn format_size(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}
