use std::io;
use std::path::{Path, PathBuf};

/// Directory holding uploaded bytes verbatim, one file per `system_filename`.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    /// Opens the directory, creating it (and any parents) if absent.
    pub fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn path_of(&self, system_filename: &str) -> PathBuf {
        self.root.join(system_filename)
    }

    /// Writes `data` under `system_filename`, replacing any existing file.
    pub fn write(&self, system_filename: &str, data: &[u8]) -> io::Result<PathBuf> {
        let path = self.path_of(system_filename);
        std::fs::write(&path, data)?;
        Ok(path)
    }
}

/// Extension of the client filename including the leading dot, or an empty
/// string. Only the last component's final extension counts.
pub fn extension_of(original: &str) -> String {
    Path::new(original)
        .extension()
        .and_then(|s| s.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// Random on-disk name carrying over the original extension.
pub fn generate_system_filename(original: &str) -> String {
    format!("{}{}", uuid::Uuid::new_v4(), extension_of(original))
}
