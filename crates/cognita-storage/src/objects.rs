use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// A data directory holding JSON and report objects addressed by key.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open (creating if needed) the data directory at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::Open {
            path: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path for `key`. Keys are relative, `/`-separated, and may
    /// not climb out of the data directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let mut path = self.root.clone();
        let mut segments = 0;
        for segment in key.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
                return Err(StorageError::InvalidKey(key.to_string()));
            }
            path.push(segment);
            segments += 1;
        }
        if segments == 0 {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(path)
    }
}

/// Read an object.
pub fn get_object(store: &LocalStore, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = store.path_for(key)?;
    fs::read(&path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::GetObject {
                key: key.to_string(),
                source,
            }
        }
    })
}

/// Write an object, replacing any previous version.
pub fn put_object(store: &LocalStore, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let path = store.path_for(key)?;
    write_private(&path, body).map_err(|source| StorageError::PutObject {
        key: key.to_string(),
        source,
    })
}

/// Write a file readable only by its owner, creating parent directories.
///
/// The body goes to a temp file that is renamed over the target, so readers
/// never observe a half-written file.
pub fn write_private(path: &Path, body: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    fs::write(&tmp_path, body)?;

    // Patient data: owner-only on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(&tmp_path, path)
}

/// Delete an object.
pub fn delete_object(store: &LocalStore, key: &str) -> Result<(), StorageError> {
    let path = store.path_for(key)?;
    fs::remove_file(&path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::DeleteObject {
                key: key.to_string(),
                source,
            }
        }
    })
}

/// List object keys under a prefix, sorted. Temp files are skipped.
pub fn list_objects(store: &LocalStore, prefix: &str) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::new();
    let list_err = |source: std::io::Error| StorageError::ListObjects {
        prefix: prefix.to_string(),
        source,
    };

    // Walk from the deepest directory named by the prefix.
    let dir_part = prefix.rsplit_once('/').map_or("", |(dir, _)| dir);
    let start = if dir_part.is_empty() {
        store.root.clone()
    } else {
        store.path_for(dir_part)?
    };

    let mut pending = vec![start];
    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(list_err(e)),
        };

        for entry in entries {
            let entry = entry.map_err(list_err)?;
            let path = entry.path();
            if entry.file_type().map_err(list_err)?.is_dir() {
                pending.push(path);
                continue;
            }
            if path.extension().is_some_and(|ext| ext == "tmp") {
                continue;
            }
            if let Some(key) = key_for(&store.root, &path)
                && key.starts_with(prefix)
            {
                keys.push(key);
            }
        }
    }

    keys.sort();
    Ok(keys)
}

fn key_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Option<Vec<&str>> = relative.iter().map(|s| s.to_str()).collect();
    Some(segments?.join("/"))
}
