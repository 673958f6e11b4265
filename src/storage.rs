//! File-backed preference storage, the desktop analogue of the browser
//! client's localStorage.

use std::{fs, path::PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct Preferences {
    dir: PathBuf,
}

impl Preferences {
    pub fn open() -> Self {
        Self::scoped("preferences")
    }

    /// Namespaced store; tests use throwaway namespaces.
    pub fn scoped(namespace: &str) -> Self {
        let safe = sanitize(namespace);
        let dir = dirs::data_local_dir()
            .map(|base| base.join("ada-assistente").join(&safe))
            .unwrap_or_else(|| PathBuf::from("cache").join("ada-assistente").join(&safe));
        Self { dir }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(sanitize(key))).ok()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create preferences directory: {}", e))?;
        fs::write(self.dir.join(sanitize(key)), value)
            .map_err(|e| format!("Failed to write preference: {}", e))
    }

    pub fn clear(&self) -> Result<(), String> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)
                .map_err(|e| format!("Failed to clear preferences: {}", e))?;
        }
        Ok(())
    }
}

/// Sanitize names for filesystem use.
fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
