// crates/engine_shared/src/assets.rs
//! Asset manifest filled by the game while its data loads.
//!
//! The engine owns the loaders; the manifest only records which files the game
//! asked for, under which name, and checks that they exist on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Asset folders a generated project ships with, relative to the asset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Font,
    Scene,
    Sprite,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Font, AssetKind::Scene, AssetKind::Sprite];

    pub fn folder(self) -> &'static str {
        match self {
            AssetKind::Font => "fonts",
            AssetKind::Scene => "scenes",
            AssetKind::Sprite => "sprites",
        }
    }
}

/// Stable index into the manifest, handed back to the game on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle(u32);

impl AssetHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: String,
    pub kind: AssetKind,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset name '{0}' is already registered")]
    DuplicateName(String),
    #[error("{kind:?} asset '{name}' not found at {}", .path.display())]
    NotFound {
        name: String,
        kind: AssetKind,
        path: PathBuf,
    },
}

#[derive(Debug)]
pub struct AssetManifest {
    root: PathBuf,
    entries: Vec<AssetEntry>,
    by_name: HashMap<String, AssetHandle>,
}

impl AssetManifest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `relative` inside the folder for `kind` and records it under `name`.
    pub fn register(
        &mut self,
        kind: AssetKind,
        name: &str,
        relative: impl AsRef<Path>,
    ) -> Result<AssetHandle, AssetError> {
        if self.by_name.contains_key(name) {
            return Err(AssetError::DuplicateName(name.to_string()));
        }

        let path = self.root.join(kind.folder()).join(relative);
        if !path.is_file() {
            return Err(AssetError::NotFound {
                name: name.to_string(),
                kind,
                path,
            });
        }

        let handle = AssetHandle(self.entries.len() as u32);
        self.entries.push(AssetEntry {
            name: name.to_string(),
            kind,
            path,
        });
        self.by_name.insert(name.to_string(), handle);
        Ok(handle)
    }

    pub fn handle(&self, name: &str) -> Option<AssetHandle> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, handle: AssetHandle) -> Option<&AssetEntry> {
        self.entries.get(handle.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_root(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "engine_shared_assets_{tag}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("sprites")).unwrap();
        root
    }

    #[test]
    fn registers_existing_sprite() {
        let root = scratch_root("ok");
        fs::write(root.join("sprites").join("ship.png"), b"png").unwrap();

        let mut manifest = AssetManifest::new(&root);
        let handle = manifest
            .register(AssetKind::Sprite, "ship", "ship.png")
            .expect("ship.png exists");

        assert_eq!(manifest.handle("ship"), Some(handle));
        let entry = manifest.get(handle).unwrap();
        assert_eq!(entry.kind, AssetKind::Sprite);
        assert_eq!(entry.path, root.join("sprites").join("ship.png"));
        assert_eq!(manifest.len(), 1);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn rejects_missing_file_and_duplicates() {
        let root = scratch_root("err");
        fs::write(root.join("sprites").join("rock.png"), b"png").unwrap();

        let mut manifest = AssetManifest::new(&root);
        assert!(matches!(
            manifest.register(AssetKind::Font, "title", "title.ttf"),
            Err(AssetError::NotFound { kind: AssetKind::Font, .. })
        ));

        manifest.register(AssetKind::Sprite, "rock", "rock.png").unwrap();
        assert!(matches!(
            manifest.register(AssetKind::Sprite, "rock", "rock.png"),
            Err(AssetError::DuplicateName(name)) if name == "rock"
        ));
        assert_eq!(manifest.len(), 1);

        fs::remove_dir_all(&root).unwrap();
    }
}
