// crates/scaffold/src/project.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine_shared::{AssetKind, GameOptions};
use thiserror::Error;
use tracing::{debug, info};

use crate::names::ProjectNames;

pub const CONFIG_FILE_NAME: &str = "game.toml";

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("'{0}' is not a valid project id")]
    InvalidId(String),
    #[error("folder '{}' already exists, choose a different name", .0.display())]
    AlreadyExists(PathBuf),
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> ScaffoldError + '_ {
    move |source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// The id becomes a folder name, so it must stay a single path component.
fn check_id(id: &str) -> Result<(), ScaffoldError> {
    let bad = id == "."
        || id == ".."
        || id.contains(['/', '\\'])
        || id.chars().any(char::is_control);
    if bad {
        return Err(ScaffoldError::InvalidId(id.to_string()));
    }
    Ok(())
}

/// Options a freshly generated project starts with.
pub fn initial_options(names: &ProjectNames) -> GameOptions {
    GameOptions::titled(names.title.clone())
}

/// Creates `<parent>/<id>` with the asset folders and a `game.toml`.
/// Returns the new project folder.
pub fn create_project(parent: &Path, names: &ProjectNames) -> Result<PathBuf, ScaffoldError> {
    check_id(&names.id)?;

    let folder = parent.join(&names.id);
    if folder.exists() {
        return Err(ScaffoldError::AlreadyExists(folder));
    }

    let options = initial_options(names);
    let manifest = toml::to_string_pretty(&options)?;

    let asset_root = folder.join(&options.asset_root);
    for dir in AssetKind::ALL.iter().map(|kind| asset_root.join(kind.folder())) {
        fs::create_dir_all(&dir).map_err(io_err(&dir))?;
        debug!(dir = %dir.display(), "Created");
    }

    let config_path = folder.join(CONFIG_FILE_NAME);
    fs::write(&config_path, manifest).map_err(io_err(&config_path))?;

    info!(project = %names.vanity_name, folder = %folder.display(), "Project created");
    Ok(folder)
}
