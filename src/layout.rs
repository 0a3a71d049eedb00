use std::fs;
use std::path::{Path, PathBuf};

use failure::ResultExt;

use crate::config::Config;

/// Per-profile output directory, e.g. `target/debug`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTree {
    profile: String,
    dir: PathBuf,
    shader_dir: PathBuf,
}

impl OutputTree {
    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn shader_dir(&self) -> &Path {
        &self.shader_dir
    }
}

/// Where sources are read from and where results go, resolved against the project root
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    shader_source_dir: PathBuf,
    target_dir: PathBuf,
    trees: Vec<OutputTree>,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        let root = root.into();
        let target_dir = root.join(&config.target_dir);

        let trees = config
            .profiles
            .iter()
            .map(|profile| {
                let dir = target_dir.join(profile);
                OutputTree {
                    profile: profile.clone(),
                    shader_dir: dir.join(&config.shader_subdir),
                    dir,
                }
            })
            .collect();

        Self {
            shader_source_dir: root.join(&config.shader_dir),
            target_dir,
            trees,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn shader_source_dir(&self) -> &Path {
        &self.shader_source_dir
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn trees(&self) -> &[OutputTree] {
        &self.trees[..]
    }

    /// Create the target directory and every output tree that does not exist yet
    pub fn ensure(&self) -> Result<(), failure::Error> {
        for dir in std::iter::once(&self.target_dir).chain(self.trees.iter().map(|t| &t.dir)) {
            if !dir.is_dir() {
                debug!("creating {}", dir.display());
                fs::create_dir_all(dir).with_context(|_| format!("creating {}", dir.display()))?;
            }
        }

        Ok(())
    }
}
