use std::fs;
use std::io;
use std::path::Path;

use failure::ResultExt;

use crate::config::Config;
use crate::layout::Layout;

fn remove(path: &Path, remove_fn: fn(&Path) -> io::Result<()>) -> Result<bool, failure::Error> {
    match remove_fn(path) {
        Ok(()) => {
            debug!("removed {}", path.display());
            Ok(true)
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(error)
            .with_context(|_| format!("removing {}", path.display()))
            .map_err(Into::into),
    }
}

fn remove_compiled(dir: &Path) -> Result<usize, failure::Error> {
    let mut removed = 0;

    if !dir.is_dir() {
        return Ok(0);
    }

    for entry in fs::read_dir(dir).with_context(|_| format!("reading {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            removed += remove_compiled(&path)?;
        } else if spirv_compiler::is_compiled(&path) && remove(&path, |p| fs::remove_file(p))? {
            removed += 1;
        }
    }

    Ok(removed)
}

fn remove_if_empty(dir: &Path) -> Result<(), failure::Error> {
    if !dir.is_dir() {
        return Ok(());
    }

    let mut entries = fs::read_dir(dir).with_context(|_| format!("reading {}", dir.display()))?;
    if entries.next().is_none() {
        remove(dir, |p| fs::remove_dir(p))?;
    } else {
        debug!("keeping {}: not empty", dir.display());
    }

    Ok(())
}

/// Remove everything a previous run deployed, along with the compiled shaders next to sources
///
/// Only compiled shaders are deleted from the output trees; a shader directory is removed once
/// nothing else is left in it. Returns the number of files removed.
pub fn clean(layout: &Layout, config: &Config) -> Result<usize, failure::Error> {
    config.validate()?;

    let mut removed = remove_compiled(layout.shader_source_dir())?;

    for tree in layout.trees() {
        removed += remove_compiled(tree.shader_dir())?;
        remove_if_empty(tree.shader_dir())?;

        for asset in &config.assets {
            if let Some(file_name) = asset.file_name() {
                if remove(&tree.dir().join(file_name), |p| fs::remove_file(p))? {
                    removed += 1;
                }
            }
        }
    }

    info!("clean: {} file(s) removed", removed);
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use crate::testing::shader_project;

    #[test]
    fn removes_deployed_files_only() {
        let root = shader_project("clean");
        let config = Config::default();
        let layout = Layout::new(&root, &config);
        layout.ensure().unwrap();

        fs::write(root.join("renderer/src/shaders/tri.vert.spv"), "").unwrap();
        fs::write(root.join("renderer/src/shaders/post/blur.comp.spv"), "").unwrap();
        fs::create_dir_all(root.join("target/debug/shaders")).unwrap();
        fs::write(root.join("target/debug/shaders/tri.vert.spv"), "").unwrap();
        fs::write(root.join("target/debug/arrow.obj"), "").unwrap();
        fs::write(root.join("target/debug/renderer"), "").unwrap();

        // two compiled sources, one deployed shader, one asset
        assert_eq!(clean(&layout, &config).unwrap(), 4);

        assert!(!root.join("renderer/src/shaders/tri.vert.spv").exists());
        assert!(!root.join("target/debug/shaders").exists());
        assert!(!root.join("target/debug/arrow.obj").exists());
        assert!(root.join("renderer/src/shaders/tri.vert").is_file());
        assert!(root.join("target/debug/renderer").is_file());
        assert!(root.join("arrow.obj").is_file());

        // nothing left to do
        assert_eq!(clean(&layout, &config).unwrap(), 0);
    }

    #[test]
    fn foreign_files_keep_shader_directory() {
        let root = shader_project("clean-foreign");
        let config = Config::default();
        let layout = Layout::new(&root, &config);

        fs::create_dir_all(root.join("target/release/shaders")).unwrap();
        fs::write(root.join("target/release/shaders/tri.frag.spv"), "").unwrap();
        fs::write(root.join("target/release/shaders/notes.txt"), "").unwrap();

        assert_eq!(clean(&layout, &config).unwrap(), 1);
        assert!(!root.join("target/release/shaders/tri.frag.spv").exists());
        assert!(root.join("target/release/shaders/notes.txt").is_file());
    }

    #[test]
    fn profile_directory_survives_empty_shader_subdir() {
        let root = shader_project("clean-empty-subdir");
        let config = Config {
            shader_subdir: PathBuf::from(""),
            ..Config::default()
        };
        let layout = Layout::new(&root, &config);

        fs::create_dir_all(root.join("target/debug")).unwrap();
        fs::write(root.join("target/debug/renderer"), "").unwrap();

        assert!(clean(&layout, &config).is_err());
        assert!(root.join("target/debug/renderer").is_file());
    }
}
