use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Stands in for glslangValidator: `<script> -V <source> -o <output>`
const FAKE_COMPILER: &str = r#"
case "$2" in
    *broken*) echo "ERROR: $2:1: syntax error" >&2; exit 2 ;;
esac
cp "$2" "$4"
"#;

/// Empty directory private to one test
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("postbuild-tests-{}", std::process::id()))
        .join(name);

    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();

    dir
}

/// A project root laid out like the renderer: three shaders and the arrow model
pub fn shader_project(name: &str) -> PathBuf {
    let root = scratch_dir(name);
    let shaders = root.join("renderer/src/shaders");

    fs::create_dir_all(shaders.join("post")).unwrap();
    fs::write(shaders.join("tri.vert"), "#version 450\nvoid main() {}\n").unwrap();
    fs::write(shaders.join("tri.frag"), "#version 450\nvoid main() {}\n").unwrap();
    fs::write(shaders.join("post/blur.comp"), "#version 450\nvoid main() {}\n").unwrap();

    fs::write(root.join("arrow.obj"), "o Arrow\nv 0 0 0\nv 0 1 0\nv 1 0 0\nf 1 2 3\n").unwrap();
    fs::write(root.join("arrow.mtl"), "newmtl Arrow\nKd 1.0 0.0 0.0\n").unwrap();

    root
}

/// Configuration running the fake compiler through `sh`
pub fn fake_compiler_config(root: &Path) -> Config {
    let script = root.join("fake-glslang.sh");
    fs::write(&script, FAKE_COMPILER).unwrap();

    Config {
        compiler: Some("sh".to_owned()),
        compiler_args: vec![script.to_string_lossy().into_owned()],
        ..Config::default()
    }
}

/// Every file below `root`, sorted
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    fn recurse(dir: &Path, files: &mut Vec<PathBuf>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                recurse(&path, files);
            } else {
                files.push(path);
            }
        }
    }

    let mut files = Vec::new();
    recurse(root, &mut files);
    files.sort();
    files
}
