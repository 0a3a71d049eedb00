use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use failure::ResultExt;

use spirv_compiler::{reflect, Compilation, Compiler};

use crate::config::Config;
use crate::layout::Layout;

/// Summary of a shader pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShaderReport {
    pub compiled: usize,
    pub failed: usize,
    /// Number of files copied into output trees
    pub deployed: usize,
}

/// List every shader source below `dir`, recursively.
///
/// Any regular file that is not a compiled shader counts as a source, symlinks to files included.
/// Symlinked directories are not followed. Entries are visited in name order within each
/// directory.
pub fn shader_sources(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, failure::Error> {
    fn recurse(dir: &Path, sources: &mut Vec<PathBuf>) -> Result<(), failure::Error> {
        let mut entries = fs::read_dir(dir)
            .with_context(|_| format!("reading {}", dir.display()))?
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();

            if entry.file_type()?.is_dir() {
                recurse(&path, sources)?;
                continue;
            }

            // Resolves symlinks, dangling ones have no metadata
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => {
                    if !spirv_compiler::is_compiled(&path) {
                        sources.push(path);
                    }
                }
                Ok(_) => debug!("skipping {}: not a regular file", path.display()),
                Err(error) => warn!("skipping {}: {}", path.display(), error),
            }
        }

        Ok(())
    }

    let dir = dir.as_ref();
    let mut sources = Vec::new();

    if dir.is_dir() {
        recurse(dir, &mut sources)?;
    } else {
        warn!("shader directory {} does not exist", dir.display());
    }

    Ok(sources)
}

fn verify(compilation: &Compilation, strict: bool) -> Result<(), failure::Error> {
    match reflect::entry_points(compilation.output()) {
        Ok(entry_points) => {
            for entry_point in entry_points {
                debug!("{}: entry point {}", compilation.output().display(), entry_point);
            }
            Ok(())
        }
        Err(error) if strict => Err(error.into()),
        Err(error) => {
            warn!("{}", error);
            Ok(())
        }
    }
}

fn deploy(output: &Path, file_name: &OsStr, layout: &Layout) -> Result<usize, failure::Error> {
    for tree in layout.trees() {
        let shader_dir = tree.shader_dir();
        fs::create_dir_all(shader_dir)
            .with_context(|_| format!("creating {}", shader_dir.display()))?;

        let dest = shader_dir.join(file_name);
        fs::copy(output, &dest).with_context(|_| {
            format!("copying {} to {}", output.display(), dest.display())
        })?;
        trace!("copied {} to {}", output.display(), dest.display());
    }

    Ok(layout.trees().len())
}

/// Compile every shader source and copy the results into the output trees.
///
/// Compiled shaders land next to their sources and are then copied, flattened, into the shader
/// directory of each output tree. A failing compilation is only logged unless `config.strict` is
/// set; whatever output file exists afterwards is still deployed.
pub fn compile_shaders(
    layout: &Layout,
    compiler: &Compiler,
    config: &Config,
) -> Result<ShaderReport, failure::Error> {
    let mut report = ShaderReport::default();
    let mut deployed_names: HashMap<PathBuf, PathBuf> = HashMap::new();

    let sources = shader_sources(layout.shader_source_dir())?;
    info!(
        "compiling {} shader(s) from {}",
        sources.len(),
        layout.shader_source_dir().display()
    );

    for source in sources {
        let compilation = if config.strict {
            compiler.compile(&source)?.into_result()?
        } else {
            compiler.compile(&source)?
        };

        if compilation.succeeded() {
            report.compiled += 1;
        } else {
            report.failed += 1;
            warn!(
                "compilation of {} failed ({}): {}",
                source.display(),
                compilation.status(),
                compilation.log()
            );
        }

        if !compilation.output_exists() {
            continue;
        }

        if config.verify {
            verify(&compilation, config.strict)?;
        }

        let output = compilation.output();
        let file_name = output
            .file_name()
            .ok_or_else(|| failure::format_err!("{} has no file name", output.display()))?;

        if let Some(previous) = deployed_names.insert(PathBuf::from(file_name), source.clone()) {
            warn!(
                "{} and {} both deploy as {}, keeping the latter",
                previous.display(),
                source.display(),
                file_name.to_string_lossy()
            );
        }

        report.deployed += deploy(output, file_name, layout)?;
    }

    info!(
        "shaders: {} compiled, {} failed, {} file(s) deployed",
        report.compiled, report.failed, report.deployed
    );

    Ok(report)
}
