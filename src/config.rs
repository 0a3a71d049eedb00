use std::fs::File;
use std::path::{Component, Path, PathBuf};

use failure::ResultExt;
use serde_derive::{Deserialize, Serialize};

use spirv_compiler::TargetEnv;

/// Name of the optional configuration file at the project root
pub const CONFIG_FILE_NAME: &str = "postbuild.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetEnvName {
    Vulkan,
    OpenGl,
}

impl From<TargetEnvName> for TargetEnv {
    fn from(name: TargetEnvName) -> Self {
        match name {
            TargetEnvName::Vulkan => TargetEnv::Vulkan,
            TargetEnvName::OpenGl => TargetEnv::OpenGl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shader source tree, relative to the project root
    pub shader_dir: PathBuf,
    /// Cargo target directory, relative to the project root
    pub target_dir: PathBuf,
    /// One output tree per profile under `target_dir`
    pub profiles: Vec<String>,
    /// Directory receiving compiled shaders inside each output tree
    pub shader_subdir: PathBuf,
    /// Compiler program; `GLSLANG_VALIDATOR` or `glslangValidator` when unset
    pub compiler: Option<String>,
    /// Passed to the compiler ahead of the target environment flag
    pub compiler_args: Vec<String>,
    pub target_env: TargetEnvName,
    /// Files copied from the project root into each output tree
    pub assets: Vec<PathBuf>,
    /// Abort on the first failed compilation instead of carrying on
    pub strict: bool,
    /// Parse compiled shaders and log their entry points
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shader_dir: PathBuf::from("renderer/src/shaders"),
            target_dir: PathBuf::from("target"),
            profiles: vec!["debug".to_owned(), "release".to_owned()],
            shader_subdir: PathBuf::from("shaders"),
            compiler: None,
            compiler_args: Vec::new(),
            target_env: TargetEnvName::Vulkan,
            assets: vec![PathBuf::from("arrow.obj"), PathBuf::from("arrow.mtl")],
            strict: false,
            verify: true,
        }
    }
}

impl Config {
    /// Load `postbuild.yml` from `root`, falling back to defaults when there is none
    pub fn load(root: impl AsRef<Path>) -> Result<Self, failure::Error> {
        let path = root.as_ref().join(CONFIG_FILE_NAME);

        if !path.is_file() {
            debug!("no {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        info!("loading configuration from {}", path.display());
        let file = File::open(&path).with_context(|_| format!("opening {}", path.display()))?;
        let config: Self = serde_yaml::from_reader(file)
            .with_context(|_| format!("parsing {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject directory names that would resolve to the target directory itself or escape it
    pub fn validate(&self) -> Result<(), failure::Error> {
        fn is_plain_relative(path: &Path) -> bool {
            path.components().next().is_some()
                && path.components().all(|c| matches!(c, Component::Normal(_)))
        }

        if !is_plain_relative(&self.shader_subdir) {
            failure::bail!(
                "shader_subdir must be a relative path below each profile directory, got {:?}",
                self.shader_subdir
            );
        }

        for profile in &self.profiles {
            if !is_plain_relative(Path::new(profile)) {
                failure::bail!(
                    "profile must name a directory below the target directory, got {:?}",
                    profile
                );
            }
        }

        Ok(())
    }

    /// Apply command-line overrides on top of the file values
    pub fn override_with(&mut self, compiler: Option<String>, strict: bool) {
        if let Some(compiler) = compiler {
            self.compiler = Some(compiler);
        }
        self.strict |= strict;
    }

    pub fn compiler(&self) -> spirv_compiler::Compiler {
        let builder = spirv_compiler::CompilerBuilder::new()
            .target_env(self.target_env.into())
            .extra_args(&self.compiler_args);

        let builder = match &self.compiler {
            Some(program) => builder.program(program),
            None => builder,
        };

        builder.build()
    }
}
