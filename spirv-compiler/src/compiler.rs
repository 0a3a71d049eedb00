use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use itertools::Itertools;

use crate::{shader_kind::ShaderKind, Error, Result};

mod target_env;
pub use target_env::TargetEnv;

/// Extension appended to compiled shaders
pub const SPIRV_EXTENSION: &str = "spv";

/// Compiler program used when neither the builder nor the environment name one
pub const DEFAULT_PROGRAM: &str = "glslangValidator";

/// Environment variable overriding the compiler program
pub const PROGRAM_ENV_VAR: &str = "GLSLANG_VALIDATOR";

/// Returns true if `path` already names a compiled shader
pub fn is_compiled(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(".spv"))
        .unwrap_or(false)
}

#[derive(Default)]
pub struct CompilerBuilder {
    program: Option<OsString>,
    target_env: TargetEnv,
    extra_args: Vec<OsString>,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn program(self, program: impl Into<OsString>) -> Self {
        Self {
            program: Some(program.into()),
            ..self
        }
    }

    pub fn target_env(self, target_env: TargetEnv) -> Self {
        Self { target_env, ..self }
    }

    pub fn extra_args<I, S>(self, extra_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            extra_args: extra_args.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn build(self) -> Compiler {
        // Explicit program, then environment, then PATH lookup
        let program = self
            .program
            .or_else(|| std::env::var_os(PROGRAM_ENV_VAR))
            .unwrap_or_else(|| OsString::from(DEFAULT_PROGRAM));

        Compiler {
            program,
            target_env: self.target_env,
            extra_args: self.extra_args,
        }
    }
}

pub struct Compiler {
    program: OsString,
    target_env: TargetEnv,
    extra_args: Vec<OsString>,
}

/// Outcome of a single compiler invocation
#[derive(Debug)]
pub struct Compilation {
    source: PathBuf,
    output: PathBuf,
    kind: Option<ShaderKind>,
    status: ExitStatus,
    log: String,
}

impl Compilation {
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn kind(&self) -> Option<ShaderKind> {
        self.kind
    }

    pub fn status(&self) -> ExitStatus {
        self.status
    }

    /// Combined stdout and stderr of the compiler
    pub fn log(&self) -> &str {
        &self.log
    }

    pub fn succeeded(&self) -> bool {
        self.status.success()
    }

    /// The output may exist even after a failure, left over from an earlier run
    pub fn output_exists(&self) -> bool {
        self.output.is_file()
    }

    pub fn into_result(self) -> Result<Self> {
        if self.succeeded() {
            Ok(self)
        } else {
            Err(Error::CompilationFailed {
                source: self.source,
                log: self.log,
            })
        }
    }
}

impl Compiler {
    pub fn program(&self) -> &std::ffi::OsStr {
        &self.program
    }

    pub fn target_env(&self) -> TargetEnv {
        self.target_env
    }

    /// `shader.frag` compiles to `shader.frag.spv`, next to its source
    pub fn output_path(&self, source: impl AsRef<Path>) -> PathBuf {
        let mut output = source.as_ref().as_os_str().to_owned();
        output.push(".");
        output.push(SPIRV_EXTENSION);
        PathBuf::from(output)
    }

    fn args(&self, source: &Path, output: &Path) -> Vec<OsString> {
        let mut args = self.extra_args.clone();
        args.push(OsString::from(self.target_env.flag()));
        args.push(source.as_os_str().to_owned());
        args.push(OsString::from("-o"));
        args.push(output.as_os_str().to_owned());
        args
    }

    /// Run the compiler on `source`.
    ///
    /// A non-zero exit status is reported through the returned [`Compilation`], only failing to
    /// launch the compiler is an error.
    pub fn compile(&self, source: impl AsRef<Path>) -> Result<Compilation> {
        let source = source.as_ref();
        let output = self.output_path(source);
        let kind = ShaderKind::from_path(source);

        match kind {
            Some(kind) => debug!("compiling {} shader {}", kind.name(), source.display()),
            None => debug!(
                "compiling {}, stage left to the compiler",
                source.display()
            ),
        }

        let args = self.args(source, &output);
        trace!(
            "{} {}",
            self.program.to_string_lossy(),
            args.iter().map(|arg| arg.to_string_lossy()).join(" ")
        );

        let result = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|error| Error::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                error,
            })?;

        let mut log = String::from_utf8_lossy(&result.stdout).into_owned();
        log.push_str(&String::from_utf8_lossy(&result.stderr));

        Ok(Compilation {
            source: source.to_owned(),
            output,
            kind,
            status: result.status,
            log: log.trim().to_owned(),
        })
    }
}
