//! postbuild compiles the renderer shaders and copies them, with the model assets, into the Cargo
//! output directories.
//!
//! ## Usage
//!
//!     # Compile shaders and copy assets into target/debug and target/release
//!     cargo run -- --root path/to/project
//!
//!     # Only recompile shaders, failing on the first compilation error
//!     cargo run -- --strict shaders

#[macro_use]
extern crate log;

use std::path::PathBuf;

use structopt::StructOpt;

use postbuild::{Config, Layout, Task};

#[derive(StructOpt)]
enum Command {
    /// Create output directories, compile shaders and copy assets (default)
    All,
    /// Create output directories and compile shaders
    Shaders,
    /// Create output directories and copy assets
    Assets,
    /// Remove compiled shaders and deployed files
    Clean,
}

impl From<Command> for Task {
    fn from(command: Command) -> Self {
        match command {
            Command::All => Task::All,
            Command::Shaders => Task::Shaders,
            Command::Assets => Task::Assets,
            Command::Clean => Task::Clean,
        }
    }
}

#[derive(StructOpt)]
#[structopt(name = "postbuild")]
struct Opts {
    /// Project root, containing the renderer sources and the target directory
    #[structopt(short, long, default_value = ".")]
    root: PathBuf,

    /// Shader compiler program, overrides the configuration file and GLSLANG_VALIDATOR
    #[structopt(short, long)]
    compiler: Option<String>,

    /// Fail on the first shader that does not compile
    #[structopt(short, long)]
    strict: bool,

    #[structopt(subcommand)]
    command: Option<Command>,
}

#[paw::main]
fn main(opts: Opts) -> Result<(), failure::Error> {
    postbuild::logging::init();

    let mut config = Config::load(&opts.root)?;
    config.override_with(opts.compiler, opts.strict);

    let layout = Layout::new(&opts.root, &config);
    let task = opts.command.map(Task::from).unwrap_or_default();

    debug!("running {:?} in {}", task, layout.root().display());
    postbuild::run(&layout, &config, task)
}
