//! Post-build step for the renderer: compiles its shaders to SPIR-V and deploys them, along with
//! the model assets, into every Cargo profile directory.

#[macro_use]
extern crate log;

pub mod assets;
pub mod clean;
pub mod config;
pub mod layout;
pub mod logging;
pub mod shaders;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use layout::{Layout, OutputTree};
pub use shaders::ShaderReport;

/// What a run should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Output directories, shaders, then assets
    All,
    Shaders,
    Assets,
    Clean,
}

impl Default for Task {
    fn default() -> Self {
        Self::All
    }
}

pub fn run(layout: &Layout, config: &Config, task: Task) -> Result<(), failure::Error> {
    config.validate()?;

    if let Task::Clean = task {
        clean::clean(layout, config)?;
        return Ok(());
    }

    layout.ensure()?;

    if let Task::All | Task::Shaders = task {
        shaders::compile_shaders(layout, &config.compiler(), config)?;
    }

    if let Task::All | Task::Assets = task {
        assets::copy_assets(layout, config)?;
    }

    Ok(())
}
