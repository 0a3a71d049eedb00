//! Thin wrapper around an external GLSL to SPIR-V compiler (`glslangValidator` by default).
//!
//! ```no_run
//! let compiler = spirv_compiler::CompilerBuilder::new().build();
//! let compilation = compiler.compile("shaders/tri.vert")?;
//! if compilation.output_exists() {
//!     for entry_point in spirv_compiler::reflect::entry_points(compilation.output())? {
//!         println!("{}", entry_point);
//!     }
//! }
//! # Ok::<(), spirv_compiler::Error>(())
//! ```

#[macro_use]
extern crate log;

mod compiler;
pub use compiler::*;

mod errors;
pub use errors::*;

pub mod reflect;

mod shader_kind;
pub use shader_kind::ShaderKind;
