use std::path::Path;

/// Shader stage, as inferred by the compiler from the source file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    TessControl,
    TessEvaluation,
    Geometry,
    Fragment,
    Compute,
    Mesh,
    Task,
    RayGeneration,
    Intersection,
    AnyHit,
    ClosestHit,
    Miss,
    Callable,
}

impl ShaderKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        Some(match ext {
            "vert" => Self::Vertex,
            "tesc" => Self::TessControl,
            "tese" => Self::TessEvaluation,
            "geom" => Self::Geometry,
            "frag" => Self::Fragment,
            "comp" => Self::Compute,
            "mesh" => Self::Mesh,
            "task" => Self::Task,
            "rgen" => Self::RayGeneration,
            "rint" => Self::Intersection,
            "rahit" => Self::AnyHit,
            "rchit" => Self::ClosestHit,
            "rmiss" => Self::Miss,
            "rcall" => Self::Callable,
            _ => return None,
        })
    }

    /// Detect the stage of a shader source path.
    ///
    /// `shader.vert` and `shader.vert.glsl` are both vertex shaders: a trailing `.glsl` or `.hlsl`
    /// defers to the extension before it.
    pub fn from_path(p: impl AsRef<Path>) -> Option<Self> {
        let p = p.as_ref();
        let ext = p.extension()?.to_str()?;

        match ext {
            "glsl" | "hlsl" => Self::from_path(p.file_stem().map(Path::new)?),
            ext => Self::from_extension(ext),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::TessControl => "tessellation control",
            Self::TessEvaluation => "tessellation evaluation",
            Self::Geometry => "geometry",
            Self::Fragment => "fragment",
            Self::Compute => "compute",
            Self::Mesh => "mesh",
            Self::Task => "task",
            Self::RayGeneration => "ray generation",
            Self::Intersection => "intersection",
            Self::AnyHit => "any hit",
            Self::ClosestHit => "closest hit",
            Self::Miss => "miss",
            Self::Callable => "callable",
        }
    }
}
