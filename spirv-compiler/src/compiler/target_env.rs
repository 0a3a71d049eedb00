/// Client API the generated SPIR-V is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEnv {
    Vulkan,
    OpenGl,
}

impl Default for TargetEnv {
    fn default() -> Self {
        Self::Vulkan
    }
}

impl TargetEnv {
    /// Command-line flag selecting this environment
    pub fn flag(&self) -> &'static str {
        match self {
            TargetEnv::Vulkan => "-V",
            TargetEnv::OpenGl => "-G",
        }
    }
}
