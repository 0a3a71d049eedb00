use std::fmt;
use std::path::Path;

use rspirv::dr as rr;
use rspirv::spirv;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub execution_model: spirv::ExecutionModel,
    pub name: String,
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({:?})", self.name, self.execution_model)
    }
}

pub fn find_entry_points(module: &rr::Module) -> Vec<EntryPoint> {
    module
        .entry_points
        .iter()
        .filter_map(|instruction| {
            // OpEntryPoint: execution model, function id, name, interface...
            match (instruction.operands.get(0), instruction.operands.get(2)) {
                (
                    Some(rr::Operand::ExecutionModel(execution_model)),
                    Some(rr::Operand::LiteralString(name)),
                ) => Some(EntryPoint {
                    execution_model: *execution_model,
                    name: name.clone(),
                }),
                _ => None,
            }
        })
        .collect()
}

/// Parse a SPIR-V binary and list its entry points
pub fn parse_entry_points(path: &Path, bytes: &[u8]) -> Result<Vec<EntryPoint>> {
    let mut loader = rr::Loader::new();
    rspirv::binary::parse_bytes(bytes, &mut loader).map_err(|state| Error::InvalidModule {
        path: path.to_owned(),
        reason: format!("{:?}", state),
    })?;

    Ok(find_entry_points(&loader.module()))
}

/// Read a compiled shader from disk and list its entry points
pub fn entry_points(path: impl AsRef<Path>) -> Result<Vec<EntryPoint>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    parse_entry_points(path, &bytes)
}
