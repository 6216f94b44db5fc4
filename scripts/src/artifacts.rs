//! Loading of the creation bytecode produced by `forge build`

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy_primitives::Bytes;
use serde::Deserialize;

use crate::{
    constants::{
        KPK_GOVERNOR_ARTIFACT, KPK_TOKEN_ARTIFACT, PROXY_ADMIN_ARTIFACT, PROXY_ARTIFACT,
        TIMELOCK_CONTROLLER_ARTIFACT,
    },
    errors::ScriptError,
};

/// The subset of a forge artifact the deployer needs
#[derive(Deserialize)]
struct ForgeArtifact {
    /// The creation bytecode
    bytecode: ForgeBytecode,
}

/// The bytecode section of a forge artifact
#[derive(Deserialize)]
struct ForgeBytecode {
    /// The hex-encoded bytecode
    object: Bytes,
}

/// The creation bytecode of every contract the deployer creates
#[derive(Clone, Debug)]
pub struct Artifacts {
    /// The `TimelockController` bytecode
    pub timelock_controller: Bytes,
    /// The `KpkToken` implementation bytecode
    pub kpk_token: Bytes,
    /// The `KpkGovernor` implementation bytecode
    pub kpk_governor: Bytes,
    /// The `ProxyAdmin` bytecode
    pub proxy_admin: Bytes,
    /// The `TransparentUpgradeableProxy` bytecode
    pub proxy: Bytes,
}

impl Artifacts {
    /// Load all artifacts from a forge output directory
    pub fn load(out_dir: &Path) -> Result<Self, ScriptError> {
        Ok(Self {
            timelock_controller: load_bytecode(out_dir, TIMELOCK_CONTROLLER_ARTIFACT)?,
            kpk_token: load_bytecode(out_dir, KPK_TOKEN_ARTIFACT)?,
            kpk_governor: load_bytecode(out_dir, KPK_GOVERNOR_ARTIFACT)?,
            proxy_admin: load_bytecode(out_dir, PROXY_ADMIN_ARTIFACT)?,
            proxy: load_bytecode(out_dir, PROXY_ARTIFACT)?,
        })
    }
}

/// The path of a contract's artifact, i.e. `<out>/<Name>.sol/<Name>.json`
pub fn artifact_path(out_dir: &Path, contract: &str) -> PathBuf {
    out_dir.join(format!("{contract}.sol")).join(format!("{contract}.json"))
}

/// Read the creation bytecode of `contract` from its forge artifact
pub fn load_bytecode(out_dir: &Path, contract: &str) -> Result<Bytes, ScriptError> {
    let path = artifact_path(out_dir, contract);
    fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|contents| extract_bytecode(&contents))
        .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))
}

/// Deserialize the artifact and check that it carries creation bytecode
fn extract_bytecode(artifact_json: &str) -> Result<Bytes, String> {
    let artifact: ForgeArtifact = serde_json::from_str(artifact_json).map_err(|e| e.to_string())?;

    let bytecode = artifact.bytecode.object;
    if bytecode.is_empty() {
        return Err("artifact has no creation bytecode, is the contract abstract?".to_string());
    }

    Ok(bytecode)
}
