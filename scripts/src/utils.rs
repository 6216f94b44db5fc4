//! Utilities for writing the deployment result

use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{constants::DEPLOYMENT_FILE_PREFIX, errors::ScriptError, state::DeploymentResult};

/// The current time in seconds since the Unix epoch
pub fn unix_timestamp() -> Result<u64, ScriptError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

/// Writes the deployment result as pretty-printed JSON into `dir`, returning
/// the path of the written file
pub fn write_deployment_result(
    dir: &Path,
    result: &DeploymentResult,
) -> Result<PathBuf, ScriptError> {
    fs::create_dir_all(dir).map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    let path = dir.join(result.file_name(DEPLOYMENT_FILE_PREFIX));
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(&path, json).map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(path)
}
