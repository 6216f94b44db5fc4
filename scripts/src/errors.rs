//! Definitions of errors that can occur during the bootstrap deployment

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::state::ContractRole;

/// Errors that can occur during the execution of the deployment script
#[derive(Debug)]
pub enum ScriptError {
    /// A missing or invalid piece of operator configuration
    Configuration(String),
    /// Error reading or parsing a compilation artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// The RPC endpoint serves a different chain than the selected network
    ChainMismatch {
        /// The chain ID of the selected network
        expected: u64,
        /// The chain ID reported by the RPC endpoint
        actual: u64,
    },
    /// Error decoding the return data of a contract call
    Serde(String),
    /// A submitted transaction reverted, was dropped, or timed out
    TransactionFailure(String),
    /// Error reading contract state
    ContractInteraction(String),
    /// A step consumed an address that no earlier step produced
    MissingArtifact(ContractRole),
    /// A deployment step failed, wrapping the underlying cause
    StepFailed(String, Box<ScriptError>),
    /// Error writing the deployment result file
    WriteDeployments(String),
}

impl ScriptError {
    /// Attach the description of the failing step to this error
    pub fn in_step(self, description: &str) -> Self {
        ScriptError::StepFailed(description.to_string(), Box::new(self))
    }

    /// Whether this error was raised before any chain interaction
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ScriptError::Configuration(_) | ScriptError::ArtifactParsing(_)
        )
    }
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Configuration(s) => write!(f, "configuration error: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ChainMismatch { expected, actual } => write!(
                f,
                "rpc endpoint serves chain {} but the selected network is chain {}",
                actual, expected
            ),
            ScriptError::Serde(s) => write!(f, "error decoding ABI data: {}", s),
            ScriptError::TransactionFailure(s) => write!(f, "transaction failed: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::MissingArtifact(role) => {
                write!(f, "no address recorded for {} yet", role)
            }
            ScriptError::StepFailed(step, cause) => write!(f, "step `{}` failed: {}", step, cause),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScriptError::StepFailed(_, cause) => Some(cause.as_ref()),
            _ => None,
        }
    }
}
