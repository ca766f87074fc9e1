use anchor_client::ClientError;
use thiserror::Error;

/// A call into the program failed: the cluster was unreachable, rejected the
/// transaction, or did not confirm it in time. These are deliberately not told apart.
#[derive(Debug, Error)]
#[error("external call failed: {0}")]
pub struct ExternalCallError(#[from] ClientError);

impl ExternalCallError {
    pub fn client_error(&self) -> &ClientError {
        &self.0
    }
}
