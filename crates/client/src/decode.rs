use std::io::Read;

use base64::{Engine, engine::general_purpose::STANDARD};
use flate2::read::DeflateDecoder;

use crate::error::{NotifyError, Result};
use crate::types::ConnectionParams;

/// Decode a compact client token into connection parameters.
///
/// The token is a base64-encoded raw-deflate stream that inflates to
/// `version/repository/installation_id/owner`. The leading field is a
/// reserved version slot and is discarded.
pub fn decode_client_token(token: &str) -> Result<ConnectionParams> {
    let compressed = STANDARD
        .decode(token.trim())
        .map_err(|e| invalid(format!("not valid base64: {e}")))?;
    let mut decoded = String::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_string(&mut decoded)
        .map_err(|e| invalid(format!("decompression failed: {e}")))?;
    let fields = decoded.split('/').collect::<Vec<_>>();
    let [_version, repository, installation_id, owner] = fields.as_slice() else {
        return Err(invalid(format!("expected 4 fields, got {}", fields.len())));
    };
    Ok(ConnectionParams {
        owner: (*owner).to_string(),
        repository: (*repository).to_string(),
        installation_id: (*installation_id).to_string(),
    })
}

fn invalid(reason: String) -> NotifyError {
    tracing::error!("Failed to decode client token: {reason}");
    NotifyError::InvalidIdentifier(reason)
}
