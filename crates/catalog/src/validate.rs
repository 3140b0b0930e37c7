use happycat_core::{CatalogError, GifPatch};
use url::Url;

use crate::object_id::OBJECT_ID_HEX_LEN;

/// Path segment owned by the random-lookup route. Must never be treated as a
/// record identifier.
pub const RESERVED_ID: &str = "random";

/// Fail fast on a malformed identifier before it ever reaches the store.
pub fn validate_id(id: &str) -> Result<(), CatalogError> {
    if id == RESERVED_ID {
        return Err(CatalogError::ReservedIdentifier);
    }
    if id.len() != OBJECT_ID_HEX_LEN || !id.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CatalogError::InvalidIdentifier(id.to_string()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::InvalidInput("name must not be empty".into()));
    }
    Ok(())
}

/// The URL must parse as an absolute http(s) URL.
pub fn validate_url(raw: &str) -> Result<(), CatalogError> {
    let url = Url::parse(raw)
        .map_err(|e| CatalogError::InvalidInput(format!("invalid URL \"{raw}\": {e}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(CatalogError::InvalidInput(format!(
            "invalid URL \"{raw}\": scheme must be http or https"
        )));
    }
    Ok(())
}

/// An update must carry a body. `{}` is a present (empty) patch and passes;
/// only a missing body is rejected.
pub fn require_body(patch: Option<GifPatch>) -> Result<GifPatch, CatalogError> {
    patch.ok_or(CatalogError::MissingBody)
}
