use thiserror::Error;

/// Failure kinds surfaced by catalog operations.
///
/// Every operation either fully succeeds or fails with exactly one of these;
/// nothing here is fatal at the process level. The HTTP layer owns the
/// translation to status codes.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No record matches the requested name, tag, or id.
    #[error("{0}")]
    NotFound(String),

    #[error("no GIFs in the catalog")]
    EmptyCatalog,

    /// Duplicate name or URL on add/update.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Identifier is not 24 hex characters.
    #[error("Bad request: {0} is not a valid ID.")]
    InvalidIdentifier(String),

    /// The literal `random` is owned by the random-lookup route and can
    /// never name a record.
    #[error("\"random\" is a reserved route, not a GIF ID")]
    ReservedIdentifier,

    #[error("update requires a request body")]
    MissingBody,

    /// Required field missing or URL unparsable.
    #[error("{0}")]
    InvalidInput(String),

    /// Transport failure talking to the record store. Never folded into the
    /// domain kinds above.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl CatalogError {
    pub fn name_not_found(name: &str) -> Self {
        Self::NotFound(format!("GIF with name \"{name}\" not found"))
    }

    pub fn tag_not_found(tag: &str) -> Self {
        Self::NotFound(format!("GIF with tag \"{tag}\" not found"))
    }

    pub fn id_not_found(id: &str) -> Self {
        Self::NotFound(format!("GIF {id} not found"))
    }
}
