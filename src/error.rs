use thiserror::Error;

/// An endpoint block that does not match the expected page shape.
///
/// There is no degraded mode: any of these aborts the run, since a block that
/// stopped matching usually means the whole page layout changed.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("node does not carry the endpoint block marker")]
    MissingMarker,

    #[error("endpoint block has no id attribute")]
    MissingName,

    #[error("endpoint `{endpoint}` has no description paragraph")]
    MissingDescription { endpoint: String },

    #[error("endpoint `{endpoint}` is missing the `Request:` section header")]
    MissingRequestAnchor { endpoint: String },

    #[error("endpoint `{endpoint}` has a malformed parameter row ({cells} cells)")]
    MalformedParamRow { endpoint: String, cells: usize },
}
