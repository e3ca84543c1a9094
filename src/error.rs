use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Every fallible constructor and sampling loop reports through this enum;
/// the crate propagates with `?` rather than panicking.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A rejection-sampling loop (position sampling or spawn overlap retry)
    /// hit the configured attempt cap without producing a valid candidate.
    #[error("placement exhausted after {attempts} attempts: {context}")]
    PlacementExhausted {
        /// Number of attempts made before giving up.
        attempts: usize,
        /// Which sampling loop gave up.
        context: String,
    },
}
