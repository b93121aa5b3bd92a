use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the hard-sphere simulation core.
///
/// Every variant is raised during setup; once the event list has been
/// initialized the engine has no failure paths under correct operation
/// (outdated collision predictions are handled by counter comparison,
/// not by errors).
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter (non-finite or non-positive values,
    /// backward sample times, bad restore data).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Setup-ordering or consistency violation (particle count unset,
    /// fewer than 3 cells per dimension, lattice spacing below the pair
    /// separation, event list not initialized).
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed allocation of the particle states, the cell grid, or the
    /// event list.
    #[error("allocation failure: {0}")]
    Alloc(String),
}
