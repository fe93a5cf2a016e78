//! Error types for slot index generation.

/// Errors that can occur while building or emitting the binary object.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A configuration count was negative or does not fit in a `u32`.
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The index space has more elements than fit in memory addressing.
    #[error("index space too large: {endpoint_count} endpoints x {slots_per_endpoint} slots")]
    IndexSpaceTooLarge {
        endpoint_count: u32,
        slots_per_endpoint: u32,
    },

    /// No endpoints to select from, or none of them hold any index.
    #[error("no endpoints found in configuration")]
    NoEndpoints,

    /// The endpoints cannot hold as many indexes as requested.
    #[error("not enough indexes: needed {needed}, available {available}")]
    NotEnoughIndexes { needed: usize, available: usize },

    /// Writing the artifact failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
