pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod output;
pub mod selection;

use bytes::{Bytes, BytesMut};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::debug;

pub use config::SlotConfig;
pub use encoding::{Encoding, encode_integer};
pub use error::GeneratorError;
pub use selection::{EndpointIndex, StatusListEndpoint};

/// Builds the shuffled binary object of available slot indexes.
pub struct SlotIndexGenerator {
    config: SlotConfig,
    encoding: Encoding,
    rng: StdRng,
}

impl SlotIndexGenerator {
    pub fn new(config: SlotConfig, rng: StdRng) -> Self {
        Self {
            config,
            encoding: Encoding::default(),
            rng,
        }
    }

    /// Same ordering every run for a given seed.
    pub fn seeded(config: SlotConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: SlotConfig) -> Self {
        Self::new(config, StdRng::from_os_rng())
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Uniform in-place permutation.
    pub fn shuffle(&mut self, indexes: &mut [u64]) {
        indexes.shuffle(&mut self.rng);
    }

    /// Compute, shuffle and encode the whole index space.
    ///
    /// The returned buffer is frozen; the generator keeps no reference to it.
    pub fn generate(&mut self) -> Result<Bytes, GeneratorError> {
        let mut indexes = compute_index_space(&self.config)?;
        debug!(
            endpoints = self.config.endpoint_count,
            slots = self.config.slots_per_endpoint,
            len = indexes.len(),
            "computed index space"
        );

        self.shuffle(&mut indexes);

        // Exact size up front, the buffer never regrows
        //
        let capacity: usize = indexes
            .iter()
            .map(|&index| encoding::written_len(self.encoding, index))
            .sum();
        let mut buf = BytesMut::with_capacity(capacity);
        for &index in &indexes {
            encoding::write_index(self.encoding, &mut buf, index);
        }

        debug!(bytes = buf.len(), encoding = ?self.encoding, "encoded binary object");
        Ok(buf.freeze())
    }

    /// Endpoint-keyed selection using this generator's random source.
    pub fn select_random_indexes(
        &mut self,
        uris: &[String],
        total: usize,
        max_per_endpoint: usize,
    ) -> Result<Vec<EndpointIndex>, GeneratorError> {
        selection::select_random_indexes(&mut self.rng, uris, total, max_per_endpoint)
    }
}

/// All `endpoint * slot` products, endpoint-major.
///
/// Endpoints count from 1 and slots from 0, so every endpoint's first slot is 0
/// and distinct (endpoint, slot) pairs can share a value.
pub fn compute_index_space(config: &SlotConfig) -> Result<Vec<u64>, GeneratorError> {
    let len = config.index_space_len()?;
    let mut indexes = Vec::new();
    indexes
        .try_reserve_exact(len)
        .map_err(|_| GeneratorError::IndexSpaceTooLarge {
            endpoint_count: config.endpoint_count,
            slots_per_endpoint: config.slots_per_endpoint,
        })?;
    for endpoint in 1..=u64::from(config.endpoint_count) {
        for slot in 0..u64::from(config.slots_per_endpoint) {
            indexes.push(endpoint * slot);
        }
    }
    Ok(indexes)
}
