use crate::error::GeneratorError;

pub const DEFAULT_ENDPOINT_COUNT: u32 = 1;
pub const DEFAULT_SLOTS_PER_ENDPOINT: u32 = 100;

/// Shape of the index space: how many endpoints, and how many slots each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotConfig {
    pub endpoint_count: u32,
    pub slots_per_endpoint: u32,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            endpoint_count: DEFAULT_ENDPOINT_COUNT,
            slots_per_endpoint: DEFAULT_SLOTS_PER_ENDPOINT,
        }
    }
}

impl SlotConfig {
    /// Validate signed counts as they arrive from the command line.
    pub fn new(endpoint_count: i64, slots_per_endpoint: i64) -> Result<Self, GeneratorError> {
        Ok(Self {
            endpoint_count: check_count("endpoint_count", endpoint_count)?,
            slots_per_endpoint: check_count("slots_per_endpoint", slots_per_endpoint)?,
        })
    }

    /// Number of entries in the index space.
    pub fn index_space_len(&self) -> Result<usize, GeneratorError> {
        (self.endpoint_count as usize)
            .checked_mul(self.slots_per_endpoint as usize)
            .ok_or(GeneratorError::IndexSpaceTooLarge {
                endpoint_count: self.endpoint_count,
                slots_per_endpoint: self.slots_per_endpoint,
            })
    }
}

fn check_count(field: &'static str, value: i64) -> Result<u32, GeneratorError> {
    u32::try_from(value).map_err(|_| GeneratorError::InvalidConfiguration { field, value })
}
