//! Endpoint-keyed random slot selection.
//!
//! Unlike the `endpoint * slot` index space, every selected index here
//! carries the URI of the endpoint it belongs to.

use rand::{Rng, seq::index};
use tracing::debug;

use crate::error::GeneratorError;

/// A status list endpoint and how many indexes it exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusListEndpoint {
    pub uri: String,
    pub max_indices: usize,
}

/// One selected slot on one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointIndex {
    pub uri: String,
    pub idx: usize,
}

/// Smallest `max_indices` across all endpoints.
pub fn max_index_per_endpoint(endpoints: &[StatusListEndpoint]) -> Result<usize, GeneratorError> {
    match endpoints.iter().map(|e| e.max_indices).min() {
        Some(max) if max > 0 => Ok(max),
        _ => Err(GeneratorError::NoEndpoints),
    }
}

/// Total capacity of `endpoint_count` endpoints, if it covers `needed`.
pub fn check_availability(
    endpoint_count: usize,
    needed: usize,
    max_per_endpoint: usize,
) -> Result<usize, GeneratorError> {
    let available = endpoint_count.saturating_mul(max_per_endpoint);
    if needed > available {
        return Err(GeneratorError::NotEnoughIndexes { needed, available });
    }
    Ok(available)
}

/// Pick `total` (endpoint, index) pairs, spread evenly across `uris`.
///
/// Indexes are distinct within an endpoint. Endpoints are filled in order
/// until `total` pairs are collected.
pub fn select_random_indexes<R: Rng + ?Sized>(
    rng: &mut R,
    uris: &[String],
    total: usize,
    max_per_endpoint: usize,
) -> Result<Vec<EndpointIndex>, GeneratorError> {
    if uris.is_empty() || total == 0 {
        return Ok(Vec::new());
    }
    check_availability(uris.len(), total, max_per_endpoint)?;

    let per_endpoint = total.div_ceil(total.min(uris.len()));
    debug!(per_endpoint, total, "selecting indexes per endpoint");

    let mut selected = Vec::with_capacity(total);
    for uri in uris {
        // Distinct within the endpoint, in random order
        //
        for idx in index::sample(&mut *rng, max_per_endpoint, per_endpoint) {
            selected.push(EndpointIndex {
                uri: uri.clone(),
                idx,
            });
        }

        if selected.len() >= total {
            break;
        }
    }

    selected.truncate(total);
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn uris(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://status.example/b/{i}")).collect()
    }

    fn endpoint(uri: &str, max_indices: usize) -> StatusListEndpoint {
        StatusListEndpoint {
            uri: uri.to_string(),
            max_indices,
        }
    }

    #[test]
    fn max_index_is_minimum_across_endpoints() {
        let endpoints = [endpoint("a", 100_000), endpoint("b", 40), endpoint("c", 500)];
        assert_eq!(max_index_per_endpoint(&endpoints).unwrap(), 40);
    }

    #[test]
    fn max_index_requires_endpoints_with_capacity() {
        assert!(matches!(
            max_index_per_endpoint(&[]),
            Err(GeneratorError::NoEndpoints)
        ));
        assert!(matches!(
            max_index_per_endpoint(&[endpoint("a", 10), endpoint("b", 0)]),
            Err(GeneratorError::NoEndpoints)
        ));
    }

    #[test]
    fn availability_rejects_oversized_requests() {
        assert_eq!(check_availability(3, 30, 10).unwrap(), 30);
        assert!(matches!(
            check_availability(3, 31, 10),
            Err(GeneratorError::NotEnoughIndexes {
                needed: 31,
                available: 30
            })
        ));
    }

    #[test]
    fn empty_inputs_select_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_random_indexes(&mut rng, &[], 10, 100).unwrap().is_empty());
        assert!(select_random_indexes(&mut rng, &uris(3), 0, 100).unwrap().is_empty());
    }

    #[test]
    fn selects_exact_total_with_distinct_indexes_per_endpoint() {
        let mut rng = StdRng::seed_from_u64(7);
        let uris = uris(3);
        let selected = select_random_indexes(&mut rng, &uris, 10, 50).unwrap();

        assert_eq!(selected.len(), 10);
        // quota is ceil(10 / 3) = 4, so the endpoints get 4, 4, 2
        let counts: Vec<usize> = uris
            .iter()
            .map(|u| selected.iter().filter(|s| &s.uri == u).count())
            .collect();
        assert_eq!(counts, vec![4, 4, 2]);

        let unique: HashSet<&EndpointIndex> = selected.iter().collect();
        assert_eq!(unique.len(), selected.len());
        assert!(selected.iter().all(|s| s.idx < 50));
    }

    #[test]
    fn fewer_indexes_than_endpoints_uses_leading_endpoints() {
        let mut rng = StdRng::seed_from_u64(3);
        let uris = uris(5);
        let selected = select_random_indexes(&mut rng, &uris, 2, 10).unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].uri, uris[0]);
        assert_eq!(selected[1].uri, uris[1]);
    }

    #[test]
    fn full_capacity_takes_every_index() {
        let mut rng = StdRng::seed_from_u64(11);
        let selected = select_random_indexes(&mut rng, &uris(2), 20, 10).unwrap();
        let mut idxs: Vec<usize> = selected.iter().map(|s| s.idx).collect();
        idxs.sort_unstable();
        let expected: Vec<usize> = (0..10).flat_map(|i| [i, i]).collect();
        assert_eq!(idxs, expected);
    }

    #[test]
    fn over_capacity_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            select_random_indexes(&mut rng, &uris(2), 21, 10),
            Err(GeneratorError::NotEnoughIndexes { .. })
        ));
    }
}
