//! Process-wide cache of decoded nuclides, keyed by identifier (spec §4.14/§5).
//!
//! Grounded on the teacher's `dashmap`-backed caches (`api/isotope.rs`,
//! `api/pace_data.rs`) and SPEC_FULL.md's pool note: a [`DashMap`] shards its
//! internal locking per key, so decoding nuclide A does not block a concurrent
//! lookup of nuclide B. The decode itself runs outside any shard lock (per the
//! "decoding should ideally happen outside the critical section" pool note);
//! `entry(..).or_insert_with(..)` then performs the actual publish under that
//! one key's shard lock. Two threads racing to decode the *same* identifier may
//! both pay for a decode, but only the first writer's result is kept — the
//! loser's decode is discarded and it reads the winner's `Arc` back out of the
//! map, so both callers still observe the same shared reference (spec §8
//! property 8's idempotent-insertion requirement, not idempotent-decode).

use std::path::Path;
use std::sync::Arc;

use dashmap::DashMap;

use crate::dispatcher;
use crate::error::Result;
use crate::nuclide::NuclideFile;

/// A shared, thread-safe cache of decoded nuclides. Cheap to clone (an `Arc`
/// around the underlying map), so callers can hand out copies freely instead of
/// threading a reference through every call site.
#[derive(Clone, Default)]
pub struct NuclidePool {
    nuclides: Arc<DashMap<String, Arc<NuclideFile>>>,
}

impl NuclidePool {
    pub fn new() -> Self {
        NuclidePool { nuclides: Arc::new(DashMap::new()) }
    }

    /// Return the cached nuclide for `identifier`, decoding it from `path` on first
    /// request. `start_line` is passed through to [`dispatcher::open`] as a seek
    /// hint and is only consulted on a cache miss.
    pub fn get_or_decode(
        &self,
        path: impl AsRef<Path>,
        identifier: &str,
        start_line: usize,
    ) -> Result<Arc<NuclideFile>> {
        if let Some(existing) = self.nuclides.get(identifier) {
            return Ok(Arc::clone(&existing));
        }
        let decoded = Arc::new(dispatcher::open(path, identifier, start_line)?);
        let entry = self.nuclides.entry(identifier.to_string()).or_insert_with(|| decoded);
        Ok(Arc::clone(&entry))
    }

    pub fn len(&self) -> usize {
        self.nuclides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nuclides.is_empty()
    }

    /// Drop every cached nuclide, e.g. between independent simulation runs.
    pub fn clear(&self) {
        self.nuclides.clear();
    }
}
