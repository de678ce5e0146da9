#![forbid(unsafe_code)]

//! Satellite proxy pool.
//!
//! Every tracked satellite is shown by a [`ProxyPair`]: a primary proxy on
//! the first row and a mirror on the second. Pairs move between two lists:
//!
//! - **live**: attached to the container, one per satellite, in order;
//! - **cache**: detached but still alive, waiting for reuse.
//!
//! Growing pops from the cache before allocating; shrinking detaches from
//! the tail of the live list and pushes onto the cache. Nodes are only
//! destroyed by [`SatellitePool::destroy_all`].
//!
//! # Invariants
//!
//! 1. After [`reconcile`](SatellitePool::reconcile) returns `Ok`,
//!    `live().len() == target`.
//! 2. A pair is in exactly one of live, cached, or destroyed.
//! 3. Within the container, every live mirror precedes its primary.

use radarviz_surface::error::Result;
use radarviz_surface::{DisplayTree, NodeId};

pub const SATELLITE_CLASS: &str = "sm_visualization-satellite horizontal";
pub const MIRROR_CLASS: &str = "sm_visualization-mirror horizontal";

/// Stable identity of a proxy pair across reuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(u32);

impl PairId {
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// A primary proxy and its mirror. Created together, destroyed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyPair {
    id: PairId,
    primary: NodeId,
    mirror: NodeId,
}

impl ProxyPair {
    #[inline]
    pub const fn id(&self) -> PairId {
        self.id
    }

    #[inline]
    pub const fn primary(&self) -> NodeId {
        self.primary
    }

    #[inline]
    pub const fn mirror(&self) -> NodeId {
        self.mirror
    }
}

/// What one reconciliation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolDelta {
    /// Pairs created from scratch.
    pub allocated: usize,
    /// Pairs taken back from the cache.
    pub reused: usize,
    /// Pairs moved from live to the cache.
    pub retired: usize,
}

impl PoolDelta {
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.allocated == 0 && self.reused == 0 && self.retired == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct SatellitePool {
    live: Vec<ProxyPair>,
    cache: Vec<ProxyPair>,
    next_id: u32,
}

impl SatellitePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live pairs, in satellite order.
    #[inline]
    pub fn live(&self) -> &[ProxyPair] {
        &self.live
    }

    /// Detached pairs awaiting reuse.
    #[inline]
    pub fn cached(&self) -> &[ProxyPair] {
        &self.cache
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Add one live pair, reusing a cached pair when one exists.
    ///
    /// The primary is inserted at the front of `container`, then the mirror
    /// in front of it. On failure the pair is detached and left in the cache.
    pub fn grow<T: DisplayTree + ?Sized>(
        &mut self,
        tree: &mut T,
        container: NodeId,
    ) -> Result<ProxyPair> {
        tree.first_child(container)?;
        let pair = match self.cache.pop() {
            Some(pair) => pair,
            None => self.allocate(tree),
        };
        let attached = tree
            .prepend_child(container, pair.primary)
            .and_then(|()| tree.prepend_child(container, pair.mirror));
        if let Err(err) = attached {
            let _ = tree.detach(pair.primary);
            let _ = tree.detach(pair.mirror);
            self.cache.push(pair);
            return Err(err);
        }
        self.live.push(pair);
        Ok(pair)
    }

    fn allocate<T: DisplayTree + ?Sized>(&mut self, tree: &mut T) -> ProxyPair {
        let id = PairId(self.next_id);
        self.next_id += 1;
        ProxyPair {
            id,
            primary: tree.create_element(SATELLITE_CLASS),
            mirror: tree.create_element(MIRROR_CLASS),
        }
    }

    /// Retire the last live pair into the cache. Returns `None` when empty.
    pub fn shrink<T: DisplayTree + ?Sized>(&mut self, tree: &mut T) -> Result<Option<ProxyPair>> {
        let Some(pair) = self.live.pop() else {
            return Ok(None);
        };
        tree.detach(pair.primary)?;
        tree.detach(pair.mirror)?;
        self.cache.push(pair);
        Ok(Some(pair))
    }

    /// Grow or shrink one pair at a time until `target` pairs are live.
    pub fn reconcile<T: DisplayTree + ?Sized>(
        &mut self,
        tree: &mut T,
        container: NodeId,
        target: usize,
    ) -> Result<PoolDelta> {
        let mut delta = PoolDelta::default();
        while self.live.len() > target {
            self.shrink(tree)?;
            delta.retired += 1;
        }
        while self.live.len() < target {
            if self.cache.is_empty() {
                delta.allocated += 1;
            } else {
                delta.reused += 1;
            }
            self.grow(tree, container)?;
        }
        #[cfg(feature = "tracing")]
        if !delta.is_empty() {
            tracing::debug!(
                allocated = delta.allocated,
                reused = delta.reused,
                retired = delta.retired,
                live = self.live.len(),
                cached = self.cache.len(),
                "satellite pool reconciled"
            );
        }
        Ok(delta)
    }

    /// Destroy every pair, live and cached. Returns how many were destroyed.
    ///
    /// Keeps going past failures so no node outlives the pool; the first
    /// error is returned once both lists are empty.
    pub fn destroy_all<T: DisplayTree + ?Sized>(&mut self, tree: &mut T) -> Result<usize> {
        let mut destroyed = 0;
        let mut first_error = None;
        for pair in self.live.drain(..).chain(self.cache.drain(..)) {
            for node in [pair.primary, pair.mirror] {
                if let Err(err) = tree.destroy(node) {
                    first_error.get_or_insert(err);
                }
            }
            destroyed += 1;
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(destroyed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radarviz_surface::{Surface, SurfaceError};

    fn setup() -> (Surface, NodeId) {
        let mut surface = Surface::new();
        let root = surface.root();
        let container = surface.create_element("container");
        surface.append_child(root, container).unwrap();
        (surface, container)
    }

    #[test]
    fn grow_allocates_pair_with_classes() {
        let (mut surface, container) = setup();
        let mut pool = SatellitePool::new();
        let pair = pool.grow(&mut surface, container).unwrap();

        assert_eq!(pool.len(), 1);
        assert_eq!(surface.class(pair.primary()), Ok(SATELLITE_CLASS));
        assert_eq!(surface.class(pair.mirror()), Ok(MIRROR_CLASS));
        assert_eq!(
            surface.children(container).unwrap(),
            &[pair.mirror(), pair.primary()]
        );
    }

    #[test]
    fn later_pairs_are_inserted_in_front() {
        let (mut surface, container) = setup();
        let mut pool = SatellitePool::new();
        let first = pool.grow(&mut surface, container).unwrap();
        let second = pool.grow(&mut surface, container).unwrap();
        assert_eq!(
            surface.children(container).unwrap(),
            &[second.mirror(), second.primary(), first.mirror(), first.primary()]
        );
        assert_eq!(pool.live(), &[first, second]);
    }

    #[test]
    fn shrink_detaches_without_destroying() {
        let (mut surface, container) = setup();
        let mut pool = SatellitePool::new();
        let pair = pool.grow(&mut surface, container).unwrap();

        assert_eq!(pool.shrink(&mut surface).unwrap(), Some(pair));
        assert!(pool.is_empty());
        assert_eq!(pool.cached(), &[pair]);
        assert!(surface.contains(pair.primary()));
        assert!(surface.contains(pair.mirror()));
        assert!(!surface.is_attached(pair.primary()));
        assert!(!surface.is_attached(pair.mirror()));
    }

    #[test]
    fn shrink_empty_pool_is_none() {
        let (mut surface, _) = setup();
        let mut pool = SatellitePool::new();
        assert_eq!(pool.shrink(&mut surface).unwrap(), None);
    }

    #[test]
    fn reconcile_reuses_cached_pairs() {
        let (mut surface, container) = setup();
        let mut pool = SatellitePool::new();

        let delta = pool.reconcile(&mut surface, container, 3).unwrap();
        assert_eq!(delta, PoolDelta { allocated: 3, reused: 0, retired: 0 });
        let before: Vec<_> = pool.live().to_vec();

        let delta = pool.reconcile(&mut surface, container, 1).unwrap();
        assert_eq!(delta, PoolDelta { allocated: 0, reused: 0, retired: 2 });
        assert_eq!(pool.cached().len(), 2);

        let delta = pool.reconcile(&mut surface, container, 3).unwrap();
        assert_eq!(delta, PoolDelta { allocated: 0, reused: 2, retired: 0 });
        let mut after: Vec<_> = pool.live().iter().map(ProxyPair::id).collect();
        let mut expected: Vec<_> = before.iter().map(ProxyPair::id).collect();
        after.sort();
        expected.sort();
        assert_eq!(after, expected);
        assert!(pool.cached().is_empty());
    }

    #[test]
    fn reconcile_to_same_length_is_noop() {
        let (mut surface, container) = setup();
        let mut pool = SatellitePool::new();
        pool.reconcile(&mut surface, container, 2).unwrap();
        let delta = pool.reconcile(&mut surface, container, 2).unwrap();
        assert!(delta.is_empty());
    }

    #[test]
    fn destroy_all_releases_live_and_cached() {
        let (mut surface, container) = setup();
        let mut pool = SatellitePool::new();
        pool.reconcile(&mut surface, container, 4).unwrap();
        pool.reconcile(&mut surface, container, 1).unwrap();
        let all: Vec<_> = pool.live().iter().chain(pool.cached()).copied().collect();

        assert_eq!(pool.destroy_all(&mut surface).unwrap(), 4);
        assert!(pool.is_empty());
        assert!(pool.cached().is_empty());
        for pair in all {
            assert!(!surface.contains(pair.primary()));
            assert!(!surface.contains(pair.mirror()));
        }
        assert!(surface.children(container).unwrap().is_empty());
    }

    #[test]
    fn grow_into_dead_container_keeps_cached_pairs() {
        let (mut surface, container) = setup();
        let mut pool = SatellitePool::new();
        pool.reconcile(&mut surface, container, 2).unwrap();
        pool.reconcile(&mut surface, container, 0).unwrap();
        let cached = pool.cached().to_vec();

        let gone = surface.create_element("gone");
        surface.destroy(gone).unwrap();
        let nodes = surface.len();

        assert_eq!(
            pool.grow(&mut surface, gone),
            Err(SurfaceError::UnknownNode(gone))
        );
        assert!(pool.is_empty());
        assert_eq!(pool.cached(), cached.as_slice());
        assert_eq!(surface.len(), nodes);

        let fresh = SatellitePool::new().grow(&mut surface, gone);
        assert!(fresh.is_err());
        assert_eq!(surface.len(), nodes);
    }

    #[test]
    fn failed_attach_returns_pair_to_cache() {
        let (mut surface, container) = setup();
        let mut pool = SatellitePool::new();
        pool.reconcile(&mut surface, container, 1).unwrap();
        pool.reconcile(&mut surface, container, 0).unwrap();
        let pair = pool.cached()[0];

        // The cached pair would become its own ancestor.
        let err = pool.grow(&mut surface, pair.primary()).unwrap_err();
        assert!(matches!(err, SurfaceError::CycleDetected { .. }));
        assert!(pool.is_empty());
        assert_eq!(pool.cached(), &[pair]);
        assert!(!surface.is_attached(pair.primary()));
        assert!(!surface.is_attached(pair.mirror()));

        assert_eq!(pool.grow(&mut surface, container).unwrap(), pair);
        assert_eq!(
            surface.children(container).unwrap(),
            &[pair.mirror(), pair.primary()]
        );
    }

    #[test]
    fn destroy_all_continues_past_failures() {
        let (mut surface, container) = setup();
        let mut pool = SatellitePool::new();
        pool.reconcile(&mut surface, container, 3).unwrap();
        pool.reconcile(&mut surface, container, 2).unwrap();
        let first = pool.live()[0];
        surface.destroy(first.primary()).unwrap();

        assert_eq!(
            pool.destroy_all(&mut surface),
            Err(SurfaceError::UnknownNode(first.primary()))
        );
        assert!(pool.is_empty());
        assert!(pool.cached().is_empty());
        // Only the root and the container are left.
        assert_eq!(surface.len(), 2);
    }

    #[test]
    fn pair_ids_are_unique() {
        let (mut surface, container) = setup();
        let mut pool = SatellitePool::new();
        pool.reconcile(&mut surface, container, 5).unwrap();
        let mut ids: Vec<u32> = pool.live().iter().map(|p| p.id().get()).collect();
        ids.dedup();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }
}
