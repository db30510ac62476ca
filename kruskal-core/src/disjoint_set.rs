//! Union-find (disjoint set union) used for cycle detection in Kruskal.
//!
//! The set tracks a partition of `0..n` with union by rank and full path
//! compression. `find` is iterative so pathological parent chains cannot
//! exhaust the call stack.

use crate::error::DisjointSetError;

/// A partition of `0..n` into disjoint components.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1)?);
/// assert!(set.connected(1, 0)?);
/// assert!(!set.connected(0, 2)?);
/// assert_eq!(set.component_count(), 3);
/// # Ok::<(), kruskal_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton components `{0}, {1}, ..., {n - 1}`.
    ///
    /// # Panics
    /// Panics when the backing storage cannot be allocated; use
    /// [`DisjointSet::try_new`] for sizes taken from untrusted input.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Creates `n` singleton components, reporting allocation failure instead
    /// of aborting.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::CapacityExceeded`] when storage for `n`
    /// elements cannot be reserved.
    pub fn try_new(n: usize) -> Result<Self, DisjointSetError> {
        let capacity_exceeded = |source| DisjointSetError::CapacityExceeded { len: n, source };

        let mut parent = Vec::new();
        parent.try_reserve_exact(n).map_err(capacity_exceeded)?;
        parent.extend(0..n);

        let mut rank = Vec::new();
        rank.try_reserve_exact(n).map_err(capacity_exceeded)?;
        rank.resize(n, 0);

        Ok(Self {
            parent,
            rank,
            components: n,
        })
    }

    /// Returns the number of elements tracked by the set.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the set tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the current number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the component containing `element`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at the
    /// root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfBounds`] when `element >= len`.
    pub fn find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check_bounds(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The lower-ranked root is attached under the higher-ranked one. On equal
    /// rank the root of `left` wins and its rank grows by one, so repeated runs
    /// over the same input always build the same forest.
    ///
    /// Returns `true` when two components were merged and `false` when both
    /// elements already shared a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfBounds`] when either element is
    /// outside the set.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            self.parent[left_root] = right_root;
        } else {
            self.parent[right_root] = left_root;
            if left_rank == right_rank {
                self.rank[left_root] = left_rank.saturating_add(1);
            }
        }

        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfBounds`] when either element is
    /// outside the set.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check_bounds(&self, element: usize) -> Result<(), DisjointSetError> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::ElementOutOfBounds {
                element,
                len: self.parent.len(),
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, element: usize) -> usize {
        self.parent[element]
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, element: usize) -> u8 {
        self.rank[element]
    }
}
