//! Disjoint-set forest (union-find) over the elements `[0, n)`.
//!
//! The forest uses union by rank and path compression, giving near-constant amortized
//! cost per operation. Besides parent and rank, every element tracks the size of the set
//! it roots and an optional label. Labels are handed out sequentially to roots in index
//! order by [`DisjointSet::relabel`] once all unions are settled, which turns the forest
//! into a dense `[0, set_count)` numbering.

use crate::{Error, Result};

/// A partition of `[0, n)` into disjoint sets.
///
/// # Examples
///
/// ```rust
/// use graphscope::utils::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(sets.union(2, 3)?);
/// assert!(!sets.union(1, 0)?);
///
/// assert_eq!(sets.set_count(), 2);
/// assert!(sets.same_set(0, 1)?);
/// assert!(!sets.same_set(1, 2)?);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    /// Number of elements in the set rooted here, only meaningful for roots
    size: Vec<usize>,
    /// Dense set number, assigned to roots by `relabel`
    label: Vec<usize>,
    /// Whether `label` reflects the current roots
    labelled: bool,
    set_count: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            label: vec![0; n],
            labelled: false,
            set_count: n,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of disjoint sets in O(1).
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex: x,
                count: self.parent.len(),
            })
        }
    }

    /// Returns the root of the set containing `x`.
    ///
    /// Every element on the path from `x` to the root is re-parented directly under the
    /// root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `x` is not an element.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root(x))
    }

    /// Unchecked [`find`](Self::find) for elements known to exist.
    pub(crate) fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The root of lower rank is attached under the root of higher rank. On equal ranks the
    /// root of `x` goes under the root of `y`, whose rank grows by one.
    ///
    /// # Returns
    ///
    /// `false` if `x` and `y` were already in the same set (nothing changes), `true`
    /// otherwise. A successful union decrements [`set_count`](Self::set_count) by one and
    /// invalidates labels assigned by an earlier [`relabel`](Self::relabel).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either element does not exist.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.merge(x, y))
    }

    /// Unchecked [`union`](Self::union) for elements known to exist.
    pub(crate) fn merge(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.root(x);
        let root_y = self.root(y);
        if root_x == root_y {
            return false;
        }

        let (child, parent) = if self.rank[root_x] > self.rank[root_y] {
            (root_y, root_x)
        } else {
            if self.rank[root_x] == self.rank[root_y] {
                self.rank[root_y] += 1;
            }
            (root_x, root_y)
        };

        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.set_count -= 1;
        self.labelled = false;
        true
    }

    /// Returns `true` if `x` and `y` are in the same set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either element does not exist.
    pub fn same_set(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the number of elements in the set containing `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `x` is not an element.
    pub fn size_of(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    pub(crate) fn size_of_root(&self, root: usize) -> usize {
        self.size[root]
    }

    /// Assigns labels `0, 1, ...` to the current roots in index order.
    ///
    /// # Returns
    ///
    /// The number of labels handed out, which equals [`set_count`](Self::set_count).
    pub fn relabel(&mut self) -> usize {
        let mut next = 0;
        for x in 0..self.parent.len() {
            if self.parent[x] == x {
                self.label[x] = next;
                next += 1;
            }
        }
        self.labelled = true;
        next
    }

    /// Relabels the roots and returns the label of every element's set, indexed by element.
    pub fn labels(&mut self) -> Vec<usize> {
        self.relabel();
        (0..self.parent.len())
            .map(|x| {
                let root = self.root(x);
                self.label[root]
            })
            .collect()
    }

    /// Returns the label of the set containing `x`.
    ///
    /// `None` if no [`relabel`](Self::relabel) happened since the last successful union.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `x` is not an element.
    pub fn label_of(&mut self, x: usize) -> Result<Option<usize>> {
        let root = self.find(x)?;
        Ok(self.labelled.then_some(self.label[root]))
    }
}
