use kiddo::{KdTree, NearestNeighbour, SquaredEuclidean};

use cellscape_core::position::Position;

/// Relative slack added to query radii so that sites sitting exactly on the
/// reach of a predicate are never dropped by the tree.
const REACH_SLACK: f64 = 1e-9;

/// A 2D k-d tree over the site positions, used to find the few sites that can
/// possibly accept a mobile instead of scanning the whole site list.
pub struct SiteIndex<'a> {
    sites: &'a [Position],
    tree: KdTree<f64, 2>,
}

impl<'a> SiteIndex<'a> {
    pub fn new(sites: &'a [Position]) -> Self {
        let mut tree: KdTree<f64, 2> = KdTree::with_capacity(sites.len().max(1));
        sites
            .iter()
            .enumerate()
            .for_each(|(idx, site)| tree.add(&site.as_xy(), idx as u64));
        Self { sites, tree }
    }

    pub fn site(&self, idx: usize) -> &Position {
        &self.sites[idx]
    }

    /// Indices of every site within `reach` of `position` in the x-y plane,
    /// in the order of the site list.
    pub fn candidates(&self, position: &Position, reach: f64) -> Vec<usize> {
        let padded = reach * (1.0 + REACH_SLACK) + REACH_SLACK;
        let neighbours: Vec<NearestNeighbour<f64, u64>> = self
            .tree
            .within_unsorted::<SquaredEuclidean>(&position.as_xy(), padded * padded);
        let mut candidates: Vec<usize> = neighbours
            .into_iter()
            .map(|neighbour| neighbour.item as usize)
            .collect();
        candidates.sort_unstable();
        candidates
    }
}

/// Site scan order for consecutive grid points. The site that accepted the
/// last point is checked first for the next one.
#[derive(Clone, Debug)]
pub struct SiteOrder {
    order: Vec<usize>,
}

impl SiteOrder {
    pub fn new(site_count: usize) -> Self {
        Self {
            order: (0..site_count).collect(),
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Moves the entry at `rank` to the front, keeping the others in order.
    pub fn promote(&mut self, rank: usize) {
        if rank > 0 {
            let site = self.order.remove(rank);
            self.order.insert(0, site);
        }
    }
}
