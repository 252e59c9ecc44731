// vim: set ai et ts=4 sts=4 sw=4:
use std::collections::HashSet;
use log::{debug, trace};

use super::{Heightmap, BASIN_WALL};
use super::super::grid::Location;
use super::super::util::Neighbourhood::Orthogonal;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Basin {
    pub low_point: Location,
    pub size: usize,
}

impl Heightmap {
    /// Squares strictly lower than every in-bounds orthogonal neighbour, in row-major order.
    pub fn low_points(&self) -> Vec<Location> {
        self.grid.locations()
                 .filter(|&loc| {
                     let h = self.height_at(loc);
                     self.grid.neighbours(loc, Orthogonal)
                              .into_iter()
                              .all(|n| h < self.height_at(n))
                 })
                 .collect()
    }

    pub fn risk_level_sum(&self) -> u64 {
        self.low_points()
            .into_iter()
            .map(|loc| u64::from(self.height_at(loc)) + 1)
            .sum()
    }

    /// One basin per low point, in low point order.
    pub fn basins(&self) -> Vec<Basin> {
        self.low_points()
            .into_iter()
            .map(|low_point| {
                let basin = Basin { low_point, size: self.basin_from(low_point).len() };
                trace!("basin at {} has size {}", basin.low_point, basin.size);
                basin
            })
            .collect()
    }

    /// Every square reachable from `start` by stepping to a strictly higher, non-wall neighbour.
    pub fn basin_from(&self, start: Location) -> HashSet<Location> {
        let mut visited = HashSet::<Location>::new();
        let mut pending = vec![start];
        visited.insert(start);

        while let Some(loc) = pending.pop() {
            let h = self.height_at(loc);
            for n in self.grid.neighbours(loc, Orthogonal) {
                let nh = self.height_at(n);
                if nh != BASIN_WALL && nh > h && visited.insert(n) {
                    pending.push(n);
                }
            }
        }
        visited
    }

    /// Product of the (up to) three largest basin sizes.
    pub fn largest_basins_product(&self) -> u64 {
        let mut sizes = self.basins()
                            .into_iter()
                            .map(|b| b.size)
                            .collect::<Vec<_>>();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        debug!("{} basins, largest sizes {:?}", sizes.len(), &sizes[..sizes.len().min(3)]);
        sizes.into_iter()
             .take(3)
             .map(|s| s as u64)
             .product()
    }
}
