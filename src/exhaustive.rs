// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The exhaustive seam engine
//!
//! A memo-free recursive search over every root-to-top path in the
//! grid, starting once from each bottom-row column.  It arrives at
//! the same minimum total as the table engine while sharing none of
//! its machinery, which is exactly what makes it a useful
//! cross-check.  Runtime is O(3^height): keep it to toy grids (the
//! test suite stays at 6x6 and below), and bound inputs yourself if
//! untrusted dimensions can reach it.

use crate::cq;
use crate::energy::tabulate_energy;
use crate::gridmap::GridMap;
use crate::seamfinder::{Seam, SeamError, SeamFinder};
use num_traits::Float;

/// The brute-force seam engine.  Tabulates its energies once at
/// construction, as even the naive search has no business paying for
/// the same oracle call twice.
pub struct ExhaustiveSeam<E: Float> {
    energy: GridMap<E>,
}

impl<E: Float> ExhaustiveSeam<E> {
    /// Tabulate the energy oracle over a `width` by `height` grid.
    /// Both dimensions must be at least 1.
    pub fn new<F>(width: u32, height: u32, energy: F) -> Result<Self, SeamError>
    where
        F: Fn(u32, u32) -> E,
    {
        if width < 1 || height < 1 {
            return Err(SeamError::InvalidDimension { width, height });
        }
        Ok(ExhaustiveSeam {
            energy: tabulate_energy(width, height, energy),
        })
    }

    // The cheapest path from (x, y) up to the top row, the energy at
    // (x, y) included.  Overlapping subpaths are recomputed on every
    // visit; there is deliberately no memo here.
    fn best_path_from(&self, x: u32, y: u32) -> (E, Seam) {
        let here = self.energy[(x, y)];
        if y == 0 {
            return (here, vec![(x, 0)]);
        }

        let maxcol = self.energy.width - 1;
        let lo = cq!(x == 0, 0, x - 1);
        let hi = cq!(x == maxcol, maxcol, x + 1);

        // Strict `<` on a left-to-right scan: of equally-cheap
        // children, the leftmost is kept.
        let mut cheapest = E::infinity();
        let mut cheapest_path = Seam::new();
        for k in lo..=hi {
            let (cost, path) = self.best_path_from(k, y - 1);
            if cost < cheapest {
                cheapest = cost;
                cheapest_path = path;
            }
        }

        let mut seam = Seam::with_capacity(y as usize + 1);
        seam.push((x, y));
        seam.extend(cheapest_path);
        (here + cheapest, seam)
    }
}

impl<E: Float> SeamFinder<E> for ExhaustiveSeam<E> {
    fn find_vertical_seam(&self) -> (E, Seam) {
        let (width, height) = (self.energy.width, self.energy.height);

        let mut cheapest = E::infinity();
        let mut cheapest_seam = Seam::new();
        for x in 0..width {
            let (cost, seam) = self.best_path_from(x, height - 1);
            if cost < cheapest {
                cheapest = cost;
                cheapest_seam = seam;
            }
        }
        (cheapest, cheapest_seam)
    }
}
