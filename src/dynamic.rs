// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dynamic-programming seam engine
//!
//! Builds a cumulative cost table over the grid, one row at a time,
//! then walks the finished table bottom-up to recover the cheapest
//! vertical seam.  This is the production path: O(width * height) to
//! build, O(height) to walk, and the only engine worth running on a
//! grid of real size.

use crate::cq;
use crate::energy::tabulate_energy;
use crate::gridmap::GridMap;
use crate::seamfinder::{Seam, SeamError, SeamFinder};
use num_traits::Float;

/// The table-driven seam engine.  Holds the energies it tabulated at
/// construction; each seam request builds a fresh cumulative table and
/// discards it on return.
pub struct DynamicSeam<E: Float> {
    energy: GridMap<E>,
}

impl<E: Float> DynamicSeam<E> {
    /// Tabulate the energy oracle over a `width` by `height` grid.
    /// Both dimensions must be at least 1.
    pub fn new<F>(width: u32, height: u32, energy: F) -> Result<Self, SeamError>
    where
        F: Fn(u32, u32) -> E,
    {
        if width < 1 || height < 1 {
            return Err(SeamError::InvalidDimension { width, height });
        }
        Ok(DynamicSeam {
            energy: tabulate_energy(width, height, energy),
        })
    }
}

/// Build the cumulative table.  The first row is the raw energy row;
/// every later cell is its own energy plus the cheapest of the up to
/// three cells it could extend from in the row above, the window
/// clipped at the grid edges.
pub fn cumulative_costs<E: Float>(energy: &GridMap<E>) -> GridMap<E> {
    let (width, height) = (energy.width, energy.height);
    let maxcol = width - 1;
    let mut table = GridMap::new(width, height, E::zero());

    for i in 0..width {
        table[(i, 0)] = energy[(i, 0)];
    }

    // Each row reads only the finished row above it, so rows must run
    // in order.  The cells within one row are independent of each
    // other; a very wide grid could split a row into chunks, but
    // nothing here does.
    for y in 1..height {
        for x in 0..width {
            let lo = cq!(x == 0, 0, x - 1);
            let hi = cq!(x == maxcol, maxcol, x + 1);
            let (_, cheapest) = leftmost_min(&table, y - 1, lo, hi);
            table[(x, y)] = energy[(x, y)] + cheapest;
        }
    }
    table
}

/// Walk a finished cumulative table back up into a seam.  Start from
/// the cheapest cell of the bottom row, then for each row above
/// inspect the table values one column to either side of the previous
/// choice, clipped at the edges.  The bottom-row minimum is the
/// seam's total energy and is returned with it.
pub fn costs_to_seam<E: Float>(table: &GridMap<E>) -> (E, Seam) {
    let (width, height) = (table.width, table.height);
    let maxcol = width - 1;

    let (mut col, total) = leftmost_min(table, height - 1, 0, maxcol);

    let mut seam = Seam::with_capacity(height as usize);
    seam.push((col, height - 1));
    for y in (0..height - 1).rev() {
        let lo = cq!(col == 0, 0, col - 1);
        let hi = cq!(col == maxcol, maxcol, col + 1);
        let (next, _) = leftmost_min(table, y, lo, hi);
        col = next;
        seam.push((col, y));
    }
    (total, seam)
}

// Clipping the window to the grid is the same thing as padding the
// out-of-range side with an infinite cost: the missing neighbor can
// never be selected.  The strict `<` is load-bearing: scanning left
// to right, it hands every tie to the leftmost candidate, and `<=`
// would change which of several equally-cheap seams comes back.
fn leftmost_min<E: Float>(table: &GridMap<E>, y: u32, lo: u32, hi: u32) -> (u32, E) {
    let mut col = lo;
    let mut best = table[(lo, y)];
    for x in lo + 1..=hi {
        if table[(x, y)] < best {
            best = table[(x, y)];
            col = x;
        }
    }
    (col, best)
}

impl<E: Float> SeamFinder<E> for DynamicSeam<E> {
    fn find_vertical_seam(&self) -> (E, Seam) {
        costs_to_seam(&cumulative_costs(&self.energy))
    }
}
