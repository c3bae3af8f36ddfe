// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Best-seam entry points
//!
//! The front door of the crate: validate the dimensions, pick an
//! engine, hand back the seam.  The dynamic engine is the default and
//! the only sensible choice outside of validation work.

use crate::dynamic::DynamicSeam;
use crate::exhaustive::ExhaustiveSeam;
use crate::removal::SeamRemover;
use crate::seamfinder::{Seam, SeamError, SeamFinder};
use num_traits::Float;

/// Which engine answers a query.  A binary switch, but an enum keeps
/// call sites legible in a way a bare bool never manages.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum Search {
    /// The cumulative-table engine.  Linear in the cell count.
    Dynamic,
    /// The brute-force engine.  Exponential in the height; only for
    /// cross-checking the table engine on small grids.
    Exhaustive,
}

/// Find the cheapest vertical seam through a `width` by `height` grid
/// of energies, using the dynamic engine.
///
/// The energy callback must return a finite, non-negative value for
/// every cell; see the `energy` module for the exact contract.
pub fn best_seam<E, F>(width: u32, height: u32, energy: F) -> Result<Seam, SeamError>
where
    E: Float,
    F: Fn(u32, u32) -> E,
{
    best_seam_with(width, height, energy, Search::Dynamic)
}

/// Find the cheapest vertical seam with the engine spelled out.  Both
/// engines return a seam of the same total energy; under ties the
/// seams themselves may differ.
pub fn best_seam_with<E, F>(
    width: u32,
    height: u32,
    energy: F,
    search: Search,
) -> Result<Seam, SeamError>
where
    E: Float,
    F: Fn(u32, u32) -> E,
{
    let (_, seam) = match search {
        Search::Dynamic => DynamicSeam::new(width, height, energy)?.find_vertical_seam(),
        Search::Exhaustive => ExhaustiveSeam::new(width, height, energy)?.find_vertical_seam(),
    };
    Ok(seam)
}

/// Find the cheapest seam and hand it straight to the grid owner for
/// removal, returning the seam that was taken out.  One call, one
/// column gone.
pub fn carve<E, F, R>(
    target: &mut R,
    width: u32,
    height: u32,
    energy: F,
) -> Result<Seam, SeamError>
where
    E: Float,
    F: Fn(u32, u32) -> E,
    R: SeamRemover,
{
    let seam = best_seam(width, height, energy)?;
    target.remove_seam(&seam);
    Ok(seam)
}
