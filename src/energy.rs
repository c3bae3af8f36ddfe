// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The energy oracle
//!
//! The grid itself never crosses into this crate.  A seam search sees
//! a width, a height, and a callback reporting the energy of one cell;
//! gradient magnitude, luma distance, or whatever else the caller
//! favors all arrive through that same shape.
//!
//! The callback must be defined for every `(x, y)` in
//! `[0, width) x [0, height)` and must return a finite, non-negative
//! value.  That contract is the caller's to uphold: the engines compare
//! costs raw, with no clamping and no NaN screening, and a callback
//! that breaks the contract yields an unspecified seam.

use crate::gridmap::GridMap;
use num_traits::Float;

/// The type signature of an energy oracle, for when one has to be
/// boxed or named rather than passed through a generic parameter.
pub type EnergyFn<E> = dyn Fn(u32, u32) -> E;

/// Evaluate the oracle exactly once per cell and capture the results.
/// Both engines read from the tabulation instead of calling back out,
/// so whatever the oracle costs is paid width * height times and never
/// again.
pub fn tabulate_energy<E, F>(width: u32, height: u32, energy: F) -> GridMap<E>
where
    E: Float,
    F: Fn(u32, u32) -> E,
{
    GridMap::tabulate(width, height, energy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn oracle_is_consulted_once_per_cell() {
        let calls = Cell::new(0u32);
        let energy = |x: u32, y: u32| {
            calls.set(calls.get() + 1);
            f64::from(x + y)
        };
        let map = tabulate_energy(4, 3, energy);
        assert_eq!(calls.get(), 12);
        assert_eq!(map[(3, 2)], 5.0);
    }
}
