// #![deny(missing_docs)]

//! Minimum-energy vertical seam search for content-aware resizing.
//!
//! The grid never enters the crate: a search sees a width, a height,
//! and an energy callback, and returns the cheapest top-to-bottom
//! connected path of one cell per row.  Removal of that path belongs
//! to whoever owns the cells, behind the [`SeamRemover`] trait.
//!
//! ```
//! use gridseam::best_seam;
//!
//! let rows = [
//!     [1.0, 2.0, 3.0],
//!     [4.0, 1.0, 2.0],
//!     [3.0, 2.0, 1.0],
//! ];
//! let seam = best_seam(3, 3, |x: u32, y: u32| rows[y as usize][x as usize]).unwrap();
//! // Bottom row first, one coordinate per row.
//! assert_eq!(seam, vec![(2, 2), (1, 1), (0, 0)]);
//! ```

pub mod ternary;

pub mod energy;
pub mod gridmap;
pub mod seamfinder;

pub mod dynamic;
pub mod exhaustive;
pub mod removal;
pub mod search;

pub use dynamic::DynamicSeam;
pub use exhaustive::ExhaustiveSeam;
pub use removal::SeamRemover;
pub use seamfinder::{Seam, SeamError, SeamFinder};
pub use search::{best_seam, best_seam_with, carve, Search};
