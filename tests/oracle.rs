//! Cross-checks the dynamic engine against the exhaustive one on
//! randomized small grids.  Energies are integer-valued, so both
//! engines' totals are exact and compare with `==` even though the
//! two sum in different orders.

use gridseam::{DynamicSeam, ExhaustiveSeam, Seam, SeamFinder};
use proptest::prelude::*;

fn one_cell_per_row(seam: &Seam, height: u32) -> bool {
    seam.len() == height as usize
        && seam
            .iter()
            .enumerate()
            .all(|(i, &(_, y))| y == height - 1 - i as u32)
}

fn connected(seam: &Seam) -> bool {
    seam.windows(2).all(|w| {
        let ((x0, _), (x1, _)) = (w[0], w[1]);
        (i64::from(x0) - i64::from(x1)).abs() <= 1
    })
}

fn in_bounds(seam: &Seam, width: u32) -> bool {
    seam.iter().all(|&(x, _)| x < width)
}

fn grids() -> impl Strategy<Value = (u32, u32, Vec<u32>)> {
    (1u32..=6, 1u32..=6).prop_flat_map(|(width, height)| {
        proptest::collection::vec(0u32..1000, (width * height) as usize)
            .prop_map(move |cells| (width, height, cells))
    })
}

proptest! {
    #[test]
    fn dynamic_total_matches_exhaustive((width, height, cells) in grids()) {
        let energy = |x: u32, y: u32| f64::from(cells[(y * width + x) as usize]);

        let (dyn_total, dyn_seam) =
            DynamicSeam::new(width, height, &energy).unwrap().find_vertical_seam();
        let (exh_total, exh_seam) =
            ExhaustiveSeam::new(width, height, &energy).unwrap().find_vertical_seam();

        prop_assert_eq!(dyn_total, exh_total);
        for seam in &[dyn_seam, exh_seam] {
            prop_assert!(one_cell_per_row(seam, height));
            prop_assert!(connected(seam));
            prop_assert!(in_bounds(seam, width));
        }
    }

    #[test]
    fn dynamic_total_is_the_sum_along_its_seam((width, height, cells) in grids()) {
        let energy = |x: u32, y: u32| f64::from(cells[(y * width + x) as usize]);

        let (total, seam) =
            DynamicSeam::new(width, height, &energy).unwrap().find_vertical_seam();
        let walked: f64 = seam.iter().map(|&(x, y)| energy(x, y)).sum();
        prop_assert_eq!(total, walked);
    }

    #[test]
    fn single_column_is_forced(height in 1u32..=6, cells in proptest::collection::vec(0u32..1000, 6)) {
        let energy = |_: u32, y: u32| f64::from(cells[y as usize]);

        let (_, seam) = DynamicSeam::new(1, height, &energy).unwrap().find_vertical_seam();
        prop_assert!(one_cell_per_row(&seam, height));
        prop_assert!(seam.iter().all(|&(x, _)| x == 0));
    }
}
