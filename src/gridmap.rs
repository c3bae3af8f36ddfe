use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// Defines the basic cost map: an addressable two-dimensional field
/// holding whatever a processing stage needs per grid cell: the
/// tabulated energies, or the cumulative costs of the seam table.
#[derive(Debug)]
pub struct GridMap<P: Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Copy> GridMap<P> {
    /// Define a new map, every cell carrying the same seed value.
    pub fn new(width: u32, height: u32, seed: P) -> Self {
        GridMap {
            width,
            height,
            cells: vec![seed; width as usize * height as usize],
        }
    }

    /// Build a map by evaluating a function once per cell, in
    /// row-major order.
    pub fn tabulate<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> P,
    {
        GridMap {
            width,
            height,
            cells: iproduct!(0..height, 0..width).map(|(y, x)| f(x, y)).collect(),
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Copy> Index<(u32, u32)> for GridMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for GridMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
