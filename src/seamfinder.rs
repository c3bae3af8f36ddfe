use failure::Fail;

/// A seam: exactly one `(x, y)` coordinate per row, ordered from the
/// bottom row (`y = height - 1`) up to the top row (`y = 0`).
/// Adjacent entries never differ by more than one column, which is
/// what lets a removal pass close each row up without tearing.
pub type Seam = Vec<(u32, u32)>;

/// This trait defines how we will return seams from a grid.  It's a
/// primitive interface, just enough to make room for multiple seam
/// engines as well as caching.
pub trait SeamFinder<E> {
    /// Request the cheapest vertical seam, along with its total
    /// energy.  The total is what cross-checks between engines
    /// compare, since equally-cheap seams may differ under ties.
    fn find_vertical_seam(&self) -> (E, Seam);
}

/// The one failure a search can report, raised before any table is
/// allocated.  Everything after the dimension check indexes within
/// `[0, width) x [0, height)` by construction.
#[derive(Debug, Fail, PartialEq)]
pub enum SeamError {
    /// A grid with no rows or no columns has no seams.
    #[fail(
        display = "invalid grid dimensions {}x{}, need at least 1x1",
        width, height
    )]
    InvalidDimension { width: u32, height: u32 },
}
