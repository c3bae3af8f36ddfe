/// This trait defines how a grid owner takes a seam back out.  It's a
/// primitive interface, just enough for the search side to drive a
/// carve without knowing anything about how pixels are stored.
///
/// Finding a seam and removing it are separate concerns, and this
/// crate only finds; an image type, a test fixture, or any other cell
/// store supplies the removal.
pub trait SeamRemover {
    /// Remove exactly one cell per row, at the seam's coordinates,
    /// closing each row up leftward.  Afterward the grid must be one
    /// column narrower and exactly as tall as it was, and the
    /// implementation must accept any seam produced by this crate's
    /// engines without modification.
    fn remove_seam(&mut self, seam: &crate::seamfinder::Seam);
}
