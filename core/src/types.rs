use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for revealed-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Width and height of the canvas.
pub const BOARD_SIZE: Coord2 = (5, 5);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Left, right, up, down. Diagonals never count as adjacent on the canvas.
const DISPLACEMENTS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> impl Iterator<Item = Coord2>;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, (x, y): Coord2) -> impl Iterator<Item = Coord2> {
        let (dim_x, dim_y) = self.dim();
        DISPLACEMENTS.into_iter().filter_map(move |(dx, dy)| {
            let next = (x.checked_add_signed(dx)?, y.checked_add_signed(dy)?);
            (usize::from(next.0) < dim_x && usize::from(next.1) < dim_y).then_some(next)
        })
    }
}
