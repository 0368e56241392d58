use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// Turns a mine mask into cells, counting the mines around every safe position.
pub(crate) fn classify(mine_mask: &Array2<bool>) -> Array2<Cell> {
    Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
        let coords = (row as Coord, col as Coord);
        if mine_mask[coords.to_nd_index()] {
            Cell::new(CellValue::Mine)
        } else {
            let count = mine_mask
                .iter_neighbors(coords)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            Cell::new(CellValue::Count(count as u8))
        }
    })
}
