#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::Cell;
use crate::spatial::grid::Grid;

use super::RenderBuffers;

#[inline]
fn write_pixel(cell: &Cell, ty: &mut u8, color: &mut u32) {
    *ty = cell.cell_type().code();
    *color = cell.color().to_abgr();
}

/// Copy kind codes and ABGR colors of every cell into the render buffers.
pub(super) fn extract(grid: &Grid, render: &mut RenderBuffers) {
    let size = grid.size();
    render.types.resize(size, 0);
    render.colors.resize(size, 0);

    #[cfg(feature = "parallel")]
    render
        .types
        .par_iter_mut()
        .zip(render.colors.par_iter_mut())
        .zip(grid.cells().par_iter())
        .for_each(|((ty, color), cell)| write_pixel(cell, ty, color));

    #[cfg(not(feature = "parallel"))]
    render
        .types
        .iter_mut()
        .zip(render.colors.iter_mut())
        .zip(grid.cells().iter())
        .for_each(|((ty, color), cell)| write_pixel(cell, ty, color));
}
