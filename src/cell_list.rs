use crate::piece::PlacedIon;
use ultraviolet::Vec2;

/// Most cells along one axis; larger domains get wider cells instead.
const MAX_CELLS_PER_AXIS: usize = 256;

/// Uniform grid over a fixed domain used to prune bonding candidates.
/// Centres outside the domain are clamped into the edge cells, which keeps
/// neighbour queries exact while bounding the grid size.
pub struct CellList {
    pub cell_size: f32,
    origin: Vec2,
    grid_size_x: usize,
    grid_size_y: usize,
    cells: Vec<Vec<usize>>, // store indices of pieces per cell
}

impl CellList {
    pub fn new(min: Vec2, max: Vec2, cell_size: f32) -> Self {
        let extent = (max - min).max_by_component(Vec2::zero());
        let widest = extent.x.max(extent.y);
        let cell_size = cell_size
            .max(1.0)
            .max(widest / MAX_CELLS_PER_AXIS as f32);
        let axis = |len: f32| ((len / cell_size).ceil() as usize + 1).min(MAX_CELLS_PER_AXIS + 1);
        Self {
            cell_size,
            origin: min,
            grid_size_x: axis(extent.x),
            grid_size_y: axis(extent.y),
            cells: Vec::new(),
        }
    }

    pub fn rebuild(&mut self, pieces: &[PlacedIon]) {
        self.cells.clear();
        self.cells.resize(self.grid_size_x * self.grid_size_y, Vec::new());
        for (i, p) in pieces.iter().enumerate() {
            let (cx, cy) = self.coord(p.pos);
            self.cells[cx + cy * self.grid_size_x].push(i);
        }
    }

    fn coord(&self, pos: Vec2) -> (usize, usize) {
        let x = ((pos.x - self.origin.x) / self.cell_size).floor() as isize;
        let y = ((pos.y - self.origin.y) / self.cell_size).floor() as isize;
        let x = x.clamp(0, self.grid_size_x as isize - 1) as usize;
        let y = y.clamp(0, self.grid_size_y as isize - 1) as usize;
        (x, y)
    }

    /// Indices of pieces whose centre lies within `cutoff` of piece `i`,
    /// excluding `i`, in ascending store order.
    pub fn find_neighbors_within(&self, pieces: &[PlacedIon], i: usize, cutoff: f32) -> Vec<usize> {
        let (cx, cy) = self.coord(pieces[i].pos);
        let widest = self.grid_size_x.max(self.grid_size_y) as isize;
        let range = ((cutoff / self.cell_size).ceil() as isize).min(widest);
        let cutoff_sq = cutoff * cutoff;
        let mut neighbors = Vec::new();
        for dy in -range..=range {
            for dx in -range..=range {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                if x < 0 || y < 0 || x >= self.grid_size_x as isize || y >= self.grid_size_y as isize {
                    continue;
                }
                let cell_idx = x as usize + y as usize * self.grid_size_x;
                for &idx in &self.cells[cell_idx] {
                    if idx != i {
                        let r2 = (pieces[idx].pos - pieces[i].pos).mag_sq();
                        if r2 <= cutoff_sq {
                            neighbors.push(idx);
                        }
                    }
                }
            }
        }
        neighbors.sort_unstable();
        neighbors
    }
}
