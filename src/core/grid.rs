use crate::error::{Error, Result};

/// Uniform cell grid over the periodic box.
///
/// The box is divided into `ncell` cells per axis, chosen so that a cell
/// edge is never shorter than the pair separation. Collision partners of
/// a particle are then guaranteed to sit in its own cell or one of the
/// directly adjacent cells, with periodic wrapping at the box faces.
#[derive(Debug, Clone)]
pub struct CellGrid<const D: usize> {
    /// Cells per axis; zero while the grid is not initialized.
    ncell: u32,
    /// Edge length of one cell.
    cell_length: f64,
    /// Edge length of the box.
    box_length: f64,
    /// Particle membership per cell, row-major over the axes.
    cells: Vec<Vec<u32>>,
    /// Offsets of all adjacent cells, excluding the cell itself.
    neighbors: Vec<[i32; D]>,
}

impl<const D: usize> CellGrid<D> {
    /// A grid placeholder without cells. `is_ready` reports false until
    /// the grid is replaced by [`CellGrid::new`].
    pub fn empty() -> Self {
        Self {
            ncell: 0,
            cell_length: 0.0,
            box_length: 0.0,
            cells: Vec::new(),
            neighbors: Vec::new(),
        }
    }

    /// Choose the cell division for `npart` particles in a box of edge
    /// `box_length` and construct the grid.
    ///
    /// The number of cells per axis targets an average cell occupancy of
    /// 1/8 (3D) or 2/3 (2D), is raised to the minimum of 3 required for
    /// a distinct-neighbor search, and is capped so that a cell edge
    /// stays at least one pair separation long. If the cap forces fewer
    /// than 3 cells per axis the box is simply too small for a grid and
    /// a configuration error is returned.
    pub fn new(npart: usize, box_length: f64, pair_sep: f64) -> Result<Self> {
        let opt = if D == 3 {
            (8.0 * npart as f64).cbrt()
        } else {
            (1.5 * npart as f64).sqrt()
        };
        let ncell = opt.max(3.0).min((box_length / pair_sep).floor()).trunc();
        if ncell < 3.0 {
            return Err(Error::Config(
                "number of cells per dimension must be at least 3".into(),
            ));
        }
        let ncell = ncell as u32;
        let cell_length = box_length / f64::from(ncell);

        let num = (0..D).try_fold(1usize, |acc, _| acc.checked_mul(ncell as usize));
        let num = num.ok_or_else(|| Error::Alloc("cell count overflows".into()))?;
        let mut cells: Vec<Vec<u32>> = Vec::new();
        cells
            .try_reserve_exact(num)
            .map_err(|e| Error::Alloc(format!("failed to allocate cells: {}", e)))?;
        cells.resize_with(num, Vec::new);

        // enumerate {-1, 0, 1}^D via base-3 digits, skipping the origin
        let mut neighbors = Vec::with_capacity(3usize.pow(D as u32) - 1);
        for k in 0..3usize.pow(D as u32) {
            let mut offset = [0i32; D];
            let mut rem = k;
            for d in (0..D).rev() {
                offset[d] = (rem % 3) as i32 - 1;
                rem /= 3;
            }
            if offset != [0; D] {
                neighbors.push(offset);
            }
        }

        Ok(Self {
            ncell,
            cell_length,
            box_length,
            cells,
            neighbors,
        })
    }

    /// Whether the grid has been initialized.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ncell != 0
    }

    /// Cells per axis.
    #[inline]
    pub fn ncell(&self) -> u32 {
        self.ncell
    }

    /// Edge length of one cell.
    #[inline]
    pub fn cell_length(&self) -> f64 {
        self.cell_length
    }

    /// Total number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Map a position in `[-L/2, L/2)` to its cell index per axis.
    /// Positions marginally outside the domain clamp to the boundary
    /// cells rather than indexing out of range.
    pub fn compute_cell(&self, r: &[f64; D]) -> [u32; D] {
        let mut cell = [0u32; D];
        for d in 0..D {
            let c = ((r[d] + 0.5 * self.box_length) / self.cell_length).floor() as i64;
            cell[d] = c.clamp(0, i64::from(self.ncell) - 1) as u32;
        }
        cell
    }

    /// Particles currently registered in `cell`.
    #[inline]
    pub fn members(&self, cell: [u32; D]) -> &[u32] {
        &self.cells[self.index(cell)]
    }

    /// Register particle `n` in `cell`.
    pub(crate) fn insert(&mut self, cell: [u32; D], n: u32) {
        let idx = self.index(cell);
        self.cells[idx].push(n);
    }

    /// Remove particle `n` from `cell`. The particle must be a member.
    pub(crate) fn remove(&mut self, cell: [u32; D], n: u32) {
        let idx = self.index(cell);
        let pos = self.cells[idx].iter().position(|&m| m == n);
        debug_assert!(pos.is_some(), "particle {} not in cell {:?}", n, cell);
        if let Some(pos) = pos {
            self.cells[idx].remove(pos);
        }
    }

    /// Empty all membership lists, keeping the grid geometry.
    pub(crate) fn clear_members(&mut self) {
        for members in &mut self.cells {
            members.clear();
        }
    }

    /// Number of adjacent-cell offsets (`3^D - 1`).
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// The `k`-th adjacent-cell offset.
    #[inline]
    pub fn neighbor_offset(&self, k: usize) -> [i32; D] {
        self.neighbors[k]
    }

    /// Apply an adjacency offset to a cell with periodic wrapping.
    pub fn wrap_neighbor(&self, cell: [u32; D], offset: [i32; D]) -> [u32; D] {
        let n = i64::from(self.ncell);
        let mut out = [0u32; D];
        for d in 0..D {
            out[d] = ((i64::from(cell[d]) + n + i64::from(offset[d])) % n) as u32;
        }
        out
    }

    #[inline]
    fn index(&self, cell: [u32; D]) -> usize {
        cell.iter()
            .fold(0usize, |acc, &c| acc * self.ncell as usize + c as usize)
    }
}
