//! Minimum-cost assignment (Hungarian method with potentials).

/// Cost given to padded rows/columns when a rectangular problem is squared up.
pub const PAD_COST: f64 = 10_000.0;

/// Row-major rectangular cost matrix.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.data[r * self.cols + c]
    }

    /// Square copy padded with [`PAD_COST`]; non-finite entries are replaced by it too.
    fn padded(&self) -> (usize, Vec<f64>) {
        let n = self.rows.max(self.cols);
        let mut out = vec![PAD_COST; n * n];
        for r in 0..self.rows {
            for c in 0..self.cols {
                let v = self.get(r, c);
                out[r * n + c] = if v.is_finite() { v } else { PAD_COST };
            }
        }
        (n, out)
    }
}

/// Solve the assignment and return the real `(row, col)` pairs; rows or columns that land on
/// padding are left out.
pub fn solve(matrix: &CostMatrix) -> Vec<(usize, usize)> {
    if matrix.rows == 0 || matrix.cols == 0 {
        return Vec::new();
    }
    let (n, a) = matrix.padded();
    let cost = |i: usize, j: usize| a[(i - 1) * n + (j - 1)];

    // 1-based potentials; index 0 is the virtual column used while augmenting.
    let mut u = vec![0.0f64; n + 1];
    let mut v = vec![0.0f64; n + 1];
    let mut p = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        p[0] = i;
        let mut j0 = 0usize;
        let mut minv = vec![f64::INFINITY; n + 1];
        let mut used = vec![false; n + 1];
        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0usize;
            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let cur = cost(i0, j) - u[i0] - v[j];
                if cur < minv[j] {
                    minv[j] = cur;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }
            if j1 == 0 {
                // Only reachable with NaN costs, which `padded` rules out.
                break;
            }
            for j in 0..=n {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }
            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }
        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut out: Vec<(usize, usize)> = (1..=n)
        .filter(|&j| p[j] != 0)
        .map(|j| (p[j] - 1, j - 1))
        .filter(|&(r, c)| r < matrix.rows && c < matrix.cols)
        .collect();
    out.sort_unstable();
    out
}

#[cfg(test)]
#[path = "../../tests/unit/matching/assign.rs"]
mod tests;
