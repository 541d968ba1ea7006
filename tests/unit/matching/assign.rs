use super::*;

fn total(m: &CostMatrix, pairs: &[(usize, usize)]) -> f64 {
    pairs.iter().map(|&(r, c)| m.get(r, c)).sum()
}

#[test]
fn solves_classic_square_case() {
    let rows = [[4.0, 1.0, 3.0], [2.0, 0.0, 5.0], [3.0, 2.0, 2.0]];
    let m = CostMatrix::from_fn(3, 3, |r, c| rows[r][c]);
    let pairs = solve(&m);
    assert_eq!(pairs, vec![(0, 1), (1, 0), (2, 2)]);
    assert_eq!(total(&m, &pairs), 5.0);
}

#[test]
fn rectangular_leaves_extra_rows_unassigned() {
    let rows = [[1.0, 9.0], [9.0, 1.0], [0.5, 0.5]];
    let m = CostMatrix::from_fn(3, 2, |r, c| rows[r][c]);
    let pairs = solve(&m);
    assert_eq!(pairs.len(), 2);
    assert_eq!(total(&m, &pairs), 1.5);
    let mut cols: Vec<usize> = pairs.iter().map(|p| p.1).collect();
    cols.sort_unstable();
    assert_eq!(cols, vec![0, 1]);
}

#[test]
fn wide_matrix_assigns_every_row() {
    let m = CostMatrix::from_fn(1, 3, |_, c| [5.0, 2.0, 7.0][c]);
    assert_eq!(solve(&m), vec![(0, 1)]);
}

#[test]
fn non_finite_costs_are_avoided() {
    let rows = [[f64::INFINITY, 3.0], [1.0, f64::NAN]];
    let m = CostMatrix::from_fn(2, 2, |r, c| rows[r][c]);
    assert_eq!(solve(&m), vec![(0, 1), (1, 0)]);
}

#[test]
fn empty_input_is_empty() {
    assert!(solve(&CostMatrix::from_fn(0, 4, |_, _| 0.0)).is_empty());
    assert!(solve(&CostMatrix::from_fn(3, 0, |_, _| 0.0)).is_empty());
}

#[test]
fn brute_force_agrees_on_small_matrices() {
    // Deterministic pseudo-random fill.
    let mut seed = 7u64;
    let mut next = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((seed >> 33) % 1000) as f64 / 10.0
    };
    for _ in 0..20 {
        let vals: Vec<f64> = (0..16).map(|_| next()).collect();
        let m = CostMatrix::from_fn(4, 4, |r, c| vals[r * 4 + c]);
        let got = total(&m, &solve(&m));

        let mut best = f64::INFINITY;
        let mut perm = [0usize, 1, 2, 3];
        permute(&mut perm, 0, &mut |p| {
            let s: f64 = (0..4).map(|r| m.get(r, p[r])).sum();
            best = best.min(s);
        });
        assert!((got - best).abs() < 1e-9, "got {got}, best {best}");
    }
}

fn permute(p: &mut [usize; 4], k: usize, f: &mut impl FnMut(&[usize; 4])) {
    if k == p.len() {
        f(p);
        return;
    }
    for i in k..p.len() {
        p.swap(k, i);
        permute(p, k + 1, f);
        p.swap(k, i);
    }
}
