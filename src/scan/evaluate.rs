use super::window::ANCHOR_LEN;
use crate::model::matrix::Matrix3;
use crate::model::residue::Residue;
use crate::table::ThresholdTable;

/// Full 3×3 distance matrix between two anchors, `D[i][j] = |n[i] − c[j]|`.
pub fn distance_matrix(n: [&Residue; ANCHOR_LEN], c: [&Residue; ANCHOR_LEN]) -> Matrix3 {
    Matrix3::from_fn(|i, j| n[i].distance(c[j]))
}

/// Computes the anchor distance matrix and tests it against `table`.
///
/// Cells are visited in row-major order and evaluation stops at the first
/// distance outside its band. Returns the complete matrix only when all nine
/// cells pass.
pub fn evaluate(
    n: [&Residue; ANCHOR_LEN],
    c: [&Residue; ANCHOR_LEN],
    table: &ThresholdTable,
) -> Option<Matrix3> {
    let mut cells = [[0.0; 3]; 3];
    for (i, j) in Matrix3::positions() {
        let d = n[i].distance(c[j]);
        if !table.accepts(i, j, d) {
            return None;
        }
        cells[i][j] = d;
    }
    Some(Matrix3::new(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::residue::ResidueId;
    use crate::table::Band;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn residue(n: i32, x: f64) -> Residue {
        Residue::new(ResidueId::new("A", n, None), [x, 0.0, 0.0])
    }

    fn open_table() -> ThresholdTable {
        ThresholdTable::new(Matrix3::from_fn(|_, _| 0.0), Matrix3::from_fn(|_, _| 1e9)).unwrap()
    }

    #[test]
    fn distance_matrix_is_euclidean() {
        let n = [residue(1, 0.0), residue(2, 1.0), residue(3, 2.0)];
        let c = [residue(5, 10.0), residue(6, 11.0), residue(7, 12.0)];
        let m = distance_matrix([&n[0], &n[1], &n[2]], [&c[0], &c[1], &c[2]]);
        assert!(approx_eq(m[(0, 0)], 10.0, 1e-12));
        assert!(approx_eq(m[(0, 2)], 12.0, 1e-12));
        assert!(approx_eq(m[(2, 0)], 8.0, 1e-12));
        assert!(approx_eq(m[(1, 1)], 10.0, 1e-12));
    }

    #[test]
    fn accepts_when_every_cell_fits() {
        let n = [residue(1, 0.0), residue(2, 1.0), residue(3, 2.0)];
        let c = [residue(5, 10.0), residue(6, 11.0), residue(7, 12.0)];
        let anchors = ([&n[0], &n[1], &n[2]], [&c[0], &c[1], &c[2]]);

        let m = evaluate(anchors.0, anchors.1, &open_table()).expect("open table accepts");
        assert_eq!(m, distance_matrix(anchors.0, anchors.1));
    }

    #[test]
    fn rejects_when_any_single_cell_misses() {
        let n = [residue(1, 0.0), residue(2, 1.0), residue(3, 2.0)];
        let c = [residue(5, 10.0), residue(6, 11.0), residue(7, 12.0)];
        let exact = distance_matrix([&n[0], &n[1], &n[2]], [&c[0], &c[1], &c[2]]);

        for (row, col) in Matrix3::positions() {
            let mut bands: Vec<Band> = exact.iter().map(|d| Band::new(d, d)).collect();
            let d = exact[(row, col)];
            bands[row * 3 + col] = Band::new(d + 0.5, d + 1.0);
            let table = open_table().with_overrides(bands);

            assert!(
                evaluate([&n[0], &n[1], &n[2]], [&c[0], &c[1], &c[2]], &table).is_none(),
                "cell ({row},{col}) should reject"
            );
        }
    }

    #[test]
    fn band_edges_accept() {
        let n = [residue(1, 0.0), residue(2, 1.0), residue(3, 2.0)];
        let c = [residue(5, 10.0), residue(6, 11.0), residue(7, 12.0)];
        let exact = distance_matrix([&n[0], &n[1], &n[2]], [&c[0], &c[1], &c[2]]);
        let table = open_table().with_overrides(exact.iter().map(|d| Band::new(d, d)));

        assert!(evaluate([&n[0], &n[1], &n[2]], [&c[0], &c[1], &c[2]], &table).is_some());
    }
}
