//! Cell corners are numbered with x varying fastest:
//!
//! ```text
//!       6--------7
//!      /|       /|
//!     4--------5 |
//!     | |      | |
//!     | 2------|-3
//!     |/       |/
//!     0--------1
//! ```

/// Offset `(dx, dy, dz)` of every cell corner from the cell origin.
pub const CELL_CORNERS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 1, 0],
    [1, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [0, 1, 1],
    [1, 1, 1],
];

/// Decomposition of a cell into six tetrahedra sharing the diagonal 2-5.
///
/// All six are positively oriented: `(v1 - v0) x (v2 - v0)` points towards `v3`.
pub const TETRAHEDRA: [[usize; 4]; 6] = [
    [0, 1, 2, 5],
    [1, 3, 2, 5],
    [3, 2, 5, 7],
    [0, 2, 4, 5],
    [6, 4, 2, 5],
    [6, 7, 5, 2],
];

/// A triangle given by three tetrahedron edges, each a pair of local vertex
/// indices in `0..4`.
pub type EdgeTriangle = [(usize, usize); 3];

/// Triangles emitted for every tetrahedron case.
///
/// Bit `k` of the case is set when vertex `k` lies below the iso-value. The
/// winding makes every face normal point away from the vertices below it.
/// Case `n` and `15 - n` cross the same edges with opposite winding.
pub const CASE_TABLE: [&[EdgeTriangle]; 16] = [
    // 0: all above
    &[],
    // 1: v0 below
    &[[(0, 1), (0, 2), (0, 3)]],
    // 2: v1 below
    &[[(1, 0), (1, 3), (1, 2)]],
    // 3: v0 v1 below
    &[[(0, 2), (0, 3), (1, 3)], [(0, 2), (1, 3), (1, 2)]],
    // 4: v2 below
    &[[(2, 3), (2, 0), (2, 1)]],
    // 5: v0 v2 below
    &[[(0, 3), (0, 1), (2, 1)], [(0, 3), (2, 1), (2, 3)]],
    // 6: v1 v2 below
    &[[(1, 0), (1, 3), (2, 3)], [(1, 0), (2, 3), (2, 0)]],
    // 7: v3 above
    &[[(3, 2), (3, 0), (3, 1)]],
    // 8: v3 below
    &[[(3, 2), (3, 1), (3, 0)]],
    // 9: v0 v3 below
    &[[(0, 1), (0, 2), (3, 2)], [(0, 1), (3, 2), (3, 1)]],
    // 10: v1 v3 below
    &[[(1, 2), (1, 0), (3, 0)], [(1, 2), (3, 0), (3, 2)]],
    // 11: v2 above
    &[[(2, 3), (2, 1), (2, 0)]],
    // 12: v2 v3 below
    &[[(2, 0), (2, 1), (3, 1)], [(2, 0), (3, 1), (3, 0)]],
    // 13: v1 above
    &[[(1, 0), (1, 2), (1, 3)]],
    // 14: v0 above
    &[[(0, 1), (0, 3), (0, 2)]],
    // 15: all below
    &[],
];

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn corner(k: usize) -> Vec3 {
        let [x, y, z] = CELL_CORNERS[k];
        Vec3::new(x as f32, y as f32, z as f32)
    }

    #[test]
    fn tetrahedra_are_positively_oriented() {
        for tet in TETRAHEDRA {
            let [p0, p1, p2, p3] = tet.map(corner);
            let volume = (p1 - p0).cross(p2 - p0).dot(p3 - p0);
            assert!(volume > 0.0, "{tet:?}");
        }
    }

    #[test]
    fn tetrahedra_fill_the_cell() {
        // six tetrahedra of volume 1/6 each
        for tet in TETRAHEDRA {
            let [p0, p1, p2, p3] = tet.map(corner);
            assert_eq!((p1 - p0).cross(p2 - p0).dot(p3 - p0), 1.0);
        }
    }

    #[test]
    fn cases_cross_exactly_the_sign_changing_edges() {
        for (case, triangles) in CASE_TABLE.iter().enumerate() {
            let below = |v: usize| case & (1 << v) != 0;

            let mut expected = Vec::new();
            for a in 0..4 {
                for b in a + 1..4 {
                    if below(a) != below(b) {
                        expected.push((a, b));
                    }
                }
            }

            let mut crossed: Vec<_> = triangles
                .iter()
                .flatten()
                .map(|&(a, b)| (a.min(b), a.max(b)))
                .collect();
            crossed.sort_unstable();
            crossed.dedup();

            assert_eq!(crossed, expected, "case {case}");
            for &(a, b) in triangles.iter().flatten() {
                assert_ne!(below(a), below(b), "case {case}");
            }
        }
    }

    #[test]
    fn complementary_cases_reverse_winding() {
        for case in 1..15 {
            let (tris, comp) = (CASE_TABLE[case], CASE_TABLE[15 - case]);
            assert_eq!(tris.len(), comp.len(), "case {case}");

            // midpoints of the crossed edges inside tetrahedron 0
            let [p0, p1, p2, p3] = TETRAHEDRA[0].map(corner);
            let pts = [p0, p1, p2, p3];
            let normal = |tri: &EdgeTriangle| {
                let [a, b, c] = tri.map(|(i, j)| (pts[i] + pts[j]) * 0.5);
                (b - a).cross(c - a)
            };
            let n: Vec3 = tris.iter().map(&normal).sum();
            let m: Vec3 = comp.iter().map(&normal).sum();
            assert!(n.dot(m) < 0.0, "case {case}");
        }
    }
}
