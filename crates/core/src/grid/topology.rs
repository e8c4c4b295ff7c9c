//! 8-connected grid adjacency with boundary clipping
//!
//! Neighbor enumeration order is fixed (row-major scan of the offset table)
//! so that arrival-time aggregation breaks floating-point ties the same way
//! on every run. No wraparound: edge and corner cells simply have fewer
//! neighbors.

/// Moore neighborhood offsets in `(d_row, d_col)` order, row-major.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Enumerate the Moore neighbors of `(row, col)` clipped to grid bounds.
///
/// Deterministic and order-stable: the same `(row, col)` always yields
/// neighbors in the same sequence.
pub fn moore_neighbors(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    MOORE_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let nr = row as i64 + i64::from(dr);
        let nc = col as i64 + i64::from(dc);
        if nr >= 0 && nc >= 0 && (nr as usize) < rows && (nc as usize) < cols {
            Some((nr as usize, nc as usize))
        } else {
            None
        }
    })
}

/// Euclidean distance between adjacent cells in cell units
/// (1 for edge neighbors, sqrt(2) for diagonals).
#[inline]
pub fn neighbor_distance(d_row: i32, d_col: i32) -> f32 {
    (d_row as f32).hypot(d_col as f32)
}

/// Compass bearing from a cell toward its neighbor, in degrees.
///
/// 0 = North (decreasing row), 90 = East (increasing column), matching the
/// aspect-layer and wind-direction conventions.
pub fn bearing_degrees(d_row: i32, d_col: i32) -> f32 {
    let bearing = (d_col as f32).atan2(-(d_row as f32)).to_degrees();
    if bearing < 0.0 {
        bearing + 360.0
    } else {
        bearing
    }
}
