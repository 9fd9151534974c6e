//! The 24-point Nine Men's Morris board
//!
//! ```text
//!  0 ----------- 1 ----------- 2
//!  |             |             |
//!  |    3 ------ 4 ------ 5    |
//!  |    |        |        |    |
//!  |    |    6 - 7 - 8    |    |
//!  |    |    |       |    |    |
//!  9 - 10 - 11      12 - 13 - 14
//!  |    |    |       |    |    |
//!  |    |   15 - 16 - 17  |    |
//!  |    |        |        |    |
//!  |   18 ----- 19 ----- 20    |
//!  |             |             |
//! 21 ---------- 22 ---------- 23
//! ```

use crate::color::Color;

pub const POINTS: usize = 24;

/// Board contents, one slot per point
pub type Points = [Option<Color>; POINTS];

/// Neighbours of each point along the drawn lines
pub const ADJACENCY: [&[u8]; POINTS] = [
    &[1, 9],
    &[0, 2, 4],
    &[1, 14],
    &[4, 10],
    &[1, 3, 5, 7],
    &[4, 13],
    &[7, 11],
    &[4, 6, 8],
    &[7, 12],
    &[0, 10, 21],
    &[3, 9, 11, 18],
    &[6, 10, 15],
    &[8, 13, 17],
    &[5, 12, 14, 20],
    &[2, 13, 23],
    &[11, 16],
    &[15, 17, 19],
    &[12, 16],
    &[10, 19],
    &[16, 18, 20, 22],
    &[13, 19],
    &[9, 22],
    &[19, 21, 23],
    &[14, 22],
];

/// The sixteen lines of three
pub const MILLS: [[u8; 3]; 16] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [9, 10, 11],
    [12, 13, 14],
    [15, 16, 17],
    [18, 19, 20],
    [21, 22, 23],
    [0, 9, 21],
    [3, 10, 18],
    [6, 11, 15],
    [1, 4, 7],
    [16, 19, 22],
    [8, 12, 17],
    [5, 13, 20],
    [2, 14, 23],
];

pub fn neighbors(point: u8) -> &'static [u8] {
    ADJACENCY.get(point as usize).copied().unwrap_or(&[])
}

pub fn is_adjacent(a: u8, b: u8) -> bool {
    neighbors(a).contains(&b)
}

pub fn get(points: &Points, point: u8) -> Option<Color> {
    points.get(point as usize).copied().flatten()
}

/// Mills passing through `point`
pub fn mills_through(point: u8) -> impl Iterator<Item = &'static [u8; 3]> {
    MILLS.iter().filter(move |mill| mill.contains(&point))
}

/// Whether `color` has a complete mill through `point`
pub fn check_mill(points: &Points, point: u8, color: Color) -> bool {
    mills_through(point).any(|mill| mill.iter().all(|p| get(points, *p) == Some(color)))
}

/// Opponent pieces that may be removed after `opponent`'s rival forms a mill
///
/// Pieces inside a mill are protected unless every one of `opponent`'s
/// pieces is inside a mill.
pub fn removable_pieces(points: &Points, opponent: Color) -> Vec<u8> {
    let owned: Vec<u8> = (0..POINTS as u8)
        .filter(|p| get(points, *p) == Some(opponent))
        .collect();
    let exposed: Vec<u8> = owned
        .iter()
        .copied()
        .filter(|p| !check_mill(points, *p, opponent))
        .collect();
    if exposed.is_empty() {
        owned
    } else {
        exposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_symmetric() {
        //! Every edge appears in both endpoint lists
        for (point, list) in ADJACENCY.iter().enumerate() {
            for other in *list {
                assert!(
                    is_adjacent(*other, point as u8),
                    "{other} does not list {point}"
                );
            }
        }
    }

    #[test]
    fn test_every_point_in_two_mills() {
        for point in 0..POINTS as u8 {
            assert_eq!(mills_through(point).count(), 2, "point {point}");
        }
    }

    #[test]
    fn test_mill_lines_are_connected() {
        //! The ends of each mill are joined through its middle point
        for [a, b, c] in MILLS {
            assert!(is_adjacent(a, b) && is_adjacent(b, c), "{a}-{b}-{c}");
        }
    }

    #[test]
    fn test_check_mill() {
        let mut points: Points = [None; POINTS];
        for p in [0, 1, 2] {
            points[p] = Some(Color::White);
        }
        assert!(check_mill(&points, 1, Color::White));
        assert!(!check_mill(&points, 1, Color::Black));
        assert!(!check_mill(&points, 9, Color::White));
    }

    #[test]
    fn test_mill_pieces_protected() {
        //! A piece in a mill is removable only when all are in mills
        let mut points: Points = [None; POINTS];
        for p in [0, 1, 2, 23] {
            points[p] = Some(Color::Black);
        }
        assert_eq!(removable_pieces(&points, Color::Black), vec![23]);

        points[23] = None;
        assert_eq!(removable_pieces(&points, Color::Black), vec![0, 1, 2]);
    }
}
