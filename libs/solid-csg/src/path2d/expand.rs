//! Centre line to 2D outline.
//!
//! Every segment contributes a rectangle of half-width `radius`. Corners get
//! either a disk (round) or a mitre kite on the outer side (sharp), and open
//! ends get a disk when round. The pieces are merged with `geo`'s boolean
//! union and the resulting rings are cleaned so that no two consecutive
//! points coincide and no point lies exactly on the line through its
//! neighbours.

use crate::error::CsgError;
use config::constants::{approx_zero, MITER_LIMIT};
use geo::orient::Direction;
use geo::{BooleanOps, Coord, LineString, MultiPolygon, Orient, Polygon};
use glam::DVec2;
use std::f64::consts::TAU;

pub(super) fn expand(
    points: &[DVec2],
    closed: bool,
    radius: f64,
    resolution: u32,
    round: bool,
) -> Result<MultiPolygon<f64>, CsgError> {
    let points = distinct_points(points, closed);

    let pieces: Vec<Vec<DVec2>> = match points.as_slice() {
        [] => return Err(CsgError::degenerate_path("path has no points")),
        [single] if round => vec![disk(*single, radius, resolution)],
        [_] => {
            return Err(CsgError::degenerate_path(
                "path collapses to a single point",
            ))
        }
        _ => {
            let closed = closed && points.len() >= 3;
            let n = points.len();
            let segment_count = if closed { n } else { n - 1 };

            let mut pieces: Vec<Vec<DVec2>> = (0..segment_count)
                .map(|i| segment(points[i], points[(i + 1) % n], radius))
                .collect();

            if round {
                pieces.extend(points.iter().map(|&p| disk(p, radius, resolution)));
            } else {
                let corners = if closed { 0..n } else { 1..n - 1 };
                pieces.extend(corners.filter_map(|i| {
                    mitre(points[(i + n - 1) % n], points[i], points[(i + 1) % n], radius)
                }));
            }
            pieces
        }
    };

    let merged = pieces
        .into_iter()
        .map(|piece| to_geo(&piece))
        .fold(MultiPolygon::new(Vec::new()), |acc, piece| {
            acc.union(&MultiPolygon::new(vec![piece]))
        });

    let outline = clean(merged.orient(Direction::Default));
    if outline.0.is_empty() {
        return Err(CsgError::degenerate_path(
            "outline vanished when merging the pieces",
        ));
    }
    Ok(outline)
}

/// Drops consecutive repeats, and the closing repeat of a closed path.
///
/// Points closer than `EPSILON` count as repeats, so every remaining
/// segment has a direction.
fn distinct_points(points: &[DVec2], closed: bool) -> Vec<DVec2> {
    let mut distinct = points.to_vec();
    distinct.dedup_by(|next, kept| approx_zero(next.distance(*kept)));
    if closed {
        while let [first, .., last] = distinct.as_slice() {
            if !approx_zero(first.distance(*last)) {
                break;
            }
            distinct.pop();
        }
    }
    distinct
}

fn segment(a: DVec2, b: DVec2, radius: f64) -> Vec<DVec2> {
    let offset = (b - a).normalize().perp() * radius;
    vec![a - offset, b - offset, b + offset, a + offset]
}

/// Regular polygon inscribed in the circle, first vertex at angle zero.
fn disk(center: DVec2, radius: f64, resolution: u32) -> Vec<DVec2> {
    (0..resolution)
        .map(|k| {
            let angle = TAU * k as f64 / resolution as f64;
            center + DVec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Join piece filling the outer side of the corner at `p`.
///
/// Returns `None` for a straight continuation. A full reversal gets a square
/// cap; a mitre longer than `MITER_LIMIT * radius` falls back to a bevel.
fn mitre(prev: DVec2, p: DVec2, next: DVec2, radius: f64) -> Option<Vec<DVec2>> {
    let d1 = (p - prev).normalize();
    let d2 = (next - p).normalize();
    let turn = d1.perp_dot(d2);

    if approx_zero(turn) {
        if d1.dot(d2) > 0.0 {
            return None;
        }
        let side = d1.perp() * radius;
        let ahead = d1 * radius;
        return Some(vec![p - side, p + ahead - side, p + ahead + side, p + side]);
    }

    // Left turns open up on the right-hand side and vice versa
    let outer = if turn > 0.0 { -1.0 } else { 1.0 };
    let n1 = d1.perp() * outer;
    let n2 = d2.perp() * outer;
    let a = p + n1 * radius;
    let b = p + n2 * radius;
    let tip = (n1 + n2) * (radius / (1.0 + n1.dot(n2)));

    if tip.length() > MITER_LIMIT * radius {
        Some(vec![p, a, b])
    } else {
        Some(vec![p, a, p + tip, b])
    }
}

fn to_geo(points: &[DVec2]) -> Polygon<f64> {
    let ring: Vec<Coord<f64>> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    Polygon::new(LineString::new(ring), Vec::new()).orient(Direction::Default)
}

/// Removes repeated and collinear ring points; drops rings that collapse.
fn clean(region: MultiPolygon<f64>) -> MultiPolygon<f64> {
    region
        .into_iter()
        .filter_map(|polygon| {
            let (exterior, interiors) = polygon.into_inner();
            let exterior = clean_ring(&exterior)?;
            let interiors = interiors
                .iter()
                .filter_map(clean_ring)
                .map(LineString::new)
                .collect();
            Some(Polygon::new(LineString::new(exterior), interiors))
        })
        .collect()
}

fn clean_ring(ring: &LineString<f64>) -> Option<Vec<Coord<f64>>> {
    let mut coords = ring.0.clone();
    coords.dedup();
    while coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }

    loop {
        let n = coords.len();
        if n < 3 {
            return None;
        }
        let keep: Vec<bool> = (0..n)
            .map(|i| orient(coords[(i + n - 1) % n], coords[i], coords[(i + 1) % n]) != 0.0)
            .collect();
        if keep.iter().all(|&k| k) {
            return Some(coords);
        }
        coords = coords
            .into_iter()
            .zip(keep)
            .filter_map(|(c, k)| k.then_some(c))
            .collect();
    }
}

/// Exact orientation: positive for a counter-clockwise turn.
pub(super) fn orient(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
    robust::orient2d(
        robust::Coord { x: a.x, y: a.y },
        robust::Coord { x: b.x, y: b.y },
        robust::Coord { x: c.x, y: c.y },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn test_segment_is_counter_clockwise() {
        let rect = segment(DVec2::ZERO, DVec2::new(4.0, 0.0), 1.0);
        assert_eq!(
            rect,
            vec![
                DVec2::new(0.0, -1.0),
                DVec2::new(4.0, -1.0),
                DVec2::new(4.0, 1.0),
                DVec2::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_disk_starts_at_angle_zero() {
        let pts = disk(DVec2::new(1.0, 1.0), 2.0, 4);
        assert_eq!(pts.len(), 4);
        assert!((pts[0] - DVec2::new(3.0, 1.0)).length() < 1e-12);
        assert!((pts[1] - DVec2::new(1.0, 3.0)).length() < 1e-12);
    }

    #[test]
    fn test_mitre_right_angle_reaches_corner() {
        // Left turn at (10, 0): outer corner is (10.5, -0.5)
        let kite = mitre(
            DVec2::ZERO,
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            0.5,
        )
        .unwrap();
        assert_eq!(kite.len(), 4);
        assert!((kite[2] - DVec2::new(10.5, -0.5)).length() < 1e-12);
    }

    #[test]
    fn test_mitre_straight_and_reversal() {
        let straight = mitre(DVec2::ZERO, DVec2::X, DVec2::X * 2.0, 1.0);
        assert!(straight.is_none());

        let cap = mitre(DVec2::ZERO, DVec2::X, DVec2::ZERO, 1.0).unwrap();
        assert_eq!(cap.len(), 4);
        assert!(cap.iter().any(|p| (p.x - 2.0).abs() < 1e-12));
    }

    #[test]
    fn test_mitre_sharp_angle_bevels() {
        let bevel = mitre(
            DVec2::ZERO,
            DVec2::new(10.0, 0.0),
            DVec2::new(0.0, 0.5),
            1.0,
        )
        .unwrap();
        assert_eq!(bevel.len(), 3);
    }

    #[test]
    fn test_clean_ring_drops_collinear_and_repeats() {
        let ring = LineString::from(vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 0.0),
            (2.0, 2.0),
            (0.0, 2.0),
            (0.0, 0.0),
        ]);
        let cleaned = clean_ring(&ring).unwrap();
        assert_eq!(cleaned.len(), 4);
        assert!(!cleaned.contains(&Coord { x: 1.0, y: 0.0 }));
    }

    #[test]
    fn test_clean_ring_collapses_sliver() {
        let ring = LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 0.0)]);
        assert!(clean_ring(&ring).is_none());
    }

    #[test]
    fn test_expand_straight_segment_area() {
        let outline = expand(&[DVec2::ZERO, DVec2::new(10.0, 0.0)], false, 0.5, 8, false).unwrap();
        assert_eq!(outline.0.len(), 1);
        assert!((outline.unsigned_area() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_expand_closed_square_has_hole() {
        let square = [
            DVec2::ZERO,
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ];
        let outline = expand(&square, true, 0.5, 8, false).unwrap();
        assert_eq!(outline.0.len(), 1);
        assert_eq!(outline.0[0].interiors().len(), 1);
        assert!((outline.unsigned_area() - 40.0).abs() < 1e-6);
    }

    #[test]
    fn test_near_repeats_merge() {
        let points = [
            DVec2::ZERO,
            DVec2::new(1e-300, 0.0),
            DVec2::new(5.0, 0.0),
            DVec2::new(5.0, 1e-12),
        ];
        assert_eq!(
            distinct_points(&points, false),
            vec![DVec2::ZERO, DVec2::new(5.0, 0.0)]
        );

        let ring = [DVec2::ZERO, DVec2::X, DVec2::Y, DVec2::new(0.0, 1e-13)];
        assert_eq!(distinct_points(&ring, true).len(), 3);
    }

    #[test]
    fn test_expand_single_point() {
        let outline = expand(&[DVec2::ONE, DVec2::ONE], false, 1.0, 8, true).unwrap();
        assert_eq!(outline.0.len(), 1);

        let err = expand(&[DVec2::ONE, DVec2::ONE], false, 1.0, 8, false).unwrap_err();
        assert!(matches!(err, CsgError::DegeneratePath { .. }));
    }
}
