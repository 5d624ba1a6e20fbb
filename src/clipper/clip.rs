//! Sutherland-Hodgman clipping of edges and triangles.
//!
//! Primitives are clipped one plane at a time. Each pass drains the current
//! queue and refills the spare one with what survives, then the two swap, so
//! after the last plane the queue holds only geometry inside every plane.
//!
//! Triangles stay triangles: a plane that cuts one leaves either one smaller
//! triangle (one corner inside) or a quadrilateral split into two triangles
//! (two corners inside). Both keep the input winding, which the back-face
//! test and two-sided styles rely on.

use super::plane::ClippingPlane;
use crate::math::Vec4;

/// Endpoints of an edge being clipped.
pub type ClipEdge = [Vec4; 2];
/// Corners of a triangle being clipped, in winding order.
pub type ClipTriangle = [Vec4; 3];

/// Clips one edge against one plane.
pub fn clip_edge(plane: &ClippingPlane, [p1, p2]: ClipEdge) -> Option<ClipEdge> {
    match (plane.contains(p1), plane.contains(p2)) {
        (true, true) => Some([p1, p2]),
        (true, false) => Some([p1, plane.intersection(p1, p2)]),
        (false, true) => Some([plane.intersection(p2, p1), p2]),
        (false, false) => None,
    }
}

/// Clips one triangle against one plane, pushing zero, one or two triangles to `out`.
pub fn clip_triangle(plane: &ClippingPlane, corners: ClipTriangle, out: &mut Vec<ClipTriangle>) {
    let inside = corners.map(|p| plane.contains(p));

    match inside.iter().filter(|&&i| i).count() {
        3 => out.push(corners),
        2 => {
            // Rotate so the cyclic order is (i1, i2, o).
            let o = inside.iter().position(|&i| !i).unwrap_or(0);
            let i1 = corners[(o + 1) % 3];
            let i2 = corners[(o + 2) % 3];
            let outside = corners[o];

            let q2 = plane.intersection(i2, outside);
            let q1 = plane.intersection(i1, outside);
            out.push([i1, i2, q2]);
            out.push([i1, q2, q1]);
        }
        1 => {
            // Rotate so the cyclic order is (i, o1, o2).
            let i = inside.iter().position(|&i| i).unwrap_or(0);
            let kept = corners[i];
            let o1 = corners[(i + 1) % 3];
            let o2 = corners[(i + 2) % 3];

            out.push([kept, plane.intersection(kept, o1), plane.intersection(kept, o2)]);
        }
        _ => {}
    }
}

/// Clips every edge in `queue` against every plane in order.
///
/// `spare` is scratch space; its contents on return are unspecified.
pub fn clip_edges(queue: &mut Vec<ClipEdge>, spare: &mut Vec<ClipEdge>, planes: &[ClippingPlane]) {
    for plane in planes {
        if queue.is_empty() {
            break;
        }
        spare.clear();
        spare.extend(queue.drain(..).filter_map(|edge| clip_edge(plane, edge)));
        std::mem::swap(queue, spare);
    }
}

/// Clips every triangle in `queue` against every plane in order.
///
/// `spare` is scratch space; its contents on return are unspecified.
pub fn clip_triangles(
    queue: &mut Vec<ClipTriangle>,
    spare: &mut Vec<ClipTriangle>,
    planes: &[ClippingPlane],
) {
    for plane in planes {
        if queue.is_empty() {
            break;
        }
        spare.clear();
        for triangle in queue.drain(..) {
            clip_triangle(plane, triangle, spare);
        }
        std::mem::swap(queue, spare);
    }
}
