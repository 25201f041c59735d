//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering an axis-aligned rectangle
pub fn rect_quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Filled quads for a batch of rectangles sharing no state
pub fn rect_batch<'a>(rects: impl IntoIterator<Item = (&'a Rect, [f32; 4])>) -> Vec<Vertex> {
    let rects = rects.into_iter();
    let mut vertices = Vec::with_capacity(rects.size_hint().0 * 6);
    for (rect, color) in rects {
        vertices.extend_from_slice(&rect_quad(rect, color));
    }
    vertices
}
