//! Painter's-algorithm depth ordering.

use crate::renderer::ShadedFace;

/// Sorts faces by descending centroid depth, farthest first.
///
/// Drawing in this order lets nearer polygons overwrite farther ones,
/// approximating occlusion without a depth buffer. The sort is stable, so
/// faces at exactly equal depth keep their mesh order. `total_cmp` keeps a
/// NaN depth (which a validated mesh cannot produce) from panicking the
/// frame.
pub fn sort_back_to_front(faces: &mut [ShadedFace]) {
    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
