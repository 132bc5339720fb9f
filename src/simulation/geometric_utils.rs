//! Geometric utility functions for positions, distances and world bounds.
//!
//! Positions are 3-element `Array1<f32>` vectors `[x, y, z]`. The `y` axis is
//! vertical; horizontal motion happens in the x/z plane.

use ndarray::Array1;
use rand::Rng;

/// Index of the vertical ("depth") axis.
pub const VERTICAL_AXIS: usize = 1;

/// Builds a position vector.
pub fn position(x: f32, y: f32, z: f32) -> Array1<f32> {
    Array1::from_vec(vec![x, y, z])
}

/// Samples a position uniformly inside the world cube.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, half_extent: f32) -> Array1<f32> {
    Array1::from_iter((0..3).map(|_| rng.random_range(-half_extent..=half_extent)))
}

/// Euclidean distance between two positions.
pub fn distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    (a - b).mapv(|x| x.powi(2)).sum().sqrt()
}

/// Clamps every coordinate of `v` into `[-half_extent, half_extent]`.
///
/// Out-of-range positions stop at the wall; they are neither reflected nor wrapped.
pub fn clamp_to_world_mut(v: &mut Array1<f32>, half_extent: f32) {
    v.mapv_inplace(|c| c.clamp(-half_extent, half_extent));
}

/// Returns `true` if every coordinate lies within `±half_extent`.
pub fn is_inside_world(v: &Array1<f32>, half_extent: f32) -> bool {
    v.iter().all(|c| c.abs() <= half_extent)
}
