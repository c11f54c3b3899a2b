//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::Component;

type Vector = Vector3D<Component>;

/// Sum the 3 components, each multiplied by its weight in `weights`.
pub fn weighted_sum(
    weights: &[Component; 3],
    x: Component,
    y: Component,
    z: Component,
) -> Component {
    let [wx, wy, wz] = *weights;
    Vector::new(x, y, z).dot(Vector::new(wx, wy, wz))
}

/// Return the value at `index` when the range from `start` spanning `span`
/// is cut into `steps` equal steps.
pub fn step<T: Float>(start: T, span: T, steps: T, index: T) -> T {
    start + (span / steps) * index
}
