use crate::core::Radius;
use crate::utils::error::Result;

/// Calculates the area of a circle given its radius, `A = π * r²`.
///
/// Fails with [`AreaError::InvalidArgument`](crate::AreaError::InvalidArgument)
/// when the radius is negative, NaN or infinite.
///
/// ```
/// let area = circle_area::compute_circle_area(5.0).unwrap();
/// assert_eq!(area, 78.53981633974483);
/// ```
pub fn compute_circle_area(radius: f64) -> Result<f64> {
    Ok(Radius::new(radius)?.area().value())
}
