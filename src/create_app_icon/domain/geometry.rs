use crate::domain::error::DomainError;
use crate::domain::percentage::{CornerRadiusPercent, PaddingPercent};

/// `floor(max(width, height) * percent)`
pub fn padding_for(width: u32, height: u32, percent: PaddingPercent) -> u32 {
    let max_dimension = width.max(height) as f64;
    (max_dimension * percent.value()).floor() as u32
}

/// Size of the canvas that fits the image plus `padding` on every side.
pub fn padded_size(width: u32, height: u32, padding: u32) -> Result<(u32, u32), DomainError> {
    let too_large = || DomainError::CanvasTooLarge { width, height, padding };
    let border = padding.checked_mul(2).ok_or_else(too_large)?;
    let new_width = width.checked_add(border).ok_or_else(too_large)?;
    let new_height = height.checked_add(border).ok_or_else(too_large)?;
    Ok((new_width, new_height))
}

/// `floor(min(width, height) * percent)`. Always below half of the smaller side.
pub fn corner_radius_for(width: u32, height: u32, percent: CornerRadiusPercent) -> u32 {
    let size = width.min(height) as f64;
    (size * percent.value()).floor() as u32
}
