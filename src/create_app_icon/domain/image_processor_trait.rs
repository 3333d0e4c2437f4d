use crate::domain::image::ProcessedIcon;
use crate::domain::percentage::{CornerRadiusPercent, PaddingPercent};
use crate::infrastructure::error::InfrastructureError;

// エンコード済みのバイト列を受け取り、PNG にエンコードした結果を返す
#[cfg_attr(test, mockall::automock)]
pub trait IconProcessor {
    fn add_padding(
        &self,
        image_bytes: Vec<u8>,
        percent: PaddingPercent,
    ) -> Result<ProcessedIcon, InfrastructureError>;

    fn add_rounded_corners(
        &self,
        image_bytes: Vec<u8>,
        percent: CornerRadiusPercent,
    ) -> Result<ProcessedIcon, InfrastructureError>;
}
