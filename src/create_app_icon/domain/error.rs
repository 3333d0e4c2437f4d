use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid {name}: {value} (expected a value in {range})")]
    InvalidPercent {
        name: &'static str,
        value: f64,
        range: &'static str,
    },

    // パディング後のキャンバスが u32 に収まらない場合
    #[error("Padded canvas for {width}x{height} with {padding}px padding is too large")]
    CanvasTooLarge { width: u32, height: u32, padding: u32 },
}
