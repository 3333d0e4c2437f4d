pub mod error;
pub mod file_storage_trait;
pub mod geometry;
pub mod image;
pub mod image_processor_trait;
pub mod percentage;
