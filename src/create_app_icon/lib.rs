//! Icon post-processing for desktop packaging.
//!
//! Two independent routines: [`application::icon_service::IconService::add_padding`]
//! surrounds an icon with a transparent border, and
//! [`application::icon_service::IconService::add_rounded_corners`] cuts its corners
//! with a rounded-rectangle alpha mask.

pub mod application;
pub mod domain;
pub mod infrastructure;
