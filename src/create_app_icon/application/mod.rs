pub mod config;
pub mod error;
pub mod icon_service;
