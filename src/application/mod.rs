pub mod dto;
pub mod image_lifecycle;
pub mod ports;
pub mod security;
pub mod use_cases;
