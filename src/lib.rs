//! # NewsWire - News Publishing Backend
//!
//! A small news-publishing service: users register, log in, and manage news
//! posts with optional image attachments kept in an S3-compatible object
//! store. Image cleanup is best-effort: direct deletes fall back to a delete
//! queue consumed by a separate worker.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Core business logic (entities, value objects, domain errors)
//! - **Application**: Use cases, the image lifecycle policy, and ports (interfaces)
//! - **Infrastructure**: Adapters for Postgres, object storage, and the delete queue
//! - **API**: HTTP handlers and middleware

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, image_lifecycle, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
