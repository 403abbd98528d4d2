//! Core types and configuration for the aifeed aggregation pipeline.
//!
//! Holds the canonical [`Article`] record that every pipeline stage operates
//! on, and [`FeedConfig`], the environment-driven configuration that decides
//! which providers are enabled.

pub mod article;
pub mod config;

pub use article::Article;
pub use config::{ConfigError, FeedConfig};
