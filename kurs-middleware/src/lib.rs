//! kurs-middleware
//!
//! Wrappers that sit between the site clients and the page sources.

mod builder;
mod cache;

pub use crate::builder::SourceBuilder;
pub use crate::cache::CachedSource;
