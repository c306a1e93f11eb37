//! Mudae domain core.
//!
//! Profile model, pricing table, box addressing, and the profile/offer
//! workflow. Storage and routing are reached through the [`store`] and
//! [`distance`] traits so the HTTP layer wires in concrete backends.

pub mod content;
pub mod distance;
pub mod error;
pub mod pricing;
pub mod profile;
pub mod service;
pub mod store;
pub mod types;
