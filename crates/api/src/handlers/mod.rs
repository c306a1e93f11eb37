pub mod content;
pub mod offer;
pub mod profile;
