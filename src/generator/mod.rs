//! Feed generation from the article store.

pub mod rss;
