//! Static content loading.
//!
//! Two data sources feed the renderers:
//! - [`store::ContentStore`]: article metadata scanned from the markdown
//!   tree under `content/articles/`
//! - [`site::SiteData`]: the site profile parsed from `site.toml`
//!
//! Both are loaded once at the start of a build and never mutated.

pub mod article;
pub mod site;
pub mod store;

pub use article::{Article, UNORDERED};
pub use site::SiteData;
pub use store::ContentStore;
