//! HTML fragment rendering.
//!
//! Every renderer here is a pure function from a data slice to an HTML
//! fragment string. The single effectful step - writing a fragment into
//! a page shell container - lives in [`page::inject`], so each view can
//! be tested without touching a page.

pub mod article;
pub mod blog;
pub mod page;
pub mod sections;
