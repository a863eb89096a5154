//! Page assembly and link checking for nerka.
//!
//! This crate turns a resolved source document into a served page:
//!
//! ```text
//! Document ──render──► fragment ──PageAssembler──► header + title + body
//!          ──parse──► Node ──LinkAnnotator──► Node ──serialize──► html
//! ```
//!
//! - [`Site`]: resolves request paths to documents and runs the pipeline
//! - [`PageAssembler`]: prepends the shared `/.header` and a `<title>`
//! - [`LinkAnnotator`]: marks `<a>` elements whose target cannot be resolved
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use nerka_site::{Site, SiteConfig};
//! use nerka_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("docs")));
//! let site = Site::new(storage, SiteConfig::default());
//!
//! let document = site.resolve("/guide")?;
//! let page = site.render("/guide", &document)?;
//! println!("{} broken links", page.broken_links);
//! # Ok(())
//! # }
//! ```

mod error;
mod links;
mod page;
mod site;

pub use error::SiteError;
pub use links::{EXTERNAL_PREFIXES, LinkAnnotator};
pub use page::{HEADER_PATH, PageAssembler};
pub use site::{RenderedPage, Site, SiteConfig};
