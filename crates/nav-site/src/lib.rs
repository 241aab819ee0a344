//! Navigation tree resolution for documentation sites.
//!
//! This crate turns a validated [`NavigationDeclaration`](nav_config::NavigationDeclaration)
//! and a scanned [`ContentIndex`](nav_content::ContentIndex) into the site's
//! navigation:
//! - [`resolve`]: sidebar tree with autogenerate directives expanded and
//!   every link checked against the content index
//! - [`sequence`]: pages in reading order with previous/next links and
//!   breadcrumbs
//! - [`Site`]: both of the above plus site metadata, ready to serialize
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use nav_config::Config;
//! use nav_content::ContentIndex;
//! use nav_site::Site;
//!
//! let config = Config::load(Some(Path::new("nav.toml")), None)?;
//! let declaration = config.navigation()?;
//! let index = ContentIndex::scan(&config.content_resolved.source_dir)?;
//! let site = Site::build(&declaration, &index)?;
//!
//! for page in site.pages() {
//!     println!("{} -> {:?}", page.slug, page.next.as_ref().map(|n| &n.slug));
//! }
//! # Ok(())
//! # }
//! ```

mod expand;
mod node;
mod resolve;
mod sequence;
mod site;

pub use expand::{ExpandError, expand};
pub use node::ResolvedNode;
pub use resolve::{Resolution, ResolveError, ResolveWarning, resolve};
pub use sequence::{PageLink, SequencedPage, sequence};
pub use site::Site;
