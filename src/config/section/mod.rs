//! Configuration section definitions.
//!
//! Each module corresponds to a section in `slugfeed.toml`:
//!
//! | Module     | TOML Section   | Purpose                         |
//! |------------|----------------|---------------------------------|
//! | `build`    | `[build]`      | Content and output paths        |
//! | `redirect` | `[redirects]`  | Legacy URL redirects            |
//! | `site`     | `[site]`       | Site info and feed settings     |

mod build;
mod redirect;
pub mod site;

pub use build::BuildSectionConfig;
pub use redirect::{DEFAULT_STATUS, RedirectTarget, RedirectsConfig};
pub use site::{FeedConfig, FeedFormat, SiteInfoConfig, SiteSectionConfig};
