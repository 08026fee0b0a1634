//! Content records for the portfolio.
//!
//! Every record derives `Deserialize` so the whole store can be loaded from a
//! content file, and `Serialize` so it can be dumped back out.

pub mod email;
pub mod icon;
pub mod link;
pub mod profile;
pub mod project;
pub mod sections;
pub mod skills;

pub use email::Email;
pub use icon::{Glyph, Icon};
pub use link::{PLACEHOLDER_HREF, is_placeholder, usable_href};
pub use profile::Profile;
pub use project::{Project, ProjectLinks};
pub use sections::{About, Contact, Footer, Hero, Stat};
pub use skills::{SkillCategory, Skills};
