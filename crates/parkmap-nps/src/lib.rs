pub mod client;
pub mod error;
pub mod pagination;
pub mod process;
mod retry;
pub mod types;
pub mod validate;

pub use client::NpsClient;
pub use error::{NpsError, ValidationError};
pub use process::{ProcessedSites, RejectedRecord, SiteProcessor};
pub use types::{RawPage, RawRecord};
pub use validate::validate_site;
