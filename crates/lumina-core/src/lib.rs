pub mod config;
pub mod content;
pub mod error;
pub mod site;
pub mod types;

pub use config::{LuminaConfig, SubmitPolicy};
pub use content::catalog;
pub use error::{LuminaError, Result};
pub use site::{Locale, SiteState};
pub use types::*;
