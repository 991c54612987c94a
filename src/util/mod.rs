//! Utility functions shared by the UI layer.
//!
//! - **URL validation**: checks applied before opening shop websites
//! - **Text processing**: Unicode-aware width calculation, truncation and
//!   control-character stripping for catalog text
//!
//! ```
//! use cityguide::util::{display_width, truncate_to_width};
//!
//! assert_eq!(display_width("Café"), 4);
//! assert_eq!(truncate_to_width("Modern Downtown Apartment", 12), "Modern Do...");
//! ```

mod text;
mod url_validator;

pub use text::{display_width, sanitize, truncate_to_width};
pub use url_validator::{validate_url_for_open, website_url, UrlValidationError};

/// Maximum length of any text field typed into the UI.
pub const MAX_INPUT_LENGTH: usize = 256;
