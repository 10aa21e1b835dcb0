//! Compile ICU/Java `DecimalFormat` display patterns and render numbers
//! through them.
//!
//! A pattern like `"#,##0.00"` is compiled once into a
//! [`PatternDescriptor`]; a [`DecimalFormat`] holds that descriptor and
//! renders `f64` values against a caller-supplied
//! [`DecimalFormatSymbols`] table.
//!
//! ```
//! use decimal_format::{DecimalFormat, DecimalFormatSymbols};
//!
//! let formatter = DecimalFormat::new("#,##0.00").unwrap();
//! let symbols = DecimalFormatSymbols {
//!     decimal_separator: ".".to_string(),
//!     grouping_separator: ",".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(formatter.format(1234.5, &symbols).unwrap(), "1,234.50");
//! assert_eq!(formatter.format(-1234.5, &symbols).unwrap(), "-1,234.50");
//! ```

pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

pub use error::{FormatError, PatternError};
pub use formatter::DecimalFormat;
pub use parser::parse_pattern;
pub use types::*;
