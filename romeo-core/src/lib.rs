//! Core library for the Romeo delimited substitution codec.
//!
//! Every supported character maps to a 2 or 3 digit token; an encoded
//! message is those tokens joined with commas. The codec is pure. Storage,
//! logging setup and reporting live in their own modules for the CLI to wire
//! together.
//!
//! ## Usage Example
//!
//! ```rust
//! use romeo_core::{Codec, CoreResult};
//!
//! fn main() -> CoreResult<()> {
//!     let codec = Codec::standard()?;
//!
//!     let encoded = codec.encode("Hi!")?;
//!     assert_eq!(encoded, "43,30,104");
//!     assert_eq!(codec.decode(&encoded)?, "Hi!");
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod file_logging;
pub mod logging;
pub mod reporting;
pub mod storage;
pub mod table;

// Re-exports for public API
pub use codec::{Codec, decode, encode};
pub use config::{CoreConfig, DELIMITER};
pub use error::{CodecError, CoreError, CoreResult, TableIntegrityError};
pub use logging::Payload;
pub use storage::{FileMessageStore, MemoryMessageStore, MessageStore};
pub use table::CodeTable;
