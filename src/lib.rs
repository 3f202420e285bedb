//! Threshold-gated, colorized console and file logging.
//!
//! ```no_run
//! use tierlog::Logger;
//!
//! let mut log = Logger::new(3);
//! log.warn("disk almost full", 2);
//! log.debug("too chatty", 5); // suppressed
//! log.log("written to disk", "app.log", 1);
//! ```

pub mod color;
mod error;
mod logger;

pub use color::Severity;
pub use error::FatalError;
pub use logger::Logger;
