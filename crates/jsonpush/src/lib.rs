//! Incremental, push-driven JSON parsing.
//!
//! [`PushParser`] consumes JSON as an arbitrary sequence of byte chunks and
//! reports structure to a caller-supplied [`Sink`] as it is recognised:
//! container boundaries, member names, scalar values, and a terminal error if
//! the input is malformed. The parser never builds a document tree and never
//! copies token bytes — string and name payloads are handed to the sink as
//! slices of the chunk currently being fed, split into fragments when a token
//! straddles a chunk boundary.
//!
//! # Examples
//!
//! ```rust
//! use jsonpush::{Event, EventLog, PushParser};
//!
//! let mut parser = PushParser::new(EventLog::new());
//! assert!(parser.feed(br#"{"temp":-3.5e1}"#));
//! assert_eq!(
//!     parser.into_sink().into_events(),
//!     vec![
//!         Event::ObjectStart,
//!         Event::Name(b"temp".to_vec()),
//!         Event::Float(-35.0),
//!         Event::ObjectEnd,
//!     ]
//! );
//! ```
//!
//! Pure validation needs no sink at all:
//!
//! ```rust
//! use jsonpush::PushParser;
//!
//! let mut parser = PushParser::validator();
//! assert!(parser.feed(b"[1, 2"));
//! assert!(parser.feed(b", 3]"));
//! ```
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
mod error;
mod literal;
mod number;
mod options;
mod parser;
mod record;
mod sink;

pub use error::ErrorKind;
pub use options::{NumberOverflow, ParserOptions};
pub use parser::PushParser;
pub use record::{Event, EventLog};
pub use sink::{NoopSink, Sink};
