//! Growable cursor-tracked byte buffer for building binary wire formats.
//!
//! This crate provides [`ByteBuffer`]: a contiguous, growable byte region
//! with independent read and write cursors, fixed-width numeric
//! encode/decode in either byte order, raw byte runs, and text strings —
//! with both append-style writes and mid-buffer insertions. It targets
//! callers assembling wire formats, file formats, or IPC payloads who
//! need precise byte layout without manual offset bookkeeping.
//!
//! # Relative and positional operations
//!
//! Relative operations use the cursors and advance them; `_at` variants
//! take an explicit offset. A positional read never moves the read
//! cursor. A positional write still pushes the write cursor forward to
//! the furthest byte written so far, so the cursor always answers "how
//! much has been written", not "where the last write landed".
//!
//! ```
//! use wirebuf_buffer::{ByteBuffer, ByteOrder};
//!
//! let mut buf = ByteBuffer::new();
//! buf.write_num(0xDEADu16, ByteOrder::Big);
//! buf.write_num(0xBEEFu16, ByteOrder::Big);
//!
//! // Patch the first field without disturbing the cursor
//! buf.write_num_at(0xF00Du16, 0, ByteOrder::Big);
//! assert_eq!(buf.write_offset(), 4);
//!
//! assert_eq!(buf.read_num::<u16>(ByteOrder::Big).unwrap(), 0xF00D);
//! assert_eq!(buf.read_num::<u16>(ByteOrder::Big).unwrap(), 0xBEEF);
//! ```
//!
//! # Insertion
//!
//! Inserts splice bytes into the middle of the live region, shifting the
//! tail rightward and growing the logical length:
//!
//! ```
//! use wirebuf_buffer::ByteBuffer;
//!
//! let mut buf = ByteBuffer::from_slice(b"hello world");
//! buf.insert_bytes(b"dear ", 6).unwrap();
//! assert_eq!(buf.as_slice(), b"hello dear world");
//! ```
//!
//! # Strings
//!
//! String operations resolve a text encoding (an explicit `_as` argument,
//! else the buffer's default) and delegate to the byte-run paths. The
//! supported set lives in [`wirebuf_encoding`] and is re-exported here:
//!
//! ```
//! use wirebuf_buffer::{ByteBuffer, Encoding};
//!
//! let mut buf = ByteBuffer::new();
//! buf.write_string_nt("hello").unwrap();
//! buf.write_string_as("cafe", Encoding::Hex).unwrap();
//!
//! assert_eq!(buf.read_string_nt(), "hello");
//! assert_eq!(buf.read_string_all_as(Encoding::Hex), "cafe");
//! ```
//!
//! # Concurrency
//!
//! `ByteBuffer` is plain single-owner mutable state: every operation is
//! synchronous and in-memory. Callers sharing one buffer across threads
//! must serialize access themselves.

mod byte_buffer;
mod error;
mod fixed;
mod store;

pub use byte_buffer::{BufferOptions, ByteBuffer, DEFAULT_CAPACITY};
pub use error::BufferError;
pub use fixed::{ByteOrder, Fixed};
pub use wirebuf_encoding::{Encoding, EncodingError};
