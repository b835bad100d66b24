//! Sequin - a growable sequence over copy-on-write shared storage.
//!
//! # Quick Start
//!
//! ```
//! use sequin::seq::Seq;
//!
//! // Three zeroed slots.
//! let mut seq: Seq<i64> = Seq::filled(3, 0);
//!
//! // Walk one step in, then insert.
//! let mut cursor = seq.begin();
//! cursor.advance(&seq).unwrap();
//! seq.insert(cursor, 9).unwrap();
//! assert_eq!(seq.as_slice(), &[0, 9, 0, 0]);
//!
//! // Erase the head.
//! seq.erase(seq.begin()).unwrap();
//! assert_eq!(seq.as_slice(), &[9, 0, 0]);
//! ```

pub mod buffer;
pub mod cursor;
pub mod seq;

pub use cursor::Cursor;
pub use seq::Seq;
pub use seq::SeqError;
