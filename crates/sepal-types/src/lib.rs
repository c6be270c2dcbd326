//! Foundation types for sepal.
//!
//! A blob in sepal has no assigned name: it is identified solely by the
//! lowercase-hex SHA-256 of its bytes. This crate holds the pieces every
//! other crate agrees on -- the [`BlobDescriptor`] record that listings and
//! upload responses are serialized from, and the key validators that decide
//! whether an object-store key looks like a blob at all.

pub mod blob;
pub mod key;

pub use blob::BlobDescriptor;
pub use key::{is_blob_key, is_hex, BLOB_KEY_LEN};
