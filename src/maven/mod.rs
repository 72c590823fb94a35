//! Maven `settings.xml` access: a read-only XML lookup and a byte-level
//! in-place token substitution. The file is never re-serialized, so
//! formatting, comments and everything around the token survive untouched.

pub mod reader;
pub mod writer;
