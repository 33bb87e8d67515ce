//! # asc
//!
//! Decoding of Vector **ASC** trace lines into diagnostic records.
//! Use `asc::parse::from_file(...)` to create a `DiagLog`.
//! Each line runs through a fixed pipeline: tokenizer (`line`), identifier
//! normalizer (`id`), data-byte extractor (`data`), then the UDS classifier.

pub mod parse;

pub(crate) mod abs_time;
pub(crate) mod data;
pub(crate) mod id;
pub(crate) mod line;
