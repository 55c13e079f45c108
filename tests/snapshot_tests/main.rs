//! Tests for the snapshot layer
//!
//! - `reader_tests`: loading, missing files, corrupt files
//! - `writer_tests`: atomic replace, failure handling, file format
