//! Unit tests for the decoder internals.

mod byte_input;
mod prefixes;
