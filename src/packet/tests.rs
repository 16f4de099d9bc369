//! Unit tests for the packet wire format.
//!
//! Header bit-packing and whole-packet codec tests live in separate files so
//! each stays short and easy to navigate.

mod header_tests;
