//! Unit tests for fragmentation and reassembly.
//!
//! Outbound splitting, inbound framing rules, and the round-trip property
//! live in separate files so each stays focused.

mod packetize_tests;
mod round_trip_tests;
