//! Tests for the aggregator surface.

mod articles;
