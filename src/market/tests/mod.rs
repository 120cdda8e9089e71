//! Unit tests for the market module.
