//! Shared fixtures for the acceptance lock tests.

#![forbid(unsafe_code)]
