//! Cross-module tests for quicklaunch-core
//!
//! - Palette scenarios: filtering, paging and activation end to end
//! - Property checks for the selection invariants
//! - Desktop entry scanning against real directory trees
//! - Startup configuration failures

mod fixtures;
