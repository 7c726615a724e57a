// Library surface for the generator bins and the test suite.

pub mod chart;
pub mod config;
pub mod format;
pub mod libraries;
pub mod logging;
pub mod models;
pub mod semver;
pub mod store;
pub mod svg;
pub mod timeline;
pub mod version;
pub mod view;
