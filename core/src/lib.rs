//! # ScanForge Core
//!
//! Core crate for the ScanForge surface-capture exporter: converts captured
//! mesh fragments (local-frame vertices + local→world transforms) into a
//! single portable triangle-mesh file.

pub mod export;
pub mod material;
pub mod math;
pub mod mesh;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the crate version at startup.
pub fn init() {
    log::info!("ScanForge Core v{} initialized", VERSION);
}
