//! # numerand_core: Numeric Foundation for numerand
//!
//! ## Layer 1 (Foundation) Role
//!
//! numerand_core is the bottom layer of the workspace, providing:
//! - Decimal precision rounding (`math::precision`)
//! - Error types: `NumerandError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other numerand crates and only minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use numerand_core::math::precision::to_precision;
//!
//! assert_eq!(to_precision(3.141592_f64, 2), 3.14);
//! assert_eq!(to_precision(2.5_f64, 0), 3.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
