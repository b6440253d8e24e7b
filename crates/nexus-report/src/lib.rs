//! Nexus Report - catalog, requests, and generation dispatch
//!
//! Everything downstream of the wizard:
//! - The fixed catalog of user types, tiers, and add-on options
//! - The immutable [`ReportRequest`] built once per submission
//! - The [`ReportGenerator`] seam for the text-producing collaborator
//! - [`ReportDispatcher`], which keeps one submission in flight at a time
//!
//! # Example
//!
//! ```rust,ignore
//! use nexus_report::{BriefingGenerator, ReportDispatcher, ReportDraft, ReportRequest, Tier};
//! use std::sync::Arc;
//!
//! let request = ReportRequest::try_from(ReportDraft {
//!     tier: Some(Tier::EconomicSnapshot),
//!     ..ReportDraft::default()
//! })?;
//! let dispatcher = ReportDispatcher::new(Arc::new(BriefingGenerator));
//! let stream = dispatcher.dispatch(request)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod generator;
pub mod request;

// Re-exports for convenience
pub use catalog::{ReportOption, Tier, TierFamily, UserType};
pub use dispatch::ReportDispatcher;
pub use error::{ParseCatalogError, ReportError};
pub use generator::{BriefingGenerator, ReportChunk, ReportGenerator, ReportStream};
pub use request::{ReportDraft, ReportRequest};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
