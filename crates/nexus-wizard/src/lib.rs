//! Nexus Wizard - five-step report configuration
//!
//! Guides a user through Profile → Scope → Tier → Options → Finalize and
//! produces a single [`nexus_report::ReportRequest`].
//!
//! # Architecture
//!
//! ```text
//! WizardSession ── spawns lookups, dispatches reports
//!     │
//!     └── WizardController ── step machine + dependent fields
//!             ├── WizardState
//!             ├── RegionalLookupResolver (nexus-lookup)
//!             └── assemble() → ReportRequest (nexus-report)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use nexus_wizard::{WizardConfig, WizardSession};
//! use nexus_report::{BriefingGenerator, Tier};
//!
//! let mut session = WizardSession::new(&WizardConfig::default(), places, Arc::new(BriefingGenerator));
//! session.settle_lookups().await;
//! session.controller_mut().select_tier(Tier::EconomicSnapshot);
//! session.controller_mut().advance_step()?;
//! session.controller_mut().set_objective("Find a solar partner");
//! let submission = session.submit()?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod assembler;
pub mod config;
pub mod controller;
pub mod error;
pub mod options;
pub mod session;
pub mod state;
pub mod step;

// Re-exports for convenience
pub use assembler::{assemble, format_region, resolve_industry, resolve_key_technologies};
pub use config::WizardConfig;
pub use controller::WizardController;
pub use error::WizardError;
pub use session::{Submission, WizardSession};
pub use state::{FinalizeFields, ProfileFields, ScopeFields, WizardState};
pub use step::{allowed_transitions, validate_advance, Step, StepProgress};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
