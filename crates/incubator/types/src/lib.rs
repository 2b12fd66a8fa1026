//! Incubator Domain Types
//!
//! Plain records for an incubator programme: startups, mentors, events,
//! resources and funding rounds, plus the [`Catalog`] that holds them.
//!
//! # Key Concepts
//!
//! - **Pool**: an allocatable capacity unit. A funding round's total amount
//!   or a resource's availability count. Both implement [`AllocationPool`].
//! - **Line item**: a single `{recipient, amount}` entry within a pool.
//!   The pool's allocated figure is always derived from its line items.
//! - **Over-allocation**: permitted, but surfaced as a warning state.
//!
//! # Architecture
//!
//! This is a pure types crate with no runtime behaviour beyond keeping
//! derived aggregates consistent. All records implement `Clone`, `Debug`,
//! `Serialize`, `Deserialize`. IDs use the newtype pattern and implement
//! `Display`, `generate()`, and `new()`.

#![deny(unsafe_code)]

mod allocation;
mod amount;
mod catalog;
mod errors;
mod event;
mod funding;
mod ids;
mod mentor;
mod resource;
mod role;
mod startup;

pub use allocation::*;
pub use amount::*;
pub use catalog::*;
pub use errors::*;
pub use event::*;
pub use funding::*;
pub use ids::*;
pub use mentor::*;
pub use resource::*;
pub use role::*;
pub use startup::*;
