//! Catalog ranking.
//!
//! Orders a catalog for presentation so the caller's own zone is offered
//! first, then zones in the caller's region, then everything else:
//!
//! ```text
//! {exact zone match} > {region substring match} > {everything else}
//! ```
//!
//! Catalog order is kept inside each tier. This is a stable partition, not
//! a sort: nothing is compared alphabetically.
//!
//! ## Example
//!
//! ```
//! use tz_picker::core::TimezoneId;
//! use tz_picker::ranking::rank;
//!
//! let catalog: Vec<TimezoneId> = ["Africa/Cairo", "America/New_York", "America/Chicago"]
//!     .into_iter()
//!     .map(TimezoneId::from)
//!     .collect();
//!
//! let ranked = rank(&catalog, Some("America/Chicago"), Some("America"));
//! assert_eq!(ranked, ["America/Chicago", "America/New_York", "Africa/Cairo"]);
//! ```

mod cache;
mod ranker;

pub use cache::RankCache;
pub use ranker::{rank, rank_detected, Tier};
