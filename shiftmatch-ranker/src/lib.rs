//! Batch ranking of workers and shift patterns.
//!
//! [`Ranker`] wraps any [`Scorer`](shiftmatch_core::Scorer) and orders the
//! results of scoring many pairs. Ordering is deterministic: score
//! descending, then matched slots descending, then identifier ascending.
//! An optional [`RankerConfig::limit`] truncates the ordered list.
//!
//! The ranker holds no mutable state and performs no I/O, so a single
//! instance can be shared across threads.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod ranker;

pub use ranker::{Ranked, Ranker, RankerConfig};
