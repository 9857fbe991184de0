//! Pair-relation queries and overflow-safe reductions over integer
//! sequences.
//!
//! The core answers "do two distinct positions of this slice satisfy
//! sum/product/difference == target" in O(n) average time using a chained
//! hash table built per call ([`table::CountingSet`]), and reduces
//! sequences with explicit overflow detection ([`reduce`]). Around it sit
//! the collaborators a small console front end needs: sequence helpers
//! ([`seq`]), fallible parsing ([`text`]), prompt/retry loops ([`prompt`]),
//! and explicit randomness/timing handles ([`util`]).
//!
//! Every fallible path resolves at its own call boundary: reductions return
//! [`Result`], pair queries return a definite `bool`, and nothing panics on
//! library paths.

pub mod error;
pub mod pairs;
pub mod prompt;
pub mod reduce;
pub mod seq;
pub mod table;
pub mod text;
pub mod util;

pub use error::Error;
pub use pairs::{has_pair_difference, has_pair_product, has_pair_sum};
pub use reduce::{average, max, min, sum};
pub use table::CountingSet;
pub use util::{RandomProvider, Stopwatch};
