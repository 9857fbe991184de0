use std::collections::TryReserveError;

/// Failure modes of the reductions and the pair-query internals.
///
/// None of these escape as panics: the pair queries collapse every variant
/// into a `false` result at their boundary, and the reductions return it
/// directly so a failed sum is distinguishable from a sum of zero.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Storage for the hash table or one of its entries could not be obtained.
    #[error("hash table storage could not be allocated")]
    Alloc(#[from] TryReserveError),

    /// Accumulation exceeded the representable range of the accumulator.
    #[error("integer overflow during accumulation")]
    Overflow,

    /// The operation is undefined on an empty sequence.
    #[error("empty sequence")]
    EmptySequence,
}
