//! Scalar abstraction for the dense engine
//!
//! [`RealScalar`] bundles the numeric capabilities every kernel and solver
//! relies on. The engine is specified over real arithmetic, so unlike a
//! complex-capable field trait there is no conjugation; `f64` is the default
//! working type and `f32` is supported for memory-constrained callers.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types usable in dense linear algebra operations.
///
/// `Send + Sync` keeps matrices and vectors movable across threads; the
/// engine itself never shares storage between instances.
pub trait RealScalar:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Send + Sync + 'static
{
}

impl RealScalar for f64 {}
impl RealScalar for f32 {}
