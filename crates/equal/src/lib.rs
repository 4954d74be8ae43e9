//! arbiter-equal — strict recursive deep equality for [`arbiter_value::Value`].
//!
//! Provides [`deep_equal`], the single equality authority of the assertion
//! layer: non-coercive, kind-directed, and deliberately asymmetric for
//! list-shaped operands.

mod deep_equal;

pub use deep_equal::deep_equal;
