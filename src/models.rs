//! Public calculator models.
//!
//! Models are the primary public interface of this crate. Each calculator
//! lives in its own module and contains an internal `core` submodule where
//! the actual computation and edge-case policy live. The
//! [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model-specific core API; the typed input and result structures are
//! re-exported at the model level.
//!
//! The three calculators are independent: none reads shared state, none
//! calls another, and each owns its inputs and outputs exclusively. The
//! request/response boundary in [`crate::api`] invokes them with
//! pre-validated inputs.

pub mod exchanger;
pub mod fin;
pub mod wall;
