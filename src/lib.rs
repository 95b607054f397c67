//! # Thermalkit
//!
//! Closed-form heat-transfer calculators with a request/response boundary
//! and report rendering.
//!
//! Three independent, stateless calculations are provided:
//!
//! - Rectangular fin performance with an adiabatic tip ([`models::fin`])
//! - Composite-wall series conduction ([`models::wall`])
//! - Heat-exchanger effectiveness via the NTU method ([`models::exchanger`])
//!
//! Each calculator is a pure function from validated inputs to a result
//! structure. There is no shared state, no persistence, and no iteration:
//! every output is a closed-form expression of the inputs, so each call
//! terminates unconditionally and concurrent calls need no synchronization.
//!
//! ## Crate layout
//!
//! - [`models`]: The calculators, each a [`twine_core::Model`] adapter over
//!   an internal computation core.
//! - [`support`]: Supporting utilities: typed numeric constraints, unit
//!   extensions, and the effectiveness-NTU toolkit.
//! - [`api`]: A transport-agnostic request/response boundary that parses
//!   JSON payloads, validates parameter ranges, invokes the calculators,
//!   and maps degenerate configurations to status-coded failures.
//! - [`report`]: Renders labeled input/output pairs into a paginated,
//!   byte-serialized report document.
//!
//! Physical quantities use [`uom`] throughout. Raw `f64` values appear only
//! at the JSON boundary and inside transcendental math, where they are
//! extracted from and re-wrapped into typed quantities.

pub mod api;
pub mod models;
pub mod report;
pub mod support;
