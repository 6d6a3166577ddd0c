//! Comprehensive tests for the takeoff task environment.
//!
//! ## Organization
//!
//! - `stubs`: deterministic stand-in simulators
//! - `environment_tests`: reset/step contract and configuration surface
//! - `reward_tests`: reward formula, threshold and monotonicity
//! - `termination_tests`: sub-step loop and `done` semantics
//! - `pool_tests`: batched stepping across independent tasks


pub mod termination_tests;
