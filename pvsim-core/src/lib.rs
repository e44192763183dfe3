//! Core building blocks for pvsim.
//!
//! This crate provides the [`Component`] trait implemented by every model in
//! `pvsim-components`, and the [`constraint`] module used to carry validated
//! numeric invariants through model APIs.

mod component;
pub mod constraint;

pub use component::Component;
