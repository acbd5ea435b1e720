//! spinfade: a reducer-pattern demo for the terminal.
//!
//! A single picture is rotated and faded through four key-bound actions.
//! Each press dispatches an intent through an observable [`mvi::Store`],
//! a pure reducer derives the next [`transform::TransformState`], and the
//! next frame renders from the replaced value.

pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod picture;
pub mod transform;
pub mod ui;
