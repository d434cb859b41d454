//! Request dispatcher.
//!
//! Keep the public surface small: build a [`Dispatcher`] once at startup with
//! [`DispatcherBuilder`], then hand it a [`GenerationRequest`](crate::types::GenerationRequest)
//! per user action.

pub mod builder;
pub mod core;

pub use builder::DispatcherBuilder;
pub use core::Dispatcher;
