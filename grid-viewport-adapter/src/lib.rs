//! Adapter utilities for the `grid-viewport` crate.
//!
//! The `grid-viewport` crate is made of pure functions: every call needs the previous scroll
//! offset to classify the scroll direction. This crate provides a small, framework-neutral
//! [`ScrollTracker`] that keeps that state for a UI adapter:
//!
//! - the last reported scroll offset and the latest window
//! - recomputation on resize and geometry changes
//! - adapter-driven `is_scrolling` debouncing
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod tracker;


pub use tracker::ScrollTracker;
