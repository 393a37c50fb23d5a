//! # densemat
//!
//! A small dense matrix of `f64` values with runtime dimensions, value
//! semantics, and a fixed arithmetic contract. no-std compatible (needs
//! `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use densemat::Matrix;
//!
//! let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
//! let b = Matrix::from([[5.0, 6.0], [7.0, 8.0]]);
//!
//! assert_eq!(&a + &b, Matrix::from([[6.0, 8.0], [10.0, 12.0]]));
//! assert_eq!(&a * &b, Matrix::from([[19.0, 22.0], [43.0, 50.0]]));
//! assert_eq!(&a * 2.0, Matrix::from([[2.0, 4.0], [6.0, 8.0]]));
//! ```
//!
//! ## Contract
//!
//! - Storage is a single row-major `Vec<f64>`, exclusively owned. Cloning is a
//!   deep copy; [`Matrix::take`] hands the buffer off and leaves the source
//!   empty (`0x0`).
//! - A matrix with zero rows or zero columns has no storage. The sized
//!   constructor accepts such dimensions without complaint.
//! - Equality is tolerance based: same shape and every element pair within
//!   [`EPSILON`].
//! - Shape preconditions (`+`, `-`, `*`, element access) are programmer
//!   errors and panic before anything is written. The `checked_*` / `try_*`
//!   methods return [`DimensionMismatch`] instead.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | [`Matrix::print`], `std::error::Error` for [`DimensionMismatch`], hardware float via std |
//! | `libm`  | baseline | Pure-Rust software float fallback for no-std targets |
//!
//! Without `std` the crate is `#![no_std]` and uses the `libm` backend of
//! `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod matrix;

pub use matrix::{DimensionMismatch, Matrix, EPSILON};
