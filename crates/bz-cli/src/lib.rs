//! Thin demonstration binary over `bz-io` and `bz-controller`.
//!
//! Not part of the algorithmic core: this crate only exists to glue
//! MineLib-style file parsing to the column-generation loop for a single
//! command-line invocation. Anything reusable belongs in `bz-io` or
//! `bz-controller`, not here.

pub mod cli;
