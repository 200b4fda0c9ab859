//! # bz-core: Bienstock–Zuckerberg Data Model
//!
//! Provides the fundamental data structures shared by the pricing, master,
//! and controller crates: dense block ids, the precedence DAG, the profit
//! vector, and the closure (column) type.
//!
//! ## Design Philosophy
//!
//! The precedence graph is a **dense-id CSR DAG** rather than a general
//! graph-crate type:
//! - Predecessor/successor iteration is a contiguous slice lookup
//! - No scripting-ecosystem graph dependency is pulled into the hot pricing path
//! - Type-safe ids ([`BlockId`], [`ColumnId`]) keep block indices and column
//!   indices from being confused at call sites
//!
//! ## Quick Start
//!
//! ```rust
//! use bz_core::{BlockId, PrecedenceDag, ProfitMap};
//!
//! let dag = PrecedenceDag::from_edges(
//!     3,
//!     [(BlockId::new(0), BlockId::new(1)), (BlockId::new(1), BlockId::new(2))],
//! ).unwrap();
//!
//! let mut profits = ProfitMap::zeros(3);
//! profits.set(BlockId::new(0), 5.0);
//! profits.set(BlockId::new(1), 6.0);
//! profits.set(BlockId::new(2), 7.0);
//!
//! assert_eq!(dag.roots().collect::<Vec<_>>(), vec![BlockId::new(0)]);
//! ```
//!
//! ## Modules
//!
//! - [`dag`] - the precedence DAG (CSR adjacency, roots, acyclicity check)
//! - [`profit`] - the dense profit vector
//! - [`closure`] - the closure/column type stored by the master problem
//! - [`error`] - the unified error type for the whole workspace

pub mod closure;
pub mod dag;
pub mod error;
pub mod ids;
pub mod profit;

pub use closure::Closure;
pub use dag::PrecedenceDag;
pub use error::{BzError, BzResult};
pub use ids::{BlockId, ColumnId};
pub use profit::ProfitMap;
