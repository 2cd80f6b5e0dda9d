//! An augmented AVL [`IntervalTree`] answering whether a query interval is
//! contained in any stored closed interval, and a [`spacing`] module using it
//! to classify codepoints and insert spaces between CJK and Latin text.
//!
//! ```
//! use cjkspace::{Interval, IntervalTree};
//!
//! let t = IntervalTree::build([(15, 20), (10, 30), (17, 19), (5, 20)])?;
//!
//! let hit = t.search(&Interval::new(18, 18)?).unwrap();
//! assert!(hit.contains_point(&18));
//!
//! assert_eq!(t.search_point(&50), None);
//! # Ok::<(), cjkspace::Error>(())
//! ```

mod dot;
mod error;
mod interval;
mod iter;
pub mod linear;
mod node;
pub mod spacing;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use interval::Interval;
pub use spacing::{add_spaces, Spacer};
pub use tree::IntervalTree;
