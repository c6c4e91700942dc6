//! # tweetrec - Engagement-Based Post Recommendation
//!
//! tweetrec serves k-nearest-neighbor recommendations over per-post
//! engagement features (like count, dislike count, engagement rate)
//! loaded once from PostgreSQL at startup. The fitted index is immutable
//! for the process lifetime and shared read-only across request workers;
//! a failed build degrades the service to an always-erroring state
//! instead of crashing.
//!
//! Distance is plain Euclidean over the raw, unscaled feature values.
//!
//! ## Example
//!
//! ```
//! use tweetrec::{KnnIndex, ModelState};
//!
//! let index = KnnIndex::fit(
//!     vec![1, 2, 3],
//!     vec![
//!         vec![10.0, 2.0, 0.8],
//!         vec![1.0, 9.0, 0.1],
//!         vec![5.0, 5.0, 0.5],
//!     ],
//!     2,
//! ).unwrap();
//!
//! let model = ModelState::Ready(index);
//! let ids = model.query(&[9.0, 2.0, 0.7]).unwrap();
//! assert_eq!(ids, vec![1, 3]); // nearest first
//! ```

pub mod vector;
pub mod server;
mod error;
mod index;
mod model;
mod store;

// Re-export the primary public API
pub use error::RecError;
pub use index::KnnIndex;
pub use model::{load_model, ModelState, DEFAULT_K};
pub use store::{fetch_post_features, FEATURE_DIM};
