//! Neural network integration.
//!
//! ## Overview
//!
//! - **Tensor**: `EncodedState`, a flat buffer plus its shape
//! - **Encoding**: `StateEncoder` trait and the `ObservationEncoder`
//!   board planes
//!
//! ## Usage
//!
//! ```
//! use cathedral_engine::core::PlayerId;
//! use cathedral_engine::nn::{ObservationEncoder, StateEncoder};
//! use cathedral_engine::rules::GameState;
//!
//! let state = GameState::new();
//! let encoded = ObservationEncoder::new().encode(&state, PlayerId::WHITE);
//! assert_eq!(encoded.shape, vec![17, 10, 10]);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{ObservationEncoder, StateEncoder, FREE_SQUARES_PLANE, NUM_PLANES, PROGRESS_PLANE, SIDE_PLANE};
pub use traits::EncodedState;
