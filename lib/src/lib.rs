//! Golf ball flight: club delivery in, trajectory, carry and shot shape out.
//!
//! The core is [`simulate`], a pure function with no retained state. Each
//! call returns a fresh [`ShotResult`]; callers that display shots keep
//! their own "current result" and replace it wholesale.

mod api;
mod config;
mod error;
mod flight;
mod model;
mod shape;
mod summary;
mod units;
mod vector;

pub use api::*;
pub use config::*;
pub use error::*;
pub use flight::*;
pub use model::*;
pub use shape::*;
pub use summary::*;
pub use units::*;
pub use vector::*;
