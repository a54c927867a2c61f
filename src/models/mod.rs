//! Data models for the JDOM catalog admin application.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless
//! interoperability with the durable storage format.

mod common;
mod dataset;
mod license;
mod organization;
mod session;
mod theme;
mod user;
pub mod validation;

pub use common::*;
pub use dataset::*;
pub use license::*;
pub use organization::*;
pub use session::*;
pub use theme::*;
pub use user::*;
