//! Host-testable core: snapshot sampling, feature extraction and the two
//! pipelines' per-tick state. Nothing in here touches the DOM.

pub mod color;
pub mod config;
pub mod error;
pub mod features;
pub mod rose;
pub mod schedule;
pub mod snapshot;
pub mod sphere;

pub use color::*;
pub use config::*;
pub use error::*;
pub use features::*;
pub use rose::*;
pub use schedule::*;
pub use snapshot::*;
pub use sphere::*;
