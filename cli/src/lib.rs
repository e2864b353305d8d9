//! Host side of the slide poster: the network transport and logging setup.
//!
//! `slide_core` decides what to send and what to print; this crate owns the
//! socket.

pub mod telemetry;
pub mod transport;

pub use transport::UreqTransport;
