//! Core components of the `deskfeed` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The session facade [`DeskSession`] and its builder.
//! - The primary [`DeskError`] type.
//! - Shared data models like [`Fill`] and [`QuoteState`].
//! - The inbound wire records a gateway collaborator enqueues.

/// The primary error type (`DeskError`) for the crate.
pub mod error;
/// Shared data models used across multiple store modules.
pub mod models;
/// The session facade (`DeskSession`), builder, and default capacities.
pub mod session;
/// Inbound gateway records and the tagged [`GatewayEvent`] envelope.
pub mod wire;

// convenient re-exports so most code can just `use crate::core::DeskSession`
pub use error::DeskError;
pub use models::{AccountValue, Fill, Position, QuoteState, Side};
pub use session::{DeskSession, DeskSessionBuilder};
pub use wire::{GatewayEvent, RawAccountValue, RawFill, RawPosition, RawTick, parse_events};
