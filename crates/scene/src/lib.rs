//! Retained scene graph for the Orbitfolio sections.
//!
//! Each section owns a [`Composer`]: an arena of interactive node entities
//! plus the single piece of cross-node state (which node is selected, which
//! is hovered). Nodes are spawned from content records at mount, advanced by
//! one order-insensitive update pass per frame, and hit-tested with
//! closest-hit ray picking. Shared decoration (star fields, connection
//! lines, grid floors, helix strands) lives in [`decor`].

pub mod composer;
pub mod counters;
pub mod decor;
pub mod node;
pub mod pick;

pub use composer::*;
pub use counters::*;
pub use decor::*;
pub use node::*;
pub use pick::*;
