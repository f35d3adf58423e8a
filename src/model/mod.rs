//! # Chord Model
//!
//! Plain data shared by the catalog, the graph builder and the renderer.
//! These types cross every boundary: catalog ↔ graph ↔ layout ↔ render ↔ user.
//!
//! Design rule: no layout or rendering types here. This module is pure
//! data: no I/O, no state.

pub mod note;
pub mod chord;
pub mod color;
pub mod node;
pub mod edge;

pub use note::NoteSet;
pub use chord::{Chord, ChordType};
pub use color::{color_for, Color};
pub use node::{ChordNode, NodeId};
pub use edge::Edge;
