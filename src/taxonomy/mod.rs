//! Static ribbon-dance reference tables and the text renderer shared by the tools.

pub mod node;
pub mod rules;
pub mod styles;
pub mod vocabulary;

pub use node::{Node, render_section};
pub use vocabulary::Section;
