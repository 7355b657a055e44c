mod component;
mod error;
mod layout;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::RadialGraphCanvas;
pub use error::GraphError;
pub use types::{GraphData, GraphEdge, GraphNode};
