pub mod edge;
pub mod error;
pub mod export;
pub mod graph;
pub mod kind;
pub mod lookup;
pub mod vertex;

// Re-export commonly used types
pub use edge::{EdgeRecord, EdgeSpec};
pub use error::GraphError;
pub use graph::Graph;
pub use kind::{Direction, GraphKind};
pub use lookup::VertexLookup;
pub use vertex::{Incidence, Vertex, VertexSpec};
