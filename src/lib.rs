pub mod arrows;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod id;
pub mod labels;
pub mod plan;
pub mod properties;
pub mod text_metrics;
pub mod writer;

pub use config::{DiagramConfig, load_config};
pub use document::DiagramDocument;
pub use error::GenerateError;
pub use generate::{NodeInfo, generate_document};
pub use plan::PlanNode;
pub use writer::write_document;
