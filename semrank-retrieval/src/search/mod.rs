//! One module per search mode, each adding its operation to
//! [`RetrievalPipeline`](crate::RetrievalPipeline).

pub mod cluster;
pub mod hybrid;
pub mod rag;
pub mod semantic;
pub mod temporal;
