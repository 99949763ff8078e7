//! Workflow orchestration for Herald

mod progress;
mod publish;

pub use progress::*;
pub use publish::*;
