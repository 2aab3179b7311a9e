// Application Layer - Use Cases

pub mod evaluate;

pub use evaluate::{BuildFields, Evaluation};
