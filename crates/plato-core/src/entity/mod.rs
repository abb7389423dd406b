pub mod input;
pub mod tools;

pub use input::{HeldDirections, InputState};
pub use tools::{ClearTool, InteractTool, PlaceTool, Tool};
