//! dashboard 固有のドメイン型と純粋関数（型と不変条件）

pub mod command;
pub mod escape;
pub mod location;
pub mod markdown;
pub mod model;
pub mod navigation;
pub mod render;
pub mod resource;
pub mod view_model;

pub use command::{Command, NavRequest};
pub use location::{DataLocation, OutputTarget};
pub use model::{Agent, AgentStatus, Documents, MemoryEntry, Project};
pub use navigation::{DetailTab, NavState, Section};
pub use resource::{LoadError, Resource};
pub use view_model::{LogEntry, ViewModel};
