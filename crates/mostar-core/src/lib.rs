pub mod builtin;
pub mod error;
pub mod fixtures;
pub mod forwarder;
pub mod health;
pub mod history;
pub mod registry;
pub mod routes;
pub mod script;
pub mod threat;
pub mod types;

pub use error::{MoScriptError, Result};
pub use registry::MoScriptRegistry;
pub use script::{InputBag, MoScript, Outcome, ScriptSummary};
