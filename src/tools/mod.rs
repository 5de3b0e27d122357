//! Tool capability registry
//!
//! The orchestrator only ever executes tools that live in a registry it
//! controls, and each entry is responsible for validating its argument
//! payload before any evaluation happens. The responder's instructions name
//! a tool; they never carry code to run.

pub mod calculator;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::types::tool::ToolSpec;
use crate::Result;

pub use calculator::Calculator;

/// A named capability the orchestrator can execute on the responder's
/// request.
///
/// `invoke` receives already-parsed JSON arguments and must reject anything
/// outside its contract with [`crate::Error::Evaluation`] — without partial
/// side effects.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema for the expected arguments, advertised to the responder.
    fn parameters(&self) -> Value;

    async fn invoke(&self, arguments: Value) -> Result<Value>;
}

/// Ordered collection of tools, looked up by name.
///
/// Registration order matters: the responder's protocol invokes the first
/// declared tool, and [`ToolRegistry::specs`] declares them in the order
/// they were registered.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// Declarations to attach to an outgoing request.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools
            .iter()
            .map(|t| {
                ToolSpec::new(t.name(), t.description()).with_parameters(t.parameters())
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
