//! StaticGate: a gate with a fixed verdict.

use crate::error::GateError;
use crate::gate::{GateContext, GateVerdict, TipGate};
use async_trait::async_trait;

/// Gate double that returns the same verdict on every evaluation.
pub struct StaticGate {
    verdict: GateVerdict,
}

impl StaticGate {
    /// Create a gate that always returns `verdict`.
    pub fn new(verdict: GateVerdict) -> Self {
        Self { verdict }
    }
}

#[async_trait]
impl TipGate for StaticGate {
    async fn evaluate(&self, _ctx: &mut GateContext<'_>) -> Result<GateVerdict, GateError> {
        Ok(self.verdict)
    }
}
