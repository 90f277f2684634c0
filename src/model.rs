//! Model and gate containers
//!
//! A [`Model`] is the top-level BLIF object: a name, global input and
//! output labels, the combinational gates, and any latch/clock lines
//! carried through verbatim. A [`Gate`] binds a cover to its variable
//! labels. Labels exist for printing only; they never participate in
//! cube or cover equality.

use crate::cover::{Cover, Minimizable};
use std::sync::Arc;

/// A single-output combinational gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    inputs: Vec<Arc<str>>,
    output: Arc<str>,
    cover: Cover,
}

impl Gate {
    /// Create a gate, checking that the cover arity matches the labels
    pub fn new(inputs: Vec<Arc<str>>, output: Arc<str>, cover: Cover) -> Self {
        assert_eq!(
            cover.arity(),
            inputs.len(),
            "cover arity does not match gate input labels"
        );
        Gate {
            inputs,
            output,
            cover,
        }
    }

    /// Input variable labels
    pub fn inputs(&self) -> &[Arc<str>] {
        &self.inputs
    }

    /// Output variable label
    pub fn output(&self) -> &Arc<str> {
        &self.output
    }

    /// The gate's cover
    pub fn cover(&self) -> &Cover {
        &self.cover
    }
}

impl Minimizable for Gate {
    fn minimize(&self) -> Self {
        Gate {
            inputs: self.inputs.clone(),
            output: Arc::clone(&self.output),
            cover: self.cover.minimize(),
        }
    }
}

/// A parsed BLIF model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    name: String,
    inputs: Vec<Arc<str>>,
    outputs: Vec<Arc<str>>,
    gates: Vec<Gate>,
    latches: Vec<Vec<String>>,
    clocks: Vec<Vec<String>>,
}

impl Model {
    /// Assemble a model from parts
    pub fn new(
        name: String,
        inputs: Vec<Arc<str>>,
        outputs: Vec<Arc<str>>,
        gates: Vec<Gate>,
        latches: Vec<Vec<String>>,
        clocks: Vec<Vec<String>>,
    ) -> Self {
        Model {
            name,
            inputs,
            outputs,
            gates,
            latches,
            clocks,
        }
    }

    /// Model name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Global input labels
    pub fn inputs(&self) -> &[Arc<str>] {
        &self.inputs
    }

    /// Global output labels
    pub fn outputs(&self) -> &[Arc<str>] {
        &self.outputs
    }

    /// The combinational gates, in declaration order
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Latch lines, stored as verbatim token lists
    pub fn latches(&self) -> &[Vec<String>] {
        &self.latches
    }

    /// Clock lines, stored as verbatim token lists
    pub fn clocks(&self) -> &[Vec<String>] {
        &self.clocks
    }
}

impl Minimizable for Model {
    fn minimize(&self) -> Self {
        Model {
            name: self.name.clone(),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            gates: self.gates.iter().map(Gate::minimize).collect(),
            latches: self.latches.clone(),
            clocks: self.clocks.clone(),
        }
    }
}
