//! Environment mutation model.
//!
//! Decision logic computes mutations as plain data; only the boundary
//! applier in qtup-env ever touches the process or runner environment.

/// How a mutation is applied to the build environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvOp {
    /// Overwrite (or create) the variable with the value
    Set,
    /// Append the value to the variable, colon-separated; set when unset
    AppendColon,
    /// Put the value at the front of the executable search path
    PrependPath,
}

/// A single computed environment mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvMutation {
    /// Variable name
    pub name: String,
    /// Application semantics
    pub op: EnvOp,
    /// Value to set, append, or prepend
    pub value: String,
}

impl EnvMutation {
    /// A plain variable assignment
    pub fn set(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op: EnvOp::Set,
            value: value.into(),
        }
    }

    /// A colon-separated append (set when currently unset)
    pub fn append_colon(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op: EnvOp::AppendColon,
            value: value.into(),
        }
    }

    /// A PATH prepend
    pub fn prepend_path(value: impl Into<String>) -> Self {
        Self {
            name: "PATH".to_string(),
            op: EnvOp::PrependPath,
            value: value.into(),
        }
    }
}
