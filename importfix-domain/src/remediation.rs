use importfix_types::{DepsAttribute, TargetContext};
use std::fmt;

/// Build-file editor named at the start of every command.
pub const DEFAULT_EDIT_TOOL: &str = "buildozer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Add,
    Remove,
}

impl EditOp {
    pub fn as_str(self) -> &'static str {
        match self {
            EditOp::Add => "add",
            EditOp::Remove => "remove",
        }
    }
}

/// One build-file edit, printed as `<tool> '<op> <attribute> <identifier>' <label>`.
///
/// importfix never runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationCommand {
    pub tool: String,
    pub op: EditOp,
    pub attribute: DepsAttribute,
    pub identifier: String,
    pub label: String,
}

impl RemediationCommand {
    pub fn for_target(
        tool: &str,
        op: EditOp,
        ctx: &TargetContext,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.to_string(),
            op,
            attribute: ctx.attribute,
            identifier: identifier.into(),
            label: ctx.label.clone(),
        }
    }
}

impl fmt::Display for RemediationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{} {} {}' {}",
            self.tool,
            self.op.as_str(),
            self.attribute,
            self.identifier,
            self.label
        )
    }
}
