//! Demo script grammar.
//!
//! A demo script is a comma-separated list of steps, each
//! `dockable[:widget[=value]]`. The dialog consuming the generated data blinks
//! the dockable (and widget) of each step in turn, optionally setting the
//! widget to `value`.

use std::fmt;
use thiserror::Error;

/// Prefix shared by every dockable identifier.
pub const DOCKABLE_PREFIX: &str = "gimp-";

/// Dockable holding the tool buttons.
pub const TOOLBOX_DOCKABLE: &str = "gimp-toolbox";

/// Prefix shared by every tool button identifier in the toolbox.
pub const TOOL_PREFIX: &str = "tools-";

/// A problem found while parsing a demo script.
///
/// Step indices are zero-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoIssue {
    #[error("demo script is empty")]
    EmptyScript,

    #[error("step {0} is empty")]
    EmptyStep(usize),

    #[error("step {0} has no dockable identifier")]
    EmptyDockable(usize),

    #[error("step {0} has an empty widget identifier after ':'")]
    EmptyWidget(usize),

    #[error("step {0} has an empty setting value after '='")]
    EmptyValue(usize),
}

/// One step of a demo script, with identifiers in their full form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoStep {
    /// Dockable identifier, always starting with `gimp-`.
    pub dockable: String,
    /// Widget inside the dockable. Tool buttons always start with `tools-`.
    pub widget: Option<String>,
    /// Setting applied to the widget.
    pub value: Option<String>,
}

impl DemoStep {
    /// Parse a single step and expand the short identifier forms.
    pub fn parse(step: &str, index: usize) -> Result<Self, DemoIssue> {
        let step = step.trim();
        if step.is_empty() {
            return Err(DemoIssue::EmptyStep(index));
        }

        let (dockable, target) = match step.split_once(':') {
            Some((dockable, target)) => (dockable.trim(), Some(target)),
            None => (step, None),
        };
        if dockable.is_empty() {
            return Err(DemoIssue::EmptyDockable(index));
        }

        let (widget, value) = match target {
            None => (None, None),
            Some(target) => {
                let (widget, value) = match target.split_once('=') {
                    Some((widget, value)) => (widget.trim(), Some(value)),
                    None => (target.trim(), None),
                };
                if widget.is_empty() {
                    return Err(DemoIssue::EmptyWidget(index));
                }
                if value.is_some_and(str::is_empty) {
                    return Err(DemoIssue::EmptyValue(index));
                }
                (Some(widget), value.map(str::to_string))
            }
        };

        let dockable = with_prefix(dockable, DOCKABLE_PREFIX);
        let widget = widget.map(|widget| {
            if dockable == TOOLBOX_DOCKABLE {
                with_prefix(widget, TOOL_PREFIX)
            } else {
                widget.to_string()
            }
        });

        Ok(Self {
            dockable,
            widget,
            value,
        })
    }
}

impl fmt::Display for DemoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dockable)?;
        if let Some(widget) = &self.widget {
            write!(f, ":{}", widget)?;
        }
        if let Some(value) = &self.value {
            write!(f, "={}", value)?;
        }
        Ok(())
    }
}

/// A parsed demo script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoScript {
    pub steps: Vec<DemoStep>,
}

impl DemoScript {
    /// Parse a full script. Every step must be well-formed.
    pub fn parse(script: &str) -> Result<Self, DemoIssue> {
        if script.trim().is_empty() {
            return Err(DemoIssue::EmptyScript);
        }

        let steps = script
            .split(',')
            .enumerate()
            .map(|(index, step)| DemoStep::parse(step, index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { steps })
    }
}

fn with_prefix(id: &str, prefix: &str) -> String {
    if id.starts_with(prefix) {
        id.to_string()
    } else {
        format!("{}{}", prefix, id)
    }
}
