//! Scaffold events.
//!
//! The scaffolder never prints. It reports one [`ScaffoldEvent`] per artifact to
//! an [`EventSink`] supplied by the caller, in the order the artifacts are
//! processed; a presentation layer decides how to render them.

use std::fmt;

use serde::Serialize;

/// What happened to one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "artifact", rename_all = "lowercase")]
pub enum ScaffoldEvent {
    Created(String),
    Overwrote(String),
    Skipped(String),
}

impl ScaffoldEvent {
    /// Display name of the artifact the event is about.
    pub fn artifact(&self) -> &str {
        match self {
            Self::Created(name) | Self::Overwrote(name) | Self::Skipped(name) => name,
        }
    }

    /// Whether the artifact was written.
    pub fn is_write(&self) -> bool {
        !matches!(self, Self::Skipped(_))
    }
}

impl fmt::Display for ScaffoldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(name) => write!(f, "created '{name}'"),
            Self::Overwrote(name) => write!(f, "overwrote '{name}'"),
            Self::Skipped(name) => {
                write!(f, "skipped '{name}', file exists use --force to overwrite")
            }
        }
    }
}

/// Receives events synchronously as the scaffold proceeds.
pub trait EventSink {
    fn emit(&mut self, event: ScaffoldEvent);
}

impl EventSink for Vec<ScaffoldEvent> {
    fn emit(&mut self, event: ScaffoldEvent) {
        self.push(event);
    }
}
