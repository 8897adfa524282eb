use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Key of an execution host managed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineId(String);

impl MachineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MachineId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A command running on some machine.
pub trait Process {
    fn name(&self) -> &str;
    fn command_line(&self) -> &str;
    fn pid(&self) -> u32;
    fn machine(&self) -> &MachineId;
}

/// Immutable snapshot of a launched command.
///
/// The record only names its machine; the machine itself lives in whatever
/// registry the caller maintains and can outlive many records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessRecord {
    name: String,
    command_line: String,
    pid: u32,
    machine: MachineId,
}

impl ProcessRecord {
    pub fn new(
        name: impl Into<String>,
        command_line: impl Into<String>,
        pid: u32,
        machine: MachineId,
    ) -> Self {
        Self {
            name: name.into(),
            command_line: command_line.into(),
            pid,
            machine,
        }
    }

    /// Looks up the owning machine in a caller-held registry.
    pub fn machine_in<'a, M>(&self, machines: &'a HashMap<MachineId, M>) -> Option<&'a M> {
        machines.get(&self.machine)
    }
}

impl Process for ProcessRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn command_line(&self) -> &str {
        &self.command_line
    }

    fn pid(&self) -> u32 {
        self.pid
    }

    fn machine(&self) -> &MachineId {
        &self.machine
    }
}
