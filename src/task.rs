use crate::error::{SimError, SimResult};
use serde::Deserialize;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskKind {
    Away,
    Land,
    Wait,
    Load,
    Takeoff,
}

impl TaskKind {
    pub fn description(&self) -> &'static str {
        match self {
            TaskKind::Away => "Flying outside the airport",
            TaskKind::Land => "Waiting in queue to land",
            TaskKind::Wait => "Waiting idle at gate",
            TaskKind::Load => "Loading at gate",
            TaskKind::Takeoff => "Waiting in queue to take off",
        }
    }

    /// Tasks performed while parked at a gate.
    pub fn requires_gate(&self) -> bool {
        matches!(self, TaskKind::Wait | TaskKind::Load)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskKind::Away => "AWAY",
            TaskKind::Land => "LAND",
            TaskKind::Wait => "WAIT",
            TaskKind::Load => "LOAD",
            TaskKind::Takeoff => "TAKEOFF",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TaskKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AWAY" => Ok(TaskKind::Away),
            "LAND" => Ok(TaskKind::Land),
            "WAIT" => Ok(TaskKind::Wait),
            "LOAD" => Ok(TaskKind::Load),
            "TAKEOFF" => Ok(TaskKind::Takeoff),
            _ => Err(SimError::UnknownTask(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Task {
    pub kind: TaskKind,
    load_percent: u8,
}

impl Task {
    pub const MAX_LOAD_PERCENT: u32 = 100;

    pub fn new(kind: TaskKind) -> Task {
        Task { kind, load_percent: 0 }
    }

    pub fn load(percent: u32) -> SimResult<Task> {
        if percent > Self::MAX_LOAD_PERCENT {
            return Err(SimError::InvalidLoadPercent(percent));
        }
        Ok(Task { kind: TaskKind::Load, load_percent: percent as u8 })
    }

    pub fn load_percent(&self) -> u8 {
        self.load_percent
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            TaskKind::Load => write!(f, "LOAD at {}%", self.load_percent),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Parses `AWAY`, `LOAD` or `LOAD@65`.
impl FromStr for Task {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('@') {
            Some((kind, percent)) => {
                if kind.parse::<TaskKind>()? != TaskKind::Load {
                    return Err(SimError::UnknownTask(s.to_string()));
                }
                let percent = percent
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| SimError::UnknownTask(s.to_string()))?;
                Task::load(percent)
            }
            None => Ok(Task::new(s.parse()?)),
        }
    }
}

impl TryFrom<String> for Task {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Task>")]
pub struct TaskList {
    tasks: Vec<Task>,
    position: usize,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> SimResult<TaskList> {
        if tasks.is_empty() {
            return Err(SimError::EmptyTaskList);
        }
        Ok(TaskList { tasks, position: 0 })
    }

    pub fn current_task(&self) -> &Task {
        &self.tasks[self.position]
    }

    pub fn next_task(&self) -> &Task {
        &self.tasks[(self.position + 1) % self.tasks.len()]
    }

    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.tasks.len();
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl TryFrom<Vec<Task>> for TaskList {
    type Error = SimError;

    fn try_from(value: Vec<Task>) -> Result<Self, Self::Error> {
        TaskList::new(value)
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TaskList currently on {} [{}/{}]",
            self.current_task(),
            self.position + 1,
            self.tasks.len()
        )
    }
}
