use crate::config::TodoConfig;
use crate::model::{TodoId, TodoItem};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod paths;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct TodoPaths {
    pub data_dir: PathBuf,
}

impl TodoPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<TodoItem>,
    pub listed_todos: Vec<TodoItem>,
    pub missing_ids: Vec<TodoId>,
    pub paths: Vec<PathBuf>,
    pub config: Option<TodoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<TodoItem>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<TodoItem>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: TodoConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Record an id that did not resolve, with the matching warning.
    pub fn add_missing(&mut self, id: TodoId) {
        self.missing_ids.push(id);
        self.add_message(CmdMessage::warning(format!("Todo {} not found", id)));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoUpdate {
    pub id: TodoId,
    pub content: String,
}

impl TodoUpdate {
    pub fn new(id: TodoId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}
