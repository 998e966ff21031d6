//! Interface state for one statement: idle, loading, loaded, or failed.

use kakeibo_core::Categories;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Idle,
    Loading {
        file: PathBuf,
    },
    Loaded {
        file: PathBuf,
        categories: Categories,
    },
    Failed {
        message: String,
    },
}

impl Session {
    /// Begin a new pass. Any earlier result or error is discarded.
    pub fn start(&mut self, file: PathBuf) {
        *self = Session::Loading { file };
    }

    pub fn succeed(&mut self, categories: Categories) {
        match std::mem::take(self) {
            Session::Loading { file } => *self = Session::Loaded { file, categories },
            other => {
                warn!(state = other.name(), "result arrived outside a pass; ignoring");
                *self = other;
            }
        }
    }

    /// Record a failure. Clears any result.
    pub fn fail(&mut self, err: impl fmt::Display) {
        *self = Session::Failed {
            message: err.to_string(),
        };
    }

    pub fn reset(&mut self) {
        *self = Session::Idle;
    }

    /// Statement being processed or last processed successfully.
    pub fn file(&self) -> Option<&Path> {
        match self {
            Session::Loading { file } | Session::Loaded { file, .. } => Some(file.as_path()),
            _ => None,
        }
    }

    pub fn categories(&self) -> Option<&Categories> {
        match self {
            Session::Loaded { categories, .. } => Some(categories),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Session::Failed { message } => Some(message),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Session::Idle => "idle",
            Session::Loading { .. } => "loading",
            Session::Loaded { .. } => "loaded",
            Session::Failed { .. } => "failed",
        }
    }
}
