// src/progress.rs
use std::fmt;

/// The three steps of a cache-miss fallback, in the order they run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Scrape,
    Process,
    Build,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Scrape, Stage::Process, Stage::Build];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Scrape  => "scrape",
            Stage::Process => "process",
            Stage::Build   => "build",
        })
    }
}

/// Lightweight progress reporting for the fallback path.
/// Frontends (CLI) implement this to surface status to users.
pub trait Progress {
    /// Called before the first stage with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called once the record is built. Not called when a stage fails.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
