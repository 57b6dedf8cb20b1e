//! Progress reporting
//!
//! The pipeline reports which stage it is in and short status lines through
//! [`Ui`]. The binary prints them; tests use [`SilentUi`].

/// Pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Classifying,
    Merging,
    Writing,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Loading => write!(f, "Loading input tables"),
            Phase::Classifying => write!(f, "Classifying base items"),
            Phase::Merging => write!(f, "Merging mod groups"),
            Phase::Writing => write!(f, "Writing output"),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Trait for progress output, so the pipeline runs the same with or without a terminal
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn log(&mut self, message: impl Into<String>);
}

/// Plain line-per-event output on stdout
#[derive(Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for ConsoleUi {
    fn set_phase(&mut self, phase: Phase) {
        println!("{}...", phase);
    }

    fn log(&mut self, message: impl Into<String>) {
        println!("  {}", message.into());
    }
}

/// Silent UI implementation for testing and non-interactive use
#[derive(Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}
    fn log(&mut self, _message: impl Into<String>) {}
}

/// Records everything it is told. Handy for asserting on pipeline progress.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub phases: Vec<Phase>,
    pub messages: Vec<String>,
}

impl Ui for RecordingUi {
    fn set_phase(&mut self, phase: Phase) {
        self.phases.push(phase);
    }

    fn log(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}
