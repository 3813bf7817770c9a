pub mod gate;
pub mod sequencer;

pub use gate::{CompletionOutcome, PASS_THRESHOLD};
pub use sequencer::{Advance, CourseProgress, CourseSequencer};
