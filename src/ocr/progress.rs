/// Observer for recognition progress: a completion percentage from 0 to 100,
/// invoked synchronously, non-decreasing over one recognition run.
pub trait ProgressSink {
    fn on_progress(&self, percent: u8);
}

#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_progress(&self, _percent: u8) {}
}

/// Converts an engine-reported 0..1 completion fraction to a percentage.
pub fn percent_from_fraction(fraction: f32) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}
