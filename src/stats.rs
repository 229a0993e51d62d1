use lazy_static::lazy_static;
use metrics::{counter, Counter};

use crate::engine::FailureReason;

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    // Every field check that ran, valid or not
    pub field_validations: Counter,

    // Submission attempts, split by outcome
    pub forms_accepted: Counter,
    pub forms_rejected: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            field_validations: counter!("field.validations"),
            forms_accepted: counter!("form.accepted"),
            forms_rejected: counter!("form.rejected"),
        }
    }

    /// Field-level rejections, labeled by failure reason.
    pub fn record_field_rejection(&self, reason: FailureReason) {
        counter!("field.rejections", "reason" => reason.as_label()).increment(1);
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
