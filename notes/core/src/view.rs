//! Form View Model
//!
//! Everything a surface needs to draw the form, derived purely from
//! [`FormState`]. Building a view has no side effects and holds no cached
//! state, so drawing the same state twice yields identical output.

use chrono::{DateTime, TimeZone, Utc};

use crate::form::FormState;
use crate::model::AnalysisResult;

/// Page heading
pub const TITLE: &str = "Indsend note";
/// Label of the note field
pub const NOTE_LABEL: &str = "Note";
/// Placeholder shown while the note field is empty
pub const NOTE_PLACEHOLDER: &str = "Skriv en kort note der skal analyseres";
/// Submit control label while idle
pub const SUBMIT_LABEL: &str = "Send til analyse";
/// Submit control label while a submission is in flight
pub const SUBMIT_LABEL_LOADING: &str = "Sender...";
/// Heading of the result card
pub const RESULT_HEADING: &str = "Sidste resultat";

/// Timestamp layout for result cards
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render model for the whole form
#[derive(Clone, Debug, PartialEq)]
pub struct FormView {
    /// Current note text, verbatim
    pub text: String,
    /// A submission is in flight
    pub loading: bool,
    /// Whether the submit control accepts input
    pub submit_enabled: bool,
    /// Label of the submit control
    pub submit_label: &'static str,
    /// Inline error message, if any
    pub error: Option<String>,
    /// Card for the most recent result
    pub result: Option<ResultView>,
}

impl FormView {
    /// Derive the view from form state, formatting timestamps in local time
    pub fn from_state(state: &FormState) -> Self {
        Self::from_state_in(state, &chrono::Local)
    }

    /// Derive the view, formatting timestamps in `tz`
    pub fn from_state_in<Tz: TimeZone>(state: &FormState, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let loading = state.is_loading();
        Self {
            text: state.text().to_string(),
            loading,
            submit_enabled: !loading && !state.text().trim().is_empty(),
            submit_label: if loading {
                SUBMIT_LABEL_LOADING
            } else {
                SUBMIT_LABEL
            },
            error: Some(state.error())
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            result: state
                .last_result()
                .filter(|r| !r.is_blank())
                .map(|r| ResultView::new_in(r, tz)),
        }
    }
}

/// Render model for the result card
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    /// Formatted creation time
    pub timestamp: String,
    /// Echoed note text, verbatim
    pub text: String,
    /// Label tags in received order (empty means no tag row)
    pub labels: Vec<String>,
    /// Score as a whole percentage
    pub score_percent: i64,
    /// Analyzer summary, when non-empty
    pub summary: Option<String>,
}

impl ResultView {
    /// Build a card, formatting the timestamp in `tz`
    pub fn new_in<Tz: TimeZone>(result: &AnalysisResult, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            timestamp: format_created_at(result.created_at(), tz),
            text: result.text().to_string(),
            labels: result.labels().into_iter().map(str::to_string).collect(),
            score_percent: score_percent(result.score()),
            summary: result.summary().map(str::to_string),
        }
    }

    /// Score line, e.g. `Score: 42%`
    pub fn score_line(&self) -> String {
        format!("Score: {}%", self.score_percent)
    }

    /// Whether the label row is drawn
    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }
}

/// Format a Unix-seconds timestamp in `tz`
///
/// Absent or out-of-range values render the epoch.
pub fn format_created_at<Tz: TimeZone>(created_at: Option<i64>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let secs = created_at.unwrap_or(0);
    let utc: DateTime<Utc> = DateTime::from_timestamp(secs, 0).unwrap_or_default();
    utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}

/// Convert a 0–1 score to the nearest whole percentage, halves rounding up
///
/// Absent scores count as zero.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn score_percent(score: Option<f64>) -> i64 {
    let percent = score.unwrap_or(0.0) * 100.0;
    let mut rounded = percent.round();
    // `round` sends negative halves away from zero
    if percent - rounded == 0.5 {
        rounded += 1.0;
    }
    rounded as i64
}
