//! Review submission form.
//!
//! The form owns only its input fields and the last error list. A successful
//! submission emits [`Event::ReviewSubmitted`] and resets the form; storing the
//! review is the owner's job.

use serde::Serialize;

use crate::enums::FormState;
use crate::events::{Event, EventSink};
use crate::types::Review;

pub const NAME_REQUIRED: &str = "Name required.";
pub const REVIEW_REQUIRED: &str = "Review required.";
pub const RATING_REQUIRED: &str = "Rating required.";
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 5.";

/// Ratings offered by the form.
pub const RATING_OPTIONS: [u8; 5] = [5, 4, 3, 2, 1];

/// Outcome of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Review),
    Rejected(Vec<String>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReviewForm {
    name: String,
    review: String,
    rating: Option<i64>,
    errors: Vec<String>,
    state: FormState,
}

impl ReviewForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    pub fn rating(&self) -> Option<i64> {
        self.rating
    }

    /// Messages from the last rejected submission, in field order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_review(&mut self, review: impl Into<String>) {
        self.review = review.into();
    }

    pub fn set_rating(&mut self, rating: Option<i64>) {
        self.rating = rating;
    }

    /// Sets the rating from raw text input.
    ///
    /// Numeric text with an integral value is accepted in either integer or
    /// decimal form (`"4"`, `"4.0"`). Empty, non-numeric or fractional input
    /// leaves the rating unset.
    pub fn set_rating_input(&mut self, input: &str) {
        self.rating = parse_rating(input);
    }

    /// Validates the current input, collecting one message per violated field.
    pub fn check(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(NAME_REQUIRED.to_string());
        }
        if self.review.is_empty() {
            errors.push(REVIEW_REQUIRED.to_string());
        }
        match self.rating {
            None => errors.push(RATING_REQUIRED.to_string()),
            Some(r) if !(1..=5).contains(&r) => errors.push(RATING_OUT_OF_RANGE.to_string()),
            Some(_) => {}
        }
        errors
    }

    /// Attempts a submission.
    ///
    /// On success exactly one event is emitted into `sink` and every field and
    /// error is cleared. On failure the error list is replaced and the fields
    /// are kept for correction.
    pub fn submit(&mut self, sink: &mut dyn EventSink) -> SubmitOutcome {
        let errors = self.check();
        let rating = match self.rating.and_then(|r| u8::try_from(r).ok()) {
            Some(rating) if errors.is_empty() => rating,
            _ => {
                tracing::debug!(message = "review.rejected", errors = errors.len());
                self.errors = errors.clone();
                self.state = FormState::Rejected;
                return SubmitOutcome::Rejected(errors);
            }
        };

        let review = Review {
            name: std::mem::take(&mut self.name),
            review: std::mem::take(&mut self.review),
            rating,
        };
        self.rating = None;
        self.errors.clear();
        self.state = FormState::Accepted;
        tracing::debug!(message = "review.accepted", rating = review.rating);
        sink.emit(Event::ReviewSubmitted(review.clone()));
        SubmitOutcome::Accepted(review)
    }
}

fn parse_rating(input: &str) -> Option<i64> {
    let input = input.trim();
    if let Ok(r) = input.parse::<i64>() {
        return Some(r);
    }
    let value = input.parse::<f64>().ok()?;
    // Saturating cast; out-of-range magnitudes still fail the 1..=5 check.
    (value.is_finite() && value.fract() == 0.0).then(|| value as i64)
}
