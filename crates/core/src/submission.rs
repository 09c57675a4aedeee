//! The submission pipeline.
//!
//! Submission is the single gated exit from a form: the draft runs through
//! its validation rules, and only a fully valid draft produces an event.
//! Exactly one event is emitted per accepted draft, carrying the complete
//! payload verbatim to the collaborator behind [`SubmissionSink`]. There is
//! no transport here and no retry: a delivery failure is handed back to the
//! caller with the draft untouched, ready for re-submission.

use crate::blog::BlogDraft;
use crate::diet::DietPlanDraft;
use crate::exercise::ExerciseDraft;
use crate::validation::{Validate, ValidationErrors};
use crate::{FormError, FormResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single submission event: the complete draft for one form type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "form", content = "draft")]
pub enum SubmissionEvent {
    #[serde(rename = "exercise")]
    Exercise(ExerciseDraft),
    #[serde(rename = "dietPlan")]
    DietPlan(DietPlanDraft),
    #[serde(rename = "blog")]
    Blog(BlogDraft),
}

impl SubmissionEvent {
    /// Returns the payload discriminator for this form type.
    pub fn form_name(&self) -> &'static str {
        match self {
            SubmissionEvent::Exercise(_) => "exercise",
            SubmissionEvent::DietPlan(_) => "dietPlan",
            SubmissionEvent::Blog(_) => "blog",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            SubmissionEvent::Exercise(_) => "Exercise",
            SubmissionEvent::DietPlan(_) => "Diet plan",
            SubmissionEvent::Blog(_) => "Blog",
        }
    }

    fn draft_errors(&self) -> ValidationErrors {
        match self {
            SubmissionEvent::Exercise(draft) => draft.validate(),
            SubmissionEvent::DietPlan(draft) => draft.validate(),
            SubmissionEvent::Blog(draft) => draft.validate(),
        }
    }
}

impl From<ExerciseDraft> for SubmissionEvent {
    fn from(draft: ExerciseDraft) -> Self {
        SubmissionEvent::Exercise(draft)
    }
}

impl From<DietPlanDraft> for SubmissionEvent {
    fn from(draft: DietPlanDraft) -> Self {
        SubmissionEvent::DietPlan(draft)
    }
}

impl From<BlogDraft> for SubmissionEvent {
    fn from(draft: BlogDraft) -> Self {
        SubmissionEvent::Blog(draft)
    }
}

/// Acknowledgement returned to the caller for an accepted draft.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    /// Payload discriminator of the accepted form.
    pub form: &'static str,
    /// UTC timestamp when the sink accepted the event.
    pub accepted_at: DateTime<Utc>,
    /// Notification message to surface to the user.
    pub notification: String,
}

/// External collaborator that receives accepted submission events.
pub trait SubmissionSink {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Delivery` (or a serialisation error) when the
    /// event could not be handed over; the caller keeps the draft and may
    /// re-submit.
    fn deliver(&mut self, event: &SubmissionEvent) -> FormResult<()>;
}

/// The local collaborator: records the full JSON payload in the log.
#[derive(Debug, Clone, Default)]
pub struct LoggingSink;

impl SubmissionSink for LoggingSink {
    fn deliver(&mut self, event: &SubmissionEvent) -> FormResult<()> {
        let payload = serde_json::to_string(event).map_err(FormError::PayloadSerialization)?;
        tracing::info!(form = event.form_name(), payload = %payload, "submission accepted");
        Ok(())
    }
}

/// Validates drafts and emits accepted ones to a sink.
#[derive(Debug)]
pub struct SubmissionPipeline<S: SubmissionSink> {
    sink: S,
}

impl Default for SubmissionPipeline<LoggingSink> {
    fn default() -> Self {
        Self::new(LoggingSink)
    }
}

impl<S: SubmissionSink> SubmissionPipeline<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Submits one draft.
    ///
    /// Runs the form's validation gate first: on any violation the errors
    /// are returned, no event is emitted, and nothing is cleared. A valid
    /// draft is delivered to the sink exactly once.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Validation` with the field-scoped violations, or
    /// the sink's delivery error. In both cases the caller's draft is
    /// intact for correction and re-submission.
    pub fn submit(&mut self, event: &SubmissionEvent) -> FormResult<SubmissionReceipt> {
        let errors = event.draft_errors();
        if !errors.is_empty() {
            return Err(FormError::Validation(errors));
        }

        self.sink.deliver(event)?;

        Ok(SubmissionReceipt {
            form: event.form_name(),
            accepted_at: Utc::now(),
            notification: format!("{} submitted!", event.display_name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diet::DietPlanField;
    use crate::store::{FormDraft, FormStateStore};
    use crate::validation::REQUIRED;

    /// Sink that counts deliveries and can be told to fail.
    #[derive(Default)]
    struct RecordingSink {
        delivered: Vec<SubmissionEvent>,
        fail_next: bool,
    }

    impl SubmissionSink for RecordingSink {
        fn deliver(&mut self, event: &SubmissionEvent) -> FormResult<()> {
            if self.fail_next {
                return Err(FormError::Delivery("backend unreachable".into()));
            }
            self.delivered.push(event.clone());
            Ok(())
        }
    }

    fn valid_diet_draft() -> DietPlanDraft {
        let mut store: FormStateStore<DietPlanDraft> = FormStateStore::open();
        store
            .update(DietPlanField::Name("Cutting Plan".into()))
            .expect("update should succeed");
        store
            .update(DietPlanField::Goal("Weight Loss".into()))
            .expect("update should succeed");
        store.into_draft()
    }

    #[test]
    fn test_invalid_draft_emits_no_event() {
        let mut pipeline = SubmissionPipeline::new(RecordingSink::default());

        // Missing goal: one violation, nothing delivered.
        let mut draft = DietPlanDraft::new_draft();
        draft.name = "Cutting Plan".into();

        let err = pipeline
            .submit(&draft.into())
            .expect_err("invalid draft should be rejected");
        match err {
            FormError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.message_for("goal"), Some(REQUIRED));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(pipeline.sink.delivered.is_empty());
    }

    #[test]
    fn test_valid_draft_emits_exactly_one_event() {
        let mut pipeline = SubmissionPipeline::new(RecordingSink::default());
        let event: SubmissionEvent = valid_diet_draft().into();

        let receipt = pipeline.submit(&event).expect("submission should succeed");

        assert_eq!(pipeline.sink.delivered.len(), 1);
        assert_eq!(receipt.form, "dietPlan");
        assert_eq!(receipt.notification, "Diet plan submitted!");
    }

    #[test]
    fn test_delivery_failure_is_surfaced_and_draft_stays_resubmittable() {
        let mut pipeline = SubmissionPipeline::new(RecordingSink {
            fail_next: true,
            ..Default::default()
        });
        let event: SubmissionEvent = valid_diet_draft().into();

        let err = pipeline
            .submit(&event)
            .expect_err("delivery failure should surface");
        assert!(matches!(err, FormError::Delivery(_)));
        assert!(pipeline.sink.delivered.is_empty());

        // Same event, second attempt: accepted once the collaborator is back.
        pipeline.sink.fail_next = false;
        pipeline.submit(&event).expect("re-submission should succeed");
        assert_eq!(pipeline.sink.delivered.len(), 1);
    }

    #[test]
    fn test_event_payload_is_tagged_by_form() {
        let event: SubmissionEvent = valid_diet_draft().into();
        let json = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(json["form"], "dietPlan");
        assert_eq!(json["draft"]["name"], "Cutting Plan");
        assert_eq!(json["draft"]["goal"], "Weight Loss");
    }
}
