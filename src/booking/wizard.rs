use chrono::NaiveDate;
use thiserror::Error;

use super::fields::{Field, FieldValues, IntakePayload, Step};
use super::intake::SubmitError;
use super::validate::{validate_step, ValidationError};

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Confirmed,
    Failed(SubmitError),
}

/// Why `begin_submit` refused to start a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("the form can only be sent from the last step")]
    NotOnFinalStep,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("this booking has already been confirmed")]
    AlreadyConfirmed,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Transient state of the three-step booking form.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingWizard {
    step: Step,
    values: FieldValues,
    status: SubmissionStatus,
    error: Option<ValidationError>,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: Step::Details,
            values: FieldValues::default(),
            status: SubmissionStatus::Idle,
            error: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Inputs are locked while a request is out and once the booking is in.
    pub fn is_locked(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting | SubmissionStatus::Confirmed)
    }

    pub fn can_submit(&self) -> bool {
        self.step == Step::Contact && !self.is_locked()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.is_locked() {
            self.values.set(field, value);
        }
    }

    /// Validates the current step and moves forward one step. Returns `true`
    /// when the step changed.
    pub fn next_step(&mut self, today: NaiveDate) -> bool {
        self.error = None;
        let Some(next) = self.step.next() else {
            return false;
        };
        match validate_step(self.step, &self.values, today) {
            Ok(()) => {
                self.step = next;
                true
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }

    /// Moves back one step without validating. Returns `true` when the step
    /// changed.
    pub fn previous_step(&mut self) -> bool {
        self.error = None;
        if self.is_locked() {
            return false;
        }
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                // A failed send only means something on the contact step.
                if matches!(self.status, SubmissionStatus::Failed(_)) {
                    self.status = SubmissionStatus::Idle;
                }
                true
            }
            None => false,
        }
    }

    /// Validates the contact step and, if it passes, marks the form as
    /// submitting and hands back the payload to send.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Result<IntakePayload, SubmitBlocked> {
        match self.status {
            SubmissionStatus::Submitting => return Err(SubmitBlocked::InFlight),
            SubmissionStatus::Confirmed => return Err(SubmitBlocked::AlreadyConfirmed),
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {}
        }
        if self.step != Step::Contact {
            return Err(SubmitBlocked::NotOnFinalStep);
        }

        self.error = None;
        if let Err(e) = validate_step(Step::Contact, &self.values, today) {
            self.error = Some(e.clone());
            return Err(e.into());
        }

        self.status = SubmissionStatus::Submitting;
        Ok(self.values.payload())
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        self.status = match result {
            Ok(()) => SubmissionStatus::Confirmed,
            Err(e) => SubmissionStatus::Failed(e),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::booking::intake::IntakeClient;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    struct MockIntake {
        reply: Result<(), SubmitError>,
        sent: RefCell<Vec<IntakePayload>>,
    }

    impl MockIntake {
        fn replying(reply: Result<(), SubmitError>) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl IntakeClient for MockIntake {
        async fn send(&self, payload: &IntakePayload) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(payload.clone());
            self.reply.clone()
        }
    }

    fn submit(wizard: &mut BookingWizard, client: &MockIntake) -> Result<(), SubmitBlocked> {
        let payload = wizard.begin_submit(today())?;
        let result = block_on(client.send(&payload));
        wizard.finish_submit(result);
        Ok(())
    }

    fn fill_details(wizard: &mut BookingWizard, date: &str) {
        wizard.set_field(Field::OrgName, "Riverside PTA");
        wizard.set_field(Field::EventType, "School or Fete");
        wizard.set_field(Field::Date, date);
        wizard.set_field(Field::Time, "13:00");
        wizard.set_field(Field::Duration, "3 hours");
        wizard.set_field(Field::Address, "Riverside Primary, Quay St");
        wizard.set_field(Field::Postcode, "BS1 4DJ");
    }

    fn fill_plan(wizard: &mut BookingWizard) {
        wizard.set_field(Field::PricingPlan, "Pre-Paid Bundle");
        wizard.set_field(Field::Attendance, "100-200");
        wizard.set_field(Field::Dietary, "Two vegan children");
    }

    fn fill_contact(wizard: &mut BookingWizard) {
        wizard.set_field(Field::ContactName, "Sam Carter");
        wizard.set_field(Field::Phone, "07700 900123");
        wizard.set_field(Field::Email, "sam@example.org");
    }

    fn at_contact_step() -> BookingWizard {
        let mut wizard = BookingWizard::new();
        fill_details(&mut wizard, "2099-01-01");
        assert!(wizard.next_step(today()));
        fill_plan(&mut wizard);
        assert!(wizard.next_step(today()));
        fill_contact(&mut wizard);
        wizard
    }

    #[test]
    fn future_date_advances_to_plan_step() {
        let mut wizard = BookingWizard::new();
        fill_details(&mut wizard, "2099-01-01");
        assert!(wizard.next_step(today()));
        assert_eq!(wizard.step(), Step::Plan);
        assert_eq!(wizard.error(), None);
    }

    #[test]
    fn past_date_keeps_step_and_values() {
        let mut wizard = BookingWizard::new();
        fill_details(&mut wizard, "2000-01-01");
        assert!(!wizard.next_step(today()));
        assert_eq!(wizard.step(), Step::Details);
        assert_eq!(wizard.error(), Some(&ValidationError::PastDate));
        assert!(wizard.error().unwrap().to_string().contains("future"));
        assert_eq!(wizard.values().get(Field::Postcode), "BS1 4DJ");
    }

    #[test]
    fn each_missing_required_field_blocks_the_step() {
        for field in Step::Details.fields().filter(|f| f.required()) {
            let mut wizard = BookingWizard::new();
            fill_details(&mut wizard, "2099-01-01");
            wizard.set_field(field, "");
            assert!(!wizard.next_step(today()), "{field:?}");
            assert_eq!(wizard.step(), Step::Details);
            assert_eq!(wizard.error(), Some(&ValidationError::Missing(field)));
        }
    }

    #[test]
    fn step_attempt_clears_previous_error() {
        let mut wizard = BookingWizard::new();
        assert!(!wizard.next_step(today()));
        assert!(wizard.error().is_some());
        fill_details(&mut wizard, "2099-01-01");
        assert!(wizard.next_step(today()));
        assert!(wizard.error().is_none());
    }

    #[test]
    fn back_needs_no_validation() {
        let mut wizard = BookingWizard::new();
        fill_details(&mut wizard, "2099-01-01");
        wizard.next_step(today());
        assert!(!wizard.next_step(today()));
        assert!(wizard.previous_step());
        assert_eq!(wizard.step(), Step::Details);
        assert!(wizard.error().is_none());
        assert!(!wizard.previous_step());
    }

    #[test]
    fn values_survive_back_and_forth() {
        let mut wizard = at_contact_step();
        for _ in 0..3 {
            assert!(wizard.previous_step());
            assert!(wizard.previous_step());
            assert!(wizard.next_step(today()));
            assert!(wizard.next_step(today()));
        }
        let client = MockIntake::replying(Ok(()));
        submit(&mut wizard, &client).unwrap();

        let sent = client.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].get("Org_Name"), Some("Riverside PTA"));
        assert_eq!(sent[0].get("Date"), Some("2099-01-01"));
        assert_eq!(sent[0].get("Pricing_Plan"), Some("Pre-Paid Bundle"));
        assert_eq!(sent[0].get("Dietary"), Some("Two vegan children"));
        assert_eq!(sent[0].get("Email"), Some("sam@example.org"));
    }

    #[test]
    fn incomplete_contact_step_never_submits() {
        let mut wizard = at_contact_step();
        wizard.set_field(Field::Email, "");
        let blocked = wizard.begin_submit(today()).unwrap_err();
        assert_eq!(blocked, SubmitBlocked::Invalid(ValidationError::Missing(Field::Email)));
        assert_eq!(wizard.status(), &SubmissionStatus::Idle);
        assert!(wizard.error().is_some());
    }

    #[test]
    fn submit_only_from_last_step() {
        let mut wizard = BookingWizard::new();
        fill_details(&mut wizard, "2099-01-01");
        assert_eq!(wizard.begin_submit(today()), Err(SubmitBlocked::NotOnFinalStep));
        assert_eq!(wizard.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut wizard = at_contact_step();
        assert!(wizard.begin_submit(today()).is_ok());
        assert_eq!(wizard.status(), &SubmissionStatus::Submitting);
        assert!(!wizard.can_submit());
        assert_eq!(wizard.begin_submit(today()), Err(SubmitBlocked::InFlight));
        assert_eq!(wizard.status(), &SubmissionStatus::Submitting);
    }

    #[test]
    fn inputs_are_locked_while_submitting() {
        let mut wizard = at_contact_step();
        wizard.begin_submit(today()).unwrap();
        wizard.set_field(Field::Email, "other@example.org");
        assert!(!wizard.previous_step());
        assert_eq!(wizard.values().get(Field::Email), "sam@example.org");
    }

    #[test]
    fn accepted_submission_confirms() {
        let mut wizard = at_contact_step();
        submit(&mut wizard, &MockIntake::replying(Ok(()))).unwrap();
        assert_eq!(wizard.status(), &SubmissionStatus::Confirmed);
        assert_eq!(wizard.begin_submit(today()), Err(SubmitBlocked::AlreadyConfirmed));
    }

    #[test]
    fn rejected_submission_fails_and_allows_retry() {
        let mut wizard = at_contact_step();
        let client = MockIntake::replying(Err(SubmitError::Rejected { status: 500 }));
        submit(&mut wizard, &client).unwrap();

        match wizard.status() {
            SubmissionStatus::Failed(e) => assert!(e.to_string().contains("check your details")),
            other => panic!("unexpected status {other:?}"),
        }
        assert!(wizard.can_submit());

        let retry = MockIntake::replying(Ok(()));
        submit(&mut wizard, &retry).unwrap();
        assert_eq!(wizard.status(), &SubmissionStatus::Confirmed);
        assert_eq!(retry.sent.borrow()[0], client.sent.borrow()[0]);
    }

    #[test]
    fn going_back_after_failure_clears_the_failure() {
        let mut wizard = at_contact_step();
        submit(&mut wizard, &MockIntake::replying(Err(SubmitError::Rejected { status: 500 }))).unwrap();
        assert!(matches!(wizard.status(), SubmissionStatus::Failed(_)));

        assert!(wizard.previous_step());
        assert_eq!(wizard.step(), Step::Plan);
        assert_eq!(wizard.status(), &SubmissionStatus::Idle);

        assert!(wizard.next_step(today()));
        submit(&mut wizard, &MockIntake::replying(Ok(()))).unwrap();
        assert_eq!(wizard.status(), &SubmissionStatus::Confirmed);
    }

    #[test]
    fn transport_failure_reports_network_error() {
        let mut wizard = at_contact_step();
        let client = MockIntake::replying(Err(SubmitError::Network("connection refused".into())));
        submit(&mut wizard, &client).unwrap();

        match wizard.status() {
            SubmissionStatus::Failed(e) => assert!(e.to_string().contains("Network error")),
            other => panic!("unexpected status {other:?}"),
        }
        assert_eq!(wizard.values().get(Field::ContactName), "Sam Carter");
    }

    #[test]
    fn stray_finish_is_ignored() {
        let mut wizard = at_contact_step();
        wizard.finish_submit(Ok(()));
        assert_eq!(wizard.status(), &SubmissionStatus::Idle);
    }
}
