//! Wizard state machine for Udyam - step gating and orchestration.
//!
//! This crate contains the [`App`] state machine without TUI dependencies:
//!
//! - **Form state**: active step, field values, per-field errors
//! - **OTP round**: simulated issuance and verification, digit-cell entry
//! - **PIN lookup**: background resolution with a staleness guard
//! - **Submission**: the payload built once global validity holds
//!
//! The TUI layer reads state through the accessors and forwards input back
//! through the named transitions (`set_field`, `blur`, `next`, `back`,
//! `issue_otp`, `verify_otp`, `submit`). No rendering logic lives here,
//! and every rejection is soft: a message or field error, never a panic.
//!
//! # Lookup ordering
//!
//! Lookups run on spawned tasks and complete out of order when the user
//! edits the PIN faster than a request resolves. Each scheduled lookup
//! carries a generation number; [`App::poll_lookups`] applies a completion
//! only if it is the latest generation issued *and* the PIN it resolved
//! still matches the current field value. Editing the PIN away from
//! 6-digit form clears the derived fields synchronously, so no stale
//! result can linger.

use tokio::sync::mpsc;

use udyam_types::{FieldErrors, FormValues, field_spec, governed_fields, validate};

mod config;
mod otp;
mod payload;

pub use config::{ConfigError, LookupSection, UdyamConfig};
pub use otp::{MessageTone, OTP_LENGTH, OtpInput, OtpState};
pub use payload::{AadhaarSection, PanSection, SubmissionPayload};

// Re-export for downstream crates so the TUI depends on one API surface.
pub use udyam_lookup::{Location, LookupConfig};
pub use udyam_types::{FieldKind, FieldSpec, StepSpec, fields, steps};

const VERIFY_OTP_FIRST: &str = "\u{26a0}\u{fe0f} Please verify OTP first.";
const FIX_ERRORS_FIRST: &str = "\u{26a0}\u{fe0f} Please fix errors before submitting.";

/// Which widget currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Index into the active step's field list.
    Field(usize),
    /// The OTP entry row (step 0 only).
    Otp,
}

#[derive(Debug)]
struct LookupOutcome {
    generation: u64,
    pin: String,
    location: Option<Location>,
}

/// The wizard state machine.
///
/// All mutation happens on the caller's control thread; the only
/// asynchrony is the PIN lookup, whose completions funnel through an
/// internal channel drained by [`App::poll_lookups`].
#[derive(Debug)]
pub struct App {
    active: usize,
    values: FormValues,
    errors: FieldErrors,
    otp: OtpState,
    otp_input: OtpInput,
    focus: Focus,
    submission: Option<SubmissionPayload>,
    lookup_config: LookupConfig,
    lookup_generation: u64,
    lookup_tx: mpsc::UnboundedSender<LookupOutcome>,
    lookup_rx: mpsc::UnboundedReceiver<LookupOutcome>,
    should_quit: bool,
}

impl App {
    /// Create the wizard at step 0 with every field empty.
    ///
    /// Must be called within a tokio runtime: editing the PIN field spawns
    /// lookup tasks.
    #[must_use]
    pub fn new(lookup_config: LookupConfig) -> Self {
        let (lookup_tx, lookup_rx) = mpsc::unbounded_channel();
        Self {
            active: 0,
            values: FormValues::new(),
            errors: FieldErrors::default(),
            otp: OtpState::default(),
            otp_input: OtpInput::default(),
            focus: Focus::Field(0),
            submission: None,
            lookup_config,
            lookup_generation: 0,
            lookup_tx,
            lookup_rx,
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Unconditional value mutation. Does not run validation; that happens
    /// on blur and on step/submit attempts.
    ///
    /// Writes to unknown or derived fields are dropped (the lookup is the
    /// only writer of `state`/`city`). Editing the PIN schedules or
    /// supersedes a lookup.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if let Err(err) = self.values.set(name, value) {
            tracing::debug!(%err, "rejected field write");
            return;
        }
        if name == fields::PINCODE {
            self.pincode_changed();
        }
    }

    /// Run the field's validator and record the result.
    pub fn blur(&mut self, name: &str) {
        let Some(spec) = field_spec(name) else {
            return;
        };
        self.errors
            .record(spec.name, validate(spec.name, self.values.get(spec.name)));
    }

    /// Advance to the next step if the current step's fields validate and,
    /// on step 0, the OTP round is verified.
    pub fn next(&mut self) {
        if !self.validate_step() {
            return;
        }
        if self.active == 0 && !self.otp.verified() {
            self.otp.warn(VERIFY_OTP_FIRST);
            return;
        }
        self.active = (self.active + 1).min(steps().len() - 1);
        self.focus = Focus::Field(0);
    }

    /// Go back one step. Never validates.
    pub fn back(&mut self) {
        self.active = self.active.saturating_sub(1);
        self.focus = Focus::Field(0);
    }

    /// Issue a simulated OTP.
    ///
    /// Only the Aadhaar step carries the OTP round; elsewhere this is a
    /// no-op (a verified round must survive later steps, where no entry
    /// row exists to repair it). Also refused while a round is pending,
    /// and refused (with field errors surfaced) unless Aadhaar number and
    /// mobile independently validate.
    pub fn issue_otp(&mut self) {
        if self.active != 0 {
            return;
        }
        if self.otp.pending() {
            tracing::debug!("resend refused while OTP round is pending");
            return;
        }
        let aadhaar_ok = self.check_field(fields::AADHAAR_NUMBER);
        let mobile_ok = self.check_field(fields::MOBILE);
        if aadhaar_ok && mobile_ok {
            self.otp_input.clear();
            self.otp.issue();
        }
    }

    /// Verify the captured OTP entry against the issued code. A no-op
    /// until a code has been issued.
    pub fn verify_otp(&mut self) {
        if !self.otp.sent() {
            return;
        }
        let input = self.otp_input.value().to_string();
        self.otp.verify(&input);
    }

    /// Build the submission payload if global validity holds: every
    /// governed field across all steps passes and the OTP is verified.
    pub fn submit(&mut self) {
        if !self.all_valid() {
            self.otp.warn(FIX_ERRORS_FIRST);
            return;
        }
        let payload = SubmissionPayload::build(&self.values);
        tracing::info!("registration submitted");
        self.submission = Some(payload);
    }

    // ------------------------------------------------------------------
    // Focus and keystroke routing
    // ------------------------------------------------------------------

    /// Move focus to the next slot, blurring the field being left.
    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        let step = self.step();
        // The OTP row is an extra focus slot on step 0.
        let slots = step.fields.len() + usize::from(self.active == 0);
        let current = match self.focus {
            Focus::Field(index) => {
                if let Some(field) = step.fields.get(index) {
                    self.blur(field.name);
                }
                index
            }
            Focus::Otp => step.fields.len(),
        };
        let next = (current as isize + delta).rem_euclid(slots as isize) as usize;
        self.focus = if next < step.fields.len() {
            Focus::Field(next)
        } else {
            Focus::Otp
        };
    }

    /// Route a printable keystroke to the focused widget.
    pub fn input_char(&mut self, key: char) {
        match self.focus {
            Focus::Otp => {
                if self.otp_editable() {
                    self.otp_input.press_digit(key);
                }
            }
            Focus::Field(index) => {
                let Some(field) = self.step().fields.get(index) else {
                    return;
                };
                if field.read_only || key.is_control() {
                    return;
                }
                let current = self.values.get(field.name);
                if field
                    .max_length
                    .is_some_and(|max| current.chars().count() >= max)
                {
                    return;
                }
                let mut value = current.to_string();
                value.push(key);
                self.set_field(field.name, value);
            }
        }
    }

    pub fn input_backspace(&mut self) {
        match self.focus {
            Focus::Otp => {
                if self.otp_editable() {
                    self.otp_input.press_backspace();
                }
            }
            Focus::Field(index) => {
                let Some(field) = self.step().fields.get(index) else {
                    return;
                };
                if field.read_only {
                    return;
                }
                let mut value = self.values.get(field.name).to_string();
                value.pop();
                self.set_field(field.name, value);
            }
        }
    }

    /// OTP cells accept input only while a round is pending.
    #[must_use]
    pub fn otp_editable(&self) -> bool {
        self.otp.pending()
    }

    // ------------------------------------------------------------------
    // Lookup orchestration
    // ------------------------------------------------------------------

    fn pincode_changed(&mut self) {
        let pin = self.values.get(fields::PINCODE).to_string();
        if validate(fields::PINCODE, &pin).is_none() {
            self.schedule_lookup(pin);
        } else {
            // Supersede any in-flight lookup and clear synchronously: no
            // stale state/city may survive a PIN edit.
            self.lookup_generation += 1;
            self.values.clear_derived();
        }
    }

    fn schedule_lookup(&mut self, pin: String) {
        self.lookup_generation += 1;
        let generation = self.lookup_generation;
        let tx = self.lookup_tx.clone();
        let config = self.lookup_config.clone();
        tracing::debug!(pin, generation, "scheduling PIN lookup");
        tokio::spawn(async move {
            let location = udyam_lookup::lookup(&pin, &config).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(LookupOutcome {
                generation,
                pin,
                location,
            });
        });
    }

    /// Drain completed lookups, applying at most the current one.
    ///
    /// Call once per frame from the event loop.
    pub fn poll_lookups(&mut self) {
        while let Ok(outcome) = self.lookup_rx.try_recv() {
            self.apply_lookup(outcome);
        }
    }

    fn apply_lookup(&mut self, outcome: LookupOutcome) {
        if outcome.generation != self.lookup_generation {
            tracing::debug!(
                pin = %outcome.pin,
                generation = outcome.generation,
                "discarding superseded lookup result"
            );
            return;
        }
        if outcome.pin != self.values.get(fields::PINCODE) {
            return;
        }
        if let Some(location) = outcome.location {
            tracing::debug!(pin = %outcome.pin, state = %location.state, "PIN resolved");
            self.values.set_derived(location.state, location.city);
        }
    }

    // ------------------------------------------------------------------
    // Validation helpers
    // ------------------------------------------------------------------

    fn validate_step(&mut self) -> bool {
        let step = self.step();
        let mut ok = true;
        for field in step.fields {
            let error = validate(field.name, self.values.get(field.name));
            self.errors.record(field.name, error);
            ok &= error.is_none();
        }
        ok
    }

    fn check_field(&mut self, name: &'static str) -> bool {
        let error = validate(name, self.values.get(name));
        self.errors.record(name, error);
        error.is_none()
    }

    fn all_valid(&self) -> bool {
        governed_fields()
            .iter()
            .all(|name| validate(name, self.values.get(name)).is_none())
            && self.otp.verified()
    }

    // ------------------------------------------------------------------
    // Accessors for the presentation layer
    // ------------------------------------------------------------------

    #[must_use]
    pub fn active_step_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn step(&self) -> &'static StepSpec {
        &steps()[self.active]
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.active + 1 == steps().len()
    }

    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name)
    }

    #[must_use]
    pub fn error(&self, name: &str) -> Option<&'static str> {
        self.errors.get(name)
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn otp(&self) -> &OtpState {
        &self.otp
    }

    #[must_use]
    pub fn otp_input(&self) -> &OtpInput {
        &self.otp_input
    }

    /// Banner message (OTP transport echo, verification result, gating
    /// warnings).
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.otp.message()
    }

    #[must_use]
    pub fn message_tone(&self) -> MessageTone {
        self.otp.message_tone()
    }

    #[must_use]
    pub fn submission(&self) -> Option<&SubmissionPayload> {
        self.submission.as_ref()
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
