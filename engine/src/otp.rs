//! Simulated OTP issuance, verification, and the digit-cell entry editor.
//!
//! The "transport" is a message echoed back to the user containing the
//! generated code. No delivery channel exists; the code is compared in
//! memory only.

/// Number of digits in an OTP code.
pub const OTP_LENGTH: usize = 6;

/// How the current banner message should be presented.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

/// Lifecycle of one OTP round: unsent, sent-pending, verified.
#[derive(Debug, Default, Clone)]
pub struct OtpState {
    sent: bool,
    server_code: String,
    verified: bool,
    message: Option<String>,
    tone: MessageTone,
}

impl OtpState {
    /// Generate a fresh code and mark it sent.
    ///
    /// Caller is responsible for the preconditions (Aadhaar/mobile valid,
    /// no round pending); this only performs the state change.
    pub(crate) fn issue(&mut self) {
        let code: u32 = rand::random_range(100_000..=999_999);
        self.server_code = code.to_string();
        self.sent = true;
        self.verified = false;
        self.message = Some(format!(
            "Simulated OTP sent to your mobile. (Code: {code})"
        ));
        self.tone = MessageTone::Info;
    }

    /// Compare user input against the issued code.
    pub(crate) fn verify(&mut self, input: &str) -> bool {
        if input.len() == OTP_LENGTH && input == self.server_code {
            self.verified = true;
            self.message = Some("\u{2705} OTP verified successfully.".to_string());
            self.tone = MessageTone::Success;
            true
        } else {
            self.message = Some("\u{274c} Invalid OTP. Please try again.".to_string());
            self.tone = MessageTone::Error;
            false
        }
    }

    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.tone = MessageTone::Warning;
    }

    #[must_use]
    pub fn sent(&self) -> bool {
        self.sent
    }

    #[must_use]
    pub fn verified(&self) -> bool {
        self.verified
    }

    /// A round is pending once sent and until verified; resends are
    /// refused in this window.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.sent && !self.verified
    }

    /// The issued code. Exposed because the simulated transport already
    /// echoes it to the user; there is nothing to keep secret in a demo.
    #[must_use]
    pub fn server_code(&self) -> &str {
        &self.server_code
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Tone of the current message; meaningless while no message is set.
    #[must_use]
    pub fn message_tone(&self) -> MessageTone {
        self.tone
    }
}

/// Digit-by-digit OTP entry, one cursor over six cells.
///
/// Mirrors the usual boxed-input widget: a digit keystroke inserts or
/// overwrites at the cursor and advances it (unless already on the last
/// cell); backspace deletes the digit left of the cursor and retreats.
/// Non-digit keys are ignored and the captured value never exceeds six
/// digits.
#[derive(Debug, Default, Clone)]
pub struct OtpInput {
    digits: String,
    cursor: usize,
}

impl OtpInput {
    pub fn press_digit(&mut self, key: char) {
        if !key.is_ascii_digit() {
            return;
        }
        if self.cursor < self.digits.len() {
            // Overwrite in place. Cells hold single ASCII digits, so byte
            // indexing is safe.
            self.digits
                .replace_range(self.cursor..=self.cursor, &key.to_string());
        } else if self.digits.len() < OTP_LENGTH {
            self.digits.push(key);
        }
        if self.cursor < OTP_LENGTH - 1 {
            self.cursor += 1;
        }
    }

    pub fn press_backspace(&mut self) {
        if self.cursor > 0 {
            self.digits.remove(self.cursor - 1);
            self.cursor -= 1;
        }
    }

    pub fn clear(&mut self) {
        self.digits.clear();
        self.cursor = 0;
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.digits
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Digit shown in cell `index`, if one has been captured.
    #[must_use]
    pub fn digit_at(&self, index: usize) -> Option<char> {
        self.digits.as_bytes().get(index).map(|b| *b as char)
    }
}
