use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Simulated network latency before the success notice appears.
pub const SEND_DELAY_MS: u64 = 1000;
/// How long the success notice stays visible.
pub const NOTICE_HIDE_MS: u64 = 5000;
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: BTreeMap<Field, &'static str>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Error messages in field order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.values().map(|m| m.to_string()).collect()
    }
}

pub fn is_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate(form: &FormSubmission) -> Validation {
    let mut errors = BTreeMap::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_email(&form.email) {
        errors.insert(Field::Email, "Please enter a valid email");
    }

    if form.subject.trim().is_empty() {
        errors.insert(Field::Subject, "Subject is required");
    }

    // length in UTF-16 units, as the browser reports it
    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, "Message is required");
    } else if message.encode_utf16().count() < MIN_MESSAGE_LEN {
        errors.insert(Field::Message, "Message must be at least 10 characters");
    }

    Validation { errors }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Notice {
    #[default]
    Hidden,
    Success,
    Errors(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Valid input; the caller waits [`SEND_DELAY_MS`] then calls `complete_send`.
    Accepted,
    Rejected(Validation),
    /// A simulated send is already in flight.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    sending: bool,
    notice: Notice,
    generation: u32,
}

impl ContactFormState {
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn submit(&mut self, form: &FormSubmission) -> SubmitOutcome {
        if self.sending {
            return SubmitOutcome::Ignored;
        }
        let validation = validate(form);
        if validation.is_valid() {
            self.sending = true;
            SubmitOutcome::Accepted
        } else {
            self.notice = Notice::Errors(validation.messages());
            SubmitOutcome::Rejected(validation)
        }
    }

    /// Finishes the simulated send and shows the success notice. The returned
    /// token is handed back to [`ContactFormState::dismiss_success`].
    pub fn complete_send(&mut self) -> u32 {
        self.sending = false;
        self.notice = Notice::Success;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Hides the success notice unless a later send replaced it.
    pub fn dismiss_success(&mut self, generation: u32) -> bool {
        if self.notice == Notice::Success && self.generation == generation {
            self.notice = Notice::Hidden;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> FormSubmission {
        FormSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_missing_name() {
        let v = validate(&form("", "a@b.com", "x", "1234567890"));
        assert!(!v.is_valid());
        assert_eq!(v.errors.len(), 1);
        assert_eq!(v.error(Field::Name), Some("Name is required"));
    }

    #[test]
    fn test_bad_email() {
        let v = validate(&form("A", "bad", "x", "1234567890"));
        assert!(!v.is_valid());
        assert_eq!(v.errors.len(), 1);
        assert_eq!(v.error(Field::Email), Some("Please enter a valid email"));
    }

    #[test]
    fn test_short_message() {
        let v = validate(&form("A", "a@b.com", "x", "short"));
        assert!(!v.is_valid());
        assert_eq!(v.errors.len(), 1);
        assert_eq!(
            v.error(Field::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_valid_form() {
        let v = validate(&form("A", "a@b.com", "x", "1234567890"));
        assert!(v.is_valid());
        assert!(v.errors.is_empty());
    }

    #[test]
    fn test_whitespace_only_fields() {
        let v = validate(&form("   ", " ", "\t", "  \n "));
        assert_eq!(
            v.messages(),
            vec![
                "Name is required",
                "Email is required",
                "Subject is required",
                "Message is required",
            ]
        );
    }

    #[test]
    fn test_message_length_counts_trimmed_utf16_units() {
        assert!(!validate(&form("A", "a@b.com", "x", "  123456789  ")).is_valid());
        assert!(validate(&form("A", "a@b.com", "x", "ééééééééèè")).is_valid());
        // five emoji are ten UTF-16 units
        assert!(validate(&form("A", "a@b.com", "x", "🙂🙂🙂🙂🙂")).is_valid());
        assert!(!validate(&form("A", "a@b.com", "x", "🙂🙂🙂🙂")).is_valid());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_email("first.last@example.co.uk"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("a@@b.com"));
        assert!(!is_email(" a@b.com"));
    }

    #[test]
    fn test_submit_sequence() {
        let mut state = ContactFormState::default();
        assert!(!state.is_sending());

        let outcome = state.submit(&form("A", "a@b.com", "x", "1234567890"));
        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert!(state.is_sending());
        assert_eq!(state.notice(), &Notice::Hidden);

        // the control is disabled, a second submit does nothing
        assert_eq!(
            state.submit(&form("A", "a@b.com", "x", "1234567890")),
            SubmitOutcome::Ignored
        );

        let generation = state.complete_send();
        assert!(!state.is_sending());
        assert_eq!(state.notice(), &Notice::Success);

        assert!(state.dismiss_success(generation));
        assert_eq!(state.notice(), &Notice::Hidden);
    }

    #[test]
    fn test_rejected_submit_shows_errors_immediately() {
        let mut state = ContactFormState::default();
        let outcome = state.submit(&form("", "bad", "x", "1234567890"));
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert!(!state.is_sending());
        assert_eq!(
            state.notice(),
            &Notice::Errors(vec![
                "Name is required".to_string(),
                "Please enter a valid email".to_string()
            ])
        );
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut state = ContactFormState::default();
        let valid = form("A", "a@b.com", "x", "1234567890");

        state.submit(&valid);
        let first = state.complete_send();
        state.submit(&valid);
        let second = state.complete_send();

        assert!(!state.dismiss_success(first));
        assert_eq!(state.notice(), &Notice::Success);
        assert!(state.dismiss_success(second));
        assert_eq!(state.notice(), &Notice::Hidden);
    }

    #[test]
    fn test_dismiss_does_not_hide_errors() {
        let mut state = ContactFormState::default();
        state.submit(&form("A", "a@b.com", "x", "1234567890"));
        let generation = state.complete_send();
        state.submit(&form("", "a@b.com", "x", "1234567890"));

        assert!(!state.dismiss_success(generation));
        assert!(matches!(state.notice(), Notice::Errors(_)));
    }
}
