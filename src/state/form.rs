use crate::api::ApiResult;
use crate::models::{NewNote, Note, NoteAdded};
use crate::state::ack::Ack;
use thiserror::Error;

pub(crate) const TITLE_MAX_CHARS: usize = 25;
pub(crate) const BODY_MAX_CHARS: usize = 500;

pub(crate) const INVALID_FORM_MESSAGE: &str = "Please fill in both fields correctly.";
pub(crate) const CREATED_TOAST_MS: u32 = 1500;

/// Field constraint violations, mirroring `required` + `maxlength`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("The title should be 0 to 25 characters long.")]
    Title,
    #[error("The content must be between 0 and 500 characters.")]
    Body,
}

// Required means non-empty; whitespace counts as content.
fn within(value: &str, max_chars: usize) -> bool {
    !value.is_empty() && value.chars().count() <= max_chars
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    if within(title, TITLE_MAX_CHARS) {
        Ok(())
    } else {
        Err(ValidationError::Title)
    }
}

pub(crate) fn validate_body(body: &str) -> Result<(), ValidationError> {
    if within(body, BODY_MAX_CHARS) {
        Ok(())
    } else {
        Err(ValidationError::Body)
    }
}

pub(crate) fn validate_note(title: &str, body: &str) -> Result<NewNote, ValidationError> {
    validate_title(title)?;
    validate_body(body)?;
    Ok(NewNote {
        title: title.to_string(),
        body: body.to_string(),
    })
}

/// Live hint under a field once the user has typed into it.
pub(crate) fn field_hint(touched: bool, check: Result<(), ValidationError>) -> Option<String> {
    if !touched {
        return None;
    }
    check.err().map(|e| e.to_string())
}

/// What the form does once the create request settles: the ack to show and,
/// on success, the notification to publish.
pub(crate) fn creation_outcome(
    submitted: NewNote,
    result: &ApiResult<Option<Note>>,
) -> (Ack, Option<NoteAdded>) {
    match result {
        Ok(_) => (
            Ack::toast("Note added successfully!", CREATED_TOAST_MS),
            Some(NoteAdded::from(submitted)),
        ),
        Err(_) => (Ack::failure("Failed to create note"), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::state::ack::AckMode;

    #[test]
    fn test_accepts_every_length_up_to_the_limits() {
        for t in 1..=TITLE_MAX_CHARS {
            for b in [1, 250, BODY_MAX_CHARS] {
                let title = "t".repeat(t);
                let body = "b".repeat(b);
                let n = validate_note(&title, &body).expect("should be valid");
                assert_eq!(n.title, title);
                assert_eq!(n.body, body);
            }
        }
    }

    #[test]
    fn test_rejects_title_of_26_chars() {
        let err = validate_note(&"x".repeat(26), "body").expect_err("too long");
        assert_eq!(err, ValidationError::Title);
    }

    #[test]
    fn test_rejects_body_of_501_chars() {
        let err = validate_note("title", &"x".repeat(501)).expect_err("too long");
        assert_eq!(err, ValidationError::Body);
    }

    #[test]
    fn test_required_rejects_empty_but_not_whitespace() {
        assert_eq!(validate_note("", "b"), Err(ValidationError::Title));
        assert_eq!(validate_note("t", ""), Err(ValidationError::Body));
        assert!(validate_note(" ", " ").is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(title.len() > TITLE_MAX_CHARS);
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn test_field_hint_only_after_touch() {
        assert_eq!(field_hint(false, validate_title("")), None);
        assert_eq!(
            field_hint(true, validate_title("")),
            Some("The title should be 0 to 25 characters long.".to_string())
        );
        assert_eq!(field_hint(true, validate_body("ok")), None);
    }

    #[test]
    fn test_creation_success_publishes_submitted_fields() {
        let submitted = NewNote {
            title: "A".to_string(),
            body: "b".to_string(),
        };
        let (ack, added) = creation_outcome(submitted, &Ok(None));
        assert_eq!(ack.mode, AckMode::Success);
        assert_eq!(ack.timer_ms, Some(CREATED_TOAST_MS));
        assert_eq!(
            added,
            Some(NoteAdded {
                title: "A".to_string(),
                body: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_creation_failure_publishes_nothing() {
        let submitted = NewNote {
            title: "A".to_string(),
            body: "b".to_string(),
        };
        let (ack, added) =
            creation_outcome(submitted, &Err(ApiError::Network("down".to_string())));
        assert_eq!(ack.mode, AckMode::Error);
        assert!(added.is_none());
    }
}
