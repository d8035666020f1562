//! Submission sink: where submitted form data goes

use crate::state::FormData;
use anyhow::Result;
use chrono::{DateTime, Local};

/// Receipt for one emitted submission
#[derive(Debug, Clone)]
pub struct Submission {
    /// The serialized mapping as it was emitted
    pub payload: String,
    pub at: DateTime<Local>,
}

/// Destination for submitted form data, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Emit the current mapping and return a receipt for it
    fn submit(&mut self, data: &FormData) -> Result<Submission>;
}

/// Sink that writes submissions to the tracing log stream
#[derive(Debug, Default)]
pub struct LogSink {
    pretty: bool,
}

impl LogSink {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl SubmissionSink for LogSink {
    fn submit(&mut self, data: &FormData) -> Result<Submission> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        tracing::info!(target: "contact_tui::submission", %payload, "form data submitted");
        Ok(Submission {
            payload,
            at: Local::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{update, FieldId, FormData, FormEvent};
    use pretty_assertions::assert_eq;

    fn edited(pairs: &[(FieldId, &str)]) -> FormData {
        let mut data = FormData::default();
        for (field, value) in pairs {
            data = update(
                data,
                &FormEvent::FieldChanged {
                    field: *field,
                    value: value.to_string(),
                },
            );
        }
        data
    }

    #[test]
    fn test_empty_form_emits_empty_mapping() {
        let mut sink = LogSink::new(false);
        let submission = sink.submit(&FormData::default()).unwrap();
        assert_eq!(submission.payload, r#"{"name":"","email":"","message":""}"#);
    }

    #[test]
    fn test_payload_contains_exactly_the_three_keys() {
        let data = edited(&[
            (FieldId::Name, "Ann"),
            (FieldId::Email, "a@x.com"),
            (FieldId::Message, "Hi"),
        ]);
        let mut sink = LogSink::new(false);
        let submission = sink.submit(&data).unwrap();

        let value: serde_json::Value = serde_json::from_str(&submission.payload).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["name"], "Ann");
        assert_eq!(obj["email"], "a@x.com");
        assert_eq!(obj["message"], "Hi");
    }

    #[test]
    fn test_resubmit_without_edits_is_identical() {
        let data = edited(&[(FieldId::Name, "Ann")]);
        let mut sink = LogSink::new(false);
        let first = sink.submit(&data).unwrap();
        let second = sink.submit(&data).unwrap();
        assert_eq!(first.payload, second.payload);
    }

    #[test]
    fn test_pretty_payload_parses_to_same_mapping() {
        let data = edited(&[(FieldId::Message, "line one\nline two")]);
        let compact = LogSink::new(false).submit(&data).unwrap();
        let pretty = LogSink::new(true).submit(&data).unwrap();

        let a: serde_json::Value = serde_json::from_str(&compact.payload).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty.payload).unwrap();
        assert_eq!(a, b);
    }
}
