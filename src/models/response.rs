use serde_json::Value;

/// What a parsed mutation body said about itself. Only a string `status` of
/// `"success"` counts as success; other shapes keep the fields they could.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl StatusMessage {
    fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        StatusMessage {
            status: text("status"),
            message: text("message"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// A mutation reply is either JSON or plain text. Plain text is how the
/// backend answers some successful deletes, so it is a first-class variant
/// rather than a parse failure.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationReply {
    Structured(StatusMessage),
    Opaque(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Succeeded(Option<String>),
    Failed(Option<String>),
}

impl MutationReply {
    /// Any body that parses as JSON is structured, whatever its shape.
    pub fn decode(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => MutationReply::Structured(StatusMessage::from_value(&value)),
            Err(_) => MutationReply::Opaque(body.to_string()),
        }
    }

    pub fn outcome(self) -> MutationOutcome {
        match self {
            MutationReply::Structured(envelope) => {
                let success = envelope.is_success();
                let message = envelope.message.filter(|m| !m.is_empty());
                if success {
                    MutationOutcome::Succeeded(message)
                } else {
                    MutationOutcome::Failed(message)
                }
            }
            MutationReply::Opaque(text) => {
                let text = text.trim();
                MutationOutcome::Succeeded((!text.is_empty()).then(|| text.to_string()))
            }
        }
    }
}
