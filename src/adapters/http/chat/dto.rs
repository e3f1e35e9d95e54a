//! HTTP DTOs for chat relay endpoints.
//!
//! Request fields are optional at the serde level so that presence checks
//! (and their exact error messages) stay in the handlers.

use serde::{Deserialize, Serialize};

use crate::ports::{RunStatus, ThreadMessage};

// ----- Request DTOs -----

/// Body of POST /chat/send.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[serde(default)]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of POST /chat/list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesRequest {
    #[serde(default)]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub run_id: Option<String>,
}

// ----- Response DTOs -----

/// Response of POST /chat/new.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewThreadResponse {
    pub thread_id: String,
}

/// Response of POST /chat/send.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub run_id: String,
}

/// Response of POST /chat/list.
///
/// `status` is omitted entirely when the request carried no run id.
#[derive(Debug, Clone, Serialize)]
pub struct ListMessagesResponse {
    pub messages: Vec<ThreadMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod send_message_request {
        use super::*;

        #[test]
        fn deserializes_camel_case_fields() {
            let req: SendMessageRequest =
                serde_json::from_str(r#"{"threadId":"t1","text":"hi"}"#).unwrap();
            assert_eq!(req.thread_id.as_deref(), Some("t1"));
            assert_eq!(req.text.as_deref(), Some("hi"));
        }

        #[test]
        fn missing_fields_deserialize_as_none() {
            let req: SendMessageRequest = serde_json::from_str("{}").unwrap();
            assert!(req.thread_id.is_none());
            assert!(req.text.is_none());
        }
    }

    mod list_messages_request {
        use super::*;

        #[test]
        fn run_id_is_optional() {
            let req: ListMessagesRequest = serde_json::from_str(r#"{"threadId":"t1"}"#).unwrap();
            assert_eq!(req.thread_id.as_deref(), Some("t1"));
            assert!(req.run_id.is_none());
        }
    }

    mod responses {
        use super::*;

        #[test]
        fn new_thread_serializes_camel_case() {
            let json = serde_json::to_string(&NewThreadResponse {
                thread_id: "t1".to_string(),
            })
            .unwrap();
            assert_eq!(json, r#"{"threadId":"t1"}"#);
        }

        #[test]
        fn send_message_serializes_camel_case() {
            let json = serde_json::to_string(&SendMessageResponse {
                run_id: "r1".to_string(),
            })
            .unwrap();
            assert_eq!(json, r#"{"runId":"r1"}"#);
        }

        #[test]
        fn list_response_omits_status_when_none() {
            let json = serde_json::to_string(&ListMessagesResponse {
                messages: Vec::new(),
                status: None,
            })
            .unwrap();
            assert_eq!(json, r#"{"messages":[]}"#);
        }

        #[test]
        fn list_response_includes_status_when_present() {
            let json = serde_json::to_string(&ListMessagesResponse {
                messages: Vec::new(),
                status: Some(RunStatus::InProgress),
            })
            .unwrap();
            assert_eq!(json, r#"{"messages":[],"status":"in_progress"}"#);
        }
    }
}
