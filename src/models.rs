use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Targeting and payload for a single send call.
///
/// Fields are public so a message can be assembled directly; [`Message::new`]
/// covers the common single-recipient case. `to`, `registration_ids` and
/// `condition` are mutually exclusive at the API level, but the client does
/// not enforce that locally; the server rejects conflicting targeting.
///
/// see: https://firebase.google.com/docs/cloud-messaging/http-server-ref#table1
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    /// Single recipient registration token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,

    /// Multicast target list. Response results are index-aligned with
    /// this list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub registration_ids: Vec<String>,

    /// Topic condition expression, e.g. `'news' in topics`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub condition: String,

    // collapse_key and priority are always emitted, even at their
    // zero values; the legacy schema treats them as required keys.
    pub collapse_key: String,
    pub priority: i32,

    #[serde(skip_serializing_if = "is_false")]
    pub content_available: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub delay_while_idle: bool,

    /// Message lifetime in seconds; zero means server default.
    #[serde(skip_serializing_if = "is_zero")]
    pub time_to_live: u32,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub restricted_package_name: String,

    /// Ask the server to validate the request without delivering it.
    #[serde(skip_serializing_if = "is_false")]
    pub dry_run: bool,

    /// Opaque application payload, delivered to the client app.
    #[serde(skip_serializing_if = "Payload::is_empty")]
    pub data: Payload,

    /// Display notification payload, rendered by the platform.
    #[serde(skip_serializing_if = "Payload::is_empty")]
    pub notification: Payload,
}

impl Message {
    /// Returns a message addressed to a single recipient token, with
    /// empty `data` and `notification` payloads ready to fill in.
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            ..Self::default()
        }
    }

    /// Sets the multicast target list.
    pub fn with_registration_ids(mut self, ids: Vec<String>) -> Self {
        self.registration_ids = ids;
        self
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// Open-ended key/value payload (the `data` and `notification` blocks).
///
/// Values may be any JSON value: strings, numbers, booleans, arrays or
/// nested objects. Contents are opaque to the client and pass through
/// serialization unchanged. Keys are unique; insertion order is not
/// significant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Inserts a key/value pair, returning the previous value when the
    /// key was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Aggregate server reply for one request.
///
/// see: https://firebase.google.com/docs/cloud-messaging/http-server-ref#table5
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    pub multicast_id: i64,
    pub success: u32,
    pub failure: u32,
    pub canonical_ids: u32,
    /// Per-recipient outcomes, in request order.
    pub results: Vec<SendResult>,
}

/// Per-recipient outcome inside a [`Response`].
///
/// Exactly one of `message_id` and `error` is populated. A
/// `registration_id` accompanies a success when the server reassigned a
/// canonical token; the caller should replace its stored token with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SendResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
