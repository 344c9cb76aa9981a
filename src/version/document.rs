//! Semantic document codec (JSON-LD)
//!
//! A document carries the semantic fields in structural form together with
//! the provenance of the value:
//!
//! ```json
//! {
//!   "@context": "https://gitlab.com/willynilly/verple/-/raw/main/src/verple/context/v1.0.0.jsonld",
//!   "@type": "Verple",
//!   "verple": "1.0.0",
//!   "sourceFormat": "pep440",
//!   "sourceInput": "1.2.3a1.post2.dev3+build99",
//!   "release": [1, 2, 3],
//!   "prerelease": ["a", 1],
//!   "postrelease": 2,
//!   "devrelease": 3,
//!   "local": "build99"
//! }
//! ```
//!
//! Decoding dispatches on the `verple` field. Every protocol version owns its
//! decoder; unknown versions are rejected outright. Within a known version,
//! extra fields are ignored and missing required fields are errors.
//!
//! Any change to the document shape requires a new protocol version with
//! its own context URL and decoder.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::adapter::Format;
use crate::version::error::ProtocolError;
use crate::version::value::{InvalidField, Prerelease, Provenance, SemanticFields, Version};

/// JSON-LD `@type` of every Verple document
pub const DOCUMENT_TYPE: &str = "Verple";

/// Versions of the document protocol this crate can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    V1_0_0,
}

impl Protocol {
    /// Protocol written by [`to_document`]
    pub const CURRENT: Protocol = Protocol::V1_0_0;

    /// Value of the `verple` field
    pub fn tag(&self) -> &'static str {
        match self {
            Protocol::V1_0_0 => "1.0.0",
        }
    }

    /// Version-pinned `@context` URL
    pub fn context(&self) -> &'static str {
        match self {
            Protocol::V1_0_0 => {
                "https://gitlab.com/willynilly/verple/-/raw/main/src/verple/context/v1.0.0.jsonld"
            }
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "1.0.0" => Some(Protocol::V1_0_0),
            _ => None,
        }
    }

    fn decode(&self, object: &Map<String, Value>) -> Result<Version, ProtocolError> {
        match self {
            Protocol::V1_0_0 => decode_v1_0_0(object),
        }
    }
}

/// Wire shape of protocol 1.0.0
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentV1_0_0 {
    #[serde(rename = "@context")]
    context: String,
    #[serde(rename = "@type")]
    doc_type: String,
    verple: String,
    source_format: Format,
    source_input: String,
    release: Vec<u64>,
    #[serde(default)]
    prerelease: Option<(String, u64)>,
    #[serde(default)]
    postrelease: Option<u64>,
    #[serde(default)]
    devrelease: Option<u64>,
    #[serde(default)]
    local: Option<String>,
}

const REQUIRED_V1_0_0: [&str; 6] = [
    "@context",
    "@type",
    "verple",
    "sourceFormat",
    "sourceInput",
    "release",
];

impl DocumentV1_0_0 {
    fn from_version(version: &Version) -> Self {
        let protocol = Protocol::V1_0_0;
        Self {
            context: protocol.context().to_string(),
            doc_type: DOCUMENT_TYPE.to_string(),
            verple: protocol.tag().to_string(),
            source_format: version.source_format(),
            source_input: version.source_input().to_string(),
            release: version.release().to_vec(),
            prerelease: version
                .prerelease()
                .map(|pre| (pre.label().to_string(), pre.number())),
            postrelease: version.postrelease(),
            devrelease: version.devrelease(),
            local: version.local().map(str::to_string),
        }
    }

    fn into_version(self) -> Result<Version, InvalidField> {
        let prerelease = self
            .prerelease
            .map(|(label, number)| Prerelease::new(label, number))
            .transpose()?;
        let fields = SemanticFields::new(
            self.release,
            prerelease,
            self.postrelease,
            self.devrelease,
            self.local,
        )?;
        Ok(Version::new(
            fields,
            Provenance::new(self.source_input, self.source_format),
        ))
    }
}

/// Encode `version` as a document of the current protocol
pub fn to_document(version: &Version) -> Value {
    serde_json::to_value(DocumentV1_0_0::from_version(version))
        .expect("document fields are strings, integers and options")
}

/// Decode a document of any supported protocol version
pub fn from_document(document: &Value) -> Result<Version, ProtocolError> {
    let object = document
        .as_object()
        .ok_or_else(|| ProtocolError::MalformedDocument("document must be an object".to_string()))?;

    let tag = match object.get("verple") {
        None => return Err(ProtocolError::MissingField("verple".to_string())),
        Some(Value::String(tag)) => tag,
        Some(other) => {
            return Err(ProtocolError::MalformedDocument(format!(
                "'verple' must be a string, got {}",
                other
            )));
        }
    };

    let protocol = Protocol::from_tag(tag).ok_or_else(|| {
        warn!("Rejecting document with unsupported protocol '{}'", tag);
        ProtocolError::UnsupportedVersion(tag.clone())
    })?;

    protocol.decode(object)
}

/// Render the current-protocol document as JSON text with fields in wire order
pub fn to_json_string(version: &Version, pretty: bool) -> String {
    let document = DocumentV1_0_0::from_version(version);
    let rendered = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    rendered.expect("document fields are strings, integers and options")
}

/// Parse JSON text and decode it as a document
pub fn from_json_str(json: &str) -> Result<Version, ProtocolError> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| ProtocolError::MalformedDocument(e.to_string()))?;
    from_document(&document)
}

fn decode_v1_0_0(object: &Map<String, Value>) -> Result<Version, ProtocolError> {
    if let Some(missing) = REQUIRED_V1_0_0
        .iter()
        .find(|field| !object.contains_key(**field))
    {
        return Err(ProtocolError::MissingField(missing.to_string()));
    }

    let document = DocumentV1_0_0::deserialize(Value::Object(object.clone()))
        .map_err(|e| ProtocolError::MalformedDocument(e.to_string()))?;

    if document.doc_type != DOCUMENT_TYPE {
        return Err(ProtocolError::MalformedDocument(format!(
            "'@type' must be '{}', got '{}'",
            DOCUMENT_TYPE, document.doc_type
        )));
    }
    let expected_context = Protocol::V1_0_0.context();
    if document.context != expected_context {
        return Err(ProtocolError::MalformedDocument(format!(
            "'@context' must be '{}' for protocol {}",
            expected_context,
            Protocol::V1_0_0.tag()
        )));
    }

    document
        .into_version()
        .map_err(|InvalidField(reason)| ProtocolError::MalformedDocument(reason))
}

impl Version {
    /// Semantic document of the current protocol, see [`to_document`]
    pub fn to_document(&self) -> Value {
        to_document(self)
    }

    /// Decode a semantic document, see [`from_document`]
    pub fn from_document(document: &Value) -> Result<Version, ProtocolError> {
        from_document(document)
    }
}
