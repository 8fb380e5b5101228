//! One-way event envelopes crossing the host/viewer boundary.
//!
//! Every message is `{"type": "...", "payload": "..."}` where `payload` is a
//! string whose shape depends on `type`:
//!
//! | direction | type | payload |
//! |---|---|---|
//! | host → viewer | `HighlightPointsList` | `{"points": ["..."]}` |
//! | host → viewer | `SelectPoint` | raw point name |
//! | host → viewer | `ClearAllHighlights` | ignored |
//! | host → viewer | `ResetCamera` | ignored |
//! | viewer → host | `VIEWER_LOADED` | ignored |
//! | viewer → host | `PointClicked` | raw scene object name |
//!
//! Decoding is strict: a message that does not parse is reported as a
//! [`ProtocolError`] and must be dropped without touching highlight state.

use constants::protocol::{
    CLEAR_ALL_HIGHLIGHTS, HIGHLIGHT_POINTS_LIST, POINT_CLICKED, RESET_CAMERA, SELECT_POINT,
    VIEWER_LOADED,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire form of every boundary event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: String,
}

impl Envelope {
    pub fn new(kind: &str, payload: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            payload: payload.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(json).map_err(ProtocolError::MalformedEnvelope)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ProtocolError> {
        serde_json::from_value(value).map_err(ProtocolError::MalformedEnvelope)
    }

    pub fn to_json(&self) -> String {
        // A struct of two strings always serializes.
        serde_json::json!({ "type": self.kind, "payload": self.payload }).to_string()
    }
}

/// Payload of `HighlightPointsList`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointList {
    pub points: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),
    #[error("unknown event type `{0}`")]
    UnknownEventType(String),
    #[error("malformed `{kind}` payload: {source}")]
    MalformedPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Host → viewer commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerCommand {
    HighlightPointsList(Vec<String>),
    SelectPoint(String),
    ClearAllHighlights,
    ResetCamera,
}

impl ViewerCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HighlightPointsList(_) => HIGHLIGHT_POINTS_LIST,
            Self::SelectPoint(_) => SELECT_POINT,
            Self::ClearAllHighlights => CLEAR_ALL_HIGHLIGHTS,
            Self::ResetCamera => RESET_CAMERA,
        }
    }

    pub fn to_envelope(&self) -> Envelope {
        let payload = match self {
            Self::HighlightPointsList(points) => {
                serde_json::json!({ "points": points }).to_string()
            }
            Self::SelectPoint(name) => name.clone(),
            Self::ClearAllHighlights | Self::ResetCamera => String::new(),
        };
        Envelope::new(self.kind(), payload)
    }

    pub fn from_envelope(envelope: &Envelope) -> Result<Self, ProtocolError> {
        match envelope.kind.as_str() {
            HIGHLIGHT_POINTS_LIST => {
                let list: PointList = serde_json::from_str(&envelope.payload).map_err(|source| {
                    ProtocolError::MalformedPayload {
                        kind: envelope.kind.clone(),
                        source,
                    }
                })?;
                Ok(Self::HighlightPointsList(list.points))
            }
            SELECT_POINT => Ok(Self::SelectPoint(envelope.payload.clone())),
            CLEAR_ALL_HIGHLIGHTS => Ok(Self::ClearAllHighlights),
            RESET_CAMERA => Ok(Self::ResetCamera),
            other => Err(ProtocolError::UnknownEventType(other.to_string())),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Self::from_envelope(&Envelope::from_json(json)?)
    }
}

/// Viewer → host reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerReport {
    Loaded,
    PointClicked(String),
}

impl ViewerReport {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Loaded => VIEWER_LOADED,
            Self::PointClicked(_) => POINT_CLICKED,
        }
    }

    pub fn to_envelope(&self) -> Envelope {
        match self {
            Self::Loaded => Envelope::new(VIEWER_LOADED, ""),
            Self::PointClicked(name) => Envelope::new(POINT_CLICKED, name.clone()),
        }
    }

    pub fn from_envelope(envelope: &Envelope) -> Result<Self, ProtocolError> {
        match envelope.kind.as_str() {
            VIEWER_LOADED => Ok(Self::Loaded),
            POINT_CLICKED => Ok(Self::PointClicked(envelope.payload.clone())),
            other => Err(ProtocolError::UnknownEventType(other.to_string())),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Self::from_envelope(&Envelope::from_json(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn highlight_list_wire_shape() {
        let command = ViewerCommand::HighlightPointsList(vec![
            "6_Porchai_L".to_string(),
            "6_Porchai_R".to_string(),
        ]);
        let envelope = command.to_envelope();

        assert_eq!(envelope.kind, "HighlightPointsList");
        let payload: serde_json::Value =
            serde_json::from_str(&envelope.payload).expect("payload is json");
        assert_eq!(
            payload,
            serde_json::json!({ "points": ["6_Porchai_L", "6_Porchai_R"] })
        );

        let wire: serde_json::Value =
            serde_json::from_str(&envelope.to_json()).expect("envelope is json");
        assert_eq!(wire["type"], "HighlightPointsList");
        assert!(wire["payload"].is_string());
    }

    #[test]
    fn decodes_host_commands() {
        let json = r#"{"type":"HighlightPointsList","payload":"{\"points\":[\"Porchai\"]}"}"#;
        assert_eq!(
            ViewerCommand::from_json(json).expect("valid command"),
            ViewerCommand::HighlightPointsList(vec!["Porchai".to_string()])
        );
        assert_eq!(
            ViewerCommand::from_json(r#"{"type":"SelectPoint","payload":"12_AasanKaalam"}"#)
                .expect("valid command"),
            ViewerCommand::SelectPoint("12_AasanKaalam".to_string())
        );
        assert_eq!(
            ViewerCommand::from_json(r#"{"type":"ClearAllHighlights","payload":"anything"}"#)
                .expect("payload ignored"),
            ViewerCommand::ClearAllHighlights
        );
        assert_eq!(
            ViewerCommand::from_json(r#"{"type":"ResetCamera"}"#).expect("payload optional"),
            ViewerCommand::ResetCamera
        );
    }

    #[test]
    fn malformed_list_payload_is_rejected() {
        let envelope = Envelope::new(HIGHLIGHT_POINTS_LIST, "[\"Porchai\"]");
        assert!(matches!(
            ViewerCommand::from_envelope(&envelope),
            Err(ProtocolError::MalformedPayload { ref kind, .. }) if kind == HIGHLIGHT_POINTS_LIST
        ));

        let envelope = Envelope::new(HIGHLIGHT_POINTS_LIST, "{\"points\": \"Porchai\"}");
        assert!(ViewerCommand::from_envelope(&envelope).is_err());
    }

    #[test]
    fn malformed_envelope_is_rejected() {
        assert!(matches!(
            ViewerCommand::from_json("not json"),
            Err(ProtocolError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            ViewerCommand::from_json(r#"{"payload":"x"}"#),
            Err(ProtocolError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(matches!(
            ViewerCommand::from_json(r#"{"type":"HighlightPoint","payload":"x"}"#),
            Err(ProtocolError::UnknownEventType(ref kind)) if kind == "HighlightPoint"
        ));
        // Reports and commands do not share a namespace.
        assert!(ViewerCommand::from_json(r#"{"type":"VIEWER_LOADED"}"#).is_err());
        assert!(ViewerReport::from_json(r#"{"type":"SelectPoint","payload":"x"}"#).is_err());
    }

    #[test]
    fn viewer_reports() {
        assert_eq!(
            ViewerReport::from_json(r#"{"type":"VIEWER_LOADED","payload":""}"#)
                .expect("valid report"),
            ViewerReport::Loaded
        );
        let clicked = ViewerReport::PointClicked("45_Thoosiga_R".to_string());
        assert_eq!(
            ViewerReport::from_json(&clicked.to_envelope().to_json()).expect("valid report"),
            clicked
        );
    }
}
