use serde::{Deserialize, Serialize};

use crate::sources::Spot;

/// Messages from the logging program's main window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "UPPERCASE")]
pub enum Packet {
    /// The log changed; results may be stale.
    UpdateLog,
    /// The operator edited the call sign field.
    CallChanged {
        #[serde(default)]
        call: String,
    },
    /// A fresh list of cluster spots.
    CheckSpots {
        #[serde(default)]
        spots: Vec<Spot>,
    },
    /// The logger switched to another database.
    NewDb,
}

/// Messages back to the main window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "UPPERCASE")]
pub enum Outbound {
    /// Replace the call sign field with a picked suggestion.
    ChangeCall { call: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inbound_packets() {
        let packet: Packet = serde_json::from_str(r#"{"cmd": "CALLCHANGED", "call": "W1AW"}"#).unwrap();
        assert_eq!(packet, Packet::CallChanged { call: "W1AW".to_string() });

        let packet: Packet = serde_json::from_str(r#"{"cmd": "CALLCHANGED"}"#).unwrap();
        assert_eq!(packet, Packet::CallChanged { call: String::new() });

        let packet: Packet = serde_json::from_str(r#"{"cmd": "UPDATELOG"}"#).unwrap();
        assert_eq!(packet, Packet::UpdateLog);

        let packet: Packet = serde_json::from_str(r#"{"cmd": "NEWDB"}"#).unwrap();
        assert_eq!(packet, Packet::NewDb);

        let packet: Packet =
            serde_json::from_str(r#"{"cmd": "CHECKSPOTS", "spots": [{"callsign": "K1AW"}]}"#).unwrap();
        match packet {
            Packet::CheckSpots { spots } => assert_eq!(spots[0].callsign.as_deref(), Some("K1AW")),
            other => panic!("unexpected packet {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command_is_an_error() {
        assert!(serde_json::from_str::<Packet>(r#"{"cmd": "HALT"}"#).is_err());
    }

    #[test]
    fn test_outbound_wire_format() {
        let json = serde_json::to_value(Outbound::ChangeCall { call: "K1AW".to_string() }).unwrap();
        assert_eq!(json, serde_json::json!({"cmd": "CHANGECALL", "call": "K1AW"}));
    }
}
