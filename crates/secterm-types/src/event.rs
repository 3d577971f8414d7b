//! Side-effect events handed from the dispatcher to the host.
//!
//! Events are fire-and-forget: the core never waits on the host to act on
//! them. The set is closed so a host can match exhaustively instead of
//! sniffing strings. Serialized with an internal `kind` tag:
//!
//! ```text
//! {"kind":"alert","duration_ms":5000}
//! {"kind":"navigate","target":{"region":"europe"}}
//! ```

use serde::{Deserialize, Serialize};

/// A map destination the host knows how to fly to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    /// A region key, as listed by `regions`.
    Region(String),
    /// A company name, as listed by `companies`.
    Company(String),
}

impl NavTarget {
    pub fn name(&self) -> &str {
        match self {
            NavTarget::Region(name) | NavTarget::Company(name) => name,
        }
    }
}

impl std::fmt::Display for NavTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavTarget::Region(name) => write!(f, "region {}", name),
            NavTarget::Company(name) => write!(f, "company {}", name),
        }
    }
}

/// Orders for the unmanned vehicle fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UxvAction {
    Launch { target: NavTarget },
    Recall,
    Status,
}

/// A structured message for the host to act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// Raise the intrusion alert for `duration_ms`. The host owns the timer.
    Alert { duration_ms: u64 },
    /// An easter egg was unlocked.
    Unlock { id: String },
    /// Reset the visible scrollback.
    Clear,
    /// Move the map camera.
    Navigate { target: NavTarget },
    /// Play the scan sweep, over one target or everything.
    Scan { target: Option<NavTarget> },
    /// Forward an order to the drone layer.
    Uxv { action: UxvAction },
    /// Close the overlay; the session should be discarded.
    Close,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_kind_tag() {
        let json = serde_json::to_value(Event::Alert { duration_ms: 5000 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "alert", "duration_ms": 5000}));

        let json = serde_json::to_value(Event::Clear).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "clear"}));

        let json = serde_json::to_value(Event::Navigate {
            target: NavTarget::Region("europe".into()),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "navigate", "target": {"region": "europe"}})
        );
    }

    #[test]
    fn uxv_action_nests_under_kind() {
        let event = Event::Uxv {
            action: UxvAction::Launch {
                target: NavTarget::Company("Acme".into()),
            },
        };
        let text = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&text).unwrap();
        assert_eq!(back, event);
        assert!(text.contains(r#""action":"launch""#));
    }
}
