use serde::{Deserialize, Serialize};

/// GitHub repository event actor.
///
/// Events emitted by deleted or anonymized accounts may lack a login.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhEventActor {
    /// Username.
    #[serde(default)]
    pub login: Option<String>,
}

/// GitHub repository event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhEvent {
    /// Event type, e.g. `PushEvent`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Actor.
    #[serde(default)]
    pub actor: Option<GhEventActor>,
}

impl GhEvent {
    /// Build an event with an actor login.
    pub fn from_actor(login: &str) -> Self {
        Self {
            kind: None,
            actor: Some(GhEventActor {
                login: Some(login.into()),
            }),
        }
    }

    /// Actor login, if any.
    pub fn actor_login(&self) -> Option<&str> {
        self.actor.as_ref().and_then(|a| a.login.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserialize() {
        let events: Vec<GhEvent> = serde_json::from_str(
            r#"[
                {"id": "1", "type": "PushEvent", "actor": {"id": 1, "login": "someone"}},
                {"id": "2", "type": "WatchEvent", "actor": {"id": 2}},
                {"id": "3", "type": "WatchEvent", "actor": null},
                {"id": "4"}
            ]"#,
        )
        .unwrap();

        assert_eq!(events[0].kind.as_deref(), Some("PushEvent"));
        assert_eq!(events[0].actor_login(), Some("someone"));
        assert_eq!(events[1].actor_login(), None);
        assert_eq!(events[2].actor_login(), None);
        assert_eq!(events[3].actor_login(), None);
    }
}
