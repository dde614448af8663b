//! Message types the party server sends to its clients over the websocket.
//!
//! Variants serialize to their wire token, so an `ActionType` can sit
//! directly in a message envelope's `type` field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    // Party
    #[serde(rename = "WS_TO_CLIENT_SET_PARTY_ID")]
    SetPartyId,
    #[serde(rename = "WS_TO_CLIENT_SET_PARTY_STATE")]
    SetPartyState,
    #[serde(rename = "WS_TO_CLIENT_SET_SELECTED_VIDEO")]
    SetSelectedVideo,
    #[serde(rename = "WS_TO_CLIENT_SET_PARTY_PLAYER_STATE")]
    SetPartyPlayerState,
    #[serde(rename = "WS_TO_CLIENT_SET_USERS_IN_PARTY")]
    SetUsersInParty,
    #[serde(rename = "WS_TO_CLIENT_PARTY_MESSAGE_RECEIVED")]
    PartyMessageReceived,
}

impl ActionType {
    pub const ALL: [ActionType; 6] = [
        ActionType::SetPartyId,
        ActionType::SetPartyState,
        ActionType::SetSelectedVideo,
        ActionType::SetPartyPlayerState,
        ActionType::SetUsersInParty,
        ActionType::PartyMessageReceived,
    ];

    /// Wire token.
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionType::SetPartyId => "WS_TO_CLIENT_SET_PARTY_ID",
            ActionType::SetPartyState => "WS_TO_CLIENT_SET_PARTY_STATE",
            ActionType::SetSelectedVideo => "WS_TO_CLIENT_SET_SELECTED_VIDEO",
            ActionType::SetPartyPlayerState => "WS_TO_CLIENT_SET_PARTY_PLAYER_STATE",
            ActionType::SetUsersInParty => "WS_TO_CLIENT_SET_USERS_IN_PARTY",
            ActionType::PartyMessageReceived => "WS_TO_CLIENT_PARTY_MESSAGE_RECEIVED",
        }
    }

    /// Symbolic name used by dispatch code.
    pub const fn name(self) -> &'static str {
        match self {
            ActionType::SetPartyId => "SET_PARTY_ID",
            ActionType::SetPartyState => "SET_PARTY_STATE",
            ActionType::SetSelectedVideo => "SET_SELECTED_VIDEO",
            ActionType::SetPartyPlayerState => "SET_PARTY_PLAYER_STATE",
            ActionType::SetUsersInParty => "SET_USERS_IN_PARTY",
            ActionType::PartyMessageReceived => "PARTY_MESSAGE_RECEIVED",
        }
    }
}

/// `(name, token)` pairs in declaration order.
pub fn registry() -> impl Iterator<Item = (&'static str, &'static str)> {
    ActionType::ALL.into_iter().map(|a| (a.name(), a.as_str()))
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown action type: {0}")]
pub struct UnknownActionType(pub String);

impl FromStr for ActionType {
    type Err = UnknownActionType;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        ActionType::ALL
            .into_iter()
            .find(|a| a.as_str() == token)
            .ok_or_else(|| UnknownActionType(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn tokens_are_unique() {
        let tokens: HashSet<_> = ActionType::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(tokens.len(), ActionType::ALL.len());
    }

    #[test]
    fn token_is_prefixed_name() {
        for action in ActionType::ALL {
            assert_eq!(action.as_str(), format!("WS_TO_CLIENT_{}", action.name()));
        }
    }

    #[test]
    fn serializes_as_token() {
        let json = serde_json::to_string(&ActionType::SetPartyId).unwrap();
        assert_eq!(json, r#""WS_TO_CLIENT_SET_PARTY_ID""#);

        let parsed: ActionType =
            serde_json::from_str(r#""WS_TO_CLIENT_PARTY_MESSAGE_RECEIVED""#).unwrap();
        assert_eq!(parsed, ActionType::PartyMessageReceived);
    }

    #[test]
    fn parses_tokens_but_not_names() {
        assert_eq!(
            "WS_TO_CLIENT_SET_USERS_IN_PARTY".parse::<ActionType>(),
            Ok(ActionType::SetUsersInParty)
        );
        assert_eq!(
            "SET_USERS_IN_PARTY".parse::<ActionType>(),
            Err(UnknownActionType("SET_USERS_IN_PARTY".into()))
        );
    }

    #[test]
    fn registry_keeps_declaration_order() {
        let names: Vec<_> = registry().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "SET_PARTY_ID",
                "SET_PARTY_STATE",
                "SET_SELECTED_VIDEO",
                "SET_PARTY_PLAYER_STATE",
                "SET_USERS_IN_PARTY",
                "PARTY_MESSAGE_RECEIVED",
            ]
        );
    }
}
