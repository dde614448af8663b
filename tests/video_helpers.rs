//! Public API checks for the video helpers and the action-type vocabulary.

use party_video::action_types::{registry, ActionType};
use party_video::config::VideoUrlConfig;
use party_video::player_state::{PlayerState, PlayerStateEvent};
use party_video::seek::{pixels_to_seconds, seconds_at_pointer, seconds_to_pixels, ElementBounds};
use party_video::{get_video_details, get_video_url, get_youtube_player_state, VideoError};
use pretty_assertions::assert_eq;
use serde_json::json;

fn search_result(video_id: &str) -> serde_json::Value {
    json!({
        "kind": "youtube#searchResult",
        "id": { "kind": "youtube#video", "videoId": video_id },
        "snippet": {
            "title": format!("Video {}", video_id),
            "description": "Party pick",
            "thumbnails": {
                "medium": { "url": format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", video_id) }
            }
        }
    })
}

#[test]
fn search_result_to_playback_url() {
    let details = get_video_details(&search_result("abc123"), "youtube")
        .expect("well-formed record")
        .expect("youtube is a known source");
    assert_eq!(details.title, "Video abc123");
    assert_eq!(details.description, "Party pick");
    assert_eq!(details.thumbnail_src, "https://i.ytimg.com/vi/abc123/mqdefault.jpg");

    let config = VideoUrlConfig::default().with_origin("https://party.example.com");
    let url = get_video_url("youtube", &details.id, &config).expect("youtube url");
    assert!(url.contains("v=abc123"));
    assert!(url.contains("origin=https%3A%2F%2Fparty.example.com"));
}

#[test]
fn unknown_providers_are_silent() {
    assert_eq!(get_video_details(&search_result("abc123"), "unknown"), Ok(None));
    assert_eq!(get_video_url("vimeo", "abc123", &VideoUrlConfig::default()), None);
}

#[test]
fn malformed_record_is_reported_not_panicked() {
    let mut record = search_result("abc123");
    record["snippet"]
        .as_object_mut()
        .expect("snippet object")
        .remove("title");
    assert_eq!(
        get_video_details(&record, "youtube"),
        Err(VideoError::MalformedProviderRecord { field: "/snippet/title" })
    );
}

#[test]
fn seek_bar_example_from_docs() {
    // 342px into a 1000px bar is 171s into a 500s video
    assert_eq!(pixels_to_seconds(342.0, 1000.0, 500.0), Ok(171.0));
    assert_eq!(seconds_to_pixels(171.0, 1000.0, 500.0), Ok(342.0));

    let bounds = ElementBounds {
        left: 100.0,
        top: 0.0,
        width: 1000.0,
        height: 8.0,
    };
    assert_eq!(seconds_at_pointer(100.0, 4.0, &bounds, 500.0), Ok(0.0));
    assert_eq!(seconds_at_pointer(1100.0, 4.0, &bounds, 500.0), Ok(500.0));
}

#[test]
fn player_state_labels() {
    let label = |data| get_youtube_player_state(&PlayerStateEvent { data });
    assert_eq!(label(-1), "unstarted");
    assert_eq!(label(2), "paused");
    assert_eq!(label(99), "paused");
    assert_eq!(label(5), "video cued");
    assert_eq!(PlayerState::from_code(3).to_string(), "buffering");
}

#[test]
fn action_type_in_message_envelope() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Envelope {
        #[serde(rename = "type")]
        kind: ActionType,
        payload: serde_json::Value,
    }

    let raw = r#"{"type":"WS_TO_CLIENT_SET_PARTY_ID","payload":{"partyId":"p1"}}"#;
    let envelope: Envelope = serde_json::from_str(raw).expect("valid envelope");
    assert_eq!(envelope.kind, ActionType::SetPartyId);
    assert_eq!(serde_json::to_string(&envelope).expect("serializable"), raw);

    assert_eq!(registry().count(), ActionType::ALL.len());
}
