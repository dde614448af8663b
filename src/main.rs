//! Demo client for the watch-party video helpers using Yew.
//! Renders a bundled search result with its seek bar and player state.

use log::{info, warn};
use party_video::{
    components::{PlayerStateBadge, SeekBar, VideoCard},
    config::{VideoUrlConfig, DEFAULT_VIDEO_SOURCE, DEMO_VIDEO_DURATION_SEC},
    get_video_details, get_video_url,
    hooks::{use_seek_position, use_timestamp_input},
    player_state::PlayerState,
    VideoDetails,
};
use serde_json::Value;
use yew::prelude::*;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// URL options for the page we are served from, so the embedded player
/// accepts messages from it.
fn url_config_for_page() -> VideoUrlConfig {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| VideoUrlConfig::default().with_origin(origin))
        .unwrap_or_default()
}

/// Load the bundled search result, reporting problems as display text.
fn load_sample_video() -> Result<VideoDetails, String> {
    let record: Value = serde_json::from_str(include_str!("sample_video.json"))
        .map_err(|e| format!("Failed to parse sample video: {}", e))?;
    match get_video_details(&record, DEFAULT_VIDEO_SOURCE) {
        Ok(Some(details)) => Ok(details),
        Ok(None) => Err(format!("Unknown video source: {}", DEFAULT_VIDEO_SOURCE)),
        Err(e) => Err(e.to_string()),
    }
}

#[function_component(Main)]
fn main_component() -> Html {
    let details = use_memo((), |_| load_sample_video());
    let url_config = use_memo((), |_| url_config_for_page());
    let player_state = use_state(|| PlayerState::Unstarted);
    let position = use_seek_position(DEMO_VIDEO_DURATION_SEC);
    let jump_input = use_timestamp_input(0.0, position.seek_to.clone());

    let on_seek = {
        let seek_to = position.seek_to.clone();
        Callback::from(move |seconds: f64| {
            info!("Seeking to {:.2}s", seconds);
            seek_to.emit(seconds);
        })
    };

    let set_state = |state: PlayerState| {
        let player_state = player_state.clone();
        Callback::from(move |_: MouseEvent| player_state.set(state))
    };

    let on_jump_keydown = {
        let on_commit = jump_input.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_commit.emit(());
            }
        })
    };

    let card = match &*details {
        Ok(details) => {
            let url = get_video_url(DEFAULT_VIDEO_SOURCE, &details.id, &url_config);
            if url.is_none() {
                warn!("No playback URL for video {}", details.id);
            }
            html! { <VideoCard details={details.clone()} {url} /> }
        }
        Err(msg) => html! { <div class="error-message">{ msg.clone() }</div> },
    };

    html! {
        <div class="container">
            <h1>{ "Watch Party" }</h1>
            { card }

            <div class="player-controls">
                <PlayerStateBadge state={*player_state} />
                <button onclick={set_state(PlayerState::Playing)}>{ "Play" }</button>
                <button onclick={set_state(PlayerState::Paused)}>{ "Pause" }</button>
                <button onclick={set_state(PlayerState::Buffering)}>{ "Buffer" }</button>
                <button onclick={set_state(PlayerState::Ended)}>{ "End" }</button>
            </div>

            <SeekBar
                current={position.seconds}
                duration={DEMO_VIDEO_DURATION_SEC}
                {on_seek}
                on_error={position.report_error.clone()}
            />
            if let Some(err) = position.error.clone() {
                <div class="error-message">{ err }</div>
            }

            <div class="form-group">
                <label for="jump">{ "Jump to:" }</label>
                <input type="text"
                    id="jump"
                    value={jump_input.text.clone()}
                    oninput={jump_input.on_text_input.clone()}
                    onchange={jump_input.on_commit.reform(|_: Event| ())}
                    onkeydown={on_jump_keydown}
                />
                if let Some(err) = jump_input.error.clone() {
                    <div class="error-message">{ err }</div>
                }
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and renders the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
