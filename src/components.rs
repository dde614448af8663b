//! Pure Yew view components for the watch-party client.
//!
//! These components render from props only; playback state lives in the
//! hooks and the app shell.

use crate::config::SEEK_BAR_AXIS_WIDTH;
use crate::player_state::PlayerState;
use crate::seek::{get_amount_of_seconds_at_x_pos, seconds_to_pixels};
use crate::utils::format_seconds_to_timestamp;
use crate::VideoDetails;
use yew::prelude::*;

/// Card showing a video's thumbnail, title and description, with an
/// optional link to the provider's playback page.
#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub details: VideoDetails,
    #[prop_or_default]
    pub url: Option<String>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let details = &props.details;
    html! {
        <div class="video-card" data-video-id={details.id.clone()}>
            <img class="video-thumbnail" src={details.thumbnail_src.clone()} alt={details.title.clone()} />
            <div class="video-info">
                <h3 class="video-title">{ details.title.clone() }</h3>
                <p class="video-description">{ details.description.clone() }</p>
                { match &props.url {
                    Some(url) => html!{
                        <a class="video-link" href={url.clone()} target="_blank">{ "Watch" }</a>
                    },
                    None => html!{},
                } }
            </div>
        </div>
    }
}

/// Clickable seek bar.
///
/// The whole bar is the seek target: a click anywhere on it emits the time
/// under the pointer. The fill is sized on a 0-100 axis so it scales with
/// the bar without measuring it.
#[derive(Properties, PartialEq)]
pub struct SeekBarProps {
    pub current: f64,
    pub duration: f64,
    pub on_seek: Callback<f64>,
    #[prop_or_default]
    pub on_error: Callback<String>,
}

#[function_component(SeekBar)]
pub fn seek_bar(props: &SeekBarProps) -> Html {
    let onclick = {
        let duration = props.duration;
        let on_seek = props.on_seek.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |e: MouseEvent| {
            match get_amount_of_seconds_at_x_pos(&e, duration) {
                Ok(seconds) => on_seek.emit(seconds),
                Err(err) => on_error.emit(err.to_string()),
            }
        })
    };

    let fill_pct = seconds_to_pixels(props.current, SEEK_BAR_AXIS_WIDTH, props.duration)
        .unwrap_or(0.0)
        .clamp(0.0, SEEK_BAR_AXIS_WIDTH);

    html! {
        <div class="seek-bar-container">
            <div class="seek-bar" {onclick}>
                // The fill must not become the event target, the bar is measured instead.
                <div class="seek-bar-fill"
                    style={format!("width: {:.3}%; pointer-events: none;", fill_pct)} />
            </div>
            <span class="seek-bar-time">{
                format!("{} / {}",
                        format_seconds_to_timestamp(props.current),
                        format_seconds_to_timestamp(props.duration))
            }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlayerStateBadgeProps {
    pub state: PlayerState,
}

#[function_component(PlayerStateBadge)]
pub fn player_state_badge(props: &PlayerStateBadgeProps) -> Html {
    let class = classes!("player-state", props.state.label().replace(' ', "-"));
    html! {
        <span {class}>{ props.state.label() }</span>
    }
}
