use crate::seek::clamp_seconds;
use crate::utils::{format_seconds_to_timestamp, parse_timestamp_to_seconds};
use log::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Playback position of a video with a known duration.
#[derive(Clone)]
pub struct SeekPosition {
    /// Current position in seconds, always within `[0, duration]`.
    pub seconds: f64,
    /// Last seek failure, cleared by the next successful seek.
    pub error: Option<String>,
    /// Move to a position; values past either end are clamped.
    pub seek_to: Callback<f64>,
    /// Report a failed seek (e.g. a collapsed seek-bar element).
    pub report_error: Callback<String>,
}

/// Custom hook tracking the playback position for a seek bar.
#[hook]
pub fn use_seek_position(duration: f64) -> SeekPosition {
    let seconds = use_state(|| 0.0_f64);
    let error = use_state(|| None::<String>);

    let seek_to = {
        let seconds = seconds.clone();
        let error = error.clone();
        Callback::from(move |target: f64| match clamp_seconds(target, duration) {
            Ok(clamped) => {
                seconds.set(clamped);
                error.set(None);
            }
            Err(e) => {
                warn!("Seek to {} rejected: {}", target, e);
                error.set(Some(e.to_string()));
            }
        })
    };

    let report_error = {
        let error = error.clone();
        Callback::from(move |msg: String| error.set(Some(msg)))
    };

    SeekPosition {
        seconds: *seconds,
        error: (*error).clone(),
        seek_to,
        report_error,
    }
}

/// Holds the state and callbacks for a "jump to time" text field.
#[derive(Clone)]
pub struct TimestampInput {
    /// The current text content of the input field.
    pub text: String,
    /// An optional error message if parsing failed.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event.
    pub on_text_input: Callback<InputEvent>,
    /// Parse the current text and hand the seconds to `on_valid`.
    pub on_commit: Callback<()>,
}

/// Custom hook for a timestamp input that forwards parsed seconds.
#[hook]
pub fn use_timestamp_input(initial_seconds: f64, on_valid: Callback<f64>) -> TimestampInput {
    let text = use_state(|| format_seconds_to_timestamp(initial_seconds));
    let error = use_state(|| None::<String>);

    let on_text_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };

    let on_commit = {
        let text = text.clone();
        let error = error.clone();
        Callback::from(move |_| match parse_timestamp_to_seconds(&text) {
            Ok(secs) => {
                // Rewrite to canonical form
                text.set(format_seconds_to_timestamp(secs));
                error.set(None);
                on_valid.emit(secs);
            }
            Err(msg) => error.set(Some(msg)),
        })
    };

    TimestampInput {
        text: (*text).clone(),
        error: (*error).clone(),
        on_text_input,
        on_commit,
    }
}
