//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`, plus
//! the label/formatting helpers the display is built from. The helpers stay
//! pure so the display rules can be tested without a terminal.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, PlaybackState};
use crate::config::UiSettings;

/// Format a `Duration` as `minutes:seconds`: minutes unpadded, seconds
/// zero-padded to two digits.
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// The `elapsed / duration` time stamp. An unknown duration renders as 0.
pub fn time_label(elapsed: Duration, duration: Option<Duration>) -> String {
    format!(
        "{} / {}",
        format_clock(elapsed),
        format_clock(duration.unwrap_or_default())
    )
}

/// The now-playing banner for a track's display label.
pub fn now_playing_label(display: &str) -> String {
    format!("❆ {} ❆", display)
}

/// One playlist row. Exactly one row per frame gets `active = true`: the
/// track currently loaded by the playback thread.
pub fn row_label(display: &str, prefix: &str, active: bool) -> String {
    if active {
        format!("❆ {}", display)
    } else {
        format!("{}{}", prefix, display)
    }
}

/// The mute control's icon for the current state.
pub fn mute_icon(muted: bool) -> &'static str {
    if muted { "🕨" } else { "🕪" }
}

/// The play/pause indicator, mirroring actual playback state.
fn playback_icon(playback: PlaybackState) -> &'static str {
    match playback {
        PlaybackState::Playing => "⏸",
        PlaybackState::Paused | PlaybackState::Stopped => "▶",
    }
}

/// Render the entire UI into the provided `frame` using `app` state.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" flurry ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let active = app.active_index();

    // Status box: transport indicator, now-playing banner, time stamp,
    // volume/mute, shuffle, source.
    let status = {
        let mut parts: Vec<String> = Vec::new();

        parts.push(format!("[{}]", playback_icon(app.playback)));

        if let Some(ref h) = app.playback_handle {
            if let Ok(info) = h.lock() {
                if let Some(idx) = info.index {
                    if let Some(track) = app.tracks.get(idx) {
                        parts.push(now_playing_label(&track.display));
                        if let Some(name) =
                            track.artwork.as_deref().and_then(|p| p.file_name())
                        {
                            parts.push(format!("Art: {}", name.to_string_lossy()));
                        }
                    }
                    parts.push(time_label(info.elapsed, info.duration));
                }
            }
        }

        if let Some(buf) = app.volume_input.as_deref() {
            parts.push(format!("Volume: {}_", buf));
        } else if app.volume.muted {
            parts.push(format!("{} muted", mute_icon(true)));
        } else {
            parts.push(format!("{} {:.2}", mute_icon(false), app.volume.level));
        }

        if app.shuffle {
            parts.push("Shuffle: ON".to_string());
        } else {
            parts.push("Shuffle: OFF".to_string());
        }

        if let Some(source) = &app.current_source {
            parts.push(format!("Source: {}", source));
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Playlist: one row per track, the active one visually marked.
    let items: Vec<ListItem> = app
        .tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let is_active = active == Some(i);
            let label = row_label(&track.display, &ui_settings.track_prefix, is_active);
            let item = ListItem::new(label);
            if is_active {
                item.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" playlist "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if app.has_tracks() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, chunks[2], &mut state);

    // Footer
    let footer_text = if app.entering_volume() {
        "type a volume (0..1), [enter] apply, [esc] cancel".to_string()
    } else {
        controls_text()
    };
    let footer = Paragraph::new(footer_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

/// Render the controls help text.
fn controls_text() -> String {
    [
        "[j/k] up/down",
        "[enter] play",
        "[space/p] play/pause",
        "[h/l] prev/next",
        "[s] shuffle",
        "[m] mute",
        "[-/+] volume",
        "[v] set volume",
        "[gg/G] top/bottom",
        "[q] quit",
    ]
    .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_clock_pads_seconds_not_minutes() {
        assert_eq!(format_clock(Duration::from_secs(0)), "0:00");
        assert_eq!(format_clock(Duration::from_secs(5)), "0:05");
        assert_eq!(format_clock(Duration::from_secs(75)), "1:15");
        assert_eq!(format_clock(Duration::from_secs(125)), "2:05");
        assert_eq!(format_clock(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn time_label_defaults_unknown_duration_to_zero() {
        assert_eq!(
            time_label(Duration::from_secs(75), Some(Duration::from_secs(125))),
            "1:15 / 2:05"
        );
        assert_eq!(time_label(Duration::from_secs(5), None), "0:05 / 0:00");
    }

    #[test]
    fn row_label_marks_only_the_active_row() {
        assert_eq!(row_label("Song", "❄  ", false), "❄  Song");
        assert_eq!(row_label("Song", "❄  ", true), "❆ Song");
    }

    #[test]
    fn mute_icon_tracks_state() {
        assert_eq!(mute_icon(true), "🕨");
        assert_eq!(mute_icon(false), "🕪");
    }
}
