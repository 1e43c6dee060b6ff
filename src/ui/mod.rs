//! Full-screen renderer. Stateless: everything it needs for one tick comes
//! in through [`View`], and all output is clipped to the terminal bounds.

pub mod palette;

use crate::weather::Reading;
use palette::{humidity_hue, precipitation_hue, temperature_hue, HIGHLIGHT};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Number of frames in the breathing header motif.
pub const FRAME_COUNT: usize = 4;

/// Snapshot of display state for one render tick, owned by the refresh loop.
pub struct View<'a> {
    pub reading: Option<&'a Reading>,
    /// Location label shown in the header (the ZIP code).
    pub location: &'a str,
    /// Text inside the breathing brackets: "live", or the log file's stem.
    pub ticker_label: &'a str,
    pub frame_index: usize,
    pub debug: bool,
    /// URLs attempted by the most recent fetch; empty before the first one.
    pub urls: &'a [String],
    pub log_error: Option<&'a str>,
}

pub fn render(frame: &mut Frame, view: &View) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let Some(reading) = view.reading else {
        draw_centered(
            frame,
            area,
            area.height / 2,
            Line::from("Fetching weather data..."),
        );
        return;
    };

    // four content lines sit around the vertical center
    let anchor = (area.height / 2).saturating_sub(2);

    draw_centered(frame, area, anchor, header_line(view));
    draw_centered(frame, area, anchor + 1, conditions_line(reading));
    draw_centered(frame, area, anchor + 2, wind_line(reading));
    draw_centered(frame, area, anchor + 3, precipitation_line(reading));

    if view.debug {
        let mut y = anchor.saturating_add(4);
        for (index, url) in view.urls.iter().enumerate() {
            draw_left(frame, area, y, Line::from(format!("API {}: {url}", index + 1)));
            y = y.saturating_add(1);
        }
        if let Some(error) = view.log_error {
            draw_left(
                frame,
                area,
                y,
                Line::from(Span::styled(
                    format!("log error: {error}"),
                    Style::default().fg(HIGHLIGHT.color()),
                )),
            );
        }
    }
}

fn draw_centered(frame: &mut Frame, area: Rect, y: u16, line: Line) {
    draw_row(frame, area, y, Paragraph::new(line).alignment(Alignment::Center));
}

fn draw_left(frame: &mut Frame, area: Rect, y: u16, line: Line) {
    draw_row(frame, area, y, Paragraph::new(line).alignment(Alignment::Left));
}

fn draw_row(frame: &mut Frame, area: Rect, y: u16, paragraph: Paragraph) {
    if y >= area.height {
        return;
    }
    let row = Rect::new(area.x, area.y + y, area.width, 1);
    frame.render_widget(paragraph, row);
}

fn header_line(view: &View) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{} ", view.location))];
    let motif = frame_text(view.ticker_label, view.frame_index);
    for segment in frame_segments(&motif) {
        let span = if segment.highlighted {
            Span::styled(segment.text, Style::default().fg(HIGHLIGHT.color()))
        } else {
            Span::raw(segment.text)
        };
        spans.push(span);
    }
    Line::from(spans)
}

fn conditions_line(reading: &Reading) -> Line<'static> {
    let temperature = format!("{:.0}°F", reading.temperature_f);
    let humidity = format!("{}% RH", reading.humidity_pct);
    Line::from(vec![
        Span::styled(
            temperature,
            Style::default().fg(temperature_hue(reading.temperature_f).color()),
        ),
        Span::raw(" :: "),
        Span::styled(
            humidity,
            Style::default().fg(humidity_hue(reading.humidity_pct).color()),
        ),
    ])
}

fn wind_line(reading: &Reading) -> Line<'static> {
    Line::from(format!(
        "wind {} {:.0}mph ({:.0}mph)",
        reading.wind_direction, reading.wind_speed_mph, reading.wind_gust_mph
    ))
}

fn precipitation_line(reading: &Reading) -> Line<'static> {
    Line::from(Span::styled(
        format!("{:.2}\"/h precipitation", reading.precipitation_in),
        Style::default().fg(precipitation_hue(reading.precipitation_in).color()),
    ))
}

/// One run of header text; highlighted segments are the bracket glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    text: String,
    highlighted: bool,
}

/// The four breathing states, from fully open to fully closed brackets.
fn frame_text(label: &str, frame_index: usize) -> String {
    match frame_index % FRAME_COUNT {
        0 => format!("   {label}   "),
        1 => format!("  ({label})  "),
        2 => format!(" ( {label} ) "),
        _ => format!("(  {label}  )"),
    }
}

fn frame_segments(frame_text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    for ch in frame_text.chars() {
        if ch == '(' || ch == ')' {
            if !current.is_empty() {
                segments.push(Segment {
                    text: std::mem::take(&mut current),
                    highlighted: false,
                });
            }
            segments.push(Segment {
                text: ch.to_string(),
                highlighted: true,
            });
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        segments.push(Segment {
            text: current,
            highlighted: false,
        });
    }
    segments
}
