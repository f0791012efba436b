use std::io::Write;
use std::sync::Mutex;

use eventia_domain::{Event, EventView, FilterChip};

const LOADING_CARDS: usize = 3;

/// Surface for things the event container does not paint.
pub trait ChipView: Send + Sync {
    fn render_chips(&self, chips: &[FilterChip]);
    fn show_message(&self, message: &str);
}

pub struct TerminalView<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lines(&self, lines: &[String]) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        for line in lines {
            let _ = writeln!(out, "{}", line);
        }
        let _ = out.flush();
    }
}

pub fn event_card(event: &Event) -> String {
    match &event.location_country {
        Some(loc) => format!(
            "* {}  [{} | location {}]",
            event.event_name, loc.country, loc.id
        ),
        None => format!("* {}  [no location]", event.event_name),
    }
}

impl<W: Write + Send> EventView for TerminalView<W> {
    fn clear(&self) {
        self.write_lines(&["-".repeat(40)]);
    }

    fn show_loading(&self) {
        let lines: Vec<String> = (0..LOADING_CARDS)
            .map(|_| "* ..........  [loading]".to_string())
            .collect();
        self.write_lines(&lines);
    }

    fn render_events(&self, events: &[Event]) {
        if events.is_empty() {
            self.write_lines(&["no events found".to_string()]);
            return;
        }
        let lines: Vec<String> = events.iter().map(event_card).collect();
        self.write_lines(&lines);
    }
}

impl<W: Write + Send> ChipView for TerminalView<W> {
    fn render_chips(&self, chips: &[FilterChip]) {
        if chips.is_empty() {
            self.write_lines(&["no filter chips".to_string()]);
            return;
        }
        let line = chips
            .iter()
            .map(|chip| format!("[{}] {}", if chip.active { "x" } else { " " }, chip.label))
            .collect::<Vec<_>>()
            .join("  ");
        self.write_lines(&[line]);
    }

    fn show_message(&self, message: &str) {
        self.write_lines(&[message.to_string()]);
    }
}
