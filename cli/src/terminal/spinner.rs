use colored::*;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];
const TIP: &str = "press 'q' to leave the page";

/// Spinner shown while a page is busy. Cleared on drop.
pub struct PageSpinner {
    _span: Span,
}

impl PageSpinner {
    pub fn start(page: &'static str, busy_text: &str, show_tip: bool) -> Self {
        let span = info_span!("page", page, indicatif.pb_show = true);
        span.pb_set_style(&style());

        let message = if show_tip {
            format!("{} {}", busy_text, format!("({TIP})").italic().bright_black())
        } else {
            busy_text.to_string()
        };
        span.pb_set_message(&message);
        span.in_scope(|| {});

        Self { _span: span }
    }
}

fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}
