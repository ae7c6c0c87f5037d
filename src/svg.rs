use chrono::TimeZone;

use crate::render::{Report, format_count, format_date, group_thousands, title};

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_COL_CHARS: usize = 50;

#[derive(Clone, Copy)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
            },
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark_mode.svg",
            Theme::Light => "light_mode.svg",
        }
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(String),
    Blank,
    Stat { key: String, value: String, today: bool },
}

fn report_lines<Tz: TimeZone>(report: &Report<Tz>) -> Vec<Line> {
    let mut lines = vec![
        Line::Header(format!("born@{}", report.birth.naive_local().date())),
        Line::Stat {
            key: "Born".to_string(),
            value: format_date(&report.birth),
            today: false,
        },
        Line::Stat {
            key: "Age".to_string(),
            value: report.age.clone(),
            today: false,
        },
        Line::Blank,
        Line::Header("- Milestones".to_string()),
    ];

    for record in &report.milestones {
        lines.push(Line::Stat {
            key: title(record.unit),
            value: format!(
                "{} -> {}",
                group_thousands(record.current),
                format_count(record.selected, record.unit)
            ),
            today: false,
        });
        lines.push(Line::Stat {
            key: "  on".to_string(),
            value: format_date(&record.target_date),
            today: record.is_today,
        });
    }

    lines
}

/// Main SVG generation function
pub fn generate_svg<Tz: TimeZone>(report: &Report<Tz>, theme: Theme) -> String {
    let colors = theme.colors();
    let lines = report_lines(report);

    let align_width = lines
        .iter()
        .map(|line| match line {
            Line::Stat { key, value, .. } => key.len() + 2 + value.len(),
            Line::Header(text) => text.len(),
            Line::Blank => 0,
        })
        .max()
        .unwrap_or(0)
        .max(MIN_COL_CHARS);

    let mut tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;
        let x = LEFT_PADDING;

        match line {
            Line::Blank => {}
            Line::Header(label) => {
                tspans.push_str(&format!(
                    r#"<tspan x="{x}" y="{y}">{}</tspan>
"#,
                    escape_xml(&build_header_line(label, align_width))
                ));
            }
            Line::Stat { key, value, today } => {
                let (k, d, v) = build_stat_row(key, value, align_width);
                let class = if *today { "today" } else { "value" };
                tspans.push_str(&format!(
                    r#"<tspan x="{x}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="{class}">{}</tspan>
"#,
                    escape_xml(&k),
                    escape_xml(&d),
                    escape_xml(&v)
                ));
            }
        }
    }

    let w = LEFT_PADDING + (align_width as f32 + 2.0) * CHAR_WIDTH + RIGHT_PADDING;
    let h = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key   {{ fill: {key}; }}
.value {{ fill: {value}; }}
.cc    {{ fill: {cc}; }}
.today {{ fill: #3fb950; font-weight: bold; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text fill="{text}">
{body}
</text>

</svg>
"#,
        w = w,
        h = h,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        body = tspans
    )
}
