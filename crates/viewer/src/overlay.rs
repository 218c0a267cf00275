//! Shared overlay composition: section headers, instruction/legend panels,
//! node detail panels, CTA rows. All shells draw through these so the chrome
//! reads the same across sections.

use content::{DetailLevel, PanelContent};
use renderer::{OverlayTextBuilder, GLYPH_PX_H, GLYPH_PX_W};

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const GRAY: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
pub const DIM: [f32; 4] = [0.5, 0.5, 0.55, 1.0];
pub const GOLD: [f32; 4] = [0.83, 0.69, 0.22, 1.0];
pub const CYAN: [f32; 4] = [0.0, 0.83, 1.0, 1.0];
pub const GREEN: [f32; 4] = [0.0, 1.0, 0.53, 1.0];
pub const PINK: [f32; 4] = [1.0, 0.0, 0.4, 1.0];

fn line_height(scale: f32) -> f32 {
    GLYPH_PX_H * scale + 4.0
}

/// Two-tone centered section header with subtitle.
pub fn section_header(
    tb: &mut OverlayTextBuilder,
    sw: f32,
    first: &str,
    second: &str,
    subtitle: &str,
) {
    let scale = 3.0;
    let gap = GLYPH_PX_W * scale;
    let first_w = OverlayTextBuilder::text_width(first, scale);
    let total = first_w + gap + OverlayTextBuilder::text_width(second, scale);
    let x = sw * 0.5 - total / 2.0;
    tb.add_text(x, 28.0, first, scale, GOLD);
    tb.add_text(x + first_w + gap, 28.0, second, scale, CYAN);
    tb.add_text_centered(sw * 0.5, 28.0 + line_height(scale), subtitle, 1.0, GRAY);
}

/// A titled left/right panel of colored text rows. Returns the panel height.
pub fn info_panel(
    tb: &mut OverlayTextBuilder,
    x: f32,
    y: f32,
    w: f32,
    title: &str,
    rows: &[(&str, [f32; 4])],
) -> f32 {
    let pad = 10.0;
    let title_scale = 1.4;
    let row_scale = 1.0;
    let h = pad * 2.0 + line_height(title_scale) + rows.len() as f32 * line_height(row_scale);
    tb.add_panel(x, y, w, h, GOLD);
    tb.add_text(x + pad, y + pad, title, title_scale, GOLD);
    let mut cy = y + pad + line_height(title_scale);
    for (text, color) in rows {
        tb.add_text(x + pad, cy, text, row_scale, *color);
        cy += line_height(row_scale);
    }
    h
}

/// A legend panel: colored swatch + label rows.
pub fn legend_panel(
    tb: &mut OverlayTextBuilder,
    x: f32,
    y: f32,
    w: f32,
    title: &str,
    rows: &[([f32; 3], &str)],
) -> f32 {
    let pad = 10.0;
    let title_scale = 1.4;
    let row_h = 14.0;
    let h = pad * 2.0 + line_height(title_scale) + rows.len() as f32 * row_h;
    tb.add_panel(x, y, w, h, GOLD);
    tb.add_text(x + pad, y + pad, title, title_scale, GOLD);
    let mut cy = y + pad + line_height(title_scale);
    for (swatch, label) in rows {
        tb.add_swatch(x + pad, cy + 1.0, 8.0, *swatch);
        tb.add_text(x + pad + 14.0, cy, label, 1.0, GRAY);
        cy += row_h;
    }
    h
}

/// Node detail panel projected from a record. Anchored to the right side of
/// the viewport; hover panels are compact, selected panels show everything
/// the record carries.
pub fn node_panel(
    tb: &mut OverlayTextBuilder,
    sw: f32,
    sh: f32,
    content: &PanelContent,
    detail: DetailLevel,
) {
    let w = 300.0;
    let pad = 12.0;
    let x = sw - w - 24.0;
    let y = sh * 0.28;
    let accent = content.accent.with_alpha(1.0);
    let inner_w = w - pad * 2.0;

    // Measure first: title + optional blocks.
    let mut h = pad * 2.0 + line_height(1.4);
    if !content.subtitle.is_empty() {
        h += line_height(1.0);
    }
    if !content.meta.is_empty() {
        h += line_height(1.0);
    }
    if content.meter.is_some() {
        h += 24.0;
    }
    let body_lines = if content.body.is_empty() {
        0.0
    } else {
        estimate_wrapped_lines(&content.body, inner_w, 1.0)
    };
    h += body_lines * (GLYPH_PX_H + 2.0) + if body_lines > 0.0 { 6.0 } else { 0.0 };
    if !content.list.is_empty() {
        h += line_height(1.0) + content.list.len() as f32 * line_height(1.0);
    }
    if !content.tags.is_empty() {
        h += line_height(1.0) + 4.0;
    }
    if !content.footer.is_empty() {
        h += line_height(1.0) + 4.0;
    }

    tb.add_panel(x, y, w, h, accent);
    let mut cy = y + pad;
    tb.add_text(x + pad, cy, &content.title, 1.4, accent);
    cy += line_height(1.4);
    if !content.subtitle.is_empty() {
        tb.add_text(x + pad, cy, &content.subtitle, 1.0, GRAY);
        cy += line_height(1.0);
    }
    if !content.meta.is_empty() {
        tb.add_text(x + pad, cy, &content.meta, 1.0, DIM);
        cy += line_height(1.0);
    }
    if let Some(level) = content.meter {
        tb.add_meter(x + pad, cy + 2.0, inner_w, 6.0, level as f32 / 100.0, accent);
        tb.add_text(
            x + pad,
            cy + 10.0,
            &format!("{level}%"),
            1.0,
            accent,
        );
        cy += 24.0;
    }
    if !content.body.is_empty() {
        cy += tb.add_wrapped_text(x + pad, cy, inner_w, &content.body, 1.0, WHITE) + 6.0;
    }
    if !content.list.is_empty() {
        tb.add_text(x + pad, cy, content.list_heading, 1.0, accent);
        cy += line_height(1.0);
        for item in &content.list {
            tb.add_text(x + pad + 8.0, cy, &format!("- {item}"), 1.0, GRAY);
            cy += line_height(1.0);
        }
    }
    if !content.tags.is_empty() {
        let tags = content.tags.join("  ");
        tb.add_text(x + pad, cy, &tags, 1.0, accent);
        cy += line_height(1.0) + 4.0;
    }
    if !content.footer.is_empty() {
        tb.add_text(x + pad, cy, &content.footer, 1.0, DIM);
    }

    if detail == DetailLevel::Hover {
        tb.add_text(x + pad, y + h - pad - GLYPH_PX_H, "click for details", 1.0, DIM);
    }
}

fn estimate_wrapped_lines(text: &str, max_w: f32, scale: f32) -> f32 {
    let max_chars = ((max_w / (GLYPH_PX_W * scale)) as usize).max(1);
    let mut lines = 1.0;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let candidate = if used == 0 { len } else { used + 1 + len };
        if candidate > max_chars && used > 0 {
            lines += 1.0;
            used = len;
        } else {
            used = candidate;
        }
    }
    lines
}

/// Bottom-center call-to-action labels.
pub fn cta_row(tb: &mut OverlayTextBuilder, sw: f32, sh: f32, labels: &[(&str, [f32; 4])]) {
    let scale = 1.2;
    let pad = 10.0;
    let gap = 16.0;
    let total: f32 = labels
        .iter()
        .map(|(label, _)| OverlayTextBuilder::text_width(label, scale) + pad * 2.0)
        .sum::<f32>()
        + gap * labels.len().saturating_sub(1) as f32;
    let mut x = sw * 0.5 - total / 2.0;
    let y = sh - 56.0;
    for (label, color) in labels {
        let w = OverlayTextBuilder::text_width(label, scale) + pad * 2.0;
        let h = GLYPH_PX_H * scale + pad;
        tb.add_rect(x, y, w, h, [color[0], color[1], color[2], 0.85]);
        tb.add_text(x + pad, y + pad / 2.0, label, scale, [0.0, 0.0, 0.0, 1.0]);
        x += w + gap;
    }
}

/// A titled 2x2 stat grid ("Journey Stats", "Certification Gallery").
pub fn stat_panel(
    tb: &mut OverlayTextBuilder,
    x: f32,
    y: f32,
    title: &str,
    rows: &[(&str, u32)],
) {
    let w = 230.0;
    let pad = 10.0;
    let cell_h = 34.0;
    let grid_rows = rows.len().div_ceil(2);
    let h = pad * 2.0 + line_height(1.4) + grid_rows as f32 * cell_h;
    tb.add_panel(x, y, w, h, GOLD);
    tb.add_text(x + pad, y + pad, title, 1.4, GOLD);
    let colors = [CYAN, GREEN, PINK, GOLD];
    for (i, (label, value)) in rows.iter().enumerate() {
        let cx = x + pad + (i % 2) as f32 * (w / 2.0 - pad);
        let cy = y + pad + line_height(1.4) + (i / 2) as f32 * cell_h;
        tb.add_text(cx, cy, &value.to_string(), 2.0, colors[i % colors.len()]);
        tb.add_text(cx, cy + 18.0, label, 1.0, GRAY);
    }
}
