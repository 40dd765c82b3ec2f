//! Slide layout on a 16:9 viewport
//!
//! Logical pixel geometry: centred heading at the top, moderator and
//! congregation columns side by side, an optional together block above the
//! bottom edge and the slide caption in the bottom-right corner.

use crate::rendering::font::{text_width, ADVANCE, LINE_HEIGHT};
use crate::slide::{Role, Slide, SlidePosition};
use crate::verse::VerseRecord;
use crate::Viewport;

pub const HEADING_SCALE: u32 = 3;
pub const BODY_SCALE: u32 = 2;

const PADDING: u32 = 16;
const HEADING_GAP: u32 = 16;
const COLUMN_GAP: u32 = 16;
const PARAGRAPH_GAP: u32 = 8;
const TOGETHER_BOTTOM: u32 = 32;
const FOOTER_BOTTOM: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Heading,
    RoleLabel(Role),
    Verse(Role),
    Footer,
}

/// A positioned block of (already wrapped) text
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub rect: Rect,
    pub text: String,
    pub elem_type: ElementType,
    pub scale: u32,
}

impl LayoutNode {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

fn line_height(scale: u32) -> u32 {
    LINE_HEIGHT * scale
}

/// Characters of `scale`-sized text that fit in `width`
pub fn chars_per_line(width: u32, scale: u32) -> usize {
    let scale = scale.max(1);
    ((width / scale + 1) / ADVANCE).max(1) as usize
}

/// Greedy word wrap; words longer than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut cur_len = 0usize;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !cur.is_empty() {
                lines.push(std::mem::take(&mut cur));
                cur_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if cur_len > 0 && cur_len + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut cur));
            cur_len = 0;
        }
        if cur_len > 0 {
            cur.push(' ');
            cur_len += 1;
        }
        cur_len += word.len();
        cur.extend(word);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

fn verse_line(verse: &VerseRecord) -> String {
    format!("{} {}", verse.number, verse.text)
}

fn widest(lines: &[String], scale: u32) -> u32 {
    lines.iter().map(|l| text_width(l, scale)).max().unwrap_or(0)
}

/// Lay out `slide` shown at `position` on `viewport`
pub fn layout_slide(slide: &Slide, position: SlidePosition, viewport: Viewport) -> Vec<LayoutNode> {
    let width = viewport.width;
    let height = viewport.height;
    let inner_w = width.saturating_sub(PADDING * 2);
    let body_lh = line_height(BODY_SCALE);
    let mut nodes = Vec::new();

    // Heading, centred
    let heading_lines = wrap_text(&slide.heading(), chars_per_line(inner_w, HEADING_SCALE));
    let heading_w = widest(&heading_lines, HEADING_SCALE);
    let heading_h = heading_lines.len() as u32 * line_height(HEADING_SCALE);
    nodes.push(LayoutNode {
        rect: Rect {
            x: (PADDING + inner_w.saturating_sub(heading_w) / 2) as i32,
            y: PADDING as i32,
            width: heading_w,
            height: heading_h,
        },
        text: heading_lines.join("\n"),
        elem_type: ElementType::Heading,
        scale: HEADING_SCALE,
    });
    let columns_top = PADDING + heading_h + HEADING_GAP;

    // Together block sits above the bottom edge and pushes the columns up
    let block_bottom = height.saturating_sub(TOGETHER_BOTTOM);
    let mut columns_bottom = block_bottom;
    let mut together_nodes = Vec::new();
    if let Some(verse) = &slide.content.together {
        let lines = wrap_text(&verse_line(verse), chars_per_line(inner_w, BODY_SCALE));
        let block_h = body_lh + PARAGRAPH_GAP + lines.len() as u32 * body_lh;
        let top = block_bottom.saturating_sub(block_h).max(columns_top);
        layout_role(
            &mut together_nodes,
            Role::Together,
            std::slice::from_ref(verse),
            PADDING,
            top,
            inner_w,
            block_bottom,
        );
        columns_bottom = top.saturating_sub(PARAGRAPH_GAP).max(columns_top);
    }

    let col_w = inner_w.saturating_sub(COLUMN_GAP) / 2;
    layout_role(
        &mut nodes,
        Role::Moderator,
        &slide.content.moderator,
        PADDING,
        columns_top,
        col_w,
        columns_bottom,
    );
    layout_role(
        &mut nodes,
        Role::Congregation,
        &slide.content.congregation,
        PADDING + col_w + COLUMN_GAP,
        columns_top,
        col_w,
        columns_bottom,
    );
    nodes.extend(together_nodes);

    // Caption, bottom right
    let caption = position.caption();
    let caption_w = text_width(&caption, BODY_SCALE);
    nodes.push(LayoutNode {
        rect: Rect {
            x: width.saturating_sub(PADDING + caption_w) as i32,
            y: height.saturating_sub(FOOTER_BOTTOM + body_lh) as i32,
            width: caption_w,
            height: body_lh,
        },
        text: caption,
        elem_type: ElementType::Footer,
        scale: BODY_SCALE,
    });

    nodes
}

/// Label plus verse paragraphs for one role, clipped at `bottom`
fn layout_role(
    nodes: &mut Vec<LayoutNode>,
    role: Role,
    verses: &[VerseRecord],
    x: u32,
    top: u32,
    width: u32,
    bottom: u32,
) {
    let lh = line_height(BODY_SCALE);
    let label = role.label();
    nodes.push(LayoutNode {
        rect: Rect {
            x: x as i32,
            y: top as i32,
            width: text_width(label, BODY_SCALE),
            height: lh,
        },
        text: label.to_string(),
        elem_type: ElementType::RoleLabel(role),
        scale: BODY_SCALE,
    });

    let max_chars = chars_per_line(width, BODY_SCALE);
    let mut y = top + lh + PARAGRAPH_GAP;
    for verse in verses {
        let fit = (bottom.saturating_sub(y) / lh) as usize;
        if fit == 0 {
            break;
        }
        let mut lines = wrap_text(&verse_line(verse), max_chars);
        lines.truncate(fit);
        let h = lines.len() as u32 * lh;
        nodes.push(LayoutNode {
            rect: Rect {
                x: x as i32,
                y: y as i32,
                width,
                height: h,
            },
            text: lines.join("\n"),
            elem_type: ElementType::Verse(role),
            scale: BODY_SCALE,
        });
        y += h + PARAGRAPH_GAP;
    }
}
