//! Paint commands for a laid-out slide

use crate::rendering::font::LINE_HEIGHT;
use crate::rendering::layout::{ElementType, LayoutNode};
use crate::slide::Role;
use crate::Viewport;

pub type Rgba = (u8, u8, u8, u8);

pub const BACKGROUND: Rgba = (255, 255, 255, 255);
pub const TEXT: Rgba = (0, 0, 0, 255);
pub const CAPTION: Rgba = (107, 114, 128, 255);

/// Label colour per reading role
pub fn role_color(role: Role) -> Rgba {
    match role {
        Role::Moderator => (153, 27, 27, 255),
        Role::Congregation => (30, 64, 175, 255),
        Role::Together => (22, 101, 52, 255),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        scale: u32,
        rgba: Rgba,
    },
}

/// Background fill followed by one text command per laid-out line
pub fn paint_slide(nodes: &[LayoutNode], viewport: Viewport) -> Vec<PaintCommand> {
    let mut cmds = vec![PaintCommand::SolidRect {
        x: 0,
        y: 0,
        width: viewport.width,
        height: viewport.height,
        rgba: BACKGROUND,
    }];

    for node in nodes {
        let rgba = match node.elem_type {
            ElementType::RoleLabel(role) => role_color(role),
            ElementType::Footer => CAPTION,
            ElementType::Heading | ElementType::Verse(_) => TEXT,
        };
        let lh = (LINE_HEIGHT * node.scale) as i32;
        for (i, line) in node.lines().enumerate() {
            cmds.push(PaintCommand::Text {
                x: node.rect.x,
                y: node.rect.y + i as i32 * lh,
                text: line.to_string(),
                scale: node.scale,
                rgba,
            });
        }
    }
    cmds
}
