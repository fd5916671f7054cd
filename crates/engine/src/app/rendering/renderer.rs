use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::app::{SceneFrame, UiPanel};

use super::text::{
    draw_text_clipped, fill_rect_clipped, outline_rect_clipped, GLYPH_ADVANCE, LINE_ADVANCE,
};

const PANEL_MARGIN_PX: i32 = 6;
const PANEL_PADDING_PX: i32 = 4;
const PANEL_BG_COLOR: [u8; 4] = [10, 12, 16, 235];
const PANEL_BORDER_COLOR: [u8; 4] = [200, 200, 210, 255];
const PANEL_TEXT_COLOR: [u8; 4] = [244, 248, 252, 255];
const TEXT_FIELD_COLOR: [u8; 4] = [255, 236, 120, 255];
const OVERLAY_TEXT_COLOR: [u8; 4] = [176, 198, 220, 255];
const OVERLAY_ORIGIN_PX: i32 = 2;

/// Presents a [`SceneFrame`] through a `pixels` surface. The buffer is the
/// arena size; `pixels` handles integer scaling and letterboxing to the window.
pub struct Renderer {
    pixels: Pixels<'static>,
    buffer_width: u32,
    buffer_height: u32,
}

impl Renderer {
    pub fn new(window: Arc<Window>, buffer_width: u32, buffer_height: u32) -> Result<Self, Error> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(buffer_width, buffer_height, surface)?;
        Ok(Self {
            pixels,
            buffer_width,
            buffer_height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    pub(crate) fn render(
        &mut self,
        scene_frame: &SceneFrame,
        overlay_lines: Option<&[String]>,
    ) -> Result<(), Error> {
        rasterize_scene(
            self.pixels.frame_mut(),
            self.buffer_width,
            self.buffer_height,
            scene_frame,
            overlay_lines,
        );
        self.pixels.render()
    }
}

pub(crate) fn rasterize_scene(
    frame: &mut [u8],
    width: u32,
    height: u32,
    scene_frame: &SceneFrame,
    overlay_lines: Option<&[String]>,
) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&scene_frame.clear_color);
    }

    for draw in &scene_frame.rects {
        let rect = draw.rect;
        let left = rect.x.floor() as i32;
        let top = rect.y.floor() as i32;
        let right = rect.right().floor() as i32;
        let bottom = rect.bottom().floor() as i32;
        fill_rect_clipped(
            frame,
            width,
            height,
            left,
            top,
            right - left,
            bottom - top,
            draw.color,
        );
    }

    if let Some(panel) = scene_frame.panel.as_ref().filter(|panel| !panel.is_empty()) {
        draw_panel(frame, width, height, panel);
    }

    if let Some(lines) = overlay_lines {
        let mut y = OVERLAY_ORIGIN_PX;
        for line in lines {
            draw_text_clipped(frame, width, height, OVERLAY_ORIGIN_PX, y, line, OVERLAY_TEXT_COLOR);
            y += LINE_ADVANCE;
        }
    }
}

fn draw_panel(frame: &mut [u8], width: u32, height: u32, panel: &UiPanel) {
    let panel_width = width as i32 - PANEL_MARGIN_PX * 2;
    let max_chars = ((panel_width - PANEL_PADDING_PX * 2) / GLYPH_ADVANCE).max(1) as usize;

    let mut rows: Vec<(String, [u8; 4])> = panel
        .lines
        .iter()
        .flat_map(|line| wrap_line(line, max_chars))
        .map(|row| (row, PANEL_TEXT_COLOR))
        .collect();
    if let Some(field) = panel.text_field.as_deref() {
        rows.push((format!("> {field}_"), TEXT_FIELD_COLOR));
    }

    let panel_height = rows.len() as i32 * LINE_ADVANCE + PANEL_PADDING_PX * 2;
    let panel_left = PANEL_MARGIN_PX;
    let panel_top = height as i32 - PANEL_MARGIN_PX - panel_height;
    fill_rect_clipped(
        frame,
        width,
        height,
        panel_left,
        panel_top,
        panel_width,
        panel_height,
        PANEL_BG_COLOR,
    );
    outline_rect_clipped(
        frame,
        width,
        height,
        panel_left,
        panel_top,
        panel_width,
        panel_height,
        PANEL_BORDER_COLOR,
    );

    let text_left = panel_left + PANEL_PADDING_PX;
    let mut y = panel_top + PANEL_PADDING_PX + 1;
    for (row, color) in rows {
        draw_text_clipped(frame, width, height, text_left, y, &row, color);
        y += LINE_ADVANCE;
    }
}

/// Greedy word wrap; words longer than a row are split.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            let split_at = word
                .char_indices()
                .nth(max_chars)
                .map_or(word.len(), |(index, _)| index);
            rows.push(word[..split_at].to_string());
            word = &word[split_at..];
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}
