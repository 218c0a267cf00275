//! Vertex types, instance layouts, and the overlay text builder.

use bytemuck::{Pod, Zeroable};

/// Mesh vertex: position, normal, UV.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coords,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Per-instance data for the scene pass: model matrix, albedo, and shading
/// params (x = emissive intensity, y = unlit flag, zw unused).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

impl InstanceData {
    pub fn new(model: [[f32; 4]; 4], color: [f32; 4]) -> Self {
        Self {
            model,
            color,
            params: [0.0; 4],
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.params[0] = emissive;
        self
    }

    /// Skip lighting entirely (star points, sparkles).
    pub fn unlit(mut self) -> Self {
        self.params[1] = 1.0;
        self
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const F4: u64 = std::mem::size_of::<[f32; 4]>() as u64;
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // Model matrix columns
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: F4,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: F4 * 2,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: F4 * 3,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // Albedo
                wgpu::VertexAttribute {
                    offset: F4 * 4,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // Shading params
                wgpu::VertexAttribute {
                    offset: F4 * 5,
                    shader_location: 10,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Vertex for the line pass: world position plus color.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Screen-space overlay vertex (NDC position, font UV, color).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct OverlayVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
}

impl OverlayVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OverlayVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Font atlas layout: 16 columns x 6 rows of 6x8 pixel glyphs, ASCII 32..127.
const FONT_COLS: f32 = 16.0;
const FONT_ROWS: f32 = 6.0;
/// Glyph advance in atlas pixels.
pub const GLYPH_PX_W: f32 = 6.0;
pub const GLYPH_PX_H: f32 = 8.0;

/// Builds screen-space overlay geometry: character quads, solid rects, and
/// the composed panel shapes the section shells use (bordered panels, bullet
/// lists, proficiency meters).
pub struct OverlayTextBuilder {
    pub vertices: Vec<OverlayVertex>,
    pub indices: Vec<u32>,
    screen_w: f32,
    screen_h: f32,
}

impl OverlayTextBuilder {
    pub fn new(screen_w: f32, screen_h: f32) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            screen_w,
            screen_h,
        }
    }

    fn px_to_ndc(&self, px: f32, py: f32) -> [f32; 2] {
        [
            (px / self.screen_w) * 2.0 - 1.0,
            1.0 - (py / self.screen_h) * 2.0,
        ]
    }

    fn push_quad(&mut self, tl: [f32; 2], br: [f32; 2], uv: [[f32; 2]; 2], color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        let [u0, v0] = uv[0];
        let [u1, v1] = uv[1];
        self.vertices.push(OverlayVertex { position: [tl[0], tl[1]], tex_coords: [u0, v0], color });
        self.vertices.push(OverlayVertex { position: [br[0], tl[1]], tex_coords: [u1, v0], color });
        self.vertices.push(OverlayVertex { position: [br[0], br[1]], tex_coords: [u1, v1], color });
        self.vertices.push(OverlayVertex { position: [tl[0], br[1]], tex_coords: [u0, v1], color });
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Solid rectangle in pixel coordinates.
    pub fn add_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
        let tl = self.px_to_ndc(x, y);
        let br = self.px_to_ndc(x + w, y + h);
        // UV sentinel (-1,-1): solid color, no font sample.
        self.push_quad(tl, br, [[-1.0, -1.0], [-1.0, -1.0]], color);
    }

    /// 1px-ish border around a rectangle (four thin rects).
    pub fn add_border(&mut self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: [f32; 4]) {
        self.add_rect(x, y, w, thickness, color);
        self.add_rect(x, y + h - thickness, w, thickness, color);
        self.add_rect(x, y, thickness, h, color);
        self.add_rect(x + w - thickness, y, thickness, h, color);
    }

    /// Pixel width of `text` at `scale`.
    pub fn text_width(text: &str, scale: f32) -> f32 {
        text.chars().count() as f32 * GLYPH_PX_W * scale
    }

    /// Text line at pixel (x, y); `scale` 1.0 = 6x8 px glyphs.
    pub fn add_text(&mut self, x: f32, y: f32, text: &str, scale: f32, color: [f32; 4]) {
        let gw = GLYPH_PX_W * scale;
        let gh = GLYPH_PX_H * scale;
        let mut cx = x;
        for ch in text.chars() {
            let code = ch as u32;
            if !(32..=127).contains(&code) {
                cx += gw;
                continue;
            }
            let idx = code - 32;
            let col = (idx % 16) as f32;
            let row = (idx / 16) as f32;
            let uv = [
                [col / FONT_COLS, row / FONT_ROWS],
                [(col + 1.0) / FONT_COLS, (row + 1.0) / FONT_ROWS],
            ];
            let tl = self.px_to_ndc(cx, y);
            let br = self.px_to_ndc(cx + gw, y + gh);
            self.push_quad(tl, br, uv, color);
            cx += gw;
        }
    }

    /// Centered text line around pixel column `cx`.
    pub fn add_text_centered(&mut self, cx: f32, y: f32, text: &str, scale: f32, color: [f32; 4]) {
        let w = Self::text_width(text, scale);
        self.add_text(cx - w / 2.0, y, text, scale, color);
    }

    /// Word-wrapped text within `max_w` pixels. Returns the pixel height
    /// consumed.
    pub fn add_wrapped_text(
        &mut self,
        x: f32,
        y: f32,
        max_w: f32,
        text: &str,
        scale: f32,
        color: [f32; 4],
    ) -> f32 {
        let line_h = GLYPH_PX_H * scale + 2.0;
        let max_chars = ((max_w / (GLYPH_PX_W * scale)) as usize).max(1);
        let mut line = String::new();
        let mut cy = y;
        for word in text.split_whitespace() {
            let candidate_len = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if candidate_len > max_chars && !line.is_empty() {
                self.add_text(x, cy, &line, scale, color);
                cy += line_h;
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if !line.is_empty() {
            self.add_text(x, cy, &line, scale, color);
            cy += line_h;
        }
        cy - y
    }

    /// Horizontal proficiency meter: track plus filled fraction.
    pub fn add_meter(&mut self, x: f32, y: f32, w: f32, h: f32, frac: f32, color: [f32; 4]) {
        let track = [color[0], color[1], color[2], 0.2];
        self.add_rect(x, y, w, h, track);
        self.add_rect(x, y, w * frac.clamp(0.0, 1.0), h, color);
    }

    /// Small color swatch used by legends.
    pub fn add_swatch(&mut self, x: f32, y: f32, size: f32, color: [f32; 3]) {
        self.add_rect(x, y, size, size, [color[0], color[1], color[2], 1.0]);
    }

    /// Backdrop + border of an overlay panel.
    pub fn add_panel(&mut self, x: f32, y: f32, w: f32, h: f32, accent: [f32; 4]) {
        self.add_rect(x, y, w, h, [0.0, 0.0, 0.0, 0.72]);
        self.add_border(x, y, w, h, 2.0, [accent[0], accent[1], accent[2], 0.6]);
    }
}

/// Generate the overlay font atlas: `R8Unorm` bytes, 96x48, one 6x8 cell per
/// printable ASCII glyph.
pub fn generate_font_atlas() -> (Vec<u8>, u32, u32) {
    let atlas_w: u32 = (FONT_COLS as u32) * (GLYPH_PX_W as u32);
    let atlas_h: u32 = (FONT_ROWS as u32) * (GLYPH_PX_H as u32);
    let mut pixels = vec![0u8; (atlas_w * atlas_h) as usize];

    for code in 32u32..128 {
        let glyph = FONT_5X7[code as usize - 32];
        let idx = code - 32;
        let base_x = (idx % 16) * (GLYPH_PX_W as u32);
        let base_y = (idx / 16) * (GLYPH_PX_H as u32);

        for (gy, bits) in glyph.iter().enumerate() {
            for gx in 0..5u32 {
                if (bits >> (4 - gx)) & 1 != 0 {
                    let px = base_x + gx;
                    let py = base_y + gy as u32;
                    pixels[(py * atlas_w + px) as usize] = 255;
                }
            }
        }
    }

    (pixels, atlas_w, atlas_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atlas_covers_every_printable_glyph_cell() {
        let (pixels, w, h) = generate_font_atlas();
        assert_eq!(pixels.len(), (w * h) as usize);
        // 'A' (code 65) cell must contain ink.
        let idx = 65 - 32;
        let base_x = (idx % 16) * GLYPH_PX_W as u32;
        let base_y = (idx / 16) * GLYPH_PX_H as u32;
        let mut ink = 0;
        for gy in 0..8 {
            for gx in 0..6 {
                if pixels[((base_y + gy) * w + base_x + gx) as usize] > 0 {
                    ink += 1;
                }
            }
        }
        assert!(ink > 0);
    }

    #[test]
    fn wrapped_text_consumes_multiple_lines() {
        let mut tb = OverlayTextBuilder::new(800.0, 600.0);
        let h = tb.add_wrapped_text(
            0.0,
            0.0,
            120.0,
            "a reasonably long sentence that cannot fit one line",
            1.0,
            [1.0; 4],
        );
        assert!(h > GLYPH_PX_H + 2.0);
    }

    #[test]
    fn rect_uses_solid_sentinel_uv() {
        let mut tb = OverlayTextBuilder::new(800.0, 600.0);
        tb.add_rect(0.0, 0.0, 10.0, 10.0, [1.0; 4]);
        assert_eq!(tb.vertices[0].tex_coords, [-1.0, -1.0]);
        assert_eq!(tb.indices.len(), 6);
    }
}

/// Classic 5x7 bitmap font, ASCII 32..127. Each entry is 7 rows; the 5 low
/// bits of a row encode pixels, bit 4 leftmost.
#[rustfmt::skip]
const FONT_5X7: [[u8; 7]; 96] = [
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00], // 32 ' '
    [0x04,0x04,0x04,0x04,0x04,0x00,0x04], // 33 '!'
    [0x0A,0x0A,0x00,0x00,0x00,0x00,0x00], // 34 '"'
    [0x0A,0x1F,0x0A,0x0A,0x1F,0x0A,0x00], // 35 '#'
    [0x04,0x0F,0x14,0x0E,0x05,0x1E,0x04], // 36 '$'
    [0x18,0x19,0x02,0x04,0x08,0x13,0x03], // 37 '%'
    [0x08,0x14,0x14,0x08,0x15,0x12,0x0D], // 38 '&'
    [0x04,0x04,0x00,0x00,0x00,0x00,0x00], // 39 '''
    [0x02,0x04,0x08,0x08,0x08,0x04,0x02], // 40 '('
    [0x08,0x04,0x02,0x02,0x02,0x04,0x08], // 41 ')'
    [0x04,0x15,0x0E,0x1F,0x0E,0x15,0x04], // 42 '*'
    [0x00,0x04,0x04,0x1F,0x04,0x04,0x00], // 43 '+'
    [0x00,0x00,0x00,0x00,0x00,0x04,0x08], // 44 ','
    [0x00,0x00,0x00,0x1F,0x00,0x00,0x00], // 45 '-'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x04], // 46 '.'
    [0x01,0x01,0x02,0x04,0x08,0x10,0x10], // 47 '/'
    [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E], // 48 '0'
    [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E], // 49 '1'
    [0x0E,0x11,0x01,0x06,0x08,0x10,0x1F], // 50 '2'
    [0x0E,0x11,0x01,0x06,0x01,0x11,0x0E], // 51 '3'
    [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02], // 52 '4'
    [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E], // 53 '5'
    [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E], // 54 '6'
    [0x1F,0x01,0x02,0x04,0x08,0x08,0x08], // 55 '7'
    [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E], // 56 '8'
    [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C], // 57 '9'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x00], // 58 ':'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x08], // 59 ';'
    [0x02,0x04,0x08,0x10,0x08,0x04,0x02], // 60 '<'
    [0x00,0x00,0x1F,0x00,0x1F,0x00,0x00], // 61 '='
    [0x08,0x04,0x02,0x01,0x02,0x04,0x08], // 62 '>'
    [0x0E,0x11,0x01,0x02,0x04,0x00,0x04], // 63 '?'
    [0x0E,0x11,0x17,0x15,0x17,0x10,0x0E], // 64 '@'
    [0x0E,0x11,0x11,0x1F,0x11,0x11,0x11], // 65 'A'
    [0x1E,0x11,0x11,0x1E,0x11,0x11,0x1E], // 66 'B'
    [0x0E,0x11,0x10,0x10,0x10,0x11,0x0E], // 67 'C'
    [0x1E,0x11,0x11,0x11,0x11,0x11,0x1E], // 68 'D'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x1F], // 69 'E'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x10], // 70 'F'
    [0x0E,0x11,0x10,0x17,0x11,0x11,0x0F], // 71 'G'
    [0x11,0x11,0x11,0x1F,0x11,0x11,0x11], // 72 'H'
    [0x0E,0x04,0x04,0x04,0x04,0x04,0x0E], // 73 'I'
    [0x07,0x02,0x02,0x02,0x02,0x12,0x0C], // 74 'J'
    [0x11,0x12,0x14,0x18,0x14,0x12,0x11], // 75 'K'
    [0x10,0x10,0x10,0x10,0x10,0x10,0x1F], // 76 'L'
    [0x11,0x1B,0x15,0x15,0x11,0x11,0x11], // 77 'M'
    [0x11,0x19,0x15,0x13,0x11,0x11,0x11], // 78 'N'
    [0x0E,0x11,0x11,0x11,0x11,0x11,0x0E], // 79 'O'
    [0x1E,0x11,0x11,0x1E,0x10,0x10,0x10], // 80 'P'
    [0x0E,0x11,0x11,0x11,0x15,0x12,0x0D], // 81 'Q'
    [0x1E,0x11,0x11,0x1E,0x14,0x12,0x11], // 82 'R'
    [0x0E,0x11,0x10,0x0E,0x01,0x11,0x0E], // 83 'S'
    [0x1F,0x04,0x04,0x04,0x04,0x04,0x04], // 84 'T'
    [0x11,0x11,0x11,0x11,0x11,0x11,0x0E], // 85 'U'
    [0x11,0x11,0x11,0x11,0x0A,0x0A,0x04], // 86 'V'
    [0x11,0x11,0x11,0x15,0x15,0x1B,0x11], // 87 'W'
    [0x11,0x11,0x0A,0x04,0x0A,0x11,0x11], // 88 'X'
    [0x11,0x11,0x0A,0x04,0x04,0x04,0x04], // 89 'Y'
    [0x1F,0x01,0x02,0x04,0x08,0x10,0x1F], // 90 'Z'
    [0x0E,0x08,0x08,0x08,0x08,0x08,0x0E], // 91 '['
    [0x10,0x10,0x08,0x04,0x02,0x01,0x01], // 92 '\'
    [0x0E,0x02,0x02,0x02,0x02,0x02,0x0E], // 93 ']'
    [0x04,0x0A,0x11,0x00,0x00,0x00,0x00], // 94 '^'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x1F], // 95 '_'
    [0x08,0x04,0x00,0x00,0x00,0x00,0x00], // 96 '`'
    [0x00,0x00,0x0E,0x01,0x0F,0x11,0x0F], // 97 'a'
    [0x10,0x10,0x1E,0x11,0x11,0x11,0x1E], // 98 'b'
    [0x00,0x00,0x0E,0x11,0x10,0x11,0x0E], // 99 'c'
    [0x01,0x01,0x0F,0x11,0x11,0x11,0x0F], // 100 'd'
    [0x00,0x00,0x0E,0x11,0x1F,0x10,0x0E], // 101 'e'
    [0x06,0x08,0x1E,0x08,0x08,0x08,0x08], // 102 'f'
    [0x00,0x00,0x0F,0x11,0x0F,0x01,0x0E], // 103 'g'
    [0x10,0x10,0x1E,0x11,0x11,0x11,0x11], // 104 'h'
    [0x04,0x00,0x0C,0x04,0x04,0x04,0x0E], // 105 'i'
    [0x02,0x00,0x06,0x02,0x02,0x12,0x0C], // 106 'j'
    [0x10,0x10,0x12,0x14,0x18,0x14,0x12], // 107 'k'
    [0x0C,0x04,0x04,0x04,0x04,0x04,0x0E], // 108 'l'
    [0x00,0x00,0x1A,0x15,0x15,0x15,0x11], // 109 'm'
    [0x00,0x00,0x1E,0x11,0x11,0x11,0x11], // 110 'n'
    [0x00,0x00,0x0E,0x11,0x11,0x11,0x0E], // 111 'o'
    [0x00,0x00,0x1E,0x11,0x1E,0x10,0x10], // 112 'p'
    [0x00,0x00,0x0F,0x11,0x0F,0x01,0x01], // 113 'q'
    [0x00,0x00,0x16,0x19,0x10,0x10,0x10], // 114 'r'
    [0x00,0x00,0x0F,0x10,0x0E,0x01,0x1E], // 115 's'
    [0x08,0x08,0x1E,0x08,0x08,0x09,0x06], // 116 't'
    [0x00,0x00,0x11,0x11,0x11,0x13,0x0D], // 117 'u'
    [0x00,0x00,0x11,0x11,0x11,0x0A,0x04], // 118 'v'
    [0x00,0x00,0x11,0x15,0x15,0x15,0x0A], // 119 'w'
    [0x00,0x00,0x11,0x0A,0x04,0x0A,0x11], // 120 'x'
    [0x00,0x00,0x11,0x11,0x0F,0x01,0x0E], // 121 'y'
    [0x00,0x00,0x1F,0x02,0x04,0x08,0x1F], // 122 'z'
    [0x02,0x04,0x04,0x08,0x04,0x04,0x02], // 123 '{'
    [0x04,0x04,0x04,0x04,0x04,0x04,0x04], // 124 '|'
    [0x08,0x04,0x04,0x02,0x04,0x04,0x08], // 125 '}'
    [0x00,0x08,0x15,0x02,0x00,0x00,0x00], // 126 '~'
    [0x1F,0x1F,0x1F,0x1F,0x1F,0x1F,0x1F], // 127 DEL (solid block - useful for bg)
];
