use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{Point, Resolution};
use crate::foundation::error::ClaimResult;
use crate::signature::config::PenStyle;
use crate::signature::encode::{SignatureImage, encode_png_data_uri};
use crate::signature::surface::SignatureSurface;

/// CPU signature surface powered by `vello_cpu`.
///
/// The persistent raster is premultiplied RGBA8. `vello_cpu` renders into a fresh buffer, so each
/// stamp or segment is rendered into a scratch pixmap and then premul-over'd onto the raster.
pub struct CpuSurface {
    res: Resolution,
    pen: PenStyle,
    stroke: vello_cpu::kurbo::Stroke,
    raster: vello_cpu::Pixmap,
    scratch: vello_cpu::Pixmap,
    last: Option<Point>,
}

enum Paint {
    Fill,
    Stroke,
}

impl CpuSurface {
    pub fn new(res: Resolution, pen: PenStyle) -> Self {
        Self {
            res,
            pen,
            stroke: pen.to_cpu_stroke(),
            raster: vello_cpu::Pixmap::new(res.width_u16(), res.height_u16()),
            scratch: vello_cpu::Pixmap::new(res.width_u16(), res.height_u16()),
            last: None,
        }
    }

    /// Raw raster bytes: premultiplied RGBA8, row-major, tightly packed.
    pub fn raster_premul_rgba8(&self) -> &[u8] {
        self.raster.data_as_u8_slice()
    }

    /// Alpha of the pixel at `(x, y)`, or `None` outside the raster.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.res.width || y >= self.res.height {
            return None;
        }
        let idx = (y as usize * self.res.width as usize + x as usize) * 4 + 3;
        self.raster.data_as_u8_slice().get(idx).copied()
    }

    fn composite(&mut self, path: &vello_cpu::kurbo::BezPath, paint: Paint) {
        let (w, h) = (self.res.width_u16(), self.res.height_u16());
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        let c = self.pen.color;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        match paint {
            Paint::Fill => ctx.fill_path(path),
            Paint::Stroke => {
                ctx.set_stroke(self.stroke.clone());
                ctx.stroke_path(path);
            }
        }
        ctx.flush();

        self.scratch.data_as_u8_slice_mut().fill(0);
        ctx.render_to_pixmap(&mut self.scratch);

        premul_over_in_place(
            self.raster.data_as_u8_slice_mut(),
            self.scratch.data_as_u8_slice(),
        );
    }
}

impl SignatureSurface for CpuSurface {
    fn resolution(&self) -> Resolution {
        self.res
    }

    fn begin_stroke(&mut self, at: Point) {
        self.last = Some(at);
        // A tap with no movement still leaves a dot the size of the pen.
        let dot = vello_cpu::kurbo::Circle::new(to_cpu_point(at), self.pen.width / 2.0);
        self.composite(&dot.to_path(0.1), Paint::Fill);
    }

    fn extend_stroke(&mut self, to: Point) {
        let Some(from) = self.last else {
            return;
        };
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(to_cpu_point(from));
        path.line_to(to_cpu_point(to));
        self.composite(&path, Paint::Stroke);
        self.last = Some(to);
    }

    fn clear(&mut self) {
        self.raster.data_as_u8_slice_mut().fill(0);
        self.last = None;
    }

    fn export_image(&self) -> ClaimResult<SignatureImage> {
        encode_png_data_uri(self.raster.data_as_u8_slice(), self.res)
    }

    fn resize(&mut self, res: Resolution) {
        if res == self.res {
            return;
        }
        let mut raster = vello_cpu::Pixmap::new(res.width_u16(), res.height_u16());
        copy_overlap(
            self.raster.data_as_u8_slice(),
            self.res,
            raster.data_as_u8_slice_mut(),
            res,
        );
        self.raster = raster;
        self.scratch = vello_cpu::Pixmap::new(res.width_u16(), res.height_u16());
        self.stroke = self.pen.to_cpu_stroke();
        self.res = res;
    }

    fn is_blank(&self) -> bool {
        self.raster
            .data_as_u8_slice()
            .chunks_exact(4)
            .all(|px| px[3] == 0)
    }
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("res", &self.res)
            .field("pen", &self.pen)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

fn to_cpu_point(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn copy_overlap(src: &[u8], src_res: Resolution, dst: &mut [u8], dst_res: Resolution) {
    let row_bytes = src_res.width.min(dst_res.width) as usize * 4;
    let rows = src_res.height.min(dst_res.height) as usize;
    let src_stride = src_res.width as usize * 4;
    let dst_stride = dst_res.width as usize * 4;
    for y in 0..rows {
        let s = y * src_stride;
        let d = y * dst_stride;
        dst[d..d + row_bytes].copy_from_slice(&src[s..s + row_bytes]);
    }
}

fn premul_over_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = u16::from(s[3]);
        if sa == 0 {
            continue;
        }
        let inv = 255 - sa;
        d[3] = add_sat_u8(s[3], mul_div255_u8(u16::from(d[3]), inv));
        for c in 0..3 {
            d[c] = add_sat_u8(s[c], mul_div255_u8(u16::from(d[c]), inv));
        }
    }
}

fn mul_div255_u8(a: u16, b: u16) -> u8 {
    (((u32::from(a) * u32::from(b)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/signature/cpu.rs"]
mod tests;
