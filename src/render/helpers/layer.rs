//! Page operation builder
//!
//! Collects printpdf `Op`s for one page. Callers work in points measured
//! from the page's top-left corner with y growing downward; coordinates are
//! flipped into PDF user space as operations are recorded.

use printpdf::{
    BuiltinFont, Color, LinePoint, Op, PaintMode, PdfFontHandle, Point, Polygon, PolygonRing, Pt,
    TextItem, WindingOrder,
};

/// Bezier control distance for a quarter circle, k = 4 * (sqrt(2) - 1) / 3
const KAPPA: f32 = 0.552_284_8;

/// A builder that collects PDF operations for a single page
pub struct LayerBuilder {
    ops: Vec<Op>,
    page_height: f32,
}

impl LayerBuilder {
    pub fn new(page_height: f32) -> Self {
        Self {
            ops: Vec::new(),
            page_height,
        }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point {
            x: Pt(x),
            y: Pt(self.page_height - y),
        }
    }

    fn line_point(&self, x: f32, y: f32, bezier: bool) -> LinePoint {
        LinePoint {
            p: self.point(x, y),
            bezier,
        }
    }

    fn push_polygon(&mut self, points: Vec<LinePoint>, mode: PaintMode) {
        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };
        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Set the fill color
    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    /// Set the outline/stroke color
    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    /// Set the outline thickness in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw text with its baseline starting at (x, y)
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: f32,
        y: f32,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        let pos = self.point(x, y);
        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor { pos });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::Builtin(font),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a rectangle given its top-left corner and size
    pub fn add_rect(&mut self, x: f32, y: f32, width: f32, height: f32, mode: PaintMode) {
        let points = vec![
            self.line_point(x, y + height, false),
            self.line_point(x + width, y + height, false),
            self.line_point(x + width, y, false),
            self.line_point(x, y, false),
        ];
        self.push_polygon(points, mode);
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let points = vec![
            self.line_point(x1, y1, false),
            self.line_point(x2, y2, false),
        ];
        self.push_polygon(points, PaintMode::Stroke);
    }

    /// Draw a circle approximated by four cubic Bezier curves
    pub fn add_circle(&mut self, center_x: f32, center_y: f32, radius: f32, mode: PaintMode) {
        let (cx, cy, r) = (center_x, center_y, radius);
        let k = KAPPA * r;

        // Start at the rightmost point, then sweep through bottom, left, top
        // (top-down coordinates, so +y is downward)
        let path: [(f32, f32, bool); 13] = [
            (cx + r, cy, false),
            (cx + r, cy + k, true),
            (cx + k, cy + r, true),
            (cx, cy + r, true),
            (cx - k, cy + r, true),
            (cx - r, cy + k, true),
            (cx - r, cy, true),
            (cx - r, cy - k, true),
            (cx - k, cy - r, true),
            (cx, cy - r, true),
            (cx + k, cy - r, true),
            (cx + r, cy - k, true),
            (cx + r, cy, true),
        ];

        let points = path
            .iter()
            .map(|&(x, y, bezier)| self.line_point(x, y, bezier))
            .collect();
        self.push_polygon(points, mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon_points(op: &Op) -> Vec<(f32, f32)> {
        match op {
            Op::DrawPolygon { polygon } => polygon.rings[0]
                .points
                .iter()
                .map(|lp| (lp.p.x.0, lp.p.y.0))
                .collect(),
            _ => panic!("expected polygon"),
        }
    }

    #[test]
    fn test_rect_is_flipped_into_pdf_space() {
        let mut layer = LayerBuilder::new(800.0);
        layer.add_rect(50.0, 80.0, 24.0, 24.0, PaintMode::FillStroke);

        let points = polygon_points(&layer.ops()[0]);
        assert_eq!(points[0], (50.0, 696.0));
        assert_eq!(points[2], (74.0, 720.0));
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new(800.0);
        layer.use_text("", 9.0, 10.0, 10.0, BuiltinFont::Helvetica);
        assert!(layer.ops().is_empty());

        layer.use_text("1", 9.0, 10.0, 10.0, BuiltinFont::Helvetica);
        assert_eq!(layer.ops().len(), 5);
    }

    #[test]
    fn test_circle_closes_on_start_point() {
        let mut layer = LayerBuilder::new(100.0);
        layer.add_circle(50.0, 50.0, 10.0, PaintMode::Stroke);

        let points = polygon_points(&layer.ops()[0]);
        assert_eq!(points.len(), 13);
        assert_eq!(points.first(), points.last());
        assert_eq!(points[0], (60.0, 50.0));
    }
}
