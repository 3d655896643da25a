use std::fmt::Write as _;

/// Shared paint attributes. `None` means the attribute is omitted from
/// the serialized element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    pub fill: Option<&'static str>,
    pub stroke: Option<&'static str>,
    pub stroke_width: Option<f32>,
    pub dash: Option<&'static str>,
    pub opacity: Option<f32>,
}

/// A single drawable element. The overlay builders emit these as plain
/// data; serialization to SVG happens in one place at the end.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
        style: Style,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        style: Style,
        blurred: bool,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        style: Style,
    },
    Polyline {
        points: Vec<(f32, f32)>,
        style: Style,
    },
    /// Center-anchored label.
    Text {
        x: f32,
        y: f32,
        content: String,
        fill: &'static str,
        size: f32,
        weight: Option<&'static str>,
        mono: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    PitchBase,
    HeatMap,
    DefensiveLines,
    Pressure,
    Markers,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub opacity: Option<f32>,
    pub primitives: Vec<Primitive>,
}

impl Layer {
    pub fn new(kind: LayerKind) -> Self {
        Layer {
            kind,
            opacity: None,
            primitives: Vec::new(),
        }
    }

    pub fn with_opacity(kind: LayerKind, opacity: f32) -> Self {
        Layer {
            kind,
            opacity: Some(opacity),
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}

/// Ordered layers for one rendered frame. Layer order is z-order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Scene {
            width,
            height,
            layers: Vec::new(),
        }
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    fn uses_blur(&self) -> bool {
        self.layers.iter().any(|layer| {
            layer
                .primitives
                .iter()
                .any(|p| matches!(p, Primitive::Circle { blurred: true, .. }))
        })
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(8 * 1024);

        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.0} {:.0}">"#,
            self.width, self.height
        );

        if self.uses_blur() {
            out.push_str(r#"<defs><filter id="blur"><feGaussianBlur stdDeviation="14"/></filter></defs>"#);
        }

        for layer in &self.layers {
            match layer.opacity {
                Some(opacity) => {
                    let _ = write!(out, r#"<g opacity="{opacity}">"#);
                }
                None => out.push_str("<g>"),
            }
            for primitive in &layer.primitives {
                write_primitive(&mut out, primitive);
            }
            out.push_str("</g>");
        }

        out.push_str("</svg>");
        out
    }
}

fn write_style(out: &mut String, style: &Style) {
    match style.fill {
        Some(fill) => {
            let _ = write!(out, r#" fill="{fill}""#);
        }
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = style.stroke {
        let _ = write!(out, r#" stroke="{stroke}""#);
    }
    if let Some(width) = style.stroke_width {
        let _ = write!(out, r#" stroke-width="{width}""#);
    }
    if let Some(dash) = style.dash {
        let _ = write!(out, r#" stroke-dasharray="{dash}""#);
    }
    if let Some(opacity) = style.opacity {
        let _ = write!(out, r#" opacity="{opacity}""#);
    }
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            rx,
            style,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}""#
            );
            if *rx > 0.0 {
                let _ = write!(out, r#" rx="{rx}""#);
            }
            write_style(out, style);
            out.push_str("/>");
        }
        Primitive::Circle {
            cx,
            cy,
            r,
            style,
            blurred,
        } => {
            let _ = write!(out, r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}""#);
            write_style(out, style);
            if *blurred {
                out.push_str(r#" filter="url(#blur)""#);
            }
            out.push_str("/>");
        }
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            style,
        } => {
            let _ = write!(
                out,
                r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#
            );
            write_style(out, style);
            out.push_str("/>");
        }
        Primitive::Polyline { points, style } => {
            out.push_str(r#"<polyline points=""#);
            for (i, (x, y)) in points.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{x:.2},{y:.2}");
            }
            out.push('"');
            write_style(out, style);
            out.push_str("/>");
        }
        Primitive::Text {
            x,
            y,
            content,
            fill,
            size,
            weight,
            mono,
        } => {
            let _ = write!(
                out,
                r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" fill="{fill}" font-size="{size}""#
            );
            if let Some(weight) = weight {
                let _ = write!(out, r#" font-weight="{weight}""#);
            }
            if *mono {
                out.push_str(r#" font-family="monospace""#);
            }
            let _ = write!(out, ">{content}</text>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene_is_a_well_formed_svg() {
        let scene = Scene::new(740.0, 500.0);
        let svg = scene.to_svg();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 740 500""#));
        assert!(!svg.contains("filter"));
    }

    #[test]
    fn blur_filter_is_emitted_only_when_used() {
        let mut scene = Scene::new(740.0, 500.0);
        let mut layer = Layer::with_opacity(LayerKind::HeatMap, 0.4);
        layer.push(Primitive::Circle {
            cx: 100.0,
            cy: 100.0,
            r: 30.0,
            style: Style {
                fill: Some("#22c55e"),
                ..Style::default()
            },
            blurred: true,
        });
        scene.layers.push(layer);

        let svg = scene.to_svg();

        assert!(svg.contains("feGaussianBlur"));
        assert!(svg.contains(r#"filter="url(#blur)""#));
        assert!(svg.contains(r#"<g opacity="0.4">"#));
    }

    #[test]
    fn missing_fill_serializes_as_none() {
        let mut scene = Scene::new(100.0, 100.0);
        let mut layer = Layer::new(LayerKind::PitchBase);
        layer.push(Primitive::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 10.0,
            y2: 10.0,
            style: Style {
                stroke: Some("#fff"),
                stroke_width: Some(1.5),
                dash: Some("4 2"),
                ..Style::default()
            },
        });
        scene.layers.push(layer);

        let svg = scene.to_svg();

        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r#"stroke-dasharray="4 2""#));
    }

    #[test]
    fn polyline_points_are_space_separated_pairs() {
        let mut scene = Scene::new(100.0, 100.0);
        let mut layer = Layer::new(LayerKind::DefensiveLines);
        layer.push(Primitive::Polyline {
            points: vec![(1.0, 2.0), (3.0, 4.0)],
            style: Style::default(),
        });
        scene.layers.push(layer);

        assert!(scene.to_svg().contains(r#"points="1.00,2.00 3.00,4.00""#));
    }

    #[test]
    fn layer_lookup_finds_by_kind() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.layers.push(Layer::new(LayerKind::PitchBase));
        scene.layers.push(Layer::new(LayerKind::Markers));

        assert!(scene.layer(LayerKind::Markers).is_some());
        assert!(scene.layer(LayerKind::Pressure).is_none());
    }
}
