//! OpenSCAD serialization.
//!
//! A [`ScadDocument`] pairs a shape tree with the single global tessellation
//! constant (`$fn`) and renders to OpenSCAD source text. The constant only
//! affects curve smoothness in the emitted header; it never feeds back into
//! any placement constant of the model.

use crate::shape::Shape;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default `$fn` segment count for curved surfaces.
pub const DEFAULT_SEGMENTS: u32 = 20;

/// Errors from document serialization and file output.
#[derive(Debug, Error)]
pub enum ScadError {
    /// Writing the rendered source to disk failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The JSON document form could not be encoded or decoded.
    #[error("invalid document json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A renderable OpenSCAD document: one root shape plus the tessellation
/// constant emitted as a `$fn` header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScadDocument {
    /// Curve tessellation fidelity (`$fn`) for the external renderer.
    pub segments: u32,
    /// The root of the shape tree.
    pub root: Shape,
}

impl ScadDocument {
    /// Wraps a shape tree with the default tessellation constant.
    pub fn new(root: Shape) -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            root,
        }
    }

    /// Overrides the tessellation constant (builder pattern).
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Renders the full OpenSCAD source. Deterministic: equal documents
    /// produce identical text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the rendered source to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ScadError> {
        let path = path.as_ref();
        fs::write(path, self.render()).map_err(|source| ScadError::Io {
            path: path.to_owned(),
            source,
        })
    }

    /// Serializes the document (tree form, not source text) to JSON.
    pub fn to_json(&self) -> Result<String, ScadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a document from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ScadError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for ScadDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "$fn = {};", self.segments)?;
        write_shape(f, &self.root, 0)
    }
}

/// Renders a bare shape without the `$fn` header.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_shape(f, self, 0)
    }
}

fn indent(f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
    for _ in 0..level {
        f.write_str("  ")?;
    }
    Ok(())
}

fn vec3(v: Vec3) -> String {
    format!("[{}, {}, {}]", v.x, v.y, v.z)
}

fn vec2(v: Vec2) -> String {
    format!("[{}, {}]", v.x, v.y)
}

fn center_suffix(center: bool) -> &'static str {
    if center { ", center = true" } else { "" }
}

fn write_block(
    f: &mut fmt::Formatter<'_>,
    level: usize,
    head: &str,
    children: &[Shape],
) -> fmt::Result {
    indent(f, level)?;
    writeln!(f, "{head} {{")?;
    for child in children {
        write_shape(f, child, level + 1)?;
    }
    indent(f, level)?;
    writeln!(f, "}}")
}

fn write_shape(f: &mut fmt::Formatter<'_>, shape: &Shape, level: usize) -> fmt::Result {
    match shape {
        Shape::Sphere { radius } => {
            indent(f, level)?;
            writeln!(f, "sphere(r = {radius});")
        }
        Shape::Cube { size, center } => {
            indent(f, level)?;
            writeln!(f, "cube({}{});", vec3(*size), center_suffix(*center))
        }
        Shape::Cylinder {
            radius_bottom,
            radius_top,
            height,
            center,
        } => {
            indent(f, level)?;
            if radius_bottom == radius_top {
                writeln!(
                    f,
                    "cylinder(r = {radius_bottom}, h = {height}{});",
                    center_suffix(*center)
                )
            } else {
                writeln!(
                    f,
                    "cylinder(r1 = {radius_bottom}, r2 = {radius_top}, h = {height}{});",
                    center_suffix(*center)
                )
            }
        }
        Shape::Circle { radius } => {
            indent(f, level)?;
            writeln!(f, "circle(r = {radius});")
        }
        Shape::Square { size, center } => {
            indent(f, level)?;
            writeln!(f, "square({}{});", vec2(*size), center_suffix(*center))
        }
        Shape::Import { path } => {
            indent(f, level)?;
            writeln!(f, "import(\"{path}\");")
        }
        Shape::Union { children } => write_block(f, level, "union()", children),
        Shape::Difference { children } => write_block(f, level, "difference()", children),
        Shape::Intersection { children } => write_block(f, level, "intersection()", children),
        Shape::Hull { children } => write_block(f, level, "hull()", children),
        Shape::Translate { offset, child } => {
            let head = format!("translate({})", vec3(*offset));
            write_block(f, level, &head, std::slice::from_ref(child.as_ref()))
        }
        Shape::Rotate { degrees, child } => {
            let head = format!("rotate({})", vec3(*degrees));
            write_block(f, level, &head, std::slice::from_ref(child.as_ref()))
        }
        Shape::Mirror { axis, child } => {
            let head = format!("mirror({})", vec3(*axis));
            write_block(f, level, &head, std::slice::from_ref(child.as_ref()))
        }
        Shape::Scale { factor, child } => {
            let head = format!("scale({})", vec3(*factor));
            write_block(f, level, &head, std::slice::from_ref(child.as_ref()))
        }
        Shape::LinearExtrude {
            height,
            scale,
            child,
        } => {
            let head = format!("linear_extrude(height = {height}, scale = {scale})");
            write_block(f, level, &head, std::slice::from_ref(child.as_ref()))
        }
    }
}
