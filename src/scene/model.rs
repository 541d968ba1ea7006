use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{MorphError, MorphResult};
use crate::geom::bounds::Bounds;
use crate::orbit::binder::OrbitDirection;

fn default_tag() -> String {
    "path".to_owned()
}

fn default_opacity() -> f64 {
    1.0
}

/// One drawable element of a scene, already flattened by the parsing layer.
///
/// `outline` is absolute path data with transforms applied. Shapes are read-only inputs to the
/// morph core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Structural name (`data-name`); stable-key fallback when `id` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "class_list", skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(alias = "d")]
    pub outline: String,
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
    /// Ancestor chain fingerprint, segments separated by `/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_key: Option<String>,
    #[serde(default)]
    pub order: usize,
    /// Manual orbit reference (`data-orbit`), with or without a leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit_dir: Option<OrbitDirection>,
}

impl Shape {
    pub fn new(outline: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            classes: Vec::new(),
            outline: outline.into(),
            tag: default_tag(),
            fill: None,
            stroke: None,
            stroke_width: None,
            fill_opacity: None,
            stroke_opacity: None,
            opacity: 1.0,
            stroke_dasharray: None,
            path_key: None,
            order: 0,
            orbit: None,
            orbit_dir: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_stroke_width(mut self, w: f64) -> Self {
        self.stroke_width = Some(w);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_dasharray(mut self, dash: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dash.into());
        self
    }

    pub fn with_path_key(mut self, key: impl Into<String>) -> Self {
        self.path_key = Some(key.into());
        self
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn with_orbit(mut self, orbit: impl Into<String>) -> Self {
        self.orbit = Some(orbit.into());
        self
    }

    pub fn with_orbit_dir(mut self, dir: OrbitDirection) -> Self {
        self.orbit_dir = Some(dir);
        self
    }

    /// Explicit id, else structural name. Empty strings do not count.
    pub fn stable_key(&self) -> Option<&str> {
        non_empty(self.id.as_deref()).or_else(|| non_empty(self.name.as_deref()))
    }

    /// Trimmed, lowercased, non-empty class tokens in declaration order.
    pub fn class_tokens(&self) -> Vec<String> {
        self.classes
            .iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect()
    }

    pub fn first_class(&self) -> Option<String> {
        self.class_tokens().into_iter().next()
    }

    pub fn has_fill(&self) -> bool {
        self.fill.as_deref().is_some_and(|f| f != "none")
    }

    pub fn has_stroke(&self) -> bool {
        self.stroke.as_deref().is_some_and(|s| s != "none")
    }

    pub fn paint_key(&self) -> &'static str {
        match (self.has_fill(), self.has_stroke()) {
            (true, true) => "fs",
            (true, false) => "f",
            (false, true) => "s",
            (false, false) => "none",
        }
    }

    /// Matching bucket: shapes only pair with shapes of the same tag and paint kind.
    pub fn bucket_key(&self) -> String {
        format!("{}:{}", self.tag, self.paint_key())
    }

    /// Manual orbit id with a leading `#` stripped.
    pub fn orbit_id(&self) -> Option<&str> {
        let raw = non_empty(self.orbit.as_deref())?;
        non_empty(Some(raw.strip_prefix('#').unwrap_or(raw)))
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_outline(&self.outline)
    }

    pub fn validate(&self) -> MorphResult<()> {
        if self.outline.trim().is_empty() {
            return Err(MorphError::scene(format!(
                "shape {} has an empty outline",
                self.label()
            )));
        }
        let numbers = [
            ("opacity", Some(self.opacity)),
            ("stroke_width", self.stroke_width),
            ("fill_opacity", self.fill_opacity),
            ("stroke_opacity", self.stroke_opacity),
        ];
        for (field, v) in numbers {
            if let Some(v) = v
                && !v.is_finite()
            {
                return Err(MorphError::scene(format!(
                    "shape {} has non-finite {field}",
                    self.label()
                )));
            }
        }
        Ok(())
    }

    fn label(&self) -> String {
        match self.stable_key() {
            Some(k) => format!("'{k}'"),
            None => format!("#{}", self.order),
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// A collection of shapes. JSON may be `{"shapes": [...]}` or a bare array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl<'de> Deserialize<'de> for Scene {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr(Vec<Shape>),
            Obj { shapes: Vec<Shape> },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr(shapes) | Repr::Obj { shapes } => Ok(Self { shapes }),
        }
    }
}

impl Scene {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn from_json_str(s: &str) -> MorphResult<Self> {
        let scene: Scene = serde_json::from_str(s)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Parse and validate a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MorphResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            MorphError::scene(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
            .map_err(|e| MorphError::scene(format!("load scene '{}': {e}", path.display())))
    }

    pub fn validate(&self) -> MorphResult<()> {
        self.shapes.iter().try_for_each(Shape::validate)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
