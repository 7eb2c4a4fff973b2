//! Editable object model.
//!
//! Every object on a page is an [`EditableObject`]: the fields shared by all
//! variants (identifier, draw order, pen, brush, position) plus an
//! [`ObjectShape`] carrying the variant-specific data. Dispatch is by
//! matching on the shape, never by inspecting runtime types.

use prototyper_core::{Brush, ModelError, ObjectId, Pen, Point, TextStyle};
use serde::{Deserialize, Serialize};
use std::fmt;

mod button;
mod group;
mod line;
mod polyline;
mod spin_box;
mod styled;
mod text;
mod toggle;

pub use button::ButtonShape;
pub use group::GroupShape;
pub use line::LineShape;
pub use polyline::{NodeSegments, PolylineShape};
pub use spin_box::SpinBoxShape;
pub use styled::StyledShape;
pub use text::TextDocument;
pub use toggle::ToggleShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Line,
    Polyline,
    Group,
    Button,
    CheckBox,
    RadioButton,
    SpinBox,
    Styled,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Line => "Line",
            ObjectKind::Polyline => "Polyline",
            ObjectKind::Group => "Group",
            ObjectKind::Button => "Button",
            ObjectKind::CheckBox => "CheckBox",
            ObjectKind::RadioButton => "RadioButton",
            ObjectKind::SpinBox => "SpinBox",
            ObjectKind::Styled => "Styled",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectShape {
    Line(LineShape),
    Polyline(PolylineShape),
    Group(GroupShape),
    Button(ButtonShape),
    CheckBox(ToggleShape),
    RadioButton(ToggleShape),
    SpinBox(SpinBoxShape),
    Styled(StyledShape),
}

impl ObjectShape {
    /// Default shape for a freshly created element of the given kind.
    pub fn default_for(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Line => ObjectShape::Line(LineShape::default()),
            ObjectKind::Polyline => ObjectShape::Polyline(PolylineShape::default()),
            ObjectKind::Group => ObjectShape::Group(GroupShape::default()),
            ObjectKind::Button => ObjectShape::Button(ButtonShape::default()),
            ObjectKind::CheckBox => ObjectShape::CheckBox(ToggleShape::new("CheckBox")),
            ObjectKind::RadioButton => ObjectShape::RadioButton(ToggleShape::new("RadioButton")),
            ObjectKind::SpinBox => ObjectShape::SpinBox(SpinBoxShape::default()),
            ObjectKind::Styled => ObjectShape::Styled(StyledShape::default()),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectShape::Line(_) => ObjectKind::Line,
            ObjectShape::Polyline(_) => ObjectKind::Polyline,
            ObjectShape::Group(_) => ObjectKind::Group,
            ObjectShape::Button(_) => ObjectKind::Button,
            ObjectShape::CheckBox(_) => ObjectKind::CheckBox,
            ObjectShape::RadioButton(_) => ObjectKind::RadioButton,
            ObjectShape::SpinBox(_) => ObjectKind::SpinBox,
            ObjectShape::Styled(_) => ObjectKind::Styled,
        }
    }
}

fn variant_mismatch(id: &ObjectId, found: ObjectKind, expected: &str) -> ModelError {
    ModelError::VariantMismatch {
        id: id.clone(),
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

/// An object on the page, addressed by its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableObject {
    id: ObjectId,
    /// Draw order; higher values are drawn later (on top).
    pub z: f64,
    pen: Pen,
    brush: Brush,
    position: Point,
    pub handles_visible: bool,
    pub shape: ObjectShape,
}

impl EditableObject {
    pub fn new(id: ObjectId, shape: ObjectShape) -> Self {
        Self {
            id,
            z: 0.0,
            pen: Pen::default(),
            brush: Brush::default(),
            position: Point::default(),
            handles_visible: false,
            shape,
        }
    }

    pub fn object_id(&self) -> &ObjectId {
        &self.id
    }

    pub fn kind(&self) -> ObjectKind {
        self.shape.kind()
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn set_object_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_object_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Independent copy under `id` at the same geometry.
    ///
    /// Form text is copied without its edit log and handles start hidden.
    /// Group members are copied as identifiers only; the document
    /// duplicates the member objects themselves.
    pub fn duplicate(&self, id: ObjectId) -> Self {
        let shape = match &self.shape {
            ObjectShape::Button(b) => ObjectShape::Button(ButtonShape {
                text: b.text.detached_copy(),
                ..b.clone()
            }),
            ObjectShape::CheckBox(t) => ObjectShape::CheckBox(ToggleShape {
                text: t.text.detached_copy(),
                ..t.clone()
            }),
            ObjectShape::RadioButton(t) => ObjectShape::RadioButton(ToggleShape {
                text: t.text.detached_copy(),
                ..t.clone()
            }),
            ObjectShape::SpinBox(s) => ObjectShape::SpinBox(SpinBoxShape {
                text: s.text.detached_copy(),
                ..s.clone()
            }),
            other => other.clone(),
        };
        Self {
            id,
            handles_visible: false,
            shape,
            ..self.clone()
        }
    }

    /// New object under the same identifier with a different shape,
    /// keeping draw order, pen, brush and position.
    pub(crate) fn with_shape(&self, shape: ObjectShape) -> Self {
        Self {
            id: self.id.clone(),
            z: self.z,
            pen: self.pen,
            brush: self.brush,
            position: self.position,
            handles_visible: false,
            shape,
        }
    }

    pub fn as_line(&self) -> Option<&LineShape> {
        match &self.shape {
            ObjectShape::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Result<&mut LineShape, ModelError> {
        let kind = self.kind();
        match &mut self.shape {
            ObjectShape::Line(line) => Ok(line),
            _ => Err(variant_mismatch(&self.id, kind, "Line")),
        }
    }

    pub fn as_polyline(&self) -> Option<&PolylineShape> {
        match &self.shape {
            ObjectShape::Polyline(poly) => Some(poly),
            _ => None,
        }
    }

    pub fn as_polyline_mut(&mut self) -> Result<&mut PolylineShape, ModelError> {
        let kind = self.kind();
        match &mut self.shape {
            ObjectShape::Polyline(poly) => Ok(poly),
            _ => Err(variant_mismatch(&self.id, kind, "Polyline")),
        }
    }

    pub fn as_group(&self) -> Option<&GroupShape> {
        match &self.shape {
            ObjectShape::Group(group) => Some(group),
            _ => None,
        }
    }

    pub(crate) fn as_group_mut(&mut self) -> Option<&mut GroupShape> {
        match &mut self.shape {
            ObjectShape::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn text_document(&self) -> Option<&TextDocument> {
        match &self.shape {
            ObjectShape::Button(b) => Some(&b.text),
            ObjectShape::CheckBox(t) | ObjectShape::RadioButton(t) => Some(&t.text),
            ObjectShape::SpinBox(s) => Some(&s.text),
            _ => None,
        }
    }

    pub fn text_document_mut(&mut self) -> Result<&mut TextDocument, ModelError> {
        let kind = self.kind();
        match &mut self.shape {
            ObjectShape::Button(b) => Ok(&mut b.text),
            ObjectShape::CheckBox(t) | ObjectShape::RadioButton(t) => Ok(&mut t.text),
            ObjectShape::SpinBox(s) => Ok(&mut s.text),
            _ => Err(variant_mismatch(&self.id, kind, "text widget")),
        }
    }

    pub fn text_style(&self) -> Option<&TextStyle> {
        match &self.shape {
            ObjectShape::Button(b) => Some(&b.style),
            ObjectShape::CheckBox(t) | ObjectShape::RadioButton(t) => Some(&t.style),
            ObjectShape::SpinBox(s) => Some(&s.style),
            _ => None,
        }
    }

    /// Applies a text style to a Button, CheckBox/RadioButton or SpinBox.
    pub fn set_text_style(&mut self, style: TextStyle) -> Result<(), ModelError> {
        let kind = self.kind();
        match &mut self.shape {
            ObjectShape::Button(b) => b.style = style,
            ObjectShape::CheckBox(t) | ObjectShape::RadioButton(t) => t.style = style,
            ObjectShape::SpinBox(s) => s.style = style,
            _ => return Err(variant_mismatch(&self.id, kind, "text widget")),
        }
        Ok(())
    }

    pub fn is_checked(&self) -> Option<bool> {
        match &self.shape {
            ObjectShape::CheckBox(t) | ObjectShape::RadioButton(t) => Some(t.checked),
            _ => None,
        }
    }

    pub fn set_checked(&mut self, checked: bool) -> Result<(), ModelError> {
        let kind = self.kind();
        match &mut self.shape {
            ObjectShape::CheckBox(t) | ObjectShape::RadioButton(t) => {
                t.checked = checked;
                Ok(())
            }
            _ => Err(variant_mismatch(&self.id, kind, "CheckBox or RadioButton")),
        }
    }

    /// Positions of the edit handles in item coordinates.
    ///
    /// Derived from geometry, so handles follow every endpoint change.
    pub fn handle_points(&self) -> Vec<Point> {
        match &self.shape {
            ObjectShape::Line(line) => line.handle_points(),
            ObjectShape::Polyline(poly) => poly.handle_points(),
            _ => Vec::new(),
        }
    }
}
