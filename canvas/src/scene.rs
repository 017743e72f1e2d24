//! Scene model: drawable elements and the in-memory list that owns them.
//!
//! This module defines the two element variants the whiteboard supports
//! (`ElementKind::Rect`, `ElementKind::Line`) and the `Scene` that owns all
//! live elements. The scene is a plain ordered list: insertion order is paint
//! order, and it lives only as long as the page view.
//!
//! Both variants share the same four numeric fields. A rectangle reads them
//! as min corner plus extent; a line reads `(x, y)` as its start point and
//! `(width, height)` as its absolute end point, which is why translating a
//! line moves all four fields.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use uuid::Uuid;

use crate::camera::Point;

/// Unique identifier for a scene element.
pub type ElementId = Uuid;

/// The kind of a scene element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Axis-aligned rectangle outline.
    Rect,
    /// Straight segment from a start point to an end point.
    Line,
}

/// A single drawable element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Element {
    /// Create a rectangle with `origin` as its corner and the given extents.
    #[must_use]
    pub fn new_rect(origin: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ElementKind::Rect,
            x: origin.x,
            y: origin.y,
            width,
            height,
        }
    }

    /// Create a line running from `start` to `end`.
    #[must_use]
    pub fn new_line(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ElementKind::Line,
            x: start.x,
            y: start.y,
            width: end.x,
            height: end.y,
        }
    }

    /// Start point of a line element.
    #[must_use]
    pub fn line_start(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// End point of a line element. For lines the width/height fields hold
    /// absolute coordinates, not extents.
    #[must_use]
    pub fn line_end(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Move the element by a world-space delta.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        if self.kind == ElementKind::Line {
            self.width += dx;
            self.height += dy;
        }
    }
}

/// Ordered list of live elements. First element paints first (bottom-most).
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element on top of the existing ones.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element, preserving the order of the rest.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|el| el.id == id)?;
        Some(self.elements.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// All elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
