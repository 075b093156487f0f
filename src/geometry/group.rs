use std::collections::BTreeMap;

use slotmap::{new_key_type, SecondaryMap, SlotMap};
use tracing::debug;

use crate::geometry::shape::Shape;
use crate::operations::transform::{AffineMap, Transform};

new_key_type! {
    /// Stable handle of an element inside a [`Group`].
    pub struct ElementId;
}

/// Per-element options, e.g. `label`.
pub type Metadata = BTreeMap<String, String>;

/// Key of the label option.
pub const LABEL: &str = "label";

/// An ordered collection of shapes with per-element metadata.
///
/// Elements are addressed by a 1-based position that wraps around, or by
/// their [`ElementId`]. The group imposes no geometric invariant.
#[derive(Debug, Clone, Default)]
pub struct Group {
    shapes: SlotMap<ElementId, Shape>,
    metadata: SecondaryMap<ElementId, Metadata>,
    order: Vec<ElementId>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape.
    pub fn push(&mut self, shape: impl Into<Shape>) -> ElementId {
        let id = self.shapes.insert(shape.into());
        self.metadata.insert(id, Metadata::new());
        self.order.push(id);
        id
    }

    /// Builder form of [`Group::push`].
    #[must_use]
    pub fn with(mut self, shape: impl Into<Shape>) -> Self {
        self.push(shape);
        self
    }

    /// Sets an option on the most recently added element.
    #[must_use]
    pub fn with_option(mut self, key: &str, value: &str) -> Self {
        match self.order.last().copied() {
            Some(id) => self.set_option(id, key, value),
            None => debug!(key, "option set on an empty group"),
        }
        self
    }

    /// Labels the most recently added element.
    #[must_use]
    pub fn with_label(self, label: &str) -> Self {
        self.with_option(LABEL, label)
    }

    /// Sets an option on the element `id`. Unknown ids are ignored.
    pub fn set_option(&mut self, id: ElementId, key: &str, value: &str) {
        if let Some(meta) = self.metadata.get_mut(id) {
            meta.insert(key.to_owned(), value.to_owned());
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Handle of the `i`-th element, 1-based, wrapping around.
    #[must_use]
    pub fn id(&self, i: usize) -> Option<ElementId> {
        let n = self.order.len();
        if n == 0 {
            return None;
        }
        self.order.get((i % n + n - 1) % n).copied()
    }

    /// The `i`-th element, 1-based, wrapping around.
    #[must_use]
    pub fn element(&self, i: usize) -> Option<&Shape> {
        self.id(i).and_then(|id| self.shapes.get(id))
    }

    /// The element with handle `id`, if it is still in the group.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Metadata of the `i`-th element.
    #[must_use]
    pub fn metadata(&self, i: usize) -> Option<&Metadata> {
        self.id(i).and_then(|id| self.metadata.get(id))
    }

    /// Value of option `key` on the `i`-th element.
    #[must_use]
    pub fn option(&self, i: usize, key: &str) -> Option<&str> {
        self.metadata(i).and_then(|m| m.get(key)).map(String::as_str)
    }

    /// Elements in order, with their metadata.
    pub fn iter(&self) -> impl Iterator<Item = (&Shape, Option<&Metadata>)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.shapes.get(id).map(|s| (s, self.metadata.get(id))))
    }

    /// A structural deep copy.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Same length and pairwise equal elements. Metadata is not compared.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|((a, _), (b, _))| a.is_equal(b))
    }
}

impl<S: Into<Shape>> FromIterator<S> for Group {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut group = Self::new();
        for shape in iter {
            group.push(shape);
        }
        group
    }
}

impl Transform for Group {
    fn transform(&self, map: &AffineMap) -> Self {
        let mut group = self.clone();
        for (_, shape) in &mut group.shapes {
            *shape = shape.transform(map);
        }
        group
    }
}
