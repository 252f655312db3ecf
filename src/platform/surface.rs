/// Rendering surface: an arena of card elements plus the section heading.
///
/// Gallery logic only ever holds `ElementId`s; creating and destroying the
/// visual resources behind them goes through this arena.

use crate::core::types::ElementId;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// What a property change or tween acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Card(ElementId),
    Heading,
}

/// Fully resolved animatable properties of a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    /// Degrees, clockwise.
    pub rotation: f64,
    pub opacity: f64,
}

/// Partial property set; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Props {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
}

impl Props {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn opacity(opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
            ..Self::default()
        }
    }

    pub fn with_rotation(self, rotation: f64) -> Self {
        Self {
            rotation: Some(rotation),
            ..self
        }
    }

    /// Overwrite the fields of `pose` that this set specifies.
    pub fn apply_to(&self, pose: &mut Pose) {
        if let Some(x) = self.x {
            pose.x = x;
        }
        if let Some(y) = self.y {
            pose.y = y;
        }
        if let Some(rotation) = self.rotation {
            pose.rotation = rotation;
        }
        if let Some(opacity) = self.opacity {
            pose.opacity = opacity;
        }
    }
}

/// A card image placed on the surface. `x`/`y` is the card's center.
#[derive(Debug, Clone)]
pub struct Element {
    pub image_path: PathBuf,
    pub pose: Pose,
}

#[derive(Debug, Clone)]
pub struct Heading {
    pub text: String,
    pub opacity: f64,
}

pub struct Surface {
    elements: BTreeMap<ElementId, Element>,
    heading: Heading,
    next_id: u64,
}

impl Surface {
    pub fn new(heading_text: &str) -> Self {
        Self {
            elements: BTreeMap::new(),
            heading: Heading {
                text: heading_text.to_string(),
                opacity: 1.0,
            },
            next_id: 0,
        }
    }

    /// Attach a new card element at `pose`, returning its handle.
    pub fn create(&mut self, image_path: PathBuf, pose: Pose) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, Element { image_path, pose });
        id
    }

    /// Detach and drop an element. Returns false if it was already gone.
    pub fn destroy(&mut self, id: ElementId) -> bool {
        self.elements.remove(&id).is_some()
    }

    /// Drop every card element, leaving the heading in place.
    pub fn clear_cards(&mut self) -> usize {
        let n = self.elements.len();
        self.elements.clear();
        n
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Card elements in creation order (back to front).
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter().map(|(id, e)| (*id, e))
    }

    pub fn heading(&self) -> &Heading {
        &self.heading
    }

    pub fn set_heading_text(&mut self, text: &str) {
        self.heading.text = text.to_string();
    }

    /// Current pose of `target`, or `None` if the element no longer exists.
    pub fn pose(&self, target: Target) -> Option<Pose> {
        match target {
            Target::Card(id) => self.elements.get(&id).map(|e| e.pose),
            Target::Heading => Some(Pose {
                x: 0.0,
                y: 0.0,
                rotation: 0.0,
                opacity: self.heading.opacity,
            }),
        }
    }

    /// Instantaneous property assignment. Returns false for a missing target.
    pub fn apply(&mut self, target: Target, props: Props) -> bool {
        match target {
            Target::Card(id) => match self.elements.get_mut(&id) {
                Some(element) => {
                    props.apply_to(&mut element.pose);
                    true
                }
                None => false,
            },
            Target::Heading => {
                if let Some(opacity) = props.opacity {
                    self.heading.opacity = opacity;
                }
                true
            }
        }
    }
}
