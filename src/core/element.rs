//! Graph-element state the effects operate on.
//!
//! Elements are owned by the host's graph; this crate only holds shared
//! references to them. Which fields are live depends on the rendering mode:
//! in 2D the `color` string is the rendered color, in 3D the material is and
//! `color` keeps the element's base color.

use crate::core::color::Rgb;
use std::cell::RefCell;
use std::rc::Rc;

/// Active rendering mode of the host viewer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisMode {
    TwoD,
    ThreeD,
}

/// Semantic tag carried alongside each element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GraphElementType {
    Node,
    Edge,
}

/// Shaded-mode render state of an element.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub opacity: f32,
}

impl Material {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }
}

/// A node or edge as the effects see it.
#[derive(Clone, Debug, Default)]
pub struct GraphElement {
    /// Current color in 2D mode; base color in 3D mode.
    pub color: String,
    /// Color saved while a 2D highlight is active.
    pub prev_color: Option<String>,
    /// Opacity saved while a 3D highlight is active.
    pub prev_opacity: Option<f32>,
    /// Render object, shared with the host scene. `None` means the element
    /// has not been materialized; 3D operations skip it.
    pub render_obj: Option<Rc<RefCell<Material>>>,
}

impl GraphElement {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    /// Element with an attached material, as the 3D scene produces them.
    pub fn shaded(color: impl Into<String>, material: Material) -> Self {
        Self {
            render_obj: Some(Rc::new(RefCell::new(material))),
            ..Self::new(color)
        }
    }
}

/// Pairs a shared element with its semantic type tag.
#[derive(Clone, Debug)]
pub struct ElementHandle {
    pub element: Rc<RefCell<GraphElement>>,
    pub graph_element_type: GraphElementType,
}

impl ElementHandle {
    pub fn new(element: Rc<RefCell<GraphElement>>, graph_element_type: GraphElementType) -> Self {
        Self {
            element,
            graph_element_type,
        }
    }

    /// Convenience for freshly built elements.
    pub fn from_element(element: GraphElement, graph_element_type: GraphElementType) -> Self {
        Self::new(Rc::new(RefCell::new(element)), graph_element_type)
    }
}
