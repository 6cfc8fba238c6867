// ABOUTME: Per-element constraint sets and the containers that hold them.
// ABOUTME: SpringPanel is the concrete container the solvers operate on.

use springgrid_core::{Rect, Size};

use crate::Spring;

/// One of the edges a constraint set can answer for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    X,
    Y,
    Width,
    Height,
    /// x + width
    East,
    /// y + height
    South,
}

/// Springs for an element's position and size
#[derive(Debug, Clone)]
pub struct Constraints {
    x: Spring,
    y: Spring,
    width: Spring,
    height: Spring,
}

impl Constraints {
    pub fn new(x: Spring, y: Spring, width: Spring, height: Spring) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Unpositioned constraints sized to `size`
    pub fn from_preferred(size: Size) -> Self {
        Self::new(
            Spring::zero(),
            Spring::zero(),
            Spring::constant(size.width),
            Spring::constant(size.height),
        )
    }

    pub fn x(&self) -> &Spring {
        &self.x
    }

    pub fn y(&self) -> &Spring {
        &self.y
    }

    pub fn width(&self) -> &Spring {
        &self.width
    }

    pub fn height(&self) -> &Spring {
        &self.height
    }

    pub fn set_x(&mut self, x: Spring) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: Spring) {
        self.y = y;
    }

    pub fn set_width(&mut self, width: Spring) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: Spring) {
        self.height = height;
    }

    pub fn east(&self) -> Spring {
        Spring::sum(self.x.clone(), self.width.clone())
    }

    pub fn south(&self) -> Spring {
        Spring::sum(self.y.clone(), self.height.clone())
    }

    pub fn edge(&self, edge: Edge) -> Spring {
        match edge {
            Edge::X => self.x.clone(),
            Edge::Y => self.y.clone(),
            Edge::Width => self.width.clone(),
            Edge::Height => self.height.clone(),
            Edge::East => self.east(),
            Edge::South => self.south(),
        }
    }

    /// Evaluate all four springs
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x.value(),
            self.y.value(),
            self.width.value(),
            self.height.value(),
        )
    }
}

/// The container's own right and bottom edges, unset until a grid is solved
#[derive(Debug, Clone, Default)]
pub struct Bounds {
    pub east: Option<Spring>,
    pub south: Option<Spring>,
}

impl Bounds {
    pub fn new(east: Spring, south: Spring) -> Self {
        Self {
            east: Some(east),
            south: Some(south),
        }
    }

    /// Evaluated size, if both edges are set
    pub fn size(&self) -> Option<Size> {
        match (&self.east, &self.south) {
            (Some(east), Some(south)) => Some(Size::new(east.value(), south.value())),
            _ => None,
        }
    }
}

/// A container whose children are positioned by springs.
///
/// Implementing this trait is what makes a container solvable; there is no
/// runtime check for the layout model.
pub trait SpringContainer {
    /// Number of children, in row-major order
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn constraints(&self, index: usize) -> Option<&Constraints>;

    fn constraints_mut(&mut self, index: usize) -> Option<&mut Constraints>;

    fn bounds(&self) -> &Bounds;

    fn set_bounds(&mut self, bounds: Bounds);
}

/// A child of a [`SpringPanel`]
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    preferred: Size,
    constraints: Constraints,
}

impl Element {
    pub fn new(name: impl Into<String>, preferred: Size) -> Self {
        Self {
            name: name.into(),
            preferred,
            constraints: Constraints::from_preferred(preferred),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preferred(&self) -> Size {
        self.preferred
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn rect(&self) -> Rect {
        self.constraints.rect()
    }
}

/// An ordered list of elements plus the panel's own bounds
#[derive(Debug, Clone, Default)]
pub struct SpringPanel {
    elements: Vec<Element>,
    bounds: Bounds,
}

impl SpringPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            bounds: Bounds::default(),
        }
    }

    /// Append an element sized to its preferred size, returns its index
    pub fn push(&mut self, name: impl Into<String>, preferred: Size) -> usize {
        self.elements.push(Element::new(name, preferred));
        self.elements.len() - 1
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Change an element's preferred size and drop any solved springs for it.
    ///
    /// Returns false if `index` is out of range.
    pub fn set_preferred(&mut self, index: usize, preferred: Size) -> bool {
        match self.elements.get_mut(index) {
            Some(element) => {
                element.preferred = preferred;
                element.constraints = Constraints::from_preferred(preferred);
                true
            }
            None => false,
        }
    }

    /// Rebuild every element's constraints from its preferred size and clear the bounds
    pub fn reset(&mut self) {
        for element in &mut self.elements {
            element.constraints = Constraints::from_preferred(element.preferred);
        }
        self.bounds = Bounds::default();
    }

    /// Evaluate every element's position and size
    pub fn layout(&self) -> Vec<Rect> {
        self.elements.iter().map(Element::rect).collect()
    }

    /// Evaluated panel size, once a solver has set the bounds
    pub fn size(&self) -> Option<Size> {
        self.bounds().size()
    }
}

impl SpringContainer for SpringPanel {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn constraints(&self, index: usize) -> Option<&Constraints> {
        self.elements.get(index).map(|e| &e.constraints)
    }

    fn constraints_mut(&mut self, index: usize) -> Option<&mut Constraints> {
        self.elements.get_mut(index).map(|e| &mut e.constraints)
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_size_seeds_constraints() {
        let element = Element::new("ok", Size::new(40, 20));
        assert_eq!(element.rect(), Rect::new(0, 0, 40, 20));
        assert_eq!(element.constraints().edge(Edge::East).value(), 40);
        assert_eq!(element.constraints().edge(Edge::South).value(), 20);
    }

    #[test]
    fn derived_edges_follow_setters() {
        let mut c = Constraints::from_preferred(Size::new(10, 5));
        c.set_x(Spring::constant(3));
        c.set_y(Spring::constant(4));
        c.set_width(Spring::constant(11));
        c.set_height(Spring::constant(6));
        assert_eq!(c.east().value(), 14);
        assert_eq!(c.south().value(), 10);
        assert_eq!(c.rect(), Rect::new(3, 4, 11, 6));
    }

    #[test]
    fn push_and_index() {
        let mut panel = SpringPanel::new();
        assert!(panel.is_empty());
        assert_eq!(panel.push("a", Size::new(1, 2)), 0);
        assert_eq!(panel.push("b", Size::new(3, 4)), 1);

        assert_eq!(panel.len(), 2);
        assert_eq!(panel.element(1).map(Element::name), Some("b"));
        assert!(panel.constraints(2).is_none());
        assert_eq!(panel.size(), None);
    }

    #[test]
    fn set_preferred_resets_one_element() {
        let mut panel = SpringPanel::new();
        panel.push("a", Size::new(1, 2));
        if let Some(c) = panel.constraints_mut(0) {
            c.set_x(Spring::constant(50));
        }

        assert!(panel.set_preferred(0, Size::new(7, 8)));
        assert_eq!(panel.layout(), vec![Rect::new(0, 0, 7, 8)]);
        assert!(!panel.set_preferred(3, Size::new(1, 1)));
    }

    #[test]
    fn reset_clears_bounds() {
        let mut panel = SpringPanel::new();
        panel.push("a", Size::new(1, 2));
        panel.set_bounds(Bounds::new(Spring::constant(9), Spring::constant(9)));
        assert_eq!(panel.size(), Some(Size::new(9, 9)));

        panel.reset();
        assert_eq!(panel.size(), None);
    }

    #[test]
    fn with_elements_keeps_order() {
        let panel = SpringPanel::with_elements([
            Element::new("first", Size::new(1, 2)),
            Element::new("second", Size::new(3, 4)),
        ]);
        let names: Vec<&str> = panel.elements().iter().map(Element::name).collect();
        assert_eq!(names, ["first", "second"]);
        assert!(panel.bounds().east.is_none());
        assert_eq!(panel.layout()[1], Rect::new(0, 0, 3, 4));
    }
}
