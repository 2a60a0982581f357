//! View nodes as seen by the hit-tester.
//!
//! A view has two capabilities that matter for hit-testing:
//!
//! - it has a hit rectangle ([`ViewNode::hit_rect`]);
//! - it may be a container with ordered children ([`ViewNode::as_container`]).
//!
//! Host toolkits implement these traits on their own view handles. [`View`]
//! is a concrete tree that implements both and is enough for most callers.

use touchgate_geometry::Rect;

/// Anything with an on-screen hit rectangle.
pub trait ViewNode {
    /// The view's hit rectangle, in the same coordinate space as the touch.
    fn hit_rect(&self) -> Rect;

    /// The view as a container, if it is one.
    ///
    /// Leaf views return `None`. A container may still have no children.
    fn as_container(&self) -> Option<&dyn ContainerNode> {
        None
    }
}

/// A view that owns an ordered list of children.
pub trait ContainerNode: ViewNode {
    /// Number of direct children.
    fn child_count(&self) -> usize;

    /// The child at `index`, or `None` if out of range.
    fn child_at(&self, index: usize) -> Option<&dyn ViewNode>;

    /// The first child, which hosts the content of the container.
    fn first_child(&self) -> Option<&dyn ViewNode> {
        self.child_at(0)
    }
}

/// A concrete view tree node.
///
/// A view built with [`View::leaf`] is not a container. One built with
/// [`View::container`] is, even when it has no children yet.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    bounds: Rect,
    children: Option<Vec<View>>,
}

impl View {
    /// Create a leaf view.
    pub fn leaf(bounds: Rect) -> Self {
        Self {
            bounds,
            children: None,
        }
    }

    /// Create a container view with the given children.
    pub fn container(bounds: Rect, children: impl IntoIterator<Item = View>) -> Self {
        Self {
            bounds,
            children: Some(children.into_iter().collect()),
        }
    }

    /// Create a container view with no children.
    pub fn empty_container(bounds: Rect) -> Self {
        Self::container(bounds, [])
    }

    /// Append a child. A leaf view becomes a container.
    pub fn push_child(&mut self, child: View) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Builder form of [`push_child`](Self::push_child).
    pub fn with_child(mut self, child: View) -> Self {
        self.push_child(child);
        self
    }

    /// The view's bounding rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move or resize the view.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// True if the view can hold children, even when it has none.
    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    /// The direct children. Empty for leaf views.
    pub fn children(&self) -> &[View] {
        self.children.as_deref().unwrap_or(&[])
    }
}

impl ViewNode for View {
    fn hit_rect(&self) -> Rect {
        self.bounds
    }

    fn as_container(&self) -> Option<&dyn ContainerNode> {
        if self.is_container() {
            Some(self as &dyn ContainerNode)
        } else {
            None
        }
    }
}

impl ContainerNode for View {
    fn child_count(&self) -> usize {
        self.children().len()
    }

    fn child_at(&self, index: usize) -> Option<&dyn ViewNode> {
        self.children().get(index).map(|child| child as &dyn ViewNode)
    }
}
