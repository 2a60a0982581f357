//! Hit-testing against host-provided view types.

use touchgate::geometry::{Point, Rect};
use touchgate::{
    ContainerNode, HitRegion, HitTestConfig, ResolutionOrder, TouchEvent, TouchPhase, ViewNode,
    coordinates_inside_view, resolve_hit,
};

/// A host leaf widget.
struct Label {
    frame: Rect,
}

/// A host container holding heterogeneous children.
struct Stack {
    frame: Rect,
    children: Vec<Box<dyn ViewNode>>,
}

impl ViewNode for Label {
    fn hit_rect(&self) -> Rect {
        self.frame
    }
}

impl ViewNode for Stack {
    fn hit_rect(&self) -> Rect {
        self.frame
    }

    fn as_container(&self) -> Option<&dyn ContainerNode> {
        Some(self)
    }
}

impl ContainerNode for Stack {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<&dyn ViewNode> {
        self.children.get(index).map(|child| &**child)
    }
}

fn label(l: f32, t: f32, r: f32, b: f32) -> Label {
    Label {
        frame: Rect::from_ltrb(l, t, r, b),
    }
}

#[test]
fn test_host_leaf_view() {
    let leaf = label(0.0, 0.0, 100.0, 100.0);
    let touch = TouchEvent::new(50.0, 50.0);

    let debug = HitTestConfig::new().with_debug(true);
    assert_eq!(resolve_hit(&touch, Some(&leaf), &debug), Some(HitRegion::View));
    assert!(!coordinates_inside_view(&touch, Some(&leaf), &HitTestConfig::new()));
}

#[test]
fn test_host_container_without_children() {
    let stack = Stack {
        frame: Rect::from_ltrb(0.0, 0.0, 100.0, 100.0),
        children: Vec::new(),
    };
    let touch = TouchEvent::new(50.0, 50.0);

    assert!(!coordinates_inside_view(&touch, Some(&stack), &HitTestConfig::new()));
    let deepest = HitTestConfig::new().with_order(ResolutionOrder::DeepestFirst);
    assert_eq!(resolve_hit(&touch, Some(&stack), &deepest), Some(HitRegion::View));
}

#[test]
fn test_host_nested_stacks() {
    let root = Stack {
        frame: Rect::from_ltrb(0.0, 0.0, 320.0, 640.0),
        children: vec![
            Box::new(Stack {
                frame: Rect::from_ltrb(0.0, 540.0, 320.0, 640.0),
                children: vec![Box::new(label(16.0, 556.0, 304.0, 624.0))],
            }),
            Box::new(label(0.0, 0.0, 320.0, 640.0)),
        ],
    };
    let first_hit = HitTestConfig::new();
    let deepest = HitTestConfig::new().with_order(ResolutionOrder::DeepestFirst);

    // Padding around the nested label belongs to the content
    let padding = TouchEvent::new(5.0, 545.0);
    assert_eq!(resolve_hit(&padding, Some(&root), &first_hit), Some(HitRegion::Content));
    assert_eq!(resolve_hit(&padding, Some(&root), &deepest), None);

    let on_label = TouchEvent::new(100.0, 600.0);
    assert_eq!(resolve_hit(&on_label, Some(&root), &deepest), Some(HitRegion::NestedContent));

    // The second child covers the screen but is never consulted
    let above = TouchEvent::new(100.0, 100.0);
    assert_eq!(resolve_hit(&above, Some(&root), &first_hit), None);
    assert_eq!(resolve_hit(&above, Some(&root), &deepest), None);
}

#[test]
fn test_every_touch_phase_is_tested_the_same() {
    let view = touchgate::View::container(
        Rect::from_ltrb(0.0, 0.0, 100.0, 100.0),
        [touchgate::View::leaf(Rect::from_ltrb(10.0, 10.0, 90.0, 90.0))],
    );
    let config = HitTestConfig::for_build();
    for phase in [
        TouchPhase::Started,
        TouchPhase::Moved,
        TouchPhase::Ended,
        TouchPhase::Cancelled,
    ] {
        let touch = TouchEvent::with_phase(7, phase, Point::new(50.0, 50.0));
        assert!(touch.is_inside(Some(&view), &config));
    }
}

#[test]
fn test_spec_scenario_both_orders() {
    let view = touchgate::View::container(
        Rect::from_ltrb(0.0, 0.0, 100.0, 100.0),
        [touchgate::View::container(
            Rect::from_ltrb(10.0, 10.0, 90.0, 90.0),
            [touchgate::View::leaf(Rect::from_ltrb(20.0, 20.0, 80.0, 80.0))],
        )],
    );
    let first_hit = HitTestConfig::new();
    let deepest = HitTestConfig::new().with_order(ResolutionOrder::DeepestFirst);

    let inside_all = TouchEvent::new(30.0, 30.0);
    assert!(inside_all.is_inside(Some(&view), &first_hit));
    assert!(inside_all.is_inside(Some(&view), &deepest));

    let between = TouchEvent::new(85.0, 85.0);
    assert!(between.is_inside(Some(&view), &first_hit));
    assert!(!between.is_inside(Some(&view), &deepest));
}

#[test]
fn test_fractional_touch_against_fractional_bounds() {
    let inset = label(0.5, 0.5, 100.0, 100.0);
    let outer = label(0.0, 0.0, 100.0, 100.0);
    let configs = [
        HitTestConfig::new().with_debug(true),
        HitTestConfig::new().with_order(ResolutionOrder::DeepestFirst),
    ];

    for config in &configs {
        // Strictly inside a rectangle whose left edge is fractional
        assert!(TouchEvent::new(0.9, 50.0).is_inside(Some(&inset), config));
        assert!(!TouchEvent::new(0.25, 50.0).is_inside(Some(&inset), config));

        // The band just left of and above an integer rectangle is outside
        assert!(!TouchEvent::new(-0.5, 50.0).is_inside(Some(&outer), config));
        assert!(!TouchEvent::new(50.0, -0.5).is_inside(Some(&outer), config));
        assert!(TouchEvent::new(99.5, 99.5).is_inside(Some(&outer), config));
    }
}
