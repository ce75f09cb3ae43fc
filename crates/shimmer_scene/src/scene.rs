//! Scene graph and input routing
//!
//! The scene owns every element and an explicit z-order. It implements
//! [`PropertySink`], so engine writes flow through the same setters user code
//! uses; that single path is what keeps cached bounds honest.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use shimmer_animation::{AnimValue, Property, PropertySink, TargetId, TransformEngine};
use shimmer_geometry::{Point, Rect};

use crate::element::Element;

new_key_type! {
    pub struct ElementId;
}

/// Container of scene elements, ordered back-to-front
#[derive(Default)]
pub struct Scene {
    elements: SlotMap<ElementId, Element>,
    /// z-order, topmost last
    order: Vec<ElementId>,
    by_target: FxHashMap<TargetId, ElementId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element with the given frame, registering it as an
    /// animation target. New elements land on top.
    pub fn insert(&mut self, engine: &mut TransformEngine, frame: Rect) -> ElementId {
        let target = engine.register_target();
        let id = self.elements.insert(Element::new(target, frame));
        self.order.push(id);
        self.by_target.insert(target, id);
        id
    }

    /// Remove an element and dispose its animation target, dropping every
    /// transform still scheduled for it
    pub fn remove(&mut self, engine: &mut TransformEngine, id: ElementId) {
        let Some(element) = self.elements.remove(id) else {
            return;
        };
        engine.dispose_target(element.target());
        self.by_target.remove(&element.target());
        self.order.retain(|e| *e != id);
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Move an element above everything else
    pub fn bring_to_front(&mut self, id: ElementId) {
        if let Some(pos) = self.order.iter().position(|e| *e == id) {
            let id = self.order.remove(pos);
            self.order.push(id);
        }
    }

    /// Set a property through the invalidating setter path
    pub fn set(&mut self, id: ElementId, property: Property, value: AnimValue) {
        if let Some(element) = self.elements.get_mut(id) {
            element.apply(property, value);
        }
    }

    /// Lazily recomputed world-space bounds for one element
    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(id).map(|e| e.bounds())
    }

    /// Route a pointer position to the topmost element containing it
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|id| self.elements.get(*id).is_some_and(|e| e.hit(point)))
    }
}

impl PropertySink for Scene {
    fn set_property(&mut self, target: TargetId, property: Property, value: AnimValue) {
        let Some(&id) = self.by_target.get(&target) else {
            // A write can race element removal within a tick; drop it
            tracing::trace!(?target, ?property, "animated write to removed element dropped");
            return;
        };
        self.set(id, property, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_prefers_topmost() {
        let mut engine = TransformEngine::new();
        let mut scene = Scene::new();
        let below = scene.insert(&mut engine, Rect::new(0.0, 0.0, 20.0, 20.0));
        let above = scene.insert(&mut engine, Rect::new(5.0, 5.0, 20.0, 20.0));

        assert_eq!(scene.hit_test(Point::new(10.0, 10.0)), Some(above));
        assert_eq!(scene.hit_test(Point::new(2.0, 2.0)), Some(below));
        assert_eq!(scene.hit_test(Point::new(50.0, 50.0)), None);

        scene.bring_to_front(below);
        assert_eq!(scene.hit_test(Point::new(10.0, 10.0)), Some(below));
    }

    #[test]
    fn hit_test_respects_half_open_edges() {
        let mut engine = TransformEngine::new();
        let mut scene = Scene::new();
        let left = scene.insert(&mut engine, Rect::new(0.0, 0.0, 10.0, 10.0));
        let right = scene.insert(&mut engine, Rect::new(10.0, 0.0, 10.0, 10.0));

        // The shared edge belongs to the right element only
        assert_eq!(scene.hit_test(Point::new(10.0, 5.0)), Some(right));
        assert_eq!(scene.hit_test(Point::new(9.999, 5.0)), Some(left));
    }

    #[test]
    fn remove_disposes_the_animation_target() {
        let mut engine = TransformEngine::new();
        let mut scene = Scene::new();
        let id = scene.insert(&mut engine, Rect::new(0.0, 0.0, 10.0, 10.0));
        let target = scene.element(id).unwrap().target();

        scene.remove(&mut engine, id);
        assert!(scene.is_empty());
        assert_eq!(engine.target_count(), 0);
        assert!(matches!(
            engine.schedule(
                target,
                Property::X,
                AnimValue::Scalar(0.0),
                AnimValue::Scalar(1.0),
                0.0,
                100.0,
                shimmer_animation::Easing::Linear,
                0,
            ),
            Err(shimmer_core::CoreError::StaleTarget(_))
        ));
    }
}
