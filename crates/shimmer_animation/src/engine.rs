//! Time-based property transform engine
//!
//! Schedules per-target, per-property transforms and evaluates every active
//! one against a single host-supplied `now` each tick. The engine only ever
//! writes interpolated values through a [`PropertySink`]; cache invalidation
//! is the sink's responsibility, triggered by its property setters.
//!
//! Completions are returned from [`TransformEngine::evaluate`] rather than
//! fired as callbacks mid-update, so observers never mutate the transform
//! list while it is being walked.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use shimmer_core::error::{CoreError, Result};

use crate::easing::Easing;
use crate::transform::{AnimValue, Property};

new_key_type! {
    /// Handle for a registered animation target
    pub struct TargetId;
    /// Handle for a scheduled transform, usable for cancellation
    pub struct TransformId;
}

/// Write sink for animated property values.
///
/// The scene graph implements this; its setters invalidate whatever caches
/// depend on the written property.
pub trait PropertySink {
    fn set_property(&mut self, target: TargetId, property: Property, value: AnimValue);
}

/// Record of a transform that finished during an `evaluate` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    pub transform: TransformId,
    pub target: TargetId,
    pub property: Property,
}

/// Run-once / repeat-N / infinite repeat selector: `0` runs a single cycle,
/// `N > 0` adds N extra cycles, `-1` loops forever.
pub type Repeat = i32;

struct Transform {
    property: Property,
    start_value: AnimValue,
    end_value: AnimValue,
    start_time: f64,
    duration: f64,
    easing: Easing,
    repeat: Repeat,
    /// Insertion index, the tie-break for completion ordering
    sequence: u64,
}

impl Transform {
    /// Progress for `elapsed` milliseconds since the original start, folded
    /// into the current cycle. `None` once the repeat budget is exhausted.
    ///
    /// The cycle index is derived from the original start time instead of
    /// advancing a mutable start, which keeps looping exactly periodic with
    /// no drift.
    fn progress(&self, elapsed: f64) -> Option<f64> {
        if self.duration == 0.0 {
            return None;
        }
        let cycle = (elapsed / self.duration).floor();
        let total = match self.repeat {
            -1 => f64::INFINITY,
            n => f64::from(n) + 1.0,
        };
        if cycle >= total {
            None
        } else {
            Some((elapsed - cycle * self.duration) / self.duration)
        }
    }
}

#[derive(Default)]
struct TargetEntry {
    /// Insertion order is composition order: later transforms overwrite
    /// earlier ones' writes to the same property within a tick
    transforms: SmallVec<[TransformId; 4]>,
}

/// The transform engine: owns all scheduled transforms, keyed per target.
///
/// Single-threaded by design; one `evaluate(now, ..)` per frame tick with a
/// monotonically increasing `now` shared by every transform in that tick.
pub struct TransformEngine {
    targets: SlotMap<TargetId, TargetEntry>,
    transforms: SlotMap<TransformId, Transform>,
    next_sequence: u64,
}

impl TransformEngine {
    pub fn new() -> Self {
        Self {
            targets: SlotMap::with_key(),
            transforms: SlotMap::with_key(),
            next_sequence: 0,
        }
    }

    /// Register an animatable target (a scene element, typically)
    pub fn register_target(&mut self) -> TargetId {
        self.targets.insert(TargetEntry::default())
    }

    /// Dispose a target and drop all of its transforms.
    ///
    /// Safe on an already-disposed id; the handle simply no longer resolves.
    pub fn dispose_target(&mut self, target: TargetId) {
        if let Some(entry) = self.targets.remove(target) {
            for id in entry.transforms {
                self.transforms.remove(id);
            }
        }
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }

    /// Whether a scheduled transform is still alive (not completed, cleared,
    /// or disposed with its target)
    pub fn is_scheduled(&self, id: TransformId) -> bool {
        self.transforms.contains_key(id)
    }

    pub fn has_active_transforms(&self) -> bool {
        !self.transforms.is_empty()
    }

    /// Append a transform to the target's animation list.
    ///
    /// Timing and value parameters are validated here, not during the frame
    /// loop: non-finite times or components, negative duration, and
    /// mismatched value kinds fail with
    /// [`CoreError::InvalidParameter`]. Scheduling against a disposed target
    /// degrades to a diagnosed [`CoreError::StaleTarget`] error so a frame
    /// loop never faults.
    ///
    /// Scheduling does not cancel earlier transforms on the same property;
    /// callers wanting replace semantics use [`replace`](Self::replace).
    #[allow(clippy::too_many_arguments)]
    pub fn schedule(
        &mut self,
        target: TargetId,
        property: Property,
        start_value: AnimValue,
        end_value: AnimValue,
        start_time: f64,
        duration: f64,
        easing: Easing,
        repeat: Repeat,
    ) -> Result<TransformId> {
        if !start_time.is_finite() {
            return Err(CoreError::InvalidParameter(format!(
                "start time must be finite, got {start_time}"
            )));
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(CoreError::InvalidParameter(format!(
                "duration must be finite and non-negative, got {duration}"
            )));
        }
        if !start_value.is_finite() || !end_value.is_finite() {
            return Err(CoreError::InvalidParameter(
                "start and end values must have finite components".into(),
            ));
        }
        if start_value.kind() != end_value.kind() {
            return Err(CoreError::InvalidParameter(format!(
                "value kind mismatch: {:?} -> {:?}",
                start_value.kind(),
                end_value.kind()
            )));
        }
        if repeat < -1 {
            return Err(CoreError::InvalidParameter(format!(
                "repeat must be -1, 0, or positive, got {repeat}"
            )));
        }

        let Some(entry) = self.targets.get_mut(target) else {
            tracing::warn!(?target, ?property, "schedule against disposed target ignored");
            return Err(CoreError::StaleTarget(format!(
                "target {target:?} is disposed"
            )));
        };

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let id = self.transforms.insert(Transform {
            property,
            start_value,
            end_value,
            start_time,
            duration,
            easing,
            repeat,
            sequence,
        });
        entry.transforms.push(id);
        Ok(id)
    }

    /// Clear-then-add: the documented policy for retargeting a property that
    /// may already have an active transform
    #[allow(clippy::too_many_arguments)]
    pub fn replace(
        &mut self,
        target: TargetId,
        property: Property,
        start_value: AnimValue,
        end_value: AnimValue,
        start_time: f64,
        duration: f64,
        easing: Easing,
        repeat: Repeat,
    ) -> Result<TransformId> {
        self.clear(target, Some(property));
        self.schedule(
            target,
            property,
            start_value,
            end_value,
            start_time,
            duration,
            easing,
            repeat,
        )
    }

    /// Remove all transforms for a target, or only those on one property.
    ///
    /// Removal has no side effects on property values; whatever was last
    /// written stays written.
    pub fn clear(&mut self, target: TargetId, property: Option<Property>) {
        let Some(entry) = self.targets.get_mut(target) else {
            return;
        };
        let transforms = &mut self.transforms;
        entry.transforms.retain(|id| {
            let matches = match property {
                Some(p) => transforms.get(*id).map(|t| t.property) == Some(p),
                None => true,
            };
            if matches {
                transforms.remove(*id);
            }
            !matches
        });
    }

    /// Cancel one transform by handle
    pub fn cancel(&mut self, id: TransformId) {
        if self.transforms.remove(id).is_none() {
            return;
        }
        for (_, entry) in self.targets.iter_mut() {
            entry.transforms.retain(|t| *t != id);
        }
    }

    /// Evaluate every active transform against a single `now` and write the
    /// interpolated values through `sink`.
    ///
    /// Per target, transforms run in insertion order, so the last scheduled
    /// write to a property wins within the tick. Transforms whose final cycle
    /// ended write exactly the end value, are removed, and are reported in
    /// the returned completion list (ordered by insertion sequence); the
    /// notification fires exactly once per transform.
    pub fn evaluate(&mut self, now: f64, sink: &mut dyn PropertySink) -> Vec<Completion> {
        if !now.is_finite() {
            tracing::warn!(now, "non-finite tick time ignored");
            return Vec::new();
        }

        let mut completed: Vec<(u64, Completion)> = Vec::new();
        let transforms = &mut self.transforms;
        for (target_id, entry) in self.targets.iter_mut() {
            entry.transforms.retain(|id| {
                let id = *id;
                let Some(tr) = transforms.get(id) else {
                    return false;
                };
                let elapsed = now - tr.start_time;
                if elapsed < 0.0 {
                    // Not yet active; the value is undefined before start
                    return true;
                }
                match tr.progress(elapsed) {
                    Some(t) => {
                        let eased = tr.easing.apply(t as f32);
                        let value = tr.start_value.lerp(&tr.end_value, eased);
                        sink.set_property(target_id, tr.property, value);
                        true
                    }
                    None => {
                        // Final cycle over: land exactly on the end value
                        sink.set_property(target_id, tr.property, tr.end_value);
                        completed.push((
                            tr.sequence,
                            Completion {
                                transform: id,
                                target: target_id,
                                property: tr.property,
                            },
                        ));
                        transforms.remove(id);
                        false
                    }
                }
            });
        }

        completed.sort_by_key(|(sequence, _)| *sequence);
        completed.into_iter().map(|(_, c)| c).collect()
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}
