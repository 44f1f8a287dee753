//! The observable route model
//!
//! [`RouteModel`] holds whatever route is currently being previewed or
//! navigated. It is either empty or populated; errors are reported to
//! observers without touching the stored route.

use crate::{
    BoundingBox, Coordinate, InstructionAssembler, ObserverId, ObserverRegistry, RawTurnEvent,
    Result, RouteObserver, TurnInstruction,
};
use std::rc::Rc;

/// Paths at least this long get their bounding box computed in parallel
const PARALLEL_BBOX_MIN_POINTS: usize = 50_000;

/// Lifecycle state of a [`RouteModel`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteState {
    #[default]
    Empty,
    Populated,
}

/// A complete route as delivered by the route source
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteUpdate {
    /// Dense geometry of the route
    pub path: Vec<Coordinate>,
    /// Decision points; usually far fewer than `path` points
    pub instructions: Vec<TurnInstruction>,
    /// Total distance in meters
    pub distance: f64,
    /// Total travel time in seconds
    pub time: f64,
    /// Precomputed box; derived from `path` when `None`
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounding_box: Option<BoundingBox>,
}

impl RouteUpdate {
    /// Build an update from the route source's raw turn events
    pub fn assemble(
        assembler: &InstructionAssembler,
        path: Vec<Coordinate>,
        events: &[RawTurnEvent],
        distance: f64,
        time: f64,
        bounding_box: Option<BoundingBox>,
    ) -> Result<Self> {
        let instructions = assembler.assemble(&path, events)?;
        Ok(Self {
            path,
            instructions,
            distance,
            time,
            bounding_box,
        })
    }
}

/// Current route with change notifications
#[derive(Debug, Default)]
pub struct RouteModel {
    path: Vec<Coordinate>,
    instructions: Vec<TurnInstruction>,
    distance: f64,
    time: f64,
    bounding_box: BoundingBox,
    state: RouteState,
    observers: ObserverRegistry,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl RouteModel {
    /// Create an empty model with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored route and notify `on_update`
    ///
    /// The input is stored as-is; nothing about the route is validated.
    pub fn update(&mut self, update: RouteUpdate) {
        #[cfg(feature = "profiling")]
        profiling::scope!("route_model::update");

        let RouteUpdate {
            path,
            instructions,
            distance,
            time,
            bounding_box,
        } = update;

        let bounding_box = bounding_box.unwrap_or_else(|| {
            if path.len() >= PARALLEL_BBOX_MIN_POINTS {
                BoundingBox::from_coordinates_par(&path)
            } else {
                BoundingBox::from_coordinates(&path)
            }
        });

        self.path = path;
        self.instructions = instructions;
        self.distance = distance;
        self.time = time;
        self.bounding_box = bounding_box;
        self.state = RouteState::Populated;

        tracing::debug!(
            points = self.path.len(),
            instructions = self.instructions.len(),
            distance = self.distance,
            time = self.time,
            "Route updated"
        );
        self.notify(|observer, route| observer.on_update(route));
    }

    /// Clear the stored route and notify `on_reset`
    pub fn reset(&mut self) {
        self.path.clear();
        self.instructions.clear();
        self.distance = 0.0;
        self.time = 0.0;
        self.bounding_box = BoundingBox::empty();
        self.state = RouteState::Empty;

        tracing::debug!("Route reset");
        self.notify(|observer, route| observer.on_reset(route));
    }

    /// Report an upstream failure; the stored route is left alone
    pub fn error(&self, message: &str) {
        tracing::warn!("Route error: {message}");
        self.notify(|observer, route| observer.on_error(route, message));
    }

    fn notify(&self, deliver: impl Fn(&dyn RouteObserver, &Self)) {
        for observer in self.observers.snapshot() {
            deliver(observer.as_ref(), self);
        }
    }

    /// Add an observer after the already registered ones
    #[inline]
    pub fn register(&self, observer: Rc<dyn RouteObserver>) -> ObserverId {
        self.observers.register(observer)
    }

    #[inline]
    pub fn unregister(&self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    /// Shared handle to the observer list
    #[inline]
    pub fn observers(&self) -> ObserverRegistry {
        self.observers.clone()
    }

    #[inline]
    pub fn state(&self) -> RouteState {
        self.state
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state == RouteState::Empty
    }

    #[inline]
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    #[inline]
    pub fn instructions(&self) -> &[TurnInstruction] {
        &self.instructions
    }

    /// Start, via and end instructions, in route order
    pub fn stops(&self) -> impl Iterator<Item = &TurnInstruction> {
        self.instructions.iter().filter(|i| i.is_stop())
    }

    /// Total distance in meters
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Total travel time in seconds
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Box around the route; uninitialized while empty
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }
}
