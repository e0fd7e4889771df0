//! Animated colors that fade through a cyclic list of stops.
//!
//! A [`DynamicColor`] attached to an [`AnimationRegistry`] subscribes to its ticks only while
//! it is animated (two or more stops and a positive step duration). It unsubscribes when it
//! stops being animated, when [`DynamicColor::dispose`] is called, and when it is dropped.

pub mod registry;

pub use registry::{AnimationRegistry, SubscriptionId, TickListener};

use crate::color::math::{combine_argb, lerp_channel};
use crate::color::{Color, ColorLike};
use itertools::Itertools;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Logical time advanced by every tick, independent of the tick's payload.
pub const TICK_SECONDS: f32 = 1.0 / 20.0;

#[derive(Debug)]
struct AnimationState {
    stops: Vec<Color>,
    /// Seconds per transition between two consecutive stops.
    step_duration: f32,
    /// The stop currently being faded from.
    current_index: usize,
    /// Seconds since the last stop advance.
    elapsed: f32,
}

impl AnimationState {
    fn is_animated(&self) -> bool {
        self.stops.len() > 1 && self.step_duration > 0.0
    }

    fn advance(&mut self, seconds: f32) {
        if !self.is_animated() {
            return;
        }
        self.elapsed += seconds;
        if self.elapsed >= self.step_duration {
            self.current_index = (self.current_index + 1) % self.stops.len();
            // Keep the overshoot so the next transition starts where this one ended.
            self.elapsed -= self.step_duration;
        }
    }

    fn current_value(&self) -> Color {
        match self.stops.as_slice() {
            [] => Color::TRANSPARENT,
            [only] => *only,
            stops if !self.is_animated() => stops[self.current_index],
            stops => {
                let from = stops[self.current_index];
                let to = stops[(self.current_index + 1) % stops.len()];
                let fraction = self.elapsed / self.step_duration;
                combine_argb(
                    lerp_channel(fraction, from.alpha(), to.alpha()),
                    lerp_channel(fraction, from.red(), to.red()),
                    lerp_channel(fraction, from.green(), to.green()),
                    lerp_channel(fraction, from.blue(), to.blue()),
                )
            }
        }
    }
}

impl TickListener for AnimationState {
    fn on_tick(&mut self, _partial_tick: f32) {
        self.advance(TICK_SECONDS);
    }
}

struct Attachment {
    registry: AnimationRegistry,
    subscription: Option<SubscriptionId>,
}

/// A color made of one or more stops, faded between in order and cyclically.
pub struct DynamicColor {
    name: Option<String>,
    state: Arc<Mutex<AnimationState>>,
    attachment: Option<Attachment>,
}

impl DynamicColor {
    /// Create a color cycling through `stops` once every `total_duration` seconds.
    ///
    /// The color isn't driven by anything until it is [attached](Self::attach) to a registry.
    pub fn new(stops: Vec<Color>, total_duration: f32) -> Self {
        let step_duration = (total_duration / stops.len().max(1) as f32).max(0.0);
        Self {
            name: None,
            state: Arc::new(Mutex::new(AnimationState { stops, step_duration, current_index: 0, elapsed: 0.0 })),
            attachment: None,
        }
    }

    /// A single stop color that keeps the source's name.
    pub fn from_color(color: &impl ColorLike) -> Self {
        Self::new(vec![color.value()], 0.0).with_name(color.name().map(str::to_string))
    }

    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Create and attach in one step.
    pub fn attached(stops: Vec<Color>, total_duration: f32, registry: &AnimationRegistry) -> Self {
        let mut color = Self::new(stops, total_duration);
        color.attach(registry);
        color
    }

    /// Let `registry` drive this color. Replaces any previous attachment.
    pub fn attach(&mut self, registry: &AnimationRegistry) {
        self.dispose();
        self.attachment = Some(Attachment { registry: registry.clone(), subscription: None });
        self.sync_subscription();
    }

    /// Stop receiving ticks and detach from the registry.
    pub fn dispose(&mut self) {
        if let Some(Attachment { registry, subscription: Some(id) }) = self.attachment.take() {
            registry.unsubscribe(id);
        }
    }

    /// The current tick subscription, if any.
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.attachment.as_ref().and_then(|attachment| attachment.subscription)
    }

    pub fn add_color(&mut self, color: Color) {
        self.state().stops.push(color);
        self.sync_subscription();
    }

    /// Remove every stop and restart the animation.
    pub fn clear_colors(&mut self) {
        {
            let mut state = self.state();
            state.stops.clear();
            state.current_index = 0;
            state.elapsed = 0.0;
        }
        self.sync_subscription();
    }

    /// Set the per-transition duration in seconds; negative values become zero.
    pub fn set_duration(&mut self, step_duration: f32) {
        self.state().step_duration = step_duration.max(0.0);
        self.sync_subscription();
    }

    /// Advance by one tick as if the registry had delivered it.
    pub fn tick(&self) {
        self.state().advance(TICK_SECONDS);
    }

    pub fn stops(&self) -> Vec<Color> {
        self.state().stops.clone()
    }

    pub fn step_duration(&self) -> f32 {
        self.state().step_duration
    }

    pub fn current_index(&self) -> usize {
        self.state().current_index
    }

    pub fn elapsed(&self) -> f32 {
        self.state().elapsed
    }

    fn state(&self) -> MutexGuard<'_, AnimationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn sync_subscription(&mut self) {
        let animated = self.state().is_animated();
        let Some(attachment) = self.attachment.as_mut() else {
            return;
        };

        match (animated, attachment.subscription) {
            (true, None) => {
                let state: Arc<Mutex<dyn TickListener>> = self.state.clone();
                let listener: Weak<Mutex<dyn TickListener>> = Arc::downgrade(&state);
                attachment.subscription = Some(attachment.registry.subscribe(listener));
            }
            (false, Some(id)) => {
                attachment.registry.unsubscribe(id);
                attachment.subscription = None;
            }
            _ => {}
        }
    }
}

impl ColorLike for DynamicColor {
    fn value(&self) -> Color {
        self.state().current_value()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_animated(&self) -> bool {
        self.state().is_animated()
    }
}

impl Drop for DynamicColor {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for DynamicColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicColor")
            .field("name", &self.name)
            .field("state", &*self.state())
            .field("subscription", &self.subscription())
            .finish()
    }
}

impl fmt::Display for DynamicColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        if state.stops.len() == 1 {
            return match &self.name {
                Some(name) => f.write_str(name),
                None => fmt::Display::fmt(&state.current_value(), f),
            };
        }
        write!(f, "([{}], {}s)", state.stops.iter().join(", "), state.step_duration)
    }
}
