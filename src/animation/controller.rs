use crate::animation::completion::CompletionSignal;
use crate::animation::flight::FlightPath;
use crate::animation::interpolation::{smooth_step, Interpolatable, Interpolation};
use crate::animation::scene::{CameraState, TargetScene};
use crate::core::constants::DURATION_NORMALIZATION;
use crate::core::context::{ViewContext, ViewProbe};
use crate::core::geo::{LatLng, MercatorPoint};
use crate::core::zoom;
use crate::{CameraError, Result};

/// Requested trajectory family for one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Zoom-and-pan flight along a hyperbolic arc. Downgraded to a plain
    /// linear trajectory when the destination is already on screen, where a
    /// bow would look like a pointless hop.
    Bow,
    /// Direct interpolation of zoom and position versus time
    Linear,
    /// Linear trajectory with smoothstep-eased time
    SmoothLinear,
}

/// One interpolated camera sample, returned every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub zoom: f64,
    pub center: LatLng,
    /// True once the transition has reached its end state
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Trajectory {
    Linear { smooth: bool },
    Bow(FlightPath),
}

/// All state for one transition, replaced wholesale on re-initialize
#[derive(Debug, Clone)]
struct AnimationSession {
    start_zoom: f64,
    end_zoom: f64,
    start: MercatorPoint,
    end: MercatorPoint,
    end_state: CameraState,
    trajectory: Trajectory,
    duration: f64,
    running_time: f64,
    signal: CompletionSignal,
}

/// Frame-driven camera animation controller.
///
/// A host render loop calls [`initialize`](Self::initialize) once when a
/// transition begins and then [`update`](Self::update) every frame with the
/// elapsed frame time until the returned frame reports `done`. The
/// controller owns its session exclusively and never touches host state; it
/// returns camera values for the host to apply. One animator per map
/// instance; re-initializing cancels the previous session.
#[derive(Debug, Clone, Default)]
pub struct SceneAnimator {
    session: Option<AnimationSession>,
}

impl SceneAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is active (including one resting at its end state)
    pub fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    /// Completion handle of the current session, if any
    pub fn completion(&self) -> Option<CompletionSignal> {
        self.session.as_ref().map(|s| s.signal.clone())
    }

    /// Starts a new transition from `start` towards `target`, replacing any
    /// session in progress.
    ///
    /// The duration always comes from the van Wijk-Nuij model, even for
    /// linear trajectories, so both families feel consistent; it is then
    /// reshaped through a cube-root response curve that compresses very long
    /// flights and stretches very short ones. Returns the fresh completion
    /// handle for this session.
    ///
    /// # Errors
    ///
    /// [`CameraError::InvalidTimeScale`] when `time_scale` is not a positive
    /// finite number, and [`CameraError::DegenerateBounds`] when a
    /// bounding-box target has zero extent.
    pub fn initialize(
        &mut self,
        start: CameraState,
        target: &TargetScene,
        context: &ViewContext,
        view: &dyn ViewProbe,
        time_scale: f64,
        kind: AnimationKind,
    ) -> Result<CompletionSignal> {
        if !(time_scale > 0.0) || !time_scale.is_finite() {
            return Err(CameraError::InvalidTimeScale(time_scale));
        }

        let end_state = target.resolve(context)?;
        let start_mercator = start.center.to_mercator();
        let end_mercator = end_state.center.to_mercator();

        let flight = FlightPath::between(start.zoom, end_state.zoom, &start_mercator, &end_mercator);
        let duration = reshape_duration(flight.duration(time_scale));

        let trajectory = match kind {
            AnimationKind::Linear => Trajectory::Linear { smooth: false },
            AnimationKind::SmoothLinear => Trajectory::Linear { smooth: true },
            AnimationKind::Bow => {
                if view.current_view_intersects(&end_state.center) {
                    Trajectory::Linear { smooth: false }
                } else {
                    Trajectory::Bow(flight)
                }
            }
        };

        log::debug!(
            "camera transition: zoom {:.2} -> {:.2}, {} for {:.2}s",
            start.zoom,
            end_state.zoom,
            match trajectory {
                Trajectory::Linear { smooth: false } => "linear",
                Trajectory::Linear { smooth: true } => "smooth linear",
                Trajectory::Bow(_) => "bow",
            },
            duration,
        );

        let signal = CompletionSignal::new();
        self.session = Some(AnimationSession {
            start_zoom: start.zoom,
            end_zoom: end_state.zoom,
            start: start_mercator,
            end: end_mercator,
            end_state,
            trajectory,
            duration,
            running_time: 0.0,
            signal: signal.clone(),
        });

        Ok(signal)
    }

    /// Advances the session by `frame_delta` seconds and returns the
    /// interpolated camera sample.
    ///
    /// Once the end state is reached the completion signal fires (exactly
    /// once) and further calls keep returning the end state with
    /// `done = true`. A session whose derived duration is not positive is
    /// treated as already complete on the first call.
    ///
    /// # Errors
    ///
    /// [`CameraError::NoActiveSession`] when no `initialize` call preceded.
    pub fn update(&mut self, frame_delta: f64) -> Result<CameraFrame> {
        let session = self
            .session
            .as_mut()
            .ok_or(CameraError::NoActiveSession)?;

        session.running_time += frame_delta.max(0.0);
        let t = if session.duration > 0.0 {
            (session.running_time / session.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if t >= 1.0 {
            if !session.signal.is_complete() {
                session.signal.complete();
            }
            return Ok(CameraFrame {
                zoom: session.end_state.zoom,
                center: session.end_state.center,
                done: true,
            });
        }

        let (zoom_level, point) = match session.trajectory {
            Trajectory::Linear { smooth } => {
                let t = if smooth { smooth_step(t) } else { t };
                let zoom_level = Interpolation::linear(session.start_zoom, session.end_zoom, t);
                let point = if session.start == session.end {
                    session.end
                } else if session.start_zoom != session.end_zoom {
                    // Keep panning synchronized with the logarithmic zoom
                    // curve instead of raw elapsed time.
                    let start_altitude = zoom::altitude(session.start_zoom);
                    let end_altitude = zoom::altitude(session.end_zoom);
                    let adjusted = (start_altitude - zoom::altitude(zoom_level))
                        / (start_altitude - end_altitude);
                    session.start.lerp(&session.end, adjusted)
                } else {
                    session.start.lerp(&session.end, t)
                };
                (zoom_level, point)
            }
            Trajectory::Bow(flight) => {
                let s = (t * flight.arclength()).max(0.0);
                let (zoom_level, u) = flight.sample(s);
                (zoom_level, session.start.lerp(&session.end, u))
            }
        };

        Ok(CameraFrame {
            zoom: zoom_level,
            center: point.to_lat_lng(),
            done: false,
        })
    }
}

/// Cube-root response curve keeping derived durations in a pleasant range:
/// `((d / 6)^(1/3)) * 6`
fn reshape_duration(duration: f64) -> f64 {
    (duration / DURATION_NORMALIZATION).cbrt() * DURATION_NORMALIZATION
}
