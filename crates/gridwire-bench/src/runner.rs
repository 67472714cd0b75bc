//! Animation runner: builds a wireframe, spins it, and collects metrics.

use std::time::Instant;

use gridwire_mesh::{Animation, Canvas, CanvasBuffers};
use gridwire_render::{RenderFrame, Renderer};
use gridwire_telemetry::{EventBus, EventKind, FrameEvent};
use gridwire_types::GridwireResult;

use crate::metrics::FrameMetrics;
use crate::scenarios::{Scenario, SurfaceKind};

/// Runs animation scenarios and collects metrics.
pub struct AnimationRunner;

impl AnimationRunner {
    /// Runs a scenario in freshly allocated maximum-capacity buffers.
    pub fn run(
        scenario: &Scenario,
        renderer: &mut dyn Renderer,
        bus: &EventBus,
    ) -> GridwireResult<FrameMetrics> {
        let mut buffers = CanvasBuffers::new();
        Self::run_in(&mut buffers, scenario, renderer, bus)
    }

    /// Runs a scenario in caller-provided buffers.
    ///
    /// Frame 0 (the generated surface) and every rotated frame are
    /// submitted to `renderer`; setup and per-frame events go to `bus`.
    /// The bus is not flushed.
    pub fn run_in(
        buffers: &mut CanvasBuffers,
        scenario: &Scenario,
        renderer: &mut dyn Renderer,
        bus: &EventBus,
    ) -> GridwireResult<FrameMetrics> {
        let total_start = Instant::now();

        let canvas = buffers.make_wireframe(scenario.parameters, scenario.surface.function())?;
        canvas.validate()?;

        bus.emit(FrameEvent::setup(EventKind::CanvasReset {
            nx: canvas.nx(),
            ny: canvas.ny(),
            mesh_type: canvas.mesh_type().name().to_string(),
            mesh_size: canvas.mesh_size(),
            index_size: canvas.index_size(),
        }));
        bus.emit(FrameEvent::setup(EventKind::MeshGenerated {
            surface: scenario.surface.name().to_string(),
            points: canvas.number_of_points(),
        }));
        bus.emit(FrameEvent::setup(EventKind::WireframeGenerated {
            segments: canvas.segment_count(),
        }));

        let initial_radii = radii(&canvas);
        renderer.init(&canvas)?;
        renderer.submit_frame(&RenderFrame::from_canvas(0, &canvas))?;

        let mut animation = Animation::new(canvas);
        animation.set_rotation_angle(scenario.rotation_angle);

        let mut frame_times: Vec<f64> = Vec::with_capacity(scenario.frames as usize);
        for _ in 0..scenario.frames {
            let start = Instant::now();
            let frame = animation.rotate();
            let wall_time = start.elapsed().as_secs_f64();
            frame_times.push(wall_time);

            bus.emit(FrameEvent::new(frame, EventKind::FrameRotated { wall_time }));
            renderer.submit_frame(&RenderFrame::from_canvas(frame, animation.canvas()))?;
        }
        renderer.finalize()?;

        let canvas = animation.into_canvas();
        let max_radial_drift = radii(&canvas)
            .iter()
            .zip(&initial_radii)
            .map(|(r, r0)| (r - r0).abs())
            .fold(0.0f32, f32::max);

        let total_wall_time = total_start.elapsed().as_secs_f64();
        let avg_frame = if frame_times.is_empty() {
            0.0
        } else {
            frame_times.iter().sum::<f64>() / frame_times.len() as f64
        };
        let min_frame = frame_times.iter().copied().reduce(f64::min).unwrap_or(0.0);
        let max_frame = frame_times.iter().copied().fold(0.0, f64::max);

        tracing::debug!(
            surface = scenario.surface.name(),
            frames = scenario.frames,
            total_wall_time,
            max_radial_drift,
            "animation run complete"
        );

        Ok(FrameMetrics {
            surface: scenario.surface.name().to_string(),
            mesh_type: canvas.mesh_type().name().to_string(),
            nx: canvas.nx(),
            ny: canvas.ny(),
            vertex_count: canvas.number_of_points(),
            segment_count: canvas.segment_count(),
            frames: scenario.frames,
            rotation_angle: scenario.rotation_angle,
            total_wall_time,
            avg_frame_time: avg_frame,
            min_frame_time: min_frame,
            max_frame_time: max_frame,
            max_radial_drift,
        })
    }

    /// Runs the demo scenario of every catalog surface, reusing one set of
    /// buffers.
    pub fn run_all(
        renderer: &mut dyn Renderer,
        bus: &EventBus,
    ) -> GridwireResult<Vec<FrameMetrics>> {
        let mut buffers = CanvasBuffers::new();
        let mut results = Vec::new();
        for &kind in SurfaceKind::all() {
            let scenario = Scenario::from_kind(kind);
            results.push(Self::run_in(&mut buffers, &scenario, renderer, bus)?);
        }
        Ok(results)
    }
}

/// Distance of every point from the z axis.
fn radii(canvas: &Canvas<'_>) -> Vec<f32> {
    canvas
        .vertices()
        .chunks_exact(3)
        .map(|p| p[0].hypot(p[1]))
        .collect()
}
