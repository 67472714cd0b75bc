//! CLI command implementations.

use gridwire_bench::metrics::FrameMetrics;
use gridwire_bench::runner::AnimationRunner;
use gridwire_bench::scenarios::{Scenario, SurfaceKind};
use gridwire_io::AnimationConfig;
use gridwire_mesh::{CanvasBuffers, CanvasParameters, MeshType};
use gridwire_render::{HeadlessRenderer, JsonFrameExporter, RenderFrame, Renderer};
use gridwire_telemetry::{EventBus, TracingSink};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn lookup_surface(name: &str) -> Result<SurfaceKind, String> {
    SurfaceKind::from_name(name).ok_or_else(|| {
        let available: Vec<&str> = SurfaceKind::all().iter().map(|k| k.name()).collect();
        format!("Unknown surface: '{name}'. Available: {}", available.join(", "))
    })
}

fn lookup_mesh_type(name: &str) -> Result<MeshType, String> {
    MeshType::from_name(name).ok_or_else(|| {
        let available: Vec<&str> = MeshType::ALL.iter().map(|m| m.name()).collect();
        format!("Unknown mesh type: '{name}'. Available: {}", available.join(", "))
    })
}

/// Build one wireframe and report its buffers.
pub fn generate(
    surface_name: &str,
    mesh_type_name: &str,
    nx: u32,
    ny: u32,
    output_path: Option<&str>,
) -> CommandResult {
    let surface = lookup_surface(surface_name)?;
    let mesh_type = lookup_mesh_type(mesh_type_name)?;
    let params = CanvasParameters {
        nx_pts: nx,
        ny_pts: ny,
        mesh_type,
        ..surface.default_parameters()
    };

    println!("Gridwire Generate");
    println!("─────────────────");
    println!();

    let mut buffers = CanvasBuffers::new();
    let canvas = buffers.make_wireframe(params, surface.function())?;
    canvas.validate()?;

    println!("Surface:      {surface}");
    println!("Topology:     {mesh_type}");
    println!("Grid:         {nx} x {ny}");
    println!("Points:       {}", canvas.number_of_points());
    println!("Mesh size:    {} floats", canvas.mesh_size());
    println!("Index size:   {} ({} segments)", canvas.index_size(), canvas.segment_count());

    let z_range = canvas
        .vertices()
        .chunks_exact(3)
        .map(|p| p[2])
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), z| (lo.min(z), hi.max(z)));
    println!("Z range:      [{:.4}, {:.4}]", z_range.0, z_range.1);

    if let Some(path) = output_path {
        let mut exporter = JsonFrameExporter::new(path);
        exporter.init(&canvas)?;
        exporter.submit_frame(&RenderFrame::from_canvas(0, &canvas))?;
        exporter.finalize()?;
        println!();
        println!("Wireframe written to: {path}");
    }

    Ok(())
}

/// Spin wireframes headlessly and report frame metrics.
pub fn animate(
    config_path: Option<&str>,
    output_path: Option<&str>,
    csv_path: Option<&str>,
) -> CommandResult {
    println!("Gridwire Animate");
    println!("════════════════");
    println!();

    let scenarios = match config_path {
        Some(path) => {
            let config = AnimationConfig::load(path)?;
            vec![Scenario::from_config(&config)?]
        }
        None => {
            if output_path.is_some() {
                return Err("--output requires --config".into());
            }
            SurfaceKind::all()
                .iter()
                .map(|&kind| Scenario::from_kind(kind))
                .collect()
        }
    };

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let mut renderer: Box<dyn Renderer> = match output_path {
        Some(path) => Box::new(JsonFrameExporter::new(path)),
        None => Box::new(HeadlessRenderer::new()),
    };

    let mut buffers = CanvasBuffers::new();
    let mut all_metrics = Vec::new();

    for scenario in &scenarios {
        println!(
            "Running: {} ({} x {} {}, {} frames at {} rad)",
            scenario.surface,
            scenario.parameters.nx_pts,
            scenario.parameters.ny_pts,
            scenario.parameters.mesh_type,
            scenario.frames,
            scenario.rotation_angle,
        );

        let metrics = AnimationRunner::run_in(&mut buffers, scenario, renderer.as_mut(), &bus)
            .map_err(|e| format!("Animation failed: {e}"))?;
        bus.flush();

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg frame:     {:.4}ms", metrics.avg_frame_time * 1000.0);
        println!("  Radial drift:  {:.3e}", metrics.max_radial_drift);
        println!();

        all_metrics.push(metrics);
    }
    bus.finish();

    let counts = bus.counts();
    println!(
        "Events: {} dispatched, {} frames rotated, {} dropped",
        counts.dispatched(),
        counts.frames_rotated,
        counts.dropped
    );
    println!();

    if let Some(path) = output_path {
        println!("Frames written to: {path}");
    }

    if let Some(path) = csv_path {
        let csv = FrameMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", FrameMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Print index-buffer sizes of every topology for a grid.
pub fn sizes(nx: u32, ny: u32) -> CommandResult {
    println!("Index sizes for {nx} x {ny}");
    println!("──────────────────────────");
    for mesh_type in MeshType::ALL {
        println!(
            "{:>2}  {:<32} {:>10}",
            mesh_type.tag(),
            mesh_type.name(),
            mesh_type.index_size(nx, ny)
        );
    }
    Ok(())
}

/// Validate an animation config.
pub fn validate(path: &str) -> CommandResult {
    println!("Gridwire Validator");
    println!("──────────────────");
    println!();

    println!("Validating config: {path}");
    let config = AnimationConfig::load(path)?;
    match Scenario::from_config(&config) {
        Ok(scenario) => {
            let index_size = scenario
                .parameters
                .mesh_type
                .index_size(scenario.parameters.nx_pts, scenario.parameters.ny_pts);
            println!(
                "✅ Config is valid ({} x {} {}, {} index entries).",
                scenario.parameters.nx_pts,
                scenario.parameters.ny_pts,
                scenario.parameters.mesh_type,
                index_size
            );
        }
        Err(e) => println!("❌ Config validation failed: {e}"),
    }

    Ok(())
}
