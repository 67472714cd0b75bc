//! Frame metrics: data collected during an animation run.

use serde::{Deserialize, Serialize};

/// Metrics collected from one animation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameMetrics {
    /// Surface name.
    pub surface: String,
    /// Topology name.
    pub mesh_type: String,
    pub nx: u32,
    pub ny: u32,
    /// Lattice point count.
    pub vertex_count: usize,
    /// Line segment count.
    pub segment_count: usize,
    /// Number of frames rotated.
    pub frames: u32,
    /// Per-frame rotation (radians).
    pub rotation_angle: f32,
    /// Wall-clock time for the whole run, setup included (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per rotation (seconds).
    pub avg_frame_time: f64,
    /// Minimum frame time.
    pub min_frame_time: f64,
    /// Maximum frame time.
    pub max_frame_time: f64,
    /// Largest change in distance from the z axis over the run. A pure
    /// rotation keeps this at zero; the small-angle series does not quite.
    pub max_radial_drift: f32,
}

impl FrameMetrics {
    /// CSV header row.
    pub fn to_csv_header() -> String {
        "surface,mesh_type,nx,ny,vertex_count,segment_count,frames,rotation_angle,total_wall_time_s,avg_frame_ms,min_frame_ms,max_frame_ms,max_radial_drift".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e}",
            self.surface,
            self.mesh_type,
            self.nx,
            self.ny,
            self.vertex_count,
            self.segment_count,
            self.frames,
            self.rotation_angle,
            self.total_wall_time,
            self.avg_frame_time * 1000.0,
            self.min_frame_time * 1000.0,
            self.max_frame_time * 1000.0,
            self.max_radial_drift,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[FrameMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
