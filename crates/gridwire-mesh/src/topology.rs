//! Lattice topologies and index-buffer sizing.
//!
//! A lattice is an `nx × ny` grid of points whose opposite edges may be
//! glued together. Gluing the left and right edges gives a cylinder, gluing
//! them with a half twist gives a Möbius band, and gluing both pairs gives
//! a torus, Klein bottle, or projective plane depending on the twists.
//! Each of the six surfaces comes in a quadrilateral and a triangulated
//! (diagonal-bearing) variant.

use serde::{Deserialize, Serialize};
use gridwire_types::constants::{MAX_HEIGHT, MAX_WIDTH};
use gridwire_types::{GridwireError, GridwireResult};

use crate::wireframe::{fill_lattice, fill_rectangular, WireframeFill};

/// How one pair of opposite lattice edges is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seam {
    /// Edges are boundary; nothing crosses them.
    Open,
    /// Edges are glued point-to-point.
    Joined,
    /// Edges are glued with the other axis reversed.
    Twisted,
}

impl Seam {
    /// Returns true if segments may cross this seam.
    #[inline]
    pub fn is_closed(self) -> bool {
        !matches!(self, Seam::Open)
    }
}

/// Whether each lattice cell is drawn as a quad or split by a diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Horizontal and vertical segments only.
    Quad,
    /// Quad segments plus one diagonal per cell.
    Triangulated,
}

/// Seam configuration of a lattice.
///
/// `horizontal` glues the right edge (x = nx-1) back to the left edge
/// (x = 0). `vertical` glues the top row (y = ny-1) back to the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lattice {
    pub horizontal: Seam,
    pub vertical: Seam,
    pub style: Style,
}

impl Lattice {
    const fn new(horizontal: Seam, vertical: Seam, style: Style) -> Self {
        Self {
            horizontal,
            vertical,
            style,
        }
    }

    /// Neighbor one step to the right of `(x, y)`, crossing the horizontal
    /// seam if it is closed.
    #[inline]
    pub fn right(&self, x: u32, y: u32, nx: u32, ny: u32) -> Option<(u32, u32)> {
        if x + 1 < nx {
            return Some((x + 1, y));
        }
        match self.horizontal {
            Seam::Open => None,
            Seam::Joined => Some((0, y)),
            Seam::Twisted => Some((0, ny - 1 - y)),
        }
    }

    /// Neighbor one step above `(x, y)`, crossing the vertical seam if it
    /// is closed.
    #[inline]
    pub fn up(&self, x: u32, y: u32, nx: u32, ny: u32) -> Option<(u32, u32)> {
        if y + 1 < ny {
            return Some((x, y + 1));
        }
        match self.vertical {
            Seam::Open => None,
            Seam::Joined => Some((x, 0)),
            Seam::Twisted => Some((nx - 1 - x, 0)),
        }
    }

    /// Diagonal neighbor: one step right, then one step up.
    #[inline]
    pub fn diagonal(&self, x: u32, y: u32, nx: u32, ny: u32) -> Option<(u32, u32)> {
        let (rx, ry) = self.right(x, y, nx, ny)?;
        self.up(rx, ry, nx, ny)
    }
}

/// The lattice topologies a canvas can be wired as.
///
/// Discriminants follow the declaration order and are the raw tags used
/// by host bindings (`0` = `SquareWireframe` … `11` = `ProjectiveTriangleWireframe`).
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshType {
    #[default]
    SquareWireframe = 0,
    TriangleWireframe = 1,
    CylindricalSquareWireframe = 2,
    CylindricalTriangleWireframe = 3,
    MobiusSquareWireframe = 4,
    MobiusTriangleWireframe = 5,
    ToroidalSquareWireframe = 6,
    ToroidalTriangleWireframe = 7,
    KleinSquareWireframe = 8,
    KleinTriangleWireframe = 9,
    ProjectiveSquareWireframe = 10,
    ProjectiveTriangleWireframe = 11,
}

/// Index-buffer length as a function of `(nx, ny)`.
pub type IndexSizeFormula = fn(usize, usize) -> usize;

/// One row of the topology table.
pub struct TopologyEntry {
    pub mesh_type: MeshType,
    pub name: &'static str,
    pub lattice: Lattice,
    pub index_size: IndexSizeFormula,
    pub(crate) fill: WireframeFill,
}

// P = nx * ny, S = nx + ny. Callers guarantee 1 <= nx, ny <= 512, so
// none of these overflow.

fn open_quad_size(nx: usize, ny: usize) -> usize {
    2 * (2 * nx * ny - (nx + ny))
}

// Interior points own three segments, the top row and right column one,
// the top-right corner none: 3P - 2S + 1 segments. The +1 goes first:
// 3P - 2S is negative for a single point.
fn open_triangle_size(nx: usize, ny: usize) -> usize {
    2 * (3 * nx * ny + 1 - 2 * (nx + ny))
}

fn banded_quad_size(nx: usize, ny: usize) -> usize {
    2 * (2 * nx * ny - nx)
}

fn banded_triangle_size(nx: usize, ny: usize) -> usize {
    2 * (3 * nx * ny - 2 * nx)
}

fn closed_quad_size(nx: usize, ny: usize) -> usize {
    4 * nx * ny
}

fn closed_triangle_size(nx: usize, ny: usize) -> usize {
    6 * nx * ny
}

use Seam::{Joined, Open, Twisted};
use Style::{Quad, Triangulated};

/// Topology table, indexed by `MeshType as usize`.
pub static TOPOLOGY_TABLE: [TopologyEntry; 12] = [
    TopologyEntry {
        mesh_type: MeshType::SquareWireframe,
        name: "square_wireframe",
        lattice: Lattice::new(Open, Open, Quad),
        index_size: open_quad_size,
        fill: fill_rectangular,
    },
    TopologyEntry {
        mesh_type: MeshType::TriangleWireframe,
        name: "triangle_wireframe",
        lattice: Lattice::new(Open, Open, Triangulated),
        index_size: open_triangle_size,
        fill: fill_lattice,
    },
    TopologyEntry {
        mesh_type: MeshType::CylindricalSquareWireframe,
        name: "cylindrical_square_wireframe",
        lattice: Lattice::new(Joined, Open, Quad),
        index_size: banded_quad_size,
        fill: fill_lattice,
    },
    TopologyEntry {
        mesh_type: MeshType::CylindricalTriangleWireframe,
        name: "cylindrical_triangle_wireframe",
        lattice: Lattice::new(Joined, Open, Triangulated),
        index_size: banded_triangle_size,
        fill: fill_lattice,
    },
    TopologyEntry {
        mesh_type: MeshType::MobiusSquareWireframe,
        name: "mobius_square_wireframe",
        lattice: Lattice::new(Twisted, Open, Quad),
        index_size: banded_quad_size,
        fill: fill_lattice,
    },
    TopologyEntry {
        mesh_type: MeshType::MobiusTriangleWireframe,
        name: "mobius_triangle_wireframe",
        lattice: Lattice::new(Twisted, Open, Triangulated),
        index_size: banded_triangle_size,
        fill: fill_lattice,
    },
    TopologyEntry {
        mesh_type: MeshType::ToroidalSquareWireframe,
        name: "toroidal_square_wireframe",
        lattice: Lattice::new(Joined, Joined, Quad),
        index_size: closed_quad_size,
        fill: fill_lattice,
    },
    TopologyEntry {
        mesh_type: MeshType::ToroidalTriangleWireframe,
        name: "toroidal_triangle_wireframe",
        lattice: Lattice::new(Joined, Joined, Triangulated),
        index_size: closed_triangle_size,
        fill: fill_lattice,
    },
    TopologyEntry {
        mesh_type: MeshType::KleinSquareWireframe,
        name: "klein_square_wireframe",
        lattice: Lattice::new(Twisted, Joined, Quad),
        index_size: closed_quad_size,
        fill: fill_lattice,
    },
    TopologyEntry {
        mesh_type: MeshType::KleinTriangleWireframe,
        name: "klein_triangle_wireframe",
        lattice: Lattice::new(Twisted, Joined, Triangulated),
        index_size: closed_triangle_size,
        fill: fill_lattice,
    },
    TopologyEntry {
        mesh_type: MeshType::ProjectiveSquareWireframe,
        name: "projective_square_wireframe",
        lattice: Lattice::new(Twisted, Twisted, Quad),
        index_size: closed_quad_size,
        fill: fill_lattice,
    },
    TopologyEntry {
        mesh_type: MeshType::ProjectiveTriangleWireframe,
        name: "projective_triangle_wireframe",
        lattice: Lattice::new(Twisted, Twisted, Triangulated),
        index_size: closed_triangle_size,
        fill: fill_lattice,
    },
];

impl MeshType {
    /// All topologies in tag order.
    pub const ALL: [MeshType; 12] = [
        MeshType::SquareWireframe,
        MeshType::TriangleWireframe,
        MeshType::CylindricalSquareWireframe,
        MeshType::CylindricalTriangleWireframe,
        MeshType::MobiusSquareWireframe,
        MeshType::MobiusTriangleWireframe,
        MeshType::ToroidalSquareWireframe,
        MeshType::ToroidalTriangleWireframe,
        MeshType::KleinSquareWireframe,
        MeshType::KleinTriangleWireframe,
        MeshType::ProjectiveSquareWireframe,
        MeshType::ProjectiveTriangleWireframe,
    ];

    /// Row of the topology table for this variant.
    #[inline]
    pub fn entry(self) -> &'static TopologyEntry {
        &TOPOLOGY_TABLE[self as usize]
    }

    /// Raw tag used by host bindings.
    #[inline]
    pub fn tag(self) -> u32 {
        self as u32
    }

    /// Snake-case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Seam configuration of this topology.
    pub fn lattice(self) -> Lattice {
        self.entry().lattice
    }

    /// Number of `u32` entries the index buffer needs for an `nx × ny` grid.
    ///
    /// An empty grid (`nx == 0` or `ny == 0`) needs none, and neither does
    /// a grid past the 512×512 capacity: generation refuses those, so they
    /// size to an empty wireframe instead of overflowing.
    ///
    /// `TriangleWireframe` sizes to `2·(3P − 2S + 1)`, not the `2·(3P − 2S)`
    /// often tabled for it: that row leaves out one diagonal. Host bindings
    /// that size buffers from their own table must use `+ 1`.
    pub fn index_size(self, nx: u32, ny: u32) -> usize {
        if nx == 0 || ny == 0 || nx > MAX_WIDTH || ny > MAX_HEIGHT {
            return 0;
        }
        (self.entry().index_size)(nx as usize, ny as usize)
    }

    /// Looks a topology up by its snake-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        TOPOLOGY_TABLE
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.mesh_type)
    }
}

impl TryFrom<u32> for MeshType {
    type Error = GridwireError;

    fn try_from(tag: u32) -> GridwireResult<Self> {
        MeshType::ALL
            .get(tag as usize)
            .copied()
            .ok_or(GridwireError::UnknownTopology(tag))
    }
}

impl std::fmt::Display for MeshType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Index-buffer size for a raw topology tag. Unknown tags and grids past
/// capacity size to zero.
pub fn index_size_for_tag(nx: u32, ny: u32, tag: u32) -> usize {
    MeshType::try_from(tag)
        .map(|mesh_type| mesh_type.index_size(nx, ny))
        .unwrap_or(0)
}
