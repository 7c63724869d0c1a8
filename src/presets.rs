//! Built-in models, cycled at runtime.

use crate::math::vec3::Vec3;
use crate::mesh::{Face, Mesh};

/// The built-in model presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Cube,
    Pyramid,
    Octahedron,
    /// An octahedron core with bare edge spokes; the spokes only show up in
    /// wireframe mode.
    Beacon,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Cube,
        Preset::Pyramid,
        Preset::Octahedron,
        Preset::Beacon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Cube => "cube",
            Preset::Pyramid => "pyramid",
            Preset::Octahedron => "octahedron",
            Preset::Beacon => "beacon",
        }
    }

    /// The next preset in display order, wrapping around.
    pub fn next(self) -> Preset {
        match self {
            Preset::Cube => Preset::Pyramid,
            Preset::Pyramid => Preset::Octahedron,
            Preset::Octahedron => Preset::Beacon,
            Preset::Beacon => Preset::Cube,
        }
    }

    pub fn mesh(self) -> Mesh {
        match self {
            Preset::Cube => cube(),
            Preset::Pyramid => pyramid(),
            Preset::Octahedron => octahedron(),
            Preset::Beacon => beacon(),
        }
    }
}

fn cube() -> Mesh {
    let vertices = vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];
    let faces = vec![
        Face(vec![4, 5, 6, 7]), // front
        Face(vec![1, 0, 3, 2]), // back
        Face(vec![0, 4, 7, 3]), // left
        Face(vec![5, 1, 2, 6]), // right
        Face(vec![7, 6, 2, 3]), // top
        Face(vec![0, 1, 5, 4]), // bottom
    ];
    Mesh::new(vertices, faces).expect("built-in cube must validate")
}

fn pyramid() -> Mesh {
    let vertices = vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(0.0, 1.0, 0.0), // apex
    ];
    let faces = vec![
        Face(vec![0, 1, 2, 3]), // base
        Face(vec![0, 4, 1]),
        Face(vec![1, 4, 2]),
        Face(vec![2, 4, 3]),
        Face(vec![3, 4, 0]),
    ];
    Mesh::new(vertices, faces).expect("built-in pyramid must validate")
}

fn octahedron() -> Mesh {
    let r = 1.2;
    let vertices = vec![
        Vec3::new(r, 0.0, 0.0),
        Vec3::new(-r, 0.0, 0.0),
        Vec3::new(0.0, r, 0.0),
        Vec3::new(0.0, -r, 0.0),
        Vec3::new(0.0, 0.0, r),
        Vec3::new(0.0, 0.0, -r),
    ];
    let faces = vec![
        Face(vec![0, 2, 4]),
        Face(vec![2, 1, 4]),
        Face(vec![1, 3, 4]),
        Face(vec![3, 0, 4]),
        Face(vec![2, 0, 5]),
        Face(vec![1, 2, 5]),
        Face(vec![3, 1, 5]),
        Face(vec![0, 3, 5]),
    ];
    Mesh::new(vertices, faces).expect("built-in octahedron must validate")
}

fn beacon() -> Mesh {
    let core = 0.6;
    let tip = 1.6;
    let vertices = vec![
        // octahedron core
        Vec3::new(core, 0.0, 0.0),
        Vec3::new(-core, 0.0, 0.0),
        Vec3::new(0.0, core, 0.0),
        Vec3::new(0.0, -core, 0.0),
        Vec3::new(0.0, 0.0, core),
        Vec3::new(0.0, 0.0, -core),
        // spoke tips
        Vec3::new(tip, 0.0, 0.0),
        Vec3::new(-tip, 0.0, 0.0),
        Vec3::new(0.0, tip, 0.0),
        Vec3::new(0.0, -tip, 0.0),
        Vec3::new(0.0, 0.0, tip),
        Vec3::new(0.0, 0.0, -tip),
    ];
    let mut faces = vec![
        Face(vec![0, 2, 4]),
        Face(vec![2, 1, 4]),
        Face(vec![1, 3, 4]),
        Face(vec![3, 0, 4]),
        Face(vec![2, 0, 5]),
        Face(vec![1, 2, 5]),
        Face(vec![3, 1, 5]),
        Face(vec![0, 3, 5]),
    ];
    // bare edges from each core vertex out to its spoke tip
    for i in 0..6 {
        faces.push(Face(vec![i, i + 6]));
    }
    Mesh::new(vertices, faces).expect("built-in beacon must validate")
}
