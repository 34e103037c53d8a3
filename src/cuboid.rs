use std::fmt;

use glam::Vec3;
use strum::{Display, EnumIter};

/// The eight corners of an axis-aligned box. Left is -X, bottom is -Y, far is -Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Corner {
    LeftBottomFar,
    LeftBottomNear,
    LeftTopNear,
    LeftTopFar,
    RightBottomFar,
    RightBottomNear,
    RightTopNear,
    RightTopFar,
}

impl Corner {
    fn signs(self) -> Vec3 {
        use Corner::*;
        match self {
            LeftBottomFar => Vec3::new(-1.0, -1.0, -1.0),
            LeftBottomNear => Vec3::new(-1.0, -1.0, 1.0),
            LeftTopNear => Vec3::new(-1.0, 1.0, 1.0),
            LeftTopFar => Vec3::new(-1.0, 1.0, -1.0),
            RightBottomFar => Vec3::new(1.0, -1.0, -1.0),
            RightBottomNear => Vec3::new(1.0, -1.0, 1.0),
            RightTopNear => Vec3::new(1.0, 1.0, 1.0),
            RightTopFar => Vec3::new(1.0, 1.0, -1.0),
        }
    }
}

/// Axis-aligned box centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub half_extent: Vec3,
}

impl Default for Cuboid {
    fn default() -> Self {
        Self {
            half_extent: Vec3::new(2.0, 1.0, 1.0),
        }
    }
}

impl Cuboid {
    pub fn new(half_extent: Vec3) -> Self {
        Self { half_extent }
    }

    pub fn cube(half_extent: f32) -> Self {
        Self::new(Vec3::splat(half_extent))
    }

    pub fn corner(&self, corner: Corner) -> Vec3 {
        self.half_extent * corner.signs()
    }

    pub fn edge(&self, alpha: Corner, omega: Corner) -> Edge {
        Edge::new(self.corner(alpha), self.corner(omega))
    }

    /// All twelve edges: the left face, the four long edges, then the right face.
    pub fn wireframe(&self) -> [LineSegment; 12] {
        use Corner::*;
        [
            (LeftBottomFar, LeftBottomNear),
            (LeftTopNear, LeftTopFar),
            (LeftBottomNear, LeftTopNear),
            (LeftTopFar, LeftBottomFar),
            (LeftBottomFar, RightBottomFar),
            (LeftBottomNear, RightBottomNear),
            (LeftTopNear, RightTopNear),
            (LeftTopFar, RightTopFar),
            (RightBottomFar, RightBottomNear),
            (RightBottomNear, RightTopNear),
            (RightTopNear, RightTopFar),
            (RightTopFar, RightBottomFar),
        ]
        .map(|(alpha, omega)| self.edge(alpha, omega).segment())
    }
}

/// A straight path from `alpha` to `omega` along which a line grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub alpha: Vec3,
    pub omega: Vec3,
}

impl Edge {
    pub fn new(alpha: Vec3, omega: Vec3) -> Self {
        Self { alpha, omega }
    }

    pub fn length(&self) -> f32 {
        self.alpha.distance(self.omega)
    }

    /// Point reached after growing `fraction` of the way from alpha to omega.
    pub fn at(&self, fraction: f32) -> Vec3 {
        self.alpha + (self.omega - self.alpha) * fraction
    }

    pub fn segment(&self) -> LineSegment {
        LineSegment::new(self.alpha, self.omega)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub alpha: Vec3,
    pub omega: Vec3,
}

impl LineSegment {
    pub fn new(alpha: Vec3, omega: Vec3) -> Self {
        Self { alpha, omega }
    }

    pub fn length(&self) -> f32 {
        self.alpha.distance(self.omega)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { alpha, omega } = self;
        write!(
            f,
            "({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})",
            alpha.x, alpha.y, alpha.z, omega.x, omega.y, omega.z
        )
    }
}

/// Scalar triples, two points per segment, ready for a line-list upload.
pub fn flatten(segments: &[LineSegment]) -> Vec<f32> {
    segments
        .iter()
        .flat_map(|segment| [segment.alpha, segment.omega])
        .flat_map(|point| point.to_array())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_corners() {
        let cuboid = Cuboid::default();
        assert_eq!(cuboid.corner(Corner::LeftBottomFar), Vec3::new(-2.0, -1.0, -1.0));
        assert_eq!(cuboid.corner(Corner::LeftBottomNear), Vec3::new(-2.0, -1.0, 1.0));
        assert_eq!(cuboid.corner(Corner::RightTopNear), Vec3::new(2.0, 1.0, 1.0));
        assert_eq!(cuboid.corner(Corner::RightTopFar), Vec3::new(2.0, 1.0, -1.0));
    }

    #[test]
    fn corners_are_distinct() {
        let cuboid = Cuboid::default();
        let corners: Vec<Vec3> = Corner::iter().map(|corner| cuboid.corner(corner)).collect();
        for (index, corner) in corners.iter().enumerate() {
            assert!(!corners[index + 1..].contains(corner));
        }
    }

    #[test]
    fn wireframe_edges_follow_the_axes() {
        let cuboid = Cuboid::default();
        let wireframe = cuboid.wireframe();
        let long = wireframe.iter().filter(|segment| segment.length() == 4.0).count();
        let short = wireframe.iter().filter(|segment| segment.length() == 2.0).count();
        assert_eq!(long, 4);
        assert_eq!(short, 8);
    }

    #[test]
    fn edge_midpoint() {
        let edge = Cuboid::default().edge(Corner::LeftBottomFar, Corner::LeftBottomNear);
        assert_eq!(edge.length(), 2.0);
        assert_eq!(edge.at(0.5), Vec3::new(-2.0, -1.0, 0.0));
        assert_eq!(edge.at(1.0), edge.omega);
    }

    #[test]
    fn flatten_emits_triples() {
        let segment = LineSegment::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(flatten(&[segment]), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(flatten(&[]).is_empty());
    }
}
