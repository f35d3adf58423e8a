//! Orbit camera: z-up, looks at the origin, perspective projection.

use nalgebra::{Isometry3, Perspective3, Point2, Point3, Vector3};

/// A point after projection: pixel position plus distance from the eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen: Point2<f64>,
    /// Distance along the view axis; larger is further away.
    pub depth: f64,
}

/// Pixel rectangle the scene is projected into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Point3<f64>,
    pub target: Point3<f64>,
    view: Isometry3<f64>,
    projection: Perspective3<f64>,
    viewport: Viewport,
}

impl Camera {
    /// Place the camera on a sphere around the origin so that a ball of
    /// `radius` fills the viewport.
    ///
    /// Angles are in degrees. Elevation is measured up from the xy-plane,
    /// azimuth counter-clockwise from +x.
    pub fn orbit(elevation_deg: f64, azimuth_deg: f64, radius: f64, viewport: Viewport) -> Self {
        let distance = radius * 3.0;
        let eye = Self::orbit_position(distance, azimuth_deg.to_radians(), elevation_deg.to_radians());
        let target = Point3::origin();
        let view = Isometry3::look_at_rh(&eye, &target, &Vector3::z());

        let half_tan = radius / (distance * distance - radius * radius).sqrt();
        let fovy = 2.0 * (half_tan / viewport.aspect().min(1.0)).atan();
        let projection = Perspective3::new(viewport.aspect(), fovy, distance - radius * 1.5, distance + radius * 1.5);

        Self { eye, target, view, projection, viewport }
    }

    fn orbit_position(distance: f64, azimuth: f64, elevation: f64) -> Point3<f64> {
        Point3::new(
            distance * elevation.cos() * azimuth.cos(),
            distance * elevation.cos() * azimuth.sin(),
            distance * elevation.sin(),
        )
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn project(&self, p: &Point3<f64>) -> Projected {
        let in_view = self.view.transform_point(p);
        let ndc = self.projection.project_point(&in_view);
        let vp = &self.viewport;
        Projected {
            screen: Point2::new(
                vp.x + (ndc.x + 1.0) * 0.5 * vp.width,
                vp.y + (1.0 - ndc.y) * 0.5 * vp.height,
            ),
            depth: -in_view.z,
        }
    }
}
