//! Camera modes and orthographic view bounds

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Orbit speed (radians per second)
const ORBIT_SPEED: f32 = 0.12;
const ORBIT_RADIUS: f32 = 2.0;
const ORBIT_HEIGHT: f32 = 1.0;
/// Helicopter nudge per key press
const NUDGE_STEP: f32 = 0.5;
/// Helicopter shift per vertical mouse move
const DRAG_STEP: f32 = 1.0;
const ZOOM_IN: f32 = 0.8;
const ZOOM_OUT: f32 = 1.25;
const PAN_STEP: f32 = 2.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 500.0;

/// Which viewpoint the camera uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Fixed three-quarter view of the board
    #[default]
    Tower,
    /// Straight down from high above
    Top,
    /// High above the player, looking ahead
    Follow,
    /// Just behind and above the player
    Behind,
    /// Free camera moved by nudges and mouse drags
    Helicopter,
    /// Slow circle around the board center
    Orbit,
    /// From the player's position
    FirstPerson,
}

impl CameraMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraMode::Tower => "Tower",
            CameraMode::Top => "Top",
            CameraMode::Follow => "Follow",
            CameraMode::Behind => "Behind",
            CameraMode::Helicopter => "Helicopter",
            CameraMode::Orbit => "Orbit",
            CameraMode::FirstPerson => "First person",
        }
    }
}

/// Helicopter camera nudges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Left,
    Right,
    Lower,
    Raise,
}

/// A camera change requested by input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    Select(CameraMode),
    Nudge(Nudge),
    /// Vertical mouse motion: positive moved down the screen
    Drag(i32),
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
}

/// Orthographic projection bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self {
            left: -10.0,
            right: 10.0,
            bottom: -10.0,
            top: 10.0,
        }
    }
}

impl ViewBounds {
    fn scale(&mut self, factor: f32) {
        self.left *= factor;
        self.right *= factor;
        self.bottom *= factor;
        self.top *= factor;
    }

    fn shift_x(&mut self, dx: f32) {
        self.left += dx;
        self.right += dx;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub mode: CameraMode,
    pub eye: Vec3,
    pub target: Vec3,
    pub bounds: ViewBounds,
    orbit_angle: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            mode: CameraMode::Tower,
            eye: Vec3::new(-1.0, 3.0, 3.0),
            target: Vec3::ZERO,
            bounds: ViewBounds::default(),
            orbit_angle: 0.0,
        }
    }
}

impl Camera {
    /// Apply one input command
    pub fn apply(&mut self, cmd: CameraCommand) {
        match cmd {
            CameraCommand::Select(mode) => {
                if mode != self.mode {
                    log::debug!("Camera: {}", mode.as_str());
                }
                self.mode = mode;
            }
            CameraCommand::Nudge(nudge) => {
                if self.mode != CameraMode::Helicopter {
                    return;
                }
                match nudge {
                    Nudge::Right => self.eye.x += NUDGE_STEP,
                    Nudge::Left => self.eye.x -= NUDGE_STEP,
                    Nudge::Lower => self.eye.y -= NUDGE_STEP,
                    Nudge::Raise => self.eye.y += NUDGE_STEP,
                }
            }
            CameraCommand::Drag(dy) => {
                if self.mode == CameraMode::Helicopter {
                    self.eye.x += dy.signum() as f32 * DRAG_STEP;
                }
            }
            CameraCommand::ZoomIn => self.bounds.scale(ZOOM_IN),
            CameraCommand::ZoomOut => self.bounds.scale(ZOOM_OUT),
            CameraCommand::PanLeft => self.bounds.shift_x(-PAN_STEP),
            CameraCommand::PanRight => self.bounds.shift_x(PAN_STEP),
        }
    }

    /// Recompute eye and target for the current mode
    ///
    /// `player` is (x, height, z).
    pub fn update(&mut self, player: Vec3, dt: f32) {
        match self.mode {
            CameraMode::Tower => {
                self.eye = Vec3::new(-1.0, 3.0, 3.0);
                self.target = Vec3::ZERO;
            }
            CameraMode::Top => {
                self.eye = Vec3::new(0.0, 20.0, 1.0);
                self.target = Vec3::ZERO;
            }
            CameraMode::Follow => {
                self.eye = Vec3::new(player.x, 8.0, player.z);
                self.target = Vec3::new(player.x + 2.0, 2.0, player.z - 2.0);
            }
            CameraMode::Behind => {
                self.eye = Vec3::new(player.x + 1.0, player.y + 4.0, player.z - 0.6);
                self.target = Vec3::new(player.x + 1.0, player.y, player.z - 1.0);
            }
            // Keeps whatever eye/target it inherited, moved only by input
            CameraMode::Helicopter => {}
            CameraMode::Orbit => {
                self.orbit_angle += ORBIT_SPEED * dt;
                self.eye = Vec3::new(
                    self.orbit_angle.sin() * ORBIT_RADIUS,
                    ORBIT_HEIGHT,
                    self.orbit_angle.cos() * ORBIT_RADIUS,
                );
                self.target = Vec3::ZERO;
            }
            CameraMode::FirstPerson => {
                self.eye = player;
            }
        }
    }

    /// World to camera transform
    pub fn view(&self) -> Mat4 {
        let mut target = self.target;
        if (target - self.eye).length_squared() < 1e-6 {
            target = self.eye + Vec3::new(1.0, 0.0, -1.0);
        }
        // Looking straight up or down makes +Y a degenerate up vector
        let forward = (target - self.eye).normalize();
        let up = if forward.cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        };
        Mat4::look_at_rh(self.eye, target, up)
    }

    pub fn projection(&self) -> Mat4 {
        let b = self.bounds;
        Mat4::orthographic_rh_gl(b.left, b.right, b.bottom, b.top, NEAR, FAR)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(CameraMode::default().as_str(), "Tower");
        assert_eq!(CameraMode::FirstPerson.as_str(), "First person");
    }

    #[test]
    fn test_fixed_modes() {
        let mut cam = Camera::default();
        cam.apply(CameraCommand::Select(CameraMode::Top));
        cam.update(Vec3::new(1.0, 2.2, 1.0), 0.016);
        assert!(close(cam.eye, Vec3::new(0.0, 20.0, 1.0)));
        assert!(close(cam.target, Vec3::ZERO));
    }

    #[test]
    fn test_follow_and_behind_track_player() {
        let player = Vec3::new(0.4, 2.2, -1.2);
        let mut cam = Camera::default();

        cam.apply(CameraCommand::Select(CameraMode::Follow));
        cam.update(player, 0.016);
        assert!(close(cam.eye, Vec3::new(0.4, 8.0, -1.2)));
        assert!(close(cam.target, Vec3::new(2.4, 2.0, -3.2)));

        cam.apply(CameraCommand::Select(CameraMode::Behind));
        cam.update(player, 0.016);
        assert!(close(cam.eye, Vec3::new(1.4, 6.2, -1.8)));
        assert!(close(cam.target, Vec3::new(1.4, 2.2, -2.2)));
    }

    #[test]
    fn test_helicopter_keeps_inherited_view() {
        let mut cam = Camera::default();
        cam.apply(CameraCommand::Select(CameraMode::Top));
        cam.update(Vec3::ZERO, 0.016);
        cam.apply(CameraCommand::Select(CameraMode::Helicopter));
        cam.update(Vec3::ZERO, 0.016);
        assert!(close(cam.eye, Vec3::new(0.0, 20.0, 1.0)));

        cam.apply(CameraCommand::Nudge(Nudge::Right));
        cam.apply(CameraCommand::Nudge(Nudge::Lower));
        cam.apply(CameraCommand::Drag(3));
        cam.update(Vec3::ZERO, 0.016);
        assert!(close(cam.eye, Vec3::new(1.5, 19.5, 1.0)));
    }

    #[test]
    fn test_nudges_ignored_outside_helicopter() {
        let mut cam = Camera::default();
        cam.apply(CameraCommand::Nudge(Nudge::Raise));
        cam.apply(CameraCommand::Drag(-1));
        assert!(close(cam.eye, Vec3::new(-1.0, 3.0, 3.0)));
    }

    #[test]
    fn test_orbit_keeps_radius() {
        let mut cam = Camera::default();
        cam.apply(CameraCommand::Select(CameraMode::Orbit));
        cam.update(Vec3::ZERO, 1.0);
        let first = cam.eye;
        cam.update(Vec3::ZERO, 1.0);
        assert!(!close(first, cam.eye));
        let flat = Vec3::new(cam.eye.x, 0.0, cam.eye.z);
        assert!((flat.length() - ORBIT_RADIUS).abs() < 1e-4);
        assert!((cam.eye.y - ORBIT_HEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_and_pan() {
        let mut cam = Camera::default();
        cam.apply(CameraCommand::ZoomIn);
        assert!((cam.bounds.right - 8.0).abs() < 1e-5);
        cam.apply(CameraCommand::ZoomOut);
        assert!((cam.bounds.right - 10.0).abs() < 1e-5);
        cam.apply(CameraCommand::PanRight);
        assert!((cam.bounds.left - (-8.0)).abs() < 1e-5);
        assert!((cam.bounds.right - 12.0).abs() < 1e-5);
        assert!((cam.bounds.top - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_target_projects_to_center() {
        let cam = Camera::default();
        let ndc = cam.view_projection().project_point3(cam.target);
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    fn inside_ndc(p: Vec3) -> bool {
        p.x.abs() <= 1.0 && p.y.abs() <= 1.0 && p.z >= -1.0 && p.z <= 1.0
    }

    #[test]
    fn test_player_off_target_stays_in_view() {
        let player = Vec3::new(-2.0, 2.2, -2.0);
        for mode in [
            CameraMode::Tower,
            CameraMode::Top,
            CameraMode::Follow,
            CameraMode::Behind,
        ] {
            let mut cam = Camera::default();
            cam.apply(CameraCommand::Select(mode));
            cam.apply(CameraCommand::ZoomIn);
            cam.apply(CameraCommand::ZoomIn);
            cam.update(player, 0.016);
            let ndc = cam.view_projection().project_point3(player);
            assert!(inside_ndc(ndc), "{mode:?}: {ndc:?}");
        }
    }

    #[test]
    fn test_top_view_scale_is_undistorted() {
        let mut cam = Camera::default();
        cam.apply(CameraCommand::Select(CameraMode::Top));
        cam.update(Vec3::ZERO, 0.016);
        let vp = cam.view_projection();
        // A unit step spans 0.1 in NDC; -z is foreshortened only by the slight tilt
        let dx = vp.project_point3(Vec3::X) - vp.project_point3(Vec3::ZERO);
        let dz = vp.project_point3(Vec3::NEG_Z) - vp.project_point3(Vec3::ZERO);
        assert!((dx.x - 0.1).abs() < 1e-4);
        assert!(dz.y > 0.09 && dz.y < 0.1 + 1e-4);
    }

    #[test]
    fn test_first_person_degenerate_view_is_finite() {
        let mut cam = Camera::default();
        cam.apply(CameraCommand::Select(CameraMode::FirstPerson));
        cam.update(Vec3::ZERO, 0.016);
        assert!(cam.view().is_finite());
    }
}
