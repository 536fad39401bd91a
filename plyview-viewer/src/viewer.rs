//! Interactive viewer application
//!
//! [`ViewerState`] owns everything the viewer mutates: the current point
//! cloud, its bounds, the camera, the orbit controls, and the load
//! tracker. [`ViewerApp`] drives it from a winit event loop.

use crate::camera::Camera;
use crate::controls::OrbitControls;
use crate::load::{spawn_load, LoadOutcome, LoadTracker, ViewerEvent};
use crate::renderer::{PointCloudRenderer, RenderConfig};
use plyview_core::{Aabb, ColoredPointCloud3f, Error, FitFrame, Result};
use std::path::PathBuf;
use std::sync::Arc;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    keyboard::Key,
    window::WindowBuilder,
};

/// Viewer state, previously scattered across globals, owned in one place
pub struct ViewerState {
    pub cloud: Option<ColoredPointCloud3f>,
    pub bounds: Option<Aabb>,
    pub camera: Camera,
    pub controls: OrbitControls,
    pub tracker: LoadTracker,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            cloud: None,
            bounds: None,
            camera: Camera::default(),
            controls: OrbitControls::new(),
            tracker: LoadTracker::new(),
        }
    }

    /// Handle a finished load.
    ///
    /// Superseded completions are discarded, failures keep the previous
    /// cloud visible. Returns the newly installed cloud so the caller can
    /// upload it to the renderer.
    pub fn finish_load(&mut self, outcome: LoadOutcome) -> Option<&ColoredPointCloud3f> {
        if !self.tracker.is_current(outcome.seq) {
            log::info!(
                "discarding superseded load of {} (request {})",
                outcome.path.display(),
                outcome.seq
            );
            return None;
        }

        match outcome.result {
            Ok(cloud) => {
                let bounds = Aabb::from_points(cloud.iter().map(|p| p.position));
                match &bounds {
                    Some(bounds) => {
                        match FitFrame::for_bounds(bounds, self.camera.vertical_fov_radians()) {
                            Ok(frame) => self.apply_frame(&frame),
                            Err(e) => log::warn!(
                                "not reframing camera for {}: {}",
                                outcome.path.display(),
                                e
                            ),
                        }
                    }
                    None => log::warn!("{} contains no points", outcome.path.display()),
                }

                self.bounds = bounds;
                self.cloud = Some(cloud);
                self.cloud.as_ref()
            }
            Err(e) => {
                log::error!("failed to load {}: {}", outcome.path.display(), e);
                None
            }
        }
    }

    /// Move camera and orbit pivot to a computed fit frame
    pub fn apply_frame(&mut self, frame: &FitFrame) {
        self.camera.position = frame.eye();
        self.camera.target = frame.target();
        self.controls.target = frame.target();
    }

    /// Recompute the fit frame for the current cloud and apply it
    pub fn reframe(&mut self) {
        if let Some(bounds) = self.bounds {
            match FitFrame::for_bounds(&bounds, self.camera.vertical_fov_radians()) {
                Ok(frame) => self.apply_frame(&frame),
                Err(e) => log::warn!("cannot reframe camera: {}", e),
            }
        }
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Interactive point cloud viewer window
pub struct ViewerApp {
    state: ViewerState,
    config: RenderConfig,
    last_mouse_pos: Option<PhysicalPosition<f64>>,
    left_pressed: bool,
    right_pressed: bool,
}

impl ViewerApp {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            state: ViewerState::new(),
            config,
            last_mouse_pos: None,
            left_pressed: false,
            right_pressed: false,
        }
    }

    /// Run the viewer, optionally loading a file at startup.
    ///
    /// Left-drag orbits, right-drag pans, scroll zooms. `O` opens a file
    /// dialog to load a replacement cloud, `R` reframes the camera on the
    /// current cloud.
    pub fn run(mut self, initial: Option<PathBuf>) -> Result<()> {
        let event_loop = EventLoopBuilder::<ViewerEvent>::with_user_event()
            .build()
            .map_err(|e| Error::Visualization(format!("Failed to create event loop: {}", e)))?;
        let proxy = event_loop.create_proxy();

        let window = Arc::new(
            WindowBuilder::new()
                .with_title("plyview")
                .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 800.0))
                .build(&event_loop)
                .map_err(|e| Error::Visualization(format!("Failed to create window: {}", e)))?,
        );

        let mut renderer =
            pollster::block_on(PointCloudRenderer::new(window.clone(), self.config.clone()))?;

        let size = window.inner_size();
        self.state.camera.aspect_ratio = size.width as f32 / size.height.max(1) as f32;

        if let Some(path) = initial {
            let seq = self.state.tracker.begin();
            spawn_load(proxy.clone(), seq, path, self.config.point_color);
        }

        event_loop
            .run(move |event, target| {
                target.set_control_flow(ControlFlow::Poll);

                match event {
                    Event::UserEvent(ViewerEvent::LoadFinished(outcome)) => {
                        if let Some(cloud) = self.state.finish_load(outcome) {
                            renderer.set_points(cloud);
                        }
                    }
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::CloseRequested => {
                            target.exit();
                        }
                        WindowEvent::Resized(new_size) => {
                            renderer.resize(new_size);
                            self.state.camera.aspect_ratio =
                                new_size.width as f32 / new_size.height.max(1) as f32;
                        }
                        WindowEvent::MouseInput { state, button, .. } => match button {
                            MouseButton::Left => {
                                self.left_pressed = state == ElementState::Pressed;
                            }
                            MouseButton::Right => {
                                self.right_pressed = state == ElementState::Pressed;
                            }
                            _ => {}
                        },
                        WindowEvent::CursorMoved { position, .. } => {
                            if let Some(last_pos) = self.last_mouse_pos {
                                let delta_x = (position.x - last_pos.x) as f32;
                                let delta_y = (position.y - last_pos.y) as f32;

                                if self.left_pressed {
                                    self.state
                                        .controls
                                        .orbit(&mut self.state.camera, delta_x, delta_y);
                                } else if self.right_pressed {
                                    self.state
                                        .controls
                                        .pan(&mut self.state.camera, delta_x, delta_y);
                                }
                            }
                            self.last_mouse_pos = Some(position);
                        }
                        WindowEvent::MouseWheel { delta, .. } => {
                            let scroll = match delta {
                                MouseScrollDelta::LineDelta(_, y) => y,
                                MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                            };
                            self.state.controls.zoom(&mut self.state.camera, scroll);
                        }
                        WindowEvent::KeyboardInput { event, .. } => {
                            if event.state == ElementState::Pressed {
                                if let Key::Character(c) = &event.logical_key {
                                    match c.as_str() {
                                        "o" | "O" => {
                                            if let Some(path) = rfd::FileDialog::new()
                                                .add_filter("PLY point cloud", &["ply"])
                                                .pick_file()
                                            {
                                                let seq = self.state.tracker.begin();
                                                spawn_load(
                                                    proxy.clone(),
                                                    seq,
                                                    path,
                                                    self.config.point_color,
                                                );
                                            }
                                        }
                                        "r" | "R" => {
                                            self.state.reframe();
                                        }
                                        _ => {}
                                    }
                                }
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            renderer.update_camera(
                                self.state.camera.view_matrix(),
                                self.state.camera.projection_matrix(),
                            );
                            if let Err(e) = renderer.render() {
                                log::error!("render error: {}", e);
                            }
                            window.request_redraw();
                        }
                        _ => {}
                    },
                    _ => {}
                }
            })
            .map_err(|e| Error::Visualization(format!("Event loop error: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use plyview_core::{ColoredPoint3f, Point3f, PointCloud, Vector3f};

    fn cloud_around(center: Point3f, half: f32) -> ColoredPointCloud3f {
        PointCloud::from_points(vec![
            ColoredPoint3f::white(Point3f::new(center.x - half, center.y - half, center.z - half)),
            ColoredPoint3f::white(Point3f::new(center.x + half, center.y + half, center.z + half)),
        ])
    }

    fn outcome(seq: u64, result: Result<ColoredPointCloud3f>) -> LoadOutcome {
        LoadOutcome {
            seq,
            path: PathBuf::from("cloud.ply"),
            result,
        }
    }

    #[test]
    fn applying_a_frame_sets_camera_and_pivot() {
        let mut state = ViewerState::new();
        let frame = FitFrame::new(
            Point3f::new(1.0, 2.0, 3.0),
            Vector3f::new(2.0, 2.0, 2.0),
            75.0_f32.to_radians(),
        )
        .unwrap();

        state.apply_frame(&frame);

        assert_relative_eq!(
            state.camera.position,
            Point3f::new(1.0, 2.0, 6.285),
            epsilon = 1e-3
        );
        assert_eq!(state.camera.target, Point3f::new(1.0, 2.0, 3.0));
        assert_eq!(state.controls.target, Point3f::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn successful_load_installs_cloud_and_reframes() {
        let mut state = ViewerState::new();
        let seq = state.tracker.begin();

        let installed = state.finish_load(outcome(seq, Ok(cloud_around(Point3f::origin(), 1.0))));
        assert!(installed.is_some());
        assert!(state.cloud.is_some());

        // Cube of extent 2 centered at origin, fov 75 degrees
        assert_relative_eq!(
            state.camera.position,
            Point3f::new(0.0, 0.0, 3.285),
            epsilon = 1e-3
        );
        assert_eq!(state.controls.target, Point3f::origin());
    }

    #[test]
    fn superseded_load_is_discarded() {
        let mut state = ViewerState::new();
        let seq_a = state.tracker.begin();
        let seq_b = state.tracker.begin();

        // B finishes first and is installed
        let b_center = Point3f::new(10.0, 0.0, 0.0);
        assert!(state
            .finish_load(outcome(seq_b, Ok(cloud_around(b_center, 1.0))))
            .is_some());

        // A finishes late; its cloud and framing must not be applied
        assert!(state
            .finish_load(outcome(seq_a, Ok(cloud_around(Point3f::origin(), 5.0))))
            .is_none());

        assert_eq!(state.controls.target, b_center);
        assert_eq!(state.cloud.as_ref().map(|c| c.len()), Some(2));
        assert_relative_eq!(state.camera.position.x, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut state = ViewerState::new();
        let seq = state.tracker.begin();
        assert!(state
            .finish_load(outcome(seq, Ok(cloud_around(Point3f::origin(), 1.0))))
            .is_some());
        let camera_before = state.camera.position;

        let seq = state.tracker.begin();
        let failed = outcome(seq, Err(Error::InvalidData("bad file".to_string())));
        assert!(state.finish_load(failed).is_none());

        assert!(state.cloud.is_some());
        assert_eq!(state.camera.position, camera_before);
    }

    #[test]
    fn empty_cloud_does_not_move_the_camera() {
        let mut state = ViewerState::new();
        let camera_before = state.camera.position;

        let seq = state.tracker.begin();
        let installed = state.finish_load(outcome(seq, Ok(PointCloud::new())));

        assert!(installed.is_some());
        assert_eq!(state.camera.position, camera_before);
        assert!(state.bounds.is_none());
    }
}
