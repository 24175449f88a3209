//! Headless zoom rig simulation.
//!
//! Runs ten seconds of scripted scroll and keyboard input over a terrain
//! step and logs the camera every second.
//!
//! ```text
//! zoomrig [preset.toml]
//! ```

use std::{cell::Cell, path::Path, process::ExitCode, rc::Rc};

use glam::{Vec2, Vec3};
use zoomrig::{
    camera::{
        FollowTarget, PanState, RigCamera, RotationState, TerrainAreaKind,
        TerrainFilter, TerrainQuery, ZoomController,
    },
    input::{CombinedZoom, InputEvent, ZoomInputSource},
    options::InputOptions,
    Options, ZoomError,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 600;

/// Flat ground whose height the script changes between frames.
struct ScriptedTerrain {
    height: Rc<Cell<f32>>,
}

impl TerrainQuery for ScriptedTerrain {
    fn height_at(&self, _screen: Vec2, _filter: &TerrainFilter) -> Option<Vec3> {
        Some(Vec3::new(0.0, self.height.get(), 0.0))
    }

    fn is_known_area(&self, kind: &TerrainAreaKind) -> bool {
        matches!(kind.as_str(), "ground" | "cliff" | "water")
    }
}

/// Rotation subsystem that never rotates on its own.
struct NeutralRotation {
    initial_pitch: f32,
}

impl RotationState for NeutralRotation {
    fn has_initial_rotation(&self) -> bool {
        true
    }

    fn is_rotating(&self) -> bool {
        false
    }

    fn initial_pitch(&self) -> f32 {
        self.initial_pitch
    }

    fn reset_rotation(&mut self, smooth: bool) {
        log::info!("rotation reset requested (smooth={smooth})");
    }

    fn rotation_speed(&self) -> f32 {
        4.0
    }
}

/// Pan subsystem with no player panning.
struct StillPan;

impl PanState for StillPan {
    fn is_following_target(&self) -> bool {
        false
    }

    fn last_pan_direction(&self) -> Vec3 {
        Vec3::ZERO
    }

    fn panning_speed(&self) -> f32 {
        4.0
    }

    fn set_follow_target(&mut self, target: Option<FollowTarget>) {
        log::debug!("follow target set to {target:?}");
    }
}

fn load_options() -> Result<Options, ZoomError> {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path)),
        None => Ok(Options::default()),
    }
}

/// Input events for `frame` of the demo script, using the configured
/// zoom-out key.
fn scripted_events(frame: u32, input: &InputOptions) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if frame < 240 && frame % 10 == 0 {
        events.push(InputEvent::Scroll { delta: 1.0 });
    }
    if frame == 420 {
        events.push(InputEvent::key(input.zoom_out_key.as_str(), true));
    }
    if frame == 520 {
        events.push(InputEvent::key(input.zoom_out_key.as_str(), false));
    }
    events
}

fn run(options: &Options) -> Result<(), ZoomError> {
    let terrain_height = Rc::new(Cell::new(0.0));
    let camera = RigCamera::new(Vec3::ZERO, 50.0, 0.0).with_ui_camera();
    let initial_pitch = camera.pitch;

    let notifications = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&notifications);
    let mut controller = ZoomController::builder(options.zoom.clone())
        .terrain(ScriptedTerrain {
            height: Rc::clone(&terrain_height),
        })
        .rotation(NeutralRotation { initial_pitch })
        .pan(StillPan)
        .camera(camera)
        .notifier(move || counter.set(counter.get() + 1))
        .build()?;

    let mut input = CombinedZoom::from_options(&options.input);

    for frame in 0..FRAMES {
        match frame {
            300 => terrain_height.set(3.0),
            400 => terrain_height.set(-1.0),
            _ => {}
        }
        for event in scripted_events(frame, &options.input) {
            let _ = input.handle_event(&event);
        }

        controller.update_input(&mut input, FRAME_DT);
        controller.apply(FRAME_DT);

        if frame % 60 == 59 {
            let state = controller.state();
            let cam = controller.camera();
            log::info!(
                "t={:>4.1}s height={:>6.2} fov={:>5.1} pitch={:>5.1} \
                 pivoting={} offset={:?}",
                (frame + 1) as f32 * FRAME_DT,
                cam.height(),
                cam.field_of_view(),
                cam.pitch(),
                state.pivot.is_pivoting(),
                state.offset,
            );
        }
    }

    log::info!(
        "simulation finished after {FRAMES} frames, {} camera updates",
        notifications.get()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let result = load_options().and_then(|options| run(&options));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
