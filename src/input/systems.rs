//! Systems bridging keyboard input to the orbit controller.
use bevy::prelude::*;

use crate::camera::controller::OrbitCameraController;
use crate::input::bindings::{
    resolve_camera_command, CameraCommand, CameraInputBindings, CameraInputFrame,
    CameraInputState,
};

/// Run condition gating the bridge on [`CameraInputState`].
pub fn camera_input_enabled(state: Res<CameraInputState>) -> bool {
    state.enabled
}

/// Enables or disables the bridge when the toggle key is pressed.
pub fn toggle_camera_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<CameraInputBindings>,
    mut state: ResMut<CameraInputState>,
) {
    if !keyboard.just_pressed(bindings.toggle) {
        return;
    }

    state.enabled = !state.enabled;
    info!(
        "Camera input {}",
        if state.enabled { "enabled" } else { "disabled" }
    );
}

/// Samples this frame's input and issues at most one camera command.
pub fn drive_orbit_camera(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<CameraInputBindings>,
    mut controller: ResMut<OrbitCameraController>,
) {
    let frame = CameraInputFrame::sample(&keyboard, &bindings);
    let Some(command) = resolve_camera_command(frame) else {
        return;
    };

    match command {
        CameraCommand::Move(input) => match controller.move_pivot(input) {
            Ok(true) => {}
            Ok(false) => debug!("Camera move ignored while rotating"),
            Err(err) => warn!("{}", err),
        },
        CameraCommand::StepRotate(direction) => {
            controller.step_rotate(direction);
            debug!(
                "Camera step {:?} queued, angle {:.1} -> {:.1}",
                direction,
                controller.state().current_angle(),
                controller.state().target_angle()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<CameraInputBindings>()
            .init_resource::<CameraInputState>()
            .add_systems(
                Update,
                (
                    toggle_camera_input,
                    drive_orbit_camera
                        .run_if(camera_input_enabled)
                        .after(toggle_camera_input),
                ),
            );

        let mut controller = OrbitCameraController::default();
        controller.bind(Transform::from_xyz(10.0, 8.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y));
        app.insert_resource(controller);
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.clear();
        keyboard.release_all();
        keyboard.press(key);
    }

    #[test]
    fn rotate_key_queues_a_step() {
        let mut app = input_app();
        press(&mut app, KeyCode::KeyQ);
        app.update();

        let controller = app.world().resource::<OrbitCameraController>();
        assert!(controller.is_rotating());
        assert_eq!(controller.state().target_angle(), -45.0);
    }

    #[test]
    fn move_key_shifts_pivot() {
        let mut app = input_app();
        press(&mut app, KeyCode::KeyW);
        app.update();

        let controller = app.world().resource::<OrbitCameraController>();
        assert!(controller.pivot().length() > 0.0);
        assert!(!controller.is_rotating());
    }

    #[test]
    fn toggle_disables_bridge() {
        let mut app = input_app();
        press(&mut app, KeyCode::F2);
        app.update();
        assert!(!app.world().resource::<CameraInputState>().enabled);

        press(&mut app, KeyCode::KeyE);
        app.update();
        assert!(!app.world().resource::<OrbitCameraController>().is_rotating());
    }
}
