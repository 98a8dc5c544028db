//! Bevy test app builders with various plugin combinations.

use bevy::prelude::*;

/// Create a minimal test app with only the core plugin.
///
/// Provides `ArmsenseSet` system ordering and core resources but no sensor
/// systems.
pub fn minimal_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(armsense_core::ArmsenseCorePlugin);
    app.finish();
    app.cleanup();
    app
}

/// Create a test app with the core and pose-sensing plugins.
///
/// Provides armature binding and the per-tick pose scan. Does NOT include
/// recording — add `PoseRecorderPlugin` to your own app before `finish()`
/// if a test needs the stream.
pub fn pose_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(armsense_core::ArmsenseCorePlugin);
    app.add_plugins(armsense_sensor::ArmsensePosePlugin);
    app.finish();
    app.cleanup();
    app
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use armsense_dof::DofRegistry;

    #[test]
    fn minimal_app_builds() {
        let app = minimal_test_app();
        assert!(
            app.world()
                .get_resource::<armsense_core::time::SimTime>()
                .is_some()
        );
    }

    #[test]
    fn pose_app_builds() {
        let app = pose_test_app();
        assert!(app.world().get_resource::<DofRegistry>().is_some());
    }

    #[test]
    fn pose_app_can_update() {
        let mut app = pose_test_app();
        app.update();
        app.update();
    }
}
