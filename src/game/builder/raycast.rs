//! Aim Raycast
//!
//! Casts the player's aim ray and reports it to the debug channel.

use glam::Vec3;

use crate::camera::{CameraPose, HitResult, RayQuery, cast_ray};
use crate::game::diagnostics::{DebugColor, DebugDraw, HIT_LINE_LIFETIME, MISS_LINE_LIFETIME};
use crate::world::SpatialQuery;

/// Cast the aim ray from the follow camera.
///
/// # Arguments
/// * `world` - Collision representation to trace against
/// * `camera` - This frame's camera pose
/// * `extra_distance` - Reach beyond the camera boom
/// * `debug` - Receives the ray, impact marker and hit details when enabled
///
/// # Returns
/// The nearest blocking hit, or a miss
pub fn cast_aim_ray<W: SpatialQuery + ?Sized>(
    world: &W,
    camera: &CameraPose,
    extra_distance: f32,
    debug: &mut DebugDraw<'_>,
) -> HitResult {
    let ray = RayQuery::from_camera(camera, extra_distance);
    let hit = cast_ray(world, &ray);

    if hit.is_hit() {
        if debug.is_enabled() {
            let name = hit
                .object
                .and_then(|id| world.object(id))
                .map(|o| o.name.clone())
                .unwrap_or_else(|| "<unknown>".to_string());
            debug.message(|| format!("Hit actor {name}"));
            debug.message(|| format!("Hit location {}", fmt_vec(hit.location)));
            debug.message(|| format!("Hit normal {}", fmt_vec(hit.normal)));
        }
        debug.line(ray.origin, ray.end(), DebugColor::Green, HIT_LINE_LIFETIME);
        debug.marker(hit.location, DebugColor::Green);
    } else {
        debug.message(|| "No Hit".to_string());
        debug.line(ray.origin, ray.end(), DebugColor::Red, MISS_LINE_LIFETIME);
    }

    hit
}

/// `X=.. Y=.. Z=..` with three decimals. Negative zero prints as zero.
pub fn fmt_vec(v: Vec3) -> String {
    let v = v + Vec3::ZERO;
    format!("X={:.3} Y={:.3} Z={:.3}", v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::diagnostics::{DebugPrimitive, RecordingSink};
    use crate::physics::Aabb;
    use crate::world::Scene;

    fn ground_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_static(
            "Ground",
            Aabb::new(Vec3::new(-1000.0, -1000.0, -100.0), Vec3::new(1000.0, 1000.0, 0.0)),
        );
        scene
    }

    #[test]
    fn test_hit_draws_green_line_and_marker() {
        let scene = ground_scene();
        let camera = CameraPose::new(Vec3::new(123.0, 47.0, 500.0), Vec3::NEG_Z, 400.0);
        let mut sink = RecordingSink::new();

        let hit = cast_aim_ray(&scene, &camera, 250.0, &mut DebugDraw::new(true, &mut sink));
        assert!(hit.is_hit());

        assert_eq!(
            sink.lines().next(),
            Some(&DebugPrimitive::Line {
                start: camera.position,
                end: Vec3::new(123.0, 47.0, -150.0),
                color: DebugColor::Green,
                lifetime: HIT_LINE_LIFETIME,
            })
        );
        assert!(matches!(
            sink.boxes().next(),
            Some(DebugPrimitive::Box { center, color: DebugColor::Green, .. }) if *center == hit.location
        ));
        let messages: Vec<_> = sink.messages().collect();
        assert_eq!(messages[0], "Hit actor Ground");
        assert_eq!(messages[1], "Hit location X=123.000 Y=47.000 Z=0.000");
        assert_eq!(messages[2], "Hit normal X=0.000 Y=0.000 Z=1.000");
    }

    #[test]
    fn test_miss_draws_red_line_only() {
        let scene = ground_scene();
        let camera = CameraPose::new(Vec3::new(0.0, 0.0, 500.0), Vec3::Z, 400.0);
        let mut sink = RecordingSink::new();

        let hit = cast_aim_ray(&scene, &camera, 250.0, &mut DebugDraw::new(true, &mut sink));
        assert!(!hit.is_hit());
        assert_eq!(sink.boxes().count(), 0);
        assert!(matches!(
            sink.lines().next(),
            Some(DebugPrimitive::Line { color: DebugColor::Red, lifetime, .. }) if *lifetime == MISS_LINE_LIFETIME
        ));
        assert_eq!(sink.messages().collect::<Vec<_>>(), vec!["No Hit"]);
    }

    #[test]
    fn test_debug_off_is_silent_and_same_result() {
        let scene = ground_scene();
        let camera = CameraPose::new(Vec3::new(10.0, 20.0, 300.0), Vec3::NEG_Z, 400.0);
        let mut quiet = RecordingSink::new();
        let mut loud = RecordingSink::new();

        let a = cast_aim_ray(&scene, &camera, 250.0, &mut DebugDraw::new(false, &mut quiet));
        let b = cast_aim_ray(&scene, &camera, 250.0, &mut DebugDraw::new(true, &mut loud));
        assert_eq!(a, b);
        assert!(quiet.is_empty());
        assert!(!loud.is_empty());
    }
}
