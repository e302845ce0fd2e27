use crate::domain::pitch::Pitch;
use crate::domain::state::{SimBall, SimPlayer};
use crate::domain::tuning::{BallTuning, PlayerTuning};
use glam::Vec2;
use tracing::debug;

/// How the controlled player played the ball this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touch {
    Kick,
    Pass,
    Shoot,
}

pub fn tick_controlled(
    player: &mut SimPlayer,
    ball: &mut SimBall,
    dt: f32,
    pitch: &Pitch,
    player_tuning: &PlayerTuning,
    ball_tuning: &BallTuning,
) -> Option<Touch> {
    let intent = player.last_intent;

    // movement
    let dir = intent.direction();
    if dir != Vec2::ZERO {
        player.facing = dir;
        let step = dir * player_tuning.run_speed * dt;
        player.position.x =
            (player.position.x + step.x).clamp(-pitch.half_width(), pitch.half_width());
        player.position.y =
            (player.position.y + step.y).clamp(-pitch.half_length(), pitch.half_length());
    }

    player.touch_cooldown = (player.touch_cooldown - dt).max(0.0);
    let touch = if intent.shoot {
        Touch::Shoot
    } else if intent.kick {
        Touch::Kick
    } else if intent.pass {
        Touch::Pass
    } else {
        return None;
    };

    if player.touch_cooldown > 0.0 || !in_reach(player, ball, player_tuning, ball_tuning) {
        return None;
    }

    let (speed, lift) = match touch {
        Touch::Kick => (player_tuning.kick_speed, 0.0),
        Touch::Pass => (player_tuning.pass_speed, 0.0),
        Touch::Shoot => (player_tuning.shoot_speed, player_tuning.shoot_lift),
    };
    let ground = player.facing * speed;
    ball.velocity.x = ground.x;
    ball.velocity.y = ground.y;
    ball.velocity.z += lift;
    player.touch_cooldown = player_tuning.touch_cooldown;

    debug!(player_id = player.id, touch = ?touch, "ball played");
    Some(touch)
}

fn in_reach(
    player: &SimPlayer,
    ball: &SimBall,
    player_tuning: &PlayerTuning,
    ball_tuning: &BallTuning,
) -> bool {
    let horizontal = (ball.position.truncate() - player.position.truncate()).length();
    let height = ball.position.z - ball_tuning.radius;
    horizontal <= player_tuning.reach && height <= player_tuning.reach_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::ControlIntent;
    use crate::domain::team::TeamSide;
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    fn setup(ball_at: Vec3) -> (SimPlayer, SimBall) {
        let player = SimPlayer::new(1, TeamSide::Home, false, Vec3::ZERO);
        let ball = SimBall::at_rest(ball_at);
        (player, ball)
    }

    #[test]
    fn player_runs_in_the_intent_direction() {
        let (mut player, mut ball) = setup(Vec3::new(10.0, 10.0, 0.11));
        player.last_intent = ControlIntent {
            right: true,
            ..ControlIntent::default()
        };

        for _ in 0..60 {
            tick_controlled(
                &mut player,
                &mut ball,
                DT,
                &Pitch::default(),
                &PlayerTuning::default(),
                &BallTuning::default(),
            );
        }

        assert!((player.position.x - PlayerTuning::default().run_speed).abs() < 1e-3);
        assert_eq!(player.position.y, 0.0);
        assert_eq!(player.facing, Vec2::X);
    }

    #[test]
    fn kick_launches_the_ball_along_facing_when_in_reach() {
        let (mut player, mut ball) = setup(Vec3::new(0.0, 0.5, 0.11));
        player.last_intent = ControlIntent {
            kick: true,
            ..ControlIntent::default()
        };

        let touch = tick_controlled(
            &mut player,
            &mut ball,
            DT,
            &Pitch::default(),
            &PlayerTuning::default(),
            &BallTuning::default(),
        );

        assert_eq!(touch, Some(Touch::Kick));
        assert_eq!(ball.velocity.y, PlayerTuning::default().kick_speed);
        assert!(player.touch_cooldown > 0.0);

        // Holding the key does not retrigger during the cooldown.
        let again = tick_controlled(
            &mut player,
            &mut ball,
            DT,
            &Pitch::default(),
            &PlayerTuning::default(),
            &BallTuning::default(),
        );
        assert_eq!(again, None);
    }

    #[test]
    fn ball_out_of_reach_is_not_played() {
        let (mut player, mut ball) = setup(Vec3::new(0.0, 5.0, 0.11));
        player.last_intent = ControlIntent {
            shoot: true,
            ..ControlIntent::default()
        };

        let touch = tick_controlled(
            &mut player,
            &mut ball,
            DT,
            &Pitch::default(),
            &PlayerTuning::default(),
            &BallTuning::default(),
        );

        assert_eq!(touch, None);
        assert_eq!(ball.velocity, Vec3::ZERO);
    }

    #[test]
    fn shot_lifts_the_ball() {
        let (mut player, mut ball) = setup(Vec3::new(0.3, 0.3, 0.11));
        player.last_intent = ControlIntent {
            shoot: true,
            ..ControlIntent::default()
        };

        tick_controlled(
            &mut player,
            &mut ball,
            DT,
            &Pitch::default(),
            &PlayerTuning::default(),
            &BallTuning::default(),
        );

        assert!(ball.velocity.z > 0.0);
    }
}
