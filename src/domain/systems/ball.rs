use crate::domain::pitch::Pitch;
use crate::domain::state::SimBall;
use crate::domain::tuning::BallTuning;

pub fn tick_ball(ball: &mut SimBall, dt: f32, pitch: &Pitch, tuning: &BallTuning) {
    // gravity, then integrate
    ball.velocity.z -= tuning.gravity * dt;
    ball.position += ball.velocity * dt;

    // ground contact
    let on_ground = ball.position.z <= tuning.radius;
    if on_ground {
        ball.position.z = tuning.radius;
        if ball.velocity.z < -tuning.rest_speed {
            ball.velocity.z = -ball.velocity.z * tuning.ground_restitution;
        } else if ball.velocity.z < 0.0 {
            ball.velocity.z = 0.0;
        }
    }

    // rolling friction only while resting on the ground
    if on_ground && ball.velocity.z == 0.0 {
        let ground = ball.velocity.truncate();
        let speed = ground.length();
        if speed > 0.0 {
            let slowed = (speed - tuning.rolling_friction * dt).max(0.0);
            let scaled = ground * (slowed / speed);
            ball.velocity.x = scaled.x;
            ball.velocity.y = scaled.y;
        }
    }

    bounce_off_lines(ball, pitch, tuning);
}

fn bounce_off_lines(ball: &mut SimBall, pitch: &Pitch, tuning: &BallTuning) {
    let max_x = pitch.half_width() - tuning.radius;
    let max_y = pitch.half_length() - tuning.radius;

    if ball.position.x.abs() > max_x {
        ball.position.x = ball.position.x.clamp(-max_x, max_x);
        ball.velocity.x = -ball.velocity.x * tuning.boundary_restitution;
    }

    if ball.position.y.abs() > max_y {
        ball.position.y = ball.position.y.clamp(-max_y, max_y);
        ball.velocity.y = -ball.velocity.y * tuning.boundary_restitution;
    }
}
