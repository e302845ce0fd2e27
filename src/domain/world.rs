// Deterministic kinematic pitch world.
//
// Stands in for a full rigid-body engine: it owns the ball and the 22 players, moves the
// operator's player from intent and integrates the ball. Nothing else collides.

use super::errors::SolverError;
use super::intent::ControlIntent;
use super::pitch::Pitch;
use super::ports::SimulationWorld;
use super::shape::{BodyKind, Geometry, PhysicalShape, Pose};
use super::state::{SimBall, SimPlayer};
use super::systems::{ball, players};
use super::team::{Team, TeamSide};
use super::tuning::{BallTuning, PlayerTuning};
use glam::{Mat3, Vec3};

const POST_THICKNESS: f32 = 0.12;

pub struct PitchWorld {
    pitch: Pitch,
    ball: SimBall,
    players: Vec<SimPlayer>,
    ball_tuning: BallTuning,
    player_tuning: PlayerTuning,
    // Index into `players` of the player receiving operator intent.
    controlled: Option<usize>,
    elapsed: f64,
}

impl PitchWorld {
    pub fn new(home: &Team, away: &Team, pitch: Pitch) -> Self {
        Self::with_tuning(
            home,
            away,
            pitch,
            BallTuning::default(),
            PlayerTuning::default(),
        )
    }

    pub fn with_tuning(
        home: &Team,
        away: &Team,
        pitch: Pitch,
        ball_tuning: BallTuning,
        player_tuning: PlayerTuning,
    ) -> Self {
        let mut players = Vec::with_capacity(22);
        let mut next_id = 1;
        for team in [home, away] {
            players.push(SimPlayer::new(
                next_id,
                team.side,
                true,
                pitch.goalkeeper_spot(team.side),
            ));
            next_id += 1;
            for slot in team.formation.slots() {
                players.push(SimPlayer::new(
                    next_id,
                    team.side,
                    false,
                    pitch.slot_to_world(team.side, *slot),
                ));
                next_id += 1;
            }
        }

        let ball = SimBall::at_rest(pitch.centre_spot() + Vec3::Z * ball_tuning.radius);

        Self {
            pitch,
            ball,
            players,
            ball_tuning,
            player_tuning,
            controlled: None,
            elapsed: 0.0,
        }
    }

    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    pub fn players(&self) -> &[SimPlayer] {
        &self.players
    }

    pub fn ball_velocity(&self) -> Vec3 {
        self.ball.velocity
    }

    /// Player currently receiving operator intent, if any intent was applied yet.
    pub fn controlled_player(&self) -> Option<&SimPlayer> {
        self.controlled.and_then(|i| self.players.get(i))
    }

    // Outfield player of `side` closest to the ball on the ground plane.
    fn nearest_outfield(&self, side: TeamSide) -> Option<usize> {
        let ball = self.ball.position.truncate();
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.side == side && !p.goalkeeper)
            .min_by(|(_, a), (_, b)| {
                let da = a.position.truncate().distance_squared(ball);
                let db = b.position.truncate().distance_squared(ball);
                da.total_cmp(&db)
            })
            .map(|(i, _)| i)
    }

    fn player_shape(&self, player: &SimPlayer) -> PhysicalShape {
        let [w, d, h] = self.player_tuning.body;
        let heading = (-player.facing.x).atan2(player.facing.y);
        PhysicalShape {
            body: BodyKind::Player {
                side: player.side,
                goalkeeper: player.goalkeeper,
            },
            pose: Pose {
                position: player.position + Vec3::Z * (h * 0.5),
                rotation: Mat3::from_rotation_z(heading),
            },
            geometry: Geometry::Box {
                lengths: Vec3::new(w, d, h),
            },
        }
    }

    fn goal_shapes(&self, goal_line: f32) -> [PhysicalShape; 3] {
        let half_mouth = self.pitch.goal_width * 0.5;
        let height = self.pitch.goal_height;
        let post = Geometry::Box {
            lengths: Vec3::new(POST_THICKNESS, POST_THICKNESS, height),
        };
        let bar = Geometry::Box {
            lengths: Vec3::new(
                self.pitch.goal_width + POST_THICKNESS,
                POST_THICKNESS,
                POST_THICKNESS,
            ),
        };
        let frame = |position: Vec3, geometry: Geometry| PhysicalShape {
            body: BodyKind::Goal,
            pose: Pose::at(position),
            geometry,
        };

        [
            frame(Vec3::new(-half_mouth, goal_line, height * 0.5), post),
            frame(Vec3::new(half_mouth, goal_line, height * 0.5), post),
            frame(Vec3::new(0.0, goal_line, height), bar),
        ]
    }

    fn check_finite(&self) -> Result<(), SolverError> {
        if !self.ball.is_finite() {
            return Err(SolverError::Diverged {
                body: BodyKind::Ball,
            });
        }
        if let Some(p) = self.players.iter().find(|p| !p.is_finite()) {
            return Err(SolverError::Diverged {
                body: BodyKind::Player {
                    side: p.side,
                    goalkeeper: p.goalkeeper,
                },
            });
        }
        Ok(())
    }
}

impl SimulationWorld for PitchWorld {
    fn apply_intent(&mut self, side: TeamSide, intent: &ControlIntent) {
        for p in &mut self.players {
            p.last_intent = ControlIntent::default();
        }

        self.controlled = self.nearest_outfield(side);
        if let Some(i) = self.controlled {
            self.players[i].last_intent = *intent;
        }
    }

    fn step(&mut self, dt: f32) -> Result<(), SolverError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SolverError::InvalidDelta(dt));
        }

        if let Some(i) = self.controlled {
            players::tick_controlled(
                &mut self.players[i],
                &mut self.ball,
                dt,
                &self.pitch,
                &self.player_tuning,
                &self.ball_tuning,
            );
        }
        ball::tick_ball(&mut self.ball, dt, &self.pitch, &self.ball_tuning);

        self.check_finite()?;
        self.elapsed += f64::from(dt);
        Ok(())
    }

    fn geometries(&self) -> Vec<PhysicalShape> {
        let mut shapes = Vec::with_capacity(self.players.len() + 8);

        shapes.push(PhysicalShape {
            body: BodyKind::Pitch,
            pose: Pose::identity(),
            geometry: Geometry::Plane {
                normal: Vec3::Z,
                offset: 0.0,
            },
        });
        shapes.extend(self.goal_shapes(-self.pitch.half_length()));
        shapes.extend(self.goal_shapes(self.pitch.half_length()));
        shapes.extend(self.players.iter().map(|p| self.player_shape(p)));
        shapes.push(PhysicalShape {
            body: BodyKind::Ball,
            pose: Pose::at(self.ball.position),
            geometry: Geometry::Sphere {
                radius: self.ball_tuning.radius,
            },
        });

        shapes
    }

    fn ball_position(&self) -> Vec3 {
        self.ball.position
    }

    fn place_ball(&mut self, position: Vec3) {
        let z = position.z.max(self.ball_tuning.radius);
        self.ball = SimBall::at_rest(Vec3::new(position.x, position.y, z));
    }

    fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
