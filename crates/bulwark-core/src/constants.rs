//! Simulation constants and tuning parameters.
//!
//! Distances are world units, times are seconds, angles are radians.

use glam::Vec3;

// --- Player ---

/// Fixed camera (gun) position.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Default aim: looking north along -Z.
pub const DEFAULT_AIM: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Player health at game start and the cap for wave bonuses.
pub const PLAYER_MAX_HEALTH: u32 = 100;

/// Damage dealt by one enemy reaching the defended point.
pub const IMPACT_DAMAGE: u32 = 10;

// --- Vulcan ---

/// Shot interval when the trigger is first pulled (10 Hz).
pub const VULCAN_BASE_INTERVAL: f32 = 0.1;

/// Shot interval floor (50 Hz), reached after four seconds of fire.
pub const VULCAN_MIN_INTERVAL: f32 = 0.02;

/// Interval shrink per second of continuous fire.
pub const VULCAN_RAMP_PER_SEC: f32 = 0.02;

/// Wave from which each trigger pull fires two rounds.
pub const VULCAN_TWIN_WAVE: u32 = 3;

/// Wave from which each trigger pull fires three rounds.
pub const VULCAN_TRIPLE_WAVE: u32 = 6;

/// Lateral gap between parallel vulcan rounds.
pub const VULCAN_SPREAD: f32 = 1.5;

pub const VULCAN_SPEED: f32 = 100.0;
pub const VULCAN_LIFETIME: f32 = 3.0;
pub const VULCAN_RADIUS: f32 = 0.5;
pub const VULCAN_COLOR: u32 = 0xffff00;

// --- Missile launcher ---

pub const MISSILE_MAX_AMMO: u32 = 10;
pub const MISSILE_RELOAD_SECS: f32 = 5.0;

/// Half-angle of the lock-on cone around the aim axis.
pub const MISSILE_LOCK_CONE: f32 = 0.35;

pub const MISSILE_SPEED: f32 = 60.0;
pub const MISSILE_LIFETIME: f32 = 5.0;
pub const MISSILE_RADIUS: f32 = 1.0;
pub const MISSILE_COLOR: u32 = 0xffaa00;

/// Homing blend rate: fraction of the way toward the target direction per second.
pub const MISSILE_TURN_RATE: f32 = 5.0;

// --- Laser ---

/// Half-angle of the beam's kill cone around the aim axis.
pub const LASER_CONE: f32 = 0.2;

/// Heat at which the beam overheats.
pub const LASER_MAX_HEAT: f32 = 5.0;

/// Heat gained per second of beam time.
pub const LASER_HEAT_RATE: f32 = 1.0;

/// Idle heat loss relative to the gain rate.
pub const LASER_DECAY_FACTOR: f32 = 2.0;

/// Forced cooldown after an overheat.
pub const LASER_COOLDOWN_SECS: f32 = 20.0;

/// Length of the rendered beam.
pub const LASER_BEAM_LENGTH: f32 = 100.0;

/// Beam muzzle drop below the camera.
pub const LASER_MUZZLE_DROP: f32 = 0.5;

pub const LASER_RADIUS: f32 = 1.0;
pub const LASER_LIFETIME: f32 = 1.0;
pub const LASER_COLOR: u32 = 0x00ffff;

// --- Scoring ---

pub const SCORE_KILL: u32 = 100;
pub const SCORE_BOMBER: u32 = 500;
pub const SCORE_BEAM_KILL: u32 = 50;

// --- Waves ---

/// Kills needed to clear a wave, multiplied by the wave number.
pub const WAVE_KILLS_PER_LEVEL: u32 = 5;

pub const INITIAL_SPAWN_INTERVAL: f32 = 2.0;

/// Spawn interval multiplier applied on each wave advance.
pub const SPAWN_INTERVAL_DECAY: f32 = 0.85;

pub const MIN_SPAWN_INTERVAL: f32 = 0.4;

/// Health restored when a wave is cleared.
pub const WAVE_HEALTH_BONUS: u32 = 10;

// --- Spawning ---

/// Radius of the hemisphere enemies spawn on.
pub const SPAWN_RADIUS: f32 = 120.0;

/// Margin keeping sampled hemisphere points above the horizon.
pub const HEMISPHERE_HORIZON_MARGIN: f32 = 0.2;

/// Aim point for direct-attack enemies, lifted off the ground.
pub const DEFENDED_POINT: Vec3 = Vec3::new(0.0, 5.0, 0.0);

/// Missile-defense mode: missile share at wave 0, per-wave increase, and cap.
pub const MISSILE_CHANCE_BASE: f32 = 0.3;
pub const MISSILE_CHANCE_PER_WAVE: f32 = 0.05;
pub const MISSILE_CHANCE_MAX: f32 = 0.8;

/// Aircraft-raid mode: cumulative type thresholds (fighter, then helicopter, rest bomber).
pub const FIGHTER_SHARE: f32 = 0.6;
pub const HELICOPTER_SHARE: f32 = 0.9;

/// Aircraft-raid mode: cumulative movement thresholds.
pub const CROSSING_SHARE: f32 = 0.3;
pub const FLYBY_SHARE: f32 = 0.6;
pub const WIDE_ORBIT_SHARE: f32 = 0.8;

/// Crossing target sits beyond the opposite side of the sky by this factor.
pub const CROSSING_OVERSHOOT: f32 = 1.2;
pub const CROSSING_MIN_ALTITUDE: f32 = 15.0;
pub const CROSSING_ALTITUDE_JITTER: f32 = 30.0;

/// Flyby aim points scatter within this square around the player.
pub const FLYBY_SCATTER: f32 = 50.0;
pub const FLYBY_MIN_ALTITUDE: f32 = 20.0;
pub const FLYBY_AIM_ALTITUDE: f32 = 25.0;
pub const FLYBY_AIM_ALTITUDE_JITTER: f32 = 20.0;
pub const FLYBY_RUN_OUT: f32 = 300.0;

/// Wide orbits circle a random point on a smaller hemisphere.
pub const WIDE_ORBIT_CENTER_RADIUS: f32 = 80.0;
pub const WIDE_ORBIT_MIN_ALTITUDE: f32 = 30.0;
pub const WIDE_ORBIT_RADIUS: f32 = 25.0;
pub const WIDE_ORBIT_RADIUS_JITTER: f32 = 30.0;

/// Overhead orbits circle the player's column.
pub const OVERHEAD_ORBIT_ALTITUDE: f32 = 45.0;
pub const OVERHEAD_ORBIT_ALTITUDE_JITTER: f32 = 30.0;
pub const OVERHEAD_ORBIT_RADIUS: f32 = 35.0;
pub const OVERHEAD_ORBIT_RADIUS_JITTER: f32 = 40.0;

// --- Enemy flight ---

/// Distance to target counted as arrival.
pub const ARRIVAL_DISTANCE: f32 = 2.0;

pub const DEFAULT_ORBIT_RADIUS: f32 = 50.0;

/// Orbiting enemies leave after this long.
pub const ORBIT_TIME_BUDGET: f32 = 30.0;

/// Aircraft pull up below this altitude.
pub const GROUND_AVOID_ALTITUDE: f32 = 10.0;

/// Upward velocity gained per second per unit of altitude deficit.
pub const GROUND_AVOID_GAIN: f32 = 10.0;

/// Roll per unit of orbit angular velocity.
pub const BANK_ORBIT_FACTOR: f32 = 1.5;

/// Roll per radian of heading change in one frame.
pub const BANK_YAW_FACTOR: f32 = 10.0;

/// Heading changes below this are treated as straight flight.
pub const BANK_YAW_DEADBAND: f32 = 0.001;

/// Blend rate of the current roll toward the target roll.
pub const BANK_BLEND_RATE: f32 = 5.0;

/// Roll limit (60 degrees).
pub const BANK_LIMIT: f32 = std::f32::consts::FRAC_PI_3;

pub const HELICOPTER_MAIN_ROTOR_RATE: f32 = 15.0;
pub const HELICOPTER_TAIL_ROTOR_RATE: f32 = 20.0;
pub const HELICOPTER_PITCH: f32 = 0.2;

// --- Effects ---

pub const EXPLOSION_BODY_RADIUS: f32 = 0.1;
pub const EXPLOSION_START_SCALE: f32 = 0.5;
pub const EXPLOSION_GROWTH_RATE: f32 = 10.0;
pub const SPARK_GROWTH_RATE: f32 = 5.0;
pub const EXPLOSION_FADE_RATE: f32 = 1.5;
pub const EXPLOSION_COLOR: u32 = 0xffaa00;

/// Debris per full explosion: `DEBRIS_MIN .. DEBRIS_MIN + DEBRIS_SPREAD`.
pub const DEBRIS_MIN: u32 = 10;
pub const DEBRIS_SPREAD: u32 = 10;
pub const SPARK_DEBRIS_MIN: u32 = 5;
pub const SPARK_DEBRIS_SPREAD: u32 = 5;

pub const DEBRIS_MIN_RADIUS: f32 = 0.2;
pub const DEBRIS_RADIUS_SPREAD: f32 = 0.4;
pub const DEBRIS_MIN_SPEED: f32 = 20.0;
pub const DEBRIS_SPEED_SPREAD: f32 = 30.0;
pub const DEBRIS_MAX_SPIN: f32 = 10.0;
pub const DEBRIS_MIN_LIFETIME: f32 = 1.0;
pub const DEBRIS_LIFETIME_SPREAD: f32 = 1.5;
pub const DEBRIS_FADE_SECS: f32 = 0.5;
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);

// --- Ambient anti-air batteries ---

pub const BATTERY_COUNT: usize = 4;

/// Battery emplacements on the ground, one per quadrant.
pub const BATTERY_POSITIONS: [Vec3; BATTERY_COUNT] = [
    Vec3::new(40.0, 0.0, 40.0),
    Vec3::new(-40.0, 0.0, 40.0),
    Vec3::new(40.0, 0.0, -40.0),
    Vec3::new(-40.0, 0.0, -40.0),
];

/// Un-normalised firing directions, each leaning inward over the player.
pub const BATTERY_DIRECTIONS: [Vec3; BATTERY_COUNT] = [
    Vec3::new(-0.5, 1.5, -0.5),
    Vec3::new(0.5, 1.5, -0.5),
    Vec3::new(-0.5, 1.5, 0.5),
    Vec3::new(0.5, 1.5, 0.5),
];

/// Time between tracers inside a burst.
pub const BATTERY_SHOT_INTERVAL: f32 = 0.05;
pub const BATTERY_BURST_MIN: f32 = 1.0;
pub const BATTERY_BURST_SPREAD: f32 = 2.0;
pub const BATTERY_PAUSE_MIN: f32 = 2.0;
pub const BATTERY_PAUSE_SPREAD: f32 = 3.0;

pub const TRACER_SPEED: f32 = 400.0;
pub const TRACER_LIFETIME: f32 = 3.5;
pub const TRACER_RADIUS: f32 = 0.4;
pub const TRACER_MIN_SCALE: f32 = 0.1;
pub const TRACER_FADE_SECS: f32 = 0.3;
pub const TRACER_COLOR: u32 = 0xffff44;

// --- Radar ---

/// Horizontal range of the radar scope.
pub const RADAR_RANGE: f32 = 150.0;

/// Altitude mapped to a full-height contact colour.
pub const RADAR_ALTITUDE_SCALE: f32 = 50.0;

/// Camera field of view drawn on the scope (75 degrees).
pub const CAMERA_FOV: f32 = 75.0 * std::f32::consts::PI / 180.0;
