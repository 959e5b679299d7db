//! Workout metrics calculations.
//!
//! Each activity type derives distance from its recorded action count and
//! mean speed from distance over duration, then applies its own calorie
//! formula. Swimming replaces both the step length and the mean speed
//! derivation with pool-based versions.

use crate::metrics::summary::WorkoutSummary;

/// Meters per kilometer.
pub const M_PER_KM: f64 = 1000.0;

/// Minutes per hour.
pub const MIN_PER_HOUR: f64 = 60.0;

/// Shared calculation contract for a recorded workout.
///
/// `distance_km` and `mean_speed_kmh` carry shared derivations that a
/// variant may replace. `calories_kcal` has no shared derivation: every
/// variant must supply its own formula.
pub trait Activity {
    /// Distance covered by one recorded action, in meters.
    const STEP_LENGTH_M: f64 = 0.65;

    /// Display label for this activity.
    const LABEL: &'static str;

    /// Number of recorded actions (steps or strokes).
    fn action_count(&self) -> u32;

    /// Workout duration in hours.
    fn duration_h(&self) -> f64;

    /// Athlete weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Total distance covered, in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * Self::STEP_LENGTH_M / M_PER_KM
    }

    /// Mean speed over the workout, in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Calories burned over the workout, in kcal.
    fn calories_kcal(&self) -> f64;

    /// Package the computed metrics into a summary.
    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            activity: Self::LABEL.to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

/// A recorded running workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    /// Step count from the pedometer
    pub action_count: u32,
    /// Duration in hours
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl Running {
    const CAL_SPEED_FACTOR: f64 = 18.0;
    const CAL_SPEED_OFFSET: f64 = 20.0;
}

impl Activity for Running {
    const LABEL: &'static str = "Running";

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn calories_kcal(&self) -> f64 {
        (Self::CAL_SPEED_FACTOR * self.mean_speed_kmh() - Self::CAL_SPEED_OFFSET)
            * self.weight_kg
            / M_PER_KM
            * self.duration_h
            * MIN_PER_HOUR
    }
}

/// A recorded sports walking workout.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    /// Step count from the pedometer
    pub action_count: u32,
    /// Duration in hours
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Athlete height in centimeters
    pub height_cm: f64,
}

impl SportsWalking {
    const CAL_WEIGHT_FACTOR: f64 = 0.035;
    const CAL_SPEED_HEIGHT_FACTOR: f64 = 0.029;
}

impl Activity for SportsWalking {
    const LABEL: &'static str = "SportsWalking";

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn calories_kcal(&self) -> f64 {
        // The squared-speed over height quotient is floored before the
        // coefficient is applied.
        let speed = self.mean_speed_kmh();
        (Self::CAL_WEIGHT_FACTOR * self.weight_kg
            + (speed * speed / self.height_cm).floor()
                * Self::CAL_SPEED_HEIGHT_FACTOR
                * self.weight_kg)
            * self.duration_h
            * MIN_PER_HOUR
    }
}

/// A recorded swimming workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    /// Stroke count from the swim sensor
    pub action_count: u32,
    /// Duration in hours
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_laps: u32,
}

impl Swimming {
    const CAL_SPEED_SHIFT: f64 = 1.1;
    const CAL_WEIGHT_FACTOR: f64 = 2.0;
}

impl Activity for Swimming {
    const STEP_LENGTH_M: f64 = 1.38;
    const LABEL: &'static str = "Swimming";

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Mean speed from pool length and lap count, not stroke distance.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_PER_KM / self.duration_h
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CAL_SPEED_SHIFT) * Self::CAL_WEIGHT_FACTOR * self.weight_kg
    }
}

/// A decoded workout of any supported activity type.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Swimming workout
    Swimming(Swimming),
}

impl Workout {
    /// Total distance covered, in kilometers.
    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    /// Mean speed over the workout, in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    /// Calories burned over the workout, in kcal.
    pub fn calories_kcal(&self) -> f64 {
        match self {
            Workout::Running(w) => w.calories_kcal(),
            Workout::SportsWalking(w) => w.calories_kcal(),
            Workout::Swimming(w) => w.calories_kcal(),
        }
    }

    /// Compute the full summary for this workout.
    pub fn summary(&self) -> WorkoutSummary {
        match self {
            Workout::Running(w) => w.summary(),
            Workout::SportsWalking(w) => w.summary(),
            Workout::Swimming(w) => w.summary(),
        }
    }
}
