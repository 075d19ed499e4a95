// core/src/training.rs
use crate::models::InfoMessage;
use crate::registry::ActivityKind;

pub const M_IN_KM: f64 = 1000.0; // meter per km
pub const MIN_IN_H: f64 = 60.0;  // minutter per time

/// Felles kontrakt for alle treningstyper.
///
/// `get_spent_calories` har ingen standardimplementasjon: en ny type som
/// glemmer den, kompilerer ikke.
pub trait Training {
    /// Navnet som havner i `InfoMessage::training_type`.
    const NAME: &'static str;
    /// Lengde per skritt/tak i meter.
    const LEN_STEP: f64 = 0.65;

    fn action(&self) -> i64;
    fn duration(&self) -> f64;
    fn weight(&self) -> f64;

    /// Distanse i km.
    fn get_distance(&self) -> f64 {
        self.action() as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Snittfart i km/t.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.duration()
    }

    /// Forbrukte kcal.
    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            Self::NAME,
            self.duration(),
            self.get_distance(),
            self.get_mean_speed(),
            self.get_spent_calories(),
        )
    }
}

/// Python-lik `a // b` for flyttall (gulvdivisjon).
///
/// Gulver den eksakte kvotienten via `fmod`, ikke den avrundede `a / b`:
/// `169.0 // 1.3 == 129.0`, mens `(169.0 / 1.3).floor() == 130.0`.
fn floor_div(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut div = (a - m) / b;
    if m != 0.0 && ((b < 0.0) != (m < 0.0)) {
        div -= 1.0;
    }
    if div != 0.0 {
        let f = div.floor();
        if div - f > 0.5 { f + 1.0 } else { f }
    } else {
        0.0_f64.copysign(a / b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub action: i64,
    pub duration: f64, // timer
    pub weight: f64,   // kg
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self { action, duration, weight }
    }
}

impl Training for Running {
    const NAME: &'static str = "Running";

    fn action(&self) -> i64 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * (self.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub action: i64,
    pub duration: f64,
    pub weight: f64,
    pub height: f64, // cm
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: i64, duration: f64, weight: f64, height: f64) -> Self {
        Self { action, duration, weight, height }
    }
}

impl Training for SportsWalking {
    const NAME: &'static str = "SportsWalking";

    fn action(&self) -> i64 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    fn get_spent_calories(&self) -> f64 {
        // Kun speed²/høyde gulvdivideres, resten er kontinuerlig.
        let speed_term = floor_div(self.get_mean_speed().powi(2), self.height);
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + speed_term * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight)
            * (self.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub action: i64,
    pub duration: f64,
    pub weight: f64,
    pub length_pool: f64, // meter
    pub count_pool: i64,  // antall lengder
}

impl Swimming {
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: i64, duration: f64, weight: f64, length_pool: f64, count_pool: i64) -> Self {
        Self { action, duration, weight, length_pool, count_pool }
    }
}

impl Training for Swimming {
    const NAME: &'static str = "Swimming";
    const LEN_STEP: f64 = 1.38;

    fn action(&self) -> i64 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    /// Bassengbasert fart; bryr seg ikke om `get_distance`.
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight
    }
}

/// En ferdig konstruert økt av en av de registrerte typene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! each_workout {
    ($self:expr, $w:ident => $body:expr) => {
        match $self {
            Workout::Running($w) => $body,
            Workout::SportsWalking($w) => $body,
            Workout::Swimming($w) => $body,
        }
    };
}

impl Workout {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Workout::Running(_) => ActivityKind::Running,
            Workout::SportsWalking(_) => ActivityKind::SportsWalking,
            Workout::Swimming(_) => ActivityKind::Swimming,
        }
    }

    pub fn get_distance(&self) -> f64 {
        each_workout!(self, w => w.get_distance())
    }

    pub fn get_mean_speed(&self) -> f64 {
        each_workout!(self, w => w.get_mean_speed())
    }

    pub fn get_spent_calories(&self) -> f64 {
        each_workout!(self, w => w.get_spent_calories())
    }

    pub fn show_training_info(&self) -> InfoMessage {
        each_workout!(self, w => w.show_training_info())
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self { Workout::Running(w) }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self { Workout::SportsWalking(w) }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self { Workout::Swimming(w) }
}
