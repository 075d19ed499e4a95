use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::PackageError;
use crate::training::{Running, SportsWalking, Swimming, Training, Workout};

/// Registrerte treningstyper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Swimming,
    Running,
    SportsWalking,
}

/// Kode -> type. Fast tabell, ingen registrering i kjøretid.
static WORKOUT_TYPES: Lazy<HashMap<&'static str, ActivityKind>> = Lazy::new(|| {
    ActivityKind::ALL.iter().map(|k| (k.code(), *k)).collect()
});

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        WORKOUT_TYPES.get(code).copied()
    }

    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Swimming => "SWM",
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Swimming => Swimming::NAME,
            ActivityKind::Running => Running::NAME,
            ActivityKind::SportsWalking => SportsWalking::NAME,
        }
    }

    /// Parameternavn i posisjonsrekkefølge.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            ActivityKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            ActivityKind::Running => &["action", "duration", "weight"],
            ActivityKind::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    pub fn arity(self) -> usize {
        self.fields().len()
    }
}

/// Posisjonell leser over sensordata for én pakke.
struct Readings<'a> {
    code: &'a str,
    fields: &'static [&'static str],
    data: &'a [Value],
}

impl Readings<'_> {
    fn invalid(&self, index: usize, expected: &'static str) -> PackageError {
        PackageError::InvalidReading {
            code: self.code.to_string(),
            field: self.fields[index],
            index,
            expected,
            value: self.data[index].clone(),
        }
    }

    fn float(&self, index: usize) -> Result<f64, PackageError> {
        self.data[index].as_f64().ok_or_else(|| self.invalid(index, "a number"))
    }

    /// Heltall; `720.0` godtas, `720.5` gjør ikke.
    fn int(&self, index: usize) -> Result<i64, PackageError> {
        let v = &self.data[index];
        if let Some(i) = v.as_i64() {
            return Ok(i);
        }
        match v.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Ok(f as i64)
            }
            _ => Err(self.invalid(index, "an integer")),
        }
    }
}

/// Slår opp `workout_type` og bygger økten fra `data` i posisjonsrekkefølge.
pub fn read_package(workout_type: &str, data: &[Value]) -> Result<Workout, PackageError> {
    let kind = ActivityKind::from_code(workout_type)
        .ok_or_else(|| PackageError::UnknownCode(workout_type.to_string()))?;

    if data.len() != kind.arity() {
        return Err(PackageError::ArityMismatch {
            code: workout_type.to_string(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let r = Readings { code: workout_type, fields: kind.fields(), data };
    let workout = match kind {
        ActivityKind::Swimming => {
            Swimming::new(r.int(0)?, r.float(1)?, r.float(2)?, r.float(3)?, r.int(4)?).into()
        }
        ActivityKind::Running => Running::new(r.int(0)?, r.float(1)?, r.float(2)?).into(),
        ActivityKind::SportsWalking => {
            SportsWalking::new(r.int(0)?, r.float(1)?, r.float(2)?, r.float(3)?).into()
        }
    };
    Ok(workout)
}
