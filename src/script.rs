//! Scripted input for headless runs
//!
//! A script is a comma-separated list of `keys:duration_ms` steps. Keys are
//! direction names joined with `+`, or `idle` for no keys:
//!
//! ```text
//! right:1000,left+up:250,idle:200
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::motion::{Direction, HeldDirections, UnknownDirection};

/// Error parsing an input script.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    #[error("script is empty")]
    Empty,
    #[error("step {index} '{step}' must look like keys:milliseconds")]
    MalformedStep { index: usize, step: String },
    #[error("step {index}: {source}")]
    UnknownKey {
        index: usize,
        #[source]
        source: UnknownDirection,
    },
    #[error("step {index}: duration '{value}' must be a non-negative number of milliseconds")]
    InvalidDuration { index: usize, value: String },
    #[error("script runs for {total_ms} ms, longer than the {} ms limit", MAX_SCRIPT_MS)]
    TooLong { total_ms: f64 },
}

/// Longest script accepted by the parser: ten minutes.
pub const MAX_SCRIPT_MS: f64 = 600_000.0;

/// Hold `held` for `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub held: HeldDirections,
    pub duration_ms: f64,
}

/// A sequence of held-key steps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Total scripted time in milliseconds.
    pub fn duration(&self) -> f64 {
        self.steps.iter().map(|s| s.duration_ms).sum()
    }

    /// Keys held at `elapsed` ms after the script starts; nothing once it has ended.
    ///
    /// Step boundaries belong to the later step.
    pub fn held_at(&self, elapsed: f64) -> HeldDirections {
        let mut start = 0.0;
        for step in &self.steps {
            let end = start + step.duration_ms;
            if elapsed >= start && elapsed < end {
                return step.held;
            }
            start = end;
        }
        HeldDirections::none()
    }
}

/// Parse a `+`-joined key list such as `left+up` or `idle`.
pub fn parse_keys(keys: &str) -> Result<HeldDirections, UnknownDirection> {
    let keys = keys.trim();
    if keys.eq_ignore_ascii_case("idle") || keys.is_empty() {
        return Ok(HeldDirections::none());
    }
    keys.split('+').map(Direction::from_str).collect()
}

impl FromStr for InputScript {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ScriptError::Empty);
        }

        let mut steps = Vec::new();
        for (i, raw) in s.split(',').enumerate() {
            let index = i + 1;
            let step = raw.trim();
            let (keys, duration) = step
                .rsplit_once(':')
                .ok_or_else(|| ScriptError::MalformedStep { index, step: step.to_string() })?;

            let held = parse_keys(keys).map_err(|source| ScriptError::UnknownKey { index, source })?;
            let duration_ms = duration
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|d| d.is_finite() && *d >= 0.0)
                .ok_or_else(|| ScriptError::InvalidDuration { index, value: duration.trim().to_string() })?;

            steps.push(ScriptStep { held, duration_ms });
        }

        let script = Self { steps };
        let total_ms = script.duration();
        if total_ms > MAX_SCRIPT_MS {
            return Err(ScriptError::TooLong { total_ms });
        }
        Ok(script)
    }
}

impl fmt::Display for InputScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.steps.iter().map(|s| format!("{}:{}", s.held, s.duration_ms)).collect();
        f.write_str(&parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script: InputScript = "right:1000, left+up:250,idle:200".parse().unwrap();
        assert_eq!(script.steps().len(), 3);
        assert!(script.steps()[0].held.contains(Direction::Right));
        assert!(script.steps()[1].held.contains(Direction::Left));
        assert!(script.steps()[1].held.contains(Direction::Up));
        assert!(script.steps()[2].held.is_empty());
        assert_eq!(script.duration(), 1450.0);
        assert_eq!(script.to_string(), "right:1000,up+left:250,idle:200");
    }

    #[test]
    fn test_held_at() {
        let script: InputScript = "right:100,down:50".parse().unwrap();
        assert!(script.held_at(0.0).contains(Direction::Right));
        assert!(script.held_at(99.9).contains(Direction::Right));
        assert!(script.held_at(100.0).contains(Direction::Down));
        assert!(script.held_at(150.0).is_empty());
        assert!(script.held_at(-1.0).is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<InputScript>(), Err(ScriptError::Empty));
        assert_eq!(
            "right".parse::<InputScript>(),
            Err(ScriptError::MalformedStep { index: 1, step: "right".to_string() })
        );
        assert!(matches!(
            "right:10,jump:10".parse::<InputScript>(),
            Err(ScriptError::UnknownKey { index: 2, .. })
        ));
        assert_eq!(
            "left:-5".parse::<InputScript>(),
            Err(ScriptError::InvalidDuration { index: 1, value: "-5".to_string() })
        );
    }

    #[test]
    fn test_script_length_limit() {
        let longest = format!("right:{}", MAX_SCRIPT_MS);
        assert_eq!(longest.parse::<InputScript>().unwrap().duration(), MAX_SCRIPT_MS);

        assert_eq!("right:600001".parse::<InputScript>(), Err(ScriptError::TooLong { total_ms: 600_001.0 }));
        assert_eq!(
            "right:300000,left:300001".parse::<InputScript>(),
            Err(ScriptError::TooLong { total_ms: 600_001.0 })
        );
        assert!(matches!("right:1e300".parse::<InputScript>(), Err(ScriptError::TooLong { .. })));
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(parse_keys("idle"), Ok(HeldDirections::none()));
        let held = parse_keys("ArrowDown+right").unwrap();
        assert!(held.contains(Direction::Down) && held.contains(Direction::Right));
    }
}
