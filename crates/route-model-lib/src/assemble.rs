//! Instruction assembly from raw route-source events
//!
//! The route source reports turns as sign codes attached to ranges of path
//! indices. This module resolves them into [`TurnInstruction`]s: it prepends
//! a start instruction, folds straight continuations on the same street into
//! the previous instruction and classifies each result.

use crate::{
    Coordinate, Result, RouteError, TurnInstruction, TurnInstructionInput, TurnInstructionKind,
};

/// A turn as reported by the route source
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTurnEvent {
    /// Sign code, -3 (sharp left) to 6 (roundabout)
    pub sign: i32,
    /// Distance to the next event in meters
    pub distance: f64,
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub street_name: Option<String>,
    /// First and last path index covered by this event
    pub interval: (usize, usize),
    /// Roundabout exit angle in radians
    #[cfg_attr(feature = "serde", serde(default))]
    pub turn_angle: Option<f64>,
}

/// Configuration for the instruction assembler
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AssemblerConfig {
    /// Wording of the synthetic start instruction
    pub start_text: String,
    /// Merge a `Continue` event into the previous one when both are on the same street
    pub fold_continuations: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            start_text: "Start!".to_string(),
            fold_continuations: true,
        }
    }
}

/// Builds classified instructions from raw events
#[derive(Debug, Clone, Default)]
pub struct InstructionAssembler {
    config: AssemblerConfig,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl InstructionAssembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Resolve `events` against `path`
    ///
    /// The result always starts with a [`TurnInstructionKind::Start`] at the
    /// first path point, unless both inputs are empty.
    pub fn assemble(
        &self,
        path: &[Coordinate],
        events: &[RawTurnEvent],
    ) -> Result<Vec<TurnInstruction>> {
        let Some(&start) = path.first() else {
            return if events.is_empty() {
                Ok(Vec::new())
            } else {
                Err(RouteError::EmptyPath)
            };
        };

        let folded = self.fold(events);
        let mut instructions = Vec::with_capacity(folded.len() + 1);
        instructions.push(TurnInstruction::new(TurnInstructionInput {
            coordinate: start,
            kind: TurnInstructionKind::Start,
            distance: 0.0,
            instruction: self.config.start_text.clone(),
            turn_angle: None,
        }));

        for (position, (event, distance)) in folded.into_iter().enumerate() {
            let index = event.interval.0;
            let coordinate =
                *path
                    .get(index)
                    .ok_or(RouteError::InstructionOutOfRange {
                        instruction: position,
                        index,
                        path_len: path.len(),
                    })?;

            instructions.push(TurnInstruction::new(TurnInstructionInput {
                coordinate,
                kind: TurnInstructionKind::from_sign(event.sign),
                distance,
                instruction: event.text.clone(),
                turn_angle: event.turn_angle,
            }));
        }

        tracing::debug!(
            "Assembled {} instructions from {} events",
            instructions.len(),
            events.len()
        );
        Ok(instructions)
    }

    /// Pair each kept event with its (possibly accumulated) distance
    fn fold<'a>(&self, events: &'a [RawTurnEvent]) -> Vec<(&'a RawTurnEvent, f64)> {
        let mut folded: Vec<(&RawTurnEvent, f64)> = Vec::with_capacity(events.len());
        for event in events {
            if self.config.fold_continuations {
                if let Some((current, distance)) = folded.last_mut() {
                    if TurnInstructionKind::from_sign(event.sign) == TurnInstructionKind::Continue
                        && event.street_name == current.street_name
                    {
                        *distance += event.distance;
                        continue;
                    }
                }
            }
            folded.push((event, event.distance));
        }
        folded
    }
}
