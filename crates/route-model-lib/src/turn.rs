//! Turn instructions and their icon classification
//!
//! Every instruction gets an icon identifier when it is built. Most kinds map
//! to a fixed icon; roundabouts pick the closest of eight exit icons spaced
//! 45° apart, based on the turn angle reported by the route source.

use crate::Coordinate;
use std::f64::consts::{PI, TAU};

/// Icon shown for a roundabout whose exit angle is unknown
pub const ROUNDABOUT_GENERIC_ICON: &str = "maps-direction-roundabout-symbolic";

/// Exit angles (degrees) for which a roundabout icon exists, ascending
const ROUNDABOUT_EXIT_DEGREES: [u16; 8] = [0, 45, 90, 135, 180, 225, 270, 315];

/// Classification of a decision point along a route
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TurnInstructionKind {
    SharpLeft,
    Left,
    SlightLeft,
    Continue,
    SlightRight,
    Right,
    SharpRight,
    End,
    Via,
    Roundabout,
    /// Synthetic first instruction; never emitted by the route source
    Start,
    /// A sign code this version does not know about
    Unrecognized(i32),
}

impl TurnInstructionKind {
    /// Every known kind
    pub const ALL: [Self; 11] = [
        Self::SharpLeft,
        Self::Left,
        Self::SlightLeft,
        Self::Continue,
        Self::SlightRight,
        Self::Right,
        Self::SharpRight,
        Self::End,
        Self::Via,
        Self::Roundabout,
        Self::Start,
    ];

    /// Map a route-source sign code (-3 sharp left … 6 roundabout)
    pub fn from_sign(sign: i32) -> Self {
        match sign {
            -3 => Self::SharpLeft,
            -2 => Self::Left,
            -1 => Self::SlightLeft,
            0 => Self::Continue,
            1 => Self::SlightRight,
            2 => Self::Right,
            3 => Self::SharpRight,
            4 => Self::End,
            5 => Self::Via,
            6 => Self::Roundabout,
            other => Self::Unrecognized(other),
        }
    }

    /// Start, via points and the destination are stops
    #[inline]
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Start | Self::Via | Self::End)
    }
}

/// Icon identifier for a turn of the given kind
///
/// `turn_angle` (radians) is only consulted for roundabouts. Unrecognized
/// kinds get an empty identifier.
pub fn icon_for(kind: TurnInstructionKind, turn_angle: Option<f64>) -> String {
    use TurnInstructionKind::*;

    let icon = match kind {
        SharpLeft => "maps-direction-sharpleft-symbolic",
        Left => "maps-direction-left-symbolic",
        SlightLeft => "maps-direction-slightleft-symbolic",
        Continue => "maps-direction-continue-symbolic",
        SlightRight => "maps-direction-slightright-symbolic",
        Right => "maps-direction-right-symbolic",
        SharpRight => "maps-direction-sharpright-symbolic",
        Start => "maps-point-start-symbolic",
        Via | End => "maps-point-end-symbolic",
        Roundabout => return roundabout_icon(turn_angle),
        Unrecognized(code) => {
            tracing::trace!("No icon for unrecognized turn code {code}");
            ""
        }
    };
    icon.to_string()
}

/// Pick the roundabout icon whose exit angle is closest to `turn_angle`
///
/// Negative angles are shifted by 2π. The difference is taken on the raw
/// radian values, so angles just under 2π match 315° rather than 0°. Ties go
/// to the lower exit angle.
fn roundabout_icon(turn_angle: Option<f64>) -> String {
    let Some(mut angle) = turn_angle else {
        return ROUNDABOUT_GENERIC_ICON.to_string();
    };
    if angle < 0.0 {
        angle += TAU;
    }

    let mut min_diff = TAU;
    let mut closest = 0;
    for degrees in ROUNDABOUT_EXIT_DEGREES {
        let diff = (angle - f64::from(degrees) / 180.0 * PI).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = degrees;
        }
    }

    tracing::trace!("Roundabout angle {angle:.3} rad matched exit {closest}°");
    format!("maps-direction-roundabout-{closest}-symbolic")
}

/// Values the route source supplies for one instruction
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnInstructionInput {
    pub coordinate: Coordinate,
    pub kind: TurnInstructionKind,
    /// Distance to the next instruction in meters
    pub distance: f64,
    pub instruction: String,
    /// Turn angle in radians, when the source knows it
    #[cfg_attr(feature = "serde", serde(default))]
    pub turn_angle: Option<f64>,
}

/// A decision point along the route with its derived icon
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "TurnInstructionInput")
)]
pub struct TurnInstruction {
    coordinate: Coordinate,
    kind: TurnInstructionKind,
    distance: f64,
    instruction: String,
    turn_angle: Option<f64>,
    icon_id: String,
}

impl TurnInstruction {
    /// Build an instruction, classifying its icon once
    pub fn new(input: TurnInstructionInput) -> Self {
        let icon_id = icon_for(input.kind, input.turn_angle);
        Self {
            coordinate: input.coordinate,
            kind: input.kind,
            distance: input.distance,
            instruction: input.instruction,
            turn_angle: input.turn_angle,
            icon_id,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn kind(&self) -> TurnInstructionKind {
        self.kind
    }

    /// Distance to the next instruction in meters
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[inline]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    #[inline]
    pub fn turn_angle(&self) -> Option<f64> {
        self.turn_angle
    }

    #[inline]
    pub fn icon_id(&self) -> &str {
        &self.icon_id
    }

    #[inline]
    pub fn is_stop(&self) -> bool {
        self.kind.is_stop()
    }

    /// Add the distance of a folded continuation to this instruction
    pub(crate) fn add_distance(&mut self, distance: f64) {
        self.distance += distance;
    }
}

impl From<TurnInstructionInput> for TurnInstruction {
    fn from(input: TurnInstructionInput) -> Self {
        Self::new(input)
    }
}
