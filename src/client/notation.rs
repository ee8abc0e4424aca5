//! Text notation used by the external game client.
//!
//! A move is written `"<client id> <angle> <x> <y>"`, for example
//! `"23 90 4 4"` for White's Cathedral turned 90° on (4, 4).

use super::ids::{external_id, from_external_id};
use crate::core::{EngineError, PlayerId, Result, Square};
use crate::moves::{codec, ActionCode, Move};
use crate::pieces::Rotation;

/// Render an action code as `player` would send it.
pub fn format_action(player: PlayerId, action: ActionCode) -> Result<String> {
    let mv = codec::decode(action)?;
    Ok(format_move(player, &mv))
}

/// Render a move as `player` would send it.
#[must_use]
pub fn format_move(player: PlayerId, mv: &Move) -> String {
    format!(
        "{} {} {} {}",
        external_id(mv.building, player),
        mv.rotation.degrees(),
        mv.anchor.x,
        mv.anchor.y
    )
}

/// Parse a client move into its player and placement.
///
/// Fails with `MalformedNotation` for anything that is not four integers
/// with a right angle and an on-board anchor, `UnknownExternalId` for an
/// unknown piece and `InvalidRotation` when the piece cannot turn that far.
pub fn parse_move(text: &str) -> Result<(PlayerId, Move)> {
    let malformed = || EngineError::MalformedNotation(text.to_string());

    let fields: Vec<i32> = text
        .split_whitespace()
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| malformed())?;
    let &[id, angle, x, y] = fields.as_slice() else {
        return Err(malformed());
    };

    let id = u8::try_from(id).map_err(|_| malformed())?;
    let (building, player) = from_external_id(id)?;
    let rotation = Rotation::from_degrees(angle).ok_or_else(malformed)?;
    let anchor = Square::new(x, y);
    if !anchor.is_on_board() {
        return Err(malformed());
    }

    Ok((player, Move::new(anchor, building, rotation)?))
}
