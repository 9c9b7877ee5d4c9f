//! Turns one exported board into a [`Sort`].
//!
//! Cards are grouped by the list they ended up in, archived cards and empty
//! lists are dropped, and the session duration is measured from the first
//! list creation to the last action in the history.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use cardsort_core::error::{Result, SortError};
use cardsort_core::models::{CardId, CardMapping, Group, Sort};
use cardsort_core::time_utils::parse_instant;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::board::{ActionKind, RawAction, RawBoard};

// ── Public API ────────────────────────────────────────────────────────────────

/// Decode a board export already read into memory and extract its [`Sort`].
pub fn parse_board(json: &[u8], mapping: Option<&CardMapping>) -> Result<Sort> {
    let board: RawBoard = serde_json::from_slice(json)?;
    extract_sort(&board, mapping)
}

/// Build a [`Sort`] from a decoded board.
///
/// When `mapping` is given every card name is replaced by its mapped
/// identifier, and a card missing from the mapping is an error.
pub fn extract_sort(board: &RawBoard, mapping: Option<&CardMapping>) -> Result<Sort> {
    let mut groups = build_groups(board, mapping)?;

    let timeline = sorted_timeline(&board.actions)?;
    let events = session_events(&timeline);
    let start = events
        .iter()
        .find(|(_, action)| action.kind == ActionKind::CreateList)
        .map(|(at, _)| *at)
        .ok_or_else(|| SortError::MissingListCreation(board.name.clone()))?;
    // The end is the last action of any kind, not just the last session event.
    let end = timeline.last().map(|(at, _)| *at).unwrap_or(start);

    let total_groups = groups.len();
    groups.retain(|group| !group.is_empty());

    debug!(
        "Board \"{}\": {} of {} groups kept, {} of {} actions are session events, {} to {}",
        board.name,
        groups.len(),
        total_groups,
        events.len(),
        timeline.len(),
        start,
        end,
    );

    Ok(Sort::new(board.name.clone(), groups, end - start))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

type Timeline<'a> = Vec<(DateTime<Utc>, &'a RawAction)>;

/// One group per list in display order, filled with the board's open cards.
///
/// Empty groups are still present; the caller prunes them.
fn build_groups(board: &RawBoard, mapping: Option<&CardMapping>) -> Result<Vec<Group>> {
    let mut lists: Vec<_> = board.lists.iter().collect();
    // Stable, so lists sharing a position keep their export order.
    // `-0.0` and `0.0` compare equal here, unlike with `total_cmp`.
    lists.sort_by(|a, b| a.pos.partial_cmp(&b.pos).unwrap_or(Ordering::Equal));

    let mut groups: Vec<Group> = Vec::with_capacity(lists.len());
    let mut index_by_id: HashMap<&str, usize> = HashMap::with_capacity(lists.len());
    for list in lists {
        match index_by_id.entry(list.id.as_str()) {
            // A repeated id replaces the earlier list but keeps its slot.
            Entry::Occupied(slot) => groups[*slot.get()] = Group::new(list.name.as_str()),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(Group::new(list.name.as_str()));
            }
        }
    }

    let mut closed = 0usize;
    for card in &board.cards {
        if card.closed {
            closed += 1;
            continue;
        }

        let index = *index_by_id
            .get(card.id_list.as_str())
            .ok_or_else(|| SortError::UnknownList {
                card: card.name.clone(),
                list_id: card.id_list.clone(),
            })?;

        let id = match mapping {
            Some(mapping) => mapping
                .get(&card.name)
                .cloned()
                .ok_or_else(|| SortError::UnmappedCard(card.name.clone()))?,
            None => CardId::Text(card.name.clone()),
        };

        groups[index].insert(id);
    }

    if closed > 0 {
        debug!("Board \"{}\": skipped {} closed cards", board.name, closed);
    }

    Ok(groups)
}

/// Parse every action date and order the actions chronologically.
///
/// Actions with equal timestamps keep their export order.
fn sorted_timeline(actions: &[RawAction]) -> Result<Timeline<'_>> {
    let mut timeline = actions
        .iter()
        .map(|action| Ok((parse_instant(&action.date)?, action)))
        .collect::<Result<Vec<_>>>()?;
    timeline.sort_by_key(|(at, _)| *at);
    Ok(timeline)
}

/// The actions that mark sorting progress: card moves, list creations and
/// list renames. Keeps the timeline's order.
fn session_events<'a>(timeline: &[(DateTime<Utc>, &'a RawAction)]) -> Timeline<'a> {
    timeline
        .iter()
        .filter(|(_, action)| action.is_session_event())
        .copied()
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
