//! Proportional Vimshottari subdivision of an arc.
//!
//! The same division is applied at every level: a nakshatra is cut into 9
//! subs, and a sub is cut into 9 sub-subs. Child width is
//! `years / 120 × parent span` and the cycle starts at the parent's lord.

use kp_vedic_base::{Graha, proportional_span, sequence_from};

/// One child arc of a proportional subdivision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub lord: Graha,
    /// 1-based position within the parent (1..=9).
    pub order: u8,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Segment {
    /// Width in degrees.
    pub fn span(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// Half-open containment: `start <= deg < end`.
    pub fn contains(&self, deg: f64) -> bool {
        deg >= self.start_deg && deg < self.end_deg
    }
}

/// Snap the last segment's end to the parent's end to absorb floating-point drift.
fn snap_last_end(children: &mut [Segment], parent_end: f64) {
    if let Some(last) = children.last_mut() {
        last.end_deg = parent_end;
    }
}

/// Divide `[start, start + span)` into 9 Vimshottari-proportional parts,
/// the first ruled by `first_lord`.
pub fn subdivide(start: f64, span: f64, first_lord: Graha) -> [Segment; 9] {
    let sequence = sequence_from(first_lord);
    let mut children = [Segment {
        lord: first_lord,
        order: 1,
        start_deg: start,
        end_deg: start,
    }; 9];
    let mut cursor = start;

    for (i, &lord) in sequence.iter().enumerate() {
        let end = cursor + proportional_span(lord, span);
        children[i] = Segment {
            lord,
            order: i as u8 + 1,
            start_deg: cursor,
            end_deg: end,
        };
        cursor = end;
    }

    snap_last_end(&mut children, start + span);
    children
}

/// Child of `subdivide(start, span, first_lord)` containing `deg`.
///
/// Values outside the arc clamp to the first or last child.
pub fn locate(start: f64, span: f64, first_lord: Graha, deg: f64) -> Segment {
    let children = subdivide(start, span, first_lord);
    let idx = children
        .partition_point(|c| c.end_deg <= deg)
        .min(children.len() - 1);
    children[idx]
}
