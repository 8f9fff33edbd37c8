//! The set of clocks shown on the dashboard, and the ways it can change.

use rand::seq::IndexedRandom as _;

use crate::{
    ClockError, ClockStatus, HandAngles, SyncSummary, TimeOfDay, format_difference, format_signed,
};

/// Names handed out to clocks added at random.
pub const CLOCK_NAMES: [&str; 11] = [
    "Library Clock",
    "Hospital Clock",
    "School Clock",
    "Park Clock",
    "Museum Clock",
    "Theater Clock",
    "Café Clock",
    "Bakery Clock",
    "Bank Clock",
    "Post Office Clock",
    "Fire Station Clock",
];

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedClock {
    pub id: u32,
    pub name: String,
    pub time: TimeOfDay,
}

/// A reference time plus the named clocks compared against it.
///
/// All mutation goes through `&mut self`; whoever owns the board decides who may change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockBoard {
    reference: TimeOfDay,
    clocks: Vec<NamedClock>,
    next_id: u32,
}

impl Default for ClockBoard {
    fn default() -> Self {
        Self::town_square()
    }
}

impl ClockBoard {
    pub fn new(reference: TimeOfDay) -> Self {
        Self {
            reference,
            clocks: Vec::new(),
            next_id: 1,
        }
    }

    /// The Grand Clock Tower at 15:00 and the four town clocks.
    pub fn town_square() -> Self {
        let mut board = Self::new(TimeOfDay(15 * 60));
        for (name, minutes) in [
            ("Town Square Clock", 14 * 60 + 45),
            ("Railway Station Clock", 15 * 60 + 5),
            ("City Hall Clock", 15 * 60),
            ("Market Clock", 14 * 60 + 40),
        ] {
            board.add_clock(name, TimeOfDay(minutes));
        }
        board
    }

    #[inline]
    pub fn reference(&self) -> TimeOfDay {
        self.reference
    }

    #[inline]
    pub fn clocks(&self) -> &[NamedClock] {
        &self.clocks
    }

    pub fn set_reference(&mut self, reference: TimeOfDay) {
        self.reference = reference;
    }

    pub fn add_clock(&mut self, name: impl Into<String>, time: TimeOfDay) -> &NamedClock {
        let id = self.next_id;
        self.next_id += 1;
        self.clocks.push(NamedClock {
            id,
            name: name.into(),
            time,
        });
        &self.clocks[self.clocks.len() - 1]
    }

    /// Adds a clock at a random time, named after an entry of [`CLOCK_NAMES`] not yet on the board.
    pub fn add_random_clock<R: rand::Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&NamedClock, ClockError> {
        let available: Vec<&str> = CLOCK_NAMES
            .iter()
            .copied()
            .filter(|name| self.clocks.iter().all(|clock| clock.name != *name))
            .collect();

        let name = *available.choose(rng).ok_or(ClockError::NoClockNamesLeft)?;
        let time = TimeOfDay::random(rng);
        Ok(self.add_clock(name, time))
    }

    /// Removes the clock with the given id, if any.
    pub fn remove_clock(&mut self, id: u32) -> Option<NamedClock> {
        let index = self.clocks.iter().position(|clock| clock.id == id)?;
        Some(self.clocks.remove(index))
    }

    /// Sets the first clock that disagrees with the reference to the reference time.
    ///
    /// Returns `false` if every clock was already synchronized.
    pub fn synchronize_next(&mut self) -> bool {
        let reference = self.reference;
        if let Some(clock) = self.clocks.iter_mut().find(|clock| clock.time != reference) {
            clock.time = reference;
            true
        } else {
            false
        }
    }

    pub fn synchronize_all(&mut self) {
        while self.synchronize_next() {}
    }

    /// Back to [`Self::town_square`].
    pub fn reset(&mut self) {
        *self = Self::town_square();
    }

    pub fn differences(&self) -> Vec<i32> {
        crate::differences_from(self.reference, self.clocks.iter().map(|clock| clock.time))
    }

    pub fn summary(&self) -> SyncSummary {
        SyncSummary::from_differences(&self.differences())
    }

    pub fn rows(&self) -> Vec<BoardRow> {
        self.clocks
            .iter()
            .map(|clock| {
                let difference = clock.time.offset_from(self.reference);
                BoardRow {
                    id: clock.id,
                    name: clock.name.clone(),
                    time: clock.time,
                    difference,
                    status: ClockStatus::classify(difference),
                    difference_text: format_difference(difference),
                    signed_text: format_signed(difference),
                    hands: clock.time.hand_angles(),
                }
            })
            .collect()
    }

    /// Everything a dashboard needs to draw the board.
    pub fn view(&self) -> BoardView {
        BoardView {
            reference: self.reference,
            reference_hands: self.reference.hand_angles(),
            rows: self.rows(),
            differences: self.differences(),
            summary: self.summary(),
        }
    }
}

/// One clock on the board, with its difference already worked out.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardRow {
    pub id: u32,
    pub name: String,
    pub time: TimeOfDay,
    pub difference: i32,
    pub status: ClockStatus,

    /// Unsigned, e.g. `"15 minutes"`.
    pub difference_text: String,

    /// Signed, e.g. `"-15 min"`.
    pub signed_text: String,
    pub hands: HandAngles,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardView {
    pub reference: TimeOfDay,
    pub reference_hands: HandAngles,
    pub rows: Vec<BoardRow>,
    pub differences: Vec<i32>,
    pub summary: SyncSummary,
}
