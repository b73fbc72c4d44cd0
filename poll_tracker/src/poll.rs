use log::{debug, warn};
use std::fmt::Display;
use std::ops::Deref;

use crate::color::Rgb;
use crate::config::{PollErrors, DEFAULT_PARTY_CAPACITY};
use crate::party::Party;
use crate::slots::Slots;

/// Where [`Poll::add_party`] placed a party.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Placement {
    /// The party took a free slot.
    Appended(usize),
    /// The party overwrote the party with the same name in that slot.
    Replaced(usize),
}

/// Write access to a party held by a poll.
///
/// Reads go through [`Party`]. The name can only be changed with
/// [`Poll::rename_party`], which keeps the names of a poll distinct.
#[derive(Debug)]
pub struct PartyEdit<'a> {
    party: &'a mut Party,
}

impl<'a> PartyEdit<'a> {
    pub fn set_projected_number_of_seats(&mut self, seats: f64) -> Result<(), PollErrors> {
        self.party.set_projected_number_of_seats(seats)
    }

    pub fn set_projected_percentage_of_votes(&mut self, percentage: f64) -> Result<(), PollErrors> {
        self.party.set_projected_percentage_of_votes(percentage)
    }

    pub fn set_color(&mut self, color: Option<Rgb>) {
        self.party.set_color(color)
    }
}

impl<'a> Deref for PartyEdit<'a> {
    type Target = Party;

    fn deref(&self) -> &Party {
        self.party
    }
}

/// A snapshot of the projections for each party, under a poll name.
///
/// A poll holds at most `capacity` parties and never two parties with the same
/// name (compared without case).
#[derive(PartialEq, Debug, Clone)]
pub struct Poll {
    name: String,
    parties: Slots<Party>,
}

pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

impl Poll {
    /// A poll with room for `capacity` parties, or 10 parties if `capacity` is 0.
    pub fn new(name: impl Into<String>, capacity: usize) -> Poll {
        let capacity = if capacity < 1 {
            DEFAULT_PARTY_CAPACITY
        } else {
            capacity
        };
        Poll {
            name: name.into(),
            parties: Slots::with_capacity(capacity),
        }
    }

    pub fn poll_name(&self) -> &str {
        &self.name
    }

    pub fn set_poll_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn capacity(&self) -> usize {
        self.parties.capacity()
    }

    pub fn number_of_parties(&self) -> usize {
        self.parties.len()
    }

    pub fn is_full(&self) -> bool {
        self.parties.is_full()
    }

    /// The parties, in the order they were first added.
    pub fn parties(&self) -> impl Iterator<Item = &Party> {
        self.parties.iter()
    }

    pub fn parties_mut(&mut self) -> impl Iterator<Item = PartyEdit<'_>> {
        self.parties.iter_mut().map(|party| PartyEdit { party })
    }

    /// Adds a party, or replaces the party that has the same name.
    ///
    /// ```
    /// use poll_tracker::{Party, Placement, Poll};
    ///
    /// let mut poll = Poll::new("Nanos", 2);
    /// assert_eq!(poll.add_party(Party::new("NDP")), Ok(Placement::Appended(0)));
    /// assert_eq!(poll.add_party(Party::new("ndp")), Ok(Placement::Replaced(0)));
    /// assert_eq!(poll.number_of_parties(), 1);
    /// ```
    pub fn add_party(&mut self, party: Party) -> Result<Placement, PollErrors> {
        if let Some(idx) = self.position(party.name()) {
            debug!("Poll {}: replacing party {}", self.name, party.name());
            self.parties.replace(idx, party);
            return Ok(Placement::Replaced(idx));
        }
        match self.parties.insert(party) {
            Ok(idx) => Ok(Placement::Appended(idx)),
            Err(party) => {
                warn!(
                    "Poll {} is full and no further parties can be added",
                    self.name
                );
                Err(PollErrors::PollFull {
                    poll: self.name.clone(),
                    party: party.name().to_string(),
                })
            }
        }
    }

    /// The party with that name, compared without case.
    pub fn party(&self, name: &str) -> Option<&Party> {
        self.position(name).and_then(|idx| self.parties.get(idx))
    }

    pub fn party_mut(&mut self, name: &str) -> Option<PartyEdit<'_>> {
        self.position(name)
            .and_then(|idx| self.parties.get_mut(idx))
            .map(|party| PartyEdit { party })
    }

    /// Renames a party, unless another party of the poll already has the new
    /// name. Changing only the case of a name is allowed.
    pub fn rename_party(&mut self, name: &str, new_name: &str) -> Result<usize, PollErrors> {
        let idx = self
            .position(name)
            .ok_or_else(|| PollErrors::UnknownParty {
                poll: self.name.clone(),
                party: name.to_string(),
            })?;
        if matches!(self.position(new_name), Some(other) if other != idx) {
            warn!("Poll {}: party {} already exists", self.name, new_name);
            return Err(PollErrors::NameTaken {
                poll: self.name.clone(),
                party: new_name.to_string(),
            });
        }
        if let Some(party) = self.parties.get_mut(idx) {
            party.set_name(new_name);
        }
        Ok(idx)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.parties.position(|p| same_name(p.name(), name))
    }

    /// The seats projected for all the parties together.
    pub fn total_projected_seats(&self) -> f64 {
        self.parties().map(|p| p.projected_number_of_seats()).sum()
    }

    /// The poll name, then one star-bar row per party.
    pub fn text_visualization_by_seats(&self, max_stars: usize, seats_per_star: f64) -> String {
        let mut res = format!("{}\n", self.name);
        for p in self.parties() {
            res.push_str(&p.text_visualization_by_seats(max_stars, seats_per_star));
            res.push('\n');
        }
        res
    }

    pub fn text_visualization_by_votes(&self, max_stars: usize, votes_per_star: f64) -> String {
        let mut res = format!("{}\n", self.name);
        for p in self.parties() {
            res.push_str(&p.text_visualization_by_votes(max_stars, votes_per_star));
            res.push('\n');
        }
        res
    }
}

/// The poll name followed by one party name per line.
impl Display for Poll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        for p in self.parties() {
            writeln!(f, "{}", p.name())?;
        }
        Ok(())
    }
}
