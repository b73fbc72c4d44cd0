use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Display;

use crate::color::Rgb;
use crate::party::Party;
use crate::poll::Poll;
use crate::poll_list::PollList;

pub const DEFAULT_NUMBER_OF_SEATS: u32 = 345;
pub const DEFAULT_NUMBER_OF_POLLS: usize = 5;

/// Name given to a party that only has a color.
pub const UNKNOWN_PARTY_NAME: &str = "Party name unknown";
/// Color given to a party that only has a name.
pub const PLACEHOLDER_COLOR: Rgb = Rgb::WHITE;

/// Seat share in points a generated vote share may stray from.
const VOTE_BAND: u64 = 5;

/// Builds empty or randomly filled polls for one election.
///
/// The factory holds the election settings: seats, number of polls and the
/// parties (a name and a color each). Changing the settings only affects the
/// polls built afterwards.
#[derive(PartialEq, Debug, Clone)]
pub struct Factory {
    num_of_seats: u32,
    num_of_polls: usize,
    party_names: Vec<String>,
    party_colors: Vec<Rgb>,
}

impl Default for Factory {
    fn default() -> Self {
        let parties = [
            ("BQ", Rgb::DARKBLUE),
            ("CPC", Rgb::BLUE),
            ("Green", Rgb::GREEN),
            ("LPC", Rgb::RED),
            ("NDP", Rgb::ORANGE),
            ("PPC", Rgb::PURPLE),
            ("Rhinoceros", Rgb::GRAY),
        ];
        Factory {
            num_of_seats: DEFAULT_NUMBER_OF_SEATS,
            num_of_polls: DEFAULT_NUMBER_OF_POLLS,
            party_names: parties.iter().map(|(n, _)| n.to_string()).collect(),
            party_colors: parties.iter().map(|(_, c)| *c).collect(),
        }
    }
}

impl Factory {
    pub fn num_of_seats(&self) -> u32 {
        self.num_of_seats
    }

    pub fn set_num_of_seats(&mut self, num_of_seats: u32) {
        self.num_of_seats = num_of_seats;
    }

    pub fn num_of_polls(&self) -> usize {
        self.num_of_polls
    }

    pub fn set_num_of_polls(&mut self, num_of_polls: usize) {
        self.num_of_polls = num_of_polls;
    }

    pub fn party_names(&self) -> &[String] {
        &self.party_names
    }

    pub fn party_colors(&self) -> &[Rgb] {
        &self.party_colors
    }

    /// Sets the parties as two parallel lists, matched by index.
    ///
    /// Nothing changes if either list is missing. When the lists have different
    /// lengths, the extra names get [`PLACEHOLDER_COLOR`] and the extra colors
    /// get the name [`UNKNOWN_PARTY_NAME`].
    ///
    /// ```
    /// use poll_tracker::{Factory, Rgb, PLACEHOLDER_COLOR};
    ///
    /// let mut factory = Factory::default();
    /// let names = ["A", "B", "C"];
    /// factory.set_party_identifiers(Some(&names[..]), Some(&[Rgb::RED, Rgb::BLUE][..]));
    /// assert_eq!(factory.party_names()[2], "C");
    /// assert_eq!(factory.party_colors()[2], PLACEHOLDER_COLOR);
    /// ```
    pub fn set_party_identifiers<S: AsRef<str>>(
        &mut self,
        names: Option<&[S]>,
        colors: Option<&[Rgb]>,
    ) {
        let (names, colors) = match (names, colors) {
            (Some(n), Some(c)) => (n, c),
            _ => {
                debug!("set_party_identifiers: missing names or colors, keeping the parties");
                return;
            }
        };
        let size = names.len().max(colors.len());
        self.party_names = (0..size)
            .map(|i| {
                names
                    .get(i)
                    .map(|n| n.as_ref().to_string())
                    .unwrap_or_else(|| UNKNOWN_PARTY_NAME.to_string())
            })
            .collect();
        self.party_colors = (0..size)
            .map(|i| colors.get(i).cloned().unwrap_or(PLACEHOLDER_COLOR))
            .collect();
        info!("Factory parties: {:?}", self.party_names);
    }

    /// Draws seats in `[0, maximum_seats]` and a vote share, in whole points, within
    /// 5 points of the share of seats drawn, capped at `maximum_percent`.
    fn random_projection<R: Rng>(
        &self,
        maximum_seats: u32,
        maximum_percent: u32,
        rng: &mut R,
    ) -> (u32, u32) {
        let seats = rng.gen_range(0..=maximum_seats);
        let seat_percent = if self.num_of_seats > 0 {
            seats as u64 * 100 / self.num_of_seats as u64
        } else {
            0
        };
        let low = seat_percent.saturating_sub(VOTE_BAND);
        let high = seat_percent + VOTE_BAND;
        let percent = rng.gen_range(low..high).min(maximum_percent as u64);
        (seats, percent as u32)
    }

    /// A party projected to win a random number of seats, at most `maximum_seats`,
    /// and a share of the votes close to its share of the seats, at most
    /// `maximum_percent` percent.
    pub fn create_random_party<R: Rng>(
        &self,
        name: &str,
        color: Rgb,
        maximum_seats: u32,
        maximum_percent: u32,
        rng: &mut R,
    ) -> Party {
        let (seats, percent) = self.random_projection(maximum_seats, maximum_percent, rng);
        make_party(name, color, seats, percent)
    }

    /// A poll with every party, splitting all the seats and all the votes.
    ///
    /// The parties are visited in a random order. Each one draws its projection
    /// from what the previous ones left, and the last one takes the remainder,
    /// so the seats add up to the seats of the election and the votes to 100%.
    pub fn create_random_poll<R: Rng>(&self, name: &str, rng: &mut R) -> Poll {
        let mut poll = Poll::new(name, self.party_names.len());
        let mut order: Vec<usize> = (0..self.party_names.len()).collect();
        order.shuffle(rng);
        let (last, rest) = match order.split_last() {
            Some(x) => x,
            None => {
                warn!("create_random_poll: no parties configured");
                return poll;
            }
        };

        let mut seats_left = self.num_of_seats;
        let mut percent_left: u32 = 100;
        for &idx in rest {
            let (seats, percent) = self.random_projection(seats_left, percent_left, rng);
            self.add_generated(&mut poll, idx, seats, percent);
            seats_left -= seats;
            percent_left -= percent;
        }
        self.add_generated(&mut poll, *last, seats_left, percent_left);
        debug!("create_random_poll: {:?}", poll);
        poll
    }

    fn add_generated(&self, poll: &mut Poll, idx: usize, seats: u32, percent: u32) {
        let party = make_party(&self.party_names[idx], self.party_colors[idx], seats, percent);
        if let Err(e) = poll.add_party(party) {
            warn!("{}", e);
        }
    }

    /// A list of `num_of_polls` polls named `Poll0`, `Poll1`, ... holding every
    /// party with no seats and no votes.
    pub fn create_empty_polls(&self, num_of_polls: usize) -> PollList {
        let mut list = PollList::new(num_of_polls, self.num_of_seats);
        for counter in 0..num_of_polls {
            let mut poll = Poll::new(format!("Poll{}", counter), self.party_names.len());
            for (name, color) in self.party_names.iter().zip(self.party_colors.iter()) {
                let mut party = Party::new(name.as_str());
                party.set_color(Some(*color));
                if let Err(e) = poll.add_party(party) {
                    warn!("{}", e);
                }
            }
            if let Err(e) = list.add_poll(poll) {
                warn!("{}", e);
            }
        }
        list
    }

    /// Empty polls, as many as the configured number of polls.
    pub fn create_configured_empty_polls(&self) -> PollList {
        self.create_empty_polls(self.num_of_polls)
    }

    pub fn create_random_poll_list<R: Rng>(&self, num_of_polls: usize, rng: &mut R) -> PollList {
        let mut list = PollList::new(num_of_polls, self.num_of_seats);
        for counter in 0..num_of_polls {
            let poll = self.create_random_poll(&format!("Poll{}", counter), rng);
            if let Err(e) = list.add_poll(poll) {
                warn!("{}", e);
            }
        }
        info!(
            "Generated {} random polls for {} seats",
            list.number_of_polls(),
            self.num_of_seats
        );
        list
    }

    pub fn create_configured_random_poll_list<R: Rng>(&self, rng: &mut R) -> PollList {
        self.create_random_poll_list(self.num_of_polls, rng)
    }
}

fn make_party(name: &str, color: Rgb, seats: u32, percent: u32) -> Party {
    let mut party = Party::with_projection(name, seats as f64, percent as f64 / 100.0);
    party.set_color(Some(color));
    party
}

impl Display for Factory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let colors: Vec<String> = self.party_colors.iter().map(|c| c.to_string()).collect();
        writeln!(f, "Factory state:")?;
        writeln!(f, "\tNumber of seats: {}", self.num_of_seats)?;
        writeln!(f, "\tNumber of polls: {}", self.num_of_polls)?;
        writeln!(f, "\tparty names: {}", self.party_names.join(","))?;
        writeln!(f, "\tparty colors: {}", colors.join(","))
    }
}
