use log::{debug, info, warn};
use std::fmt::Display;

use crate::config::{
    PollErrors, AGGREGATE_POLL_NAME, DEFAULT_LIST_SEATS, DEFAULT_POLL_CAPACITY,
    MAX_STARS_FOR_VISUALIZATION,
};
use crate::party::Party;
use crate::poll::Poll;
use crate::slots::Slots;

/// The polls tracking one election.
///
/// All the polls share the number of seats in the election, which is fixed when
/// the list is created.
#[derive(PartialEq, Debug, Clone)]
pub struct PollList {
    polls: Slots<Poll>,
    num_of_seats: u32,
}

impl PollList {
    /// A list with room for `capacity` polls (5 if 0) for an election with
    /// `num_of_seats` seats (10 if 0).
    pub fn new(capacity: usize, num_of_seats: u32) -> PollList {
        let capacity = if capacity >= 1 {
            capacity
        } else {
            DEFAULT_POLL_CAPACITY
        };
        let num_of_seats = if num_of_seats >= 1 {
            num_of_seats
        } else {
            DEFAULT_LIST_SEATS
        };
        PollList {
            polls: Slots::with_capacity(capacity),
            num_of_seats,
        }
    }

    pub fn num_of_seats(&self) -> u32 {
        self.num_of_seats
    }

    pub fn capacity(&self) -> usize {
        self.polls.capacity()
    }

    pub fn number_of_polls(&self) -> usize {
        self.polls.len()
    }

    pub fn is_full(&self) -> bool {
        self.polls.is_full()
    }

    pub fn polls(&self) -> impl Iterator<Item = &Poll> {
        self.polls.iter()
    }

    pub fn polls_mut(&mut self) -> impl Iterator<Item = &mut Poll> {
        self.polls.iter_mut()
    }

    /// The poll with exactly that name.
    pub fn poll(&self, name: &str) -> Option<&Poll> {
        self.polls().find(|p| p.poll_name() == name)
    }

    pub fn poll_mut(&mut self, name: &str) -> Option<&mut Poll> {
        self.polls_mut().find(|p| p.poll_name() == name)
    }

    /// Puts the poll in the first empty slot. Polls are never replaced.
    pub fn add_poll(&mut self, poll: Poll) -> Result<usize, PollErrors> {
        match self.polls.insert(poll) {
            Ok(idx) => Ok(idx),
            Err(poll) => {
                warn!(
                    "No more room in the poll list, poll {} was not added",
                    poll.poll_name()
                );
                Err(PollErrors::PollListFull {
                    poll: poll.poll_name().to_string(),
                })
            }
        }
    }

    /// The names of the parties of the first poll, in order.
    pub fn party_names(&self) -> Vec<String> {
        self.polls()
            .next()
            .map(|p| p.parties().map(|party| party.name().to_string()).collect())
            .unwrap_or_default()
    }

    /// A new party holding the average projection of this party over all the
    /// polls where it appears. Seats and votes are 0 if no poll has it.
    pub fn average_party_data(&self, name: &str) -> Party {
        let mut seats = 0.0;
        let mut votes = 0.0;
        let mut occurrences: u32 = 0;
        for p in self.polls().filter_map(|poll| poll.party(name)) {
            seats += p.projected_number_of_seats();
            votes += p.projected_percentage_of_votes();
            occurrences += 1;
        }
        debug!(
            "average_party_data: {} found in {} polls",
            name, occurrences
        );
        if occurrences == 0 {
            return Party::new(name);
        }
        let n = occurrences as f64;
        Party::with_projection(name, seats / n, votes / n)
    }

    /// A new poll named `Aggregate` with the averaged data of each party, in the
    /// order of `names`.
    ///
    /// ```
    /// use poll_tracker::{Party, Poll, PollList};
    ///
    /// let mut list = PollList::new(2, 100);
    /// for seats in [40.0, 60.0] {
    ///     let mut poll = Poll::new("p", 1);
    ///     poll.add_party(Party::with_projection("X", seats, 0.5))?;
    ///     list.add_poll(poll)?;
    /// }
    /// let agg = list.aggregate_poll(&["X"]);
    /// assert_eq!(agg.party("X").unwrap().projected_number_of_seats(), 50.0);
    /// # Ok::<(), poll_tracker::PollErrors>(())
    /// ```
    pub fn aggregate_poll<S: AsRef<str>>(&self, names: &[S]) -> Poll {
        let mut aggregate = Poll::new(AGGREGATE_POLL_NAME, names.len());
        for name in names {
            if let Err(e) = aggregate.add_party(self.average_party_data(name.as_ref())) {
                warn!("aggregate_poll: {}", e);
            }
        }
        info!(
            "Aggregated {} parties over {} polls",
            aggregate.number_of_parties(),
            self.number_of_polls()
        );
        aggregate
    }

    /// Seats represented by one star: the seats of the election spread over the widest row.
    pub fn seats_per_star(&self) -> f64 {
        (self.num_of_seats as f64 / MAX_STARS_FOR_VISUALIZATION as f64).ceil()
    }

    /// Percent of the votes represented by one star.
    pub fn votes_per_star() -> f64 {
        (100.0 / MAX_STARS_FOR_VISUALIZATION as f64).ceil()
    }

    /// Every poll by seats, each followed by a blank line.
    pub fn text_visualization_by_seats(&self) -> String {
        let per_star = self.seats_per_star();
        let mut res = String::new();
        for p in self.polls() {
            res.push_str(&p.text_visualization_by_seats(MAX_STARS_FOR_VISUALIZATION, per_star));
            res.push('\n');
        }
        res
    }

    /// Every poll by votes, each followed by a blank line.
    pub fn text_visualization_by_votes(&self) -> String {
        let per_star = PollList::votes_per_star();
        let mut res = String::new();
        for p in self.polls() {
            res.push_str(&p.text_visualization_by_votes(MAX_STARS_FOR_VISUALIZATION, per_star));
            res.push('\n');
        }
        res
    }
}

impl Display for PollList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Number of seats: {}\n{}",
            self.num_of_seats,
            self.text_visualization_by_seats()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll_with(name: &str, parties: &[(&str, f64, f64)]) -> Poll {
        let mut poll = Poll::new(name, parties.len());
        for (n, s, v) in parties {
            poll.add_party(Party::with_projection(*n, *s, *v)).unwrap();
        }
        poll
    }

    #[test]
    fn defaults() {
        let list = PollList::new(0, 0);
        assert_eq!(list.capacity(), 5);
        assert_eq!(list.num_of_seats(), 10);
        assert_eq!(list.number_of_polls(), 0);
    }

    #[test]
    fn full_list_rejects_poll() {
        let mut list = PollList::new(1, 100);
        assert_eq!(list.add_poll(Poll::new("first", 1)), Ok(0));
        assert!(list.is_full());
        assert_eq!(
            list.add_poll(Poll::new("second", 1)),
            Err(PollErrors::PollListFull {
                poll: "second".to_string()
            })
        );
        assert_eq!(list.number_of_polls(), 1);
        assert!(list.poll("second").is_none());
    }

    #[test]
    fn average_over_polls() {
        let mut list = PollList::new(3, 100);
        list.add_poll(poll_with("p1", &[("X", 40.0, 0.2), ("Y", 10.0, 0.1)])).unwrap();
        list.add_poll(poll_with("p2", &[("X", 60.0, 0.4)])).unwrap();
        list.add_poll(poll_with("p3", &[("Z", 1.0, 0.0)])).unwrap();

        let x = list.average_party_data("x");
        assert_eq!(x.name(), "x");
        assert_eq!(x.projected_number_of_seats(), 50.0);
        assert!((x.projected_percentage_of_votes() - 0.3).abs() < 1e-12);

        let y = list.average_party_data("Y");
        assert_eq!(y.projected_number_of_seats(), 10.0);

        let missing = list.average_party_data("Rhinoceros");
        assert_eq!(missing.projected_number_of_seats(), 0.0);
        assert_eq!(missing.projected_percentage_of_votes(), 0.0);
    }

    #[test]
    fn aggregate_is_independent() {
        let mut list = PollList::new(2, 100);
        list.add_poll(poll_with("p1", &[("X", 40.0, 0.4)])).unwrap();
        list.add_poll(poll_with("p2", &[("X", 60.0, 0.6)])).unwrap();

        let agg = list.aggregate_poll(&["X", "Nobody"]);
        assert_eq!(agg.poll_name(), "Aggregate");
        assert_eq!(agg.capacity(), 2);
        assert_eq!(agg.number_of_parties(), 2);
        assert_eq!(agg.party("X").unwrap().projected_number_of_seats(), 50.0);

        list.poll_mut("p1")
            .unwrap()
            .party_mut("X")
            .unwrap()
            .set_projected_number_of_seats(0.0)
            .unwrap();
        assert_eq!(agg.party("X").unwrap().projected_number_of_seats(), 50.0);
        assert_eq!(
            list.aggregate_poll(&["X"])
                .party("X")
                .unwrap()
                .projected_number_of_seats(),
            30.0
        );
    }

    #[test]
    fn party_names_of_first_poll() {
        let mut list = PollList::new(2, 100);
        assert!(list.party_names().is_empty());
        list.add_poll(poll_with("p1", &[("B", 0.0, 0.0), ("A", 0.0, 0.0)])).unwrap();
        assert_eq!(list.party_names(), vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn star_sizes() {
        assert_eq!(PollList::new(1, 345).seats_per_star(), 20.0);
        assert_eq!(PollList::new(1, 18).seats_per_star(), 1.0);
        assert_eq!(PollList::votes_per_star(), 6.0);
    }

    #[test]
    fn visualization_separates_polls() {
        let mut list = PollList::new(3, 360);
        list.add_poll(poll_with("p1", &[("A", 100.0, 0.5)])).unwrap();
        list.add_poll(poll_with("p2", &[("A", 200.0, 0.6)])).unwrap();
        let pad9 = " ".repeat(9);
        let pad8 = " ".repeat(8);
        let expected = format!(
            "p1\n*****    |{pad9} A (50% of votes, 100.0 seats)\n\np2\n*********|*{pad8} A (60% of votes, 200.0 seats)\n\n",
            pad9 = pad9,
            pad8 = pad8
        );
        assert_eq!(list.text_visualization_by_seats(), expected);
        assert_eq!(
            list.to_string(),
            format!("Number of seats: 360\n{}", expected)
        );

        let by_votes = list.text_visualization_by_votes();
        assert!(by_votes.starts_with(&format!(
            "p1\n******** |{} A (50% of votes, 100.0 seats)\n",
            pad9
        )));
    }
}
