use log::{debug, warn};
use std::fmt::Display;

use crate::color::Rgb;
use crate::config::PollErrors;

/// A single party, as projected by one poll.
///
/// The projected number of seats is finite and never negative, and the projected
/// share of the votes always lies in `[0, 1]`. Writes that would break this are rejected
/// and leave the previous value in place.
#[derive(PartialEq, Debug, Clone)]
pub struct Party {
    name: String,
    projected_number_of_seats: f64,
    projected_percentage_of_votes: f64,
    color: Option<Rgb>,
}

impl Party {
    /// A party with no seats, no votes and no color.
    pub fn new(name: impl Into<String>) -> Party {
        Party {
            name: name.into(),
            projected_number_of_seats: 0.0,
            projected_percentage_of_votes: 0.0,
            color: None,
        }
    }

    /// A party with a projection.
    ///
    /// Unlike the setters, invalid values are not rejected here: a negative or
    /// infinite number of seats or a share outside of `[0, 1]` is replaced by 0.
    ///
    /// ```
    /// use poll_tracker::Party;
    ///
    /// let p = Party::with_projection("NDP", -4.0, 1.5);
    /// assert_eq!(p.projected_number_of_seats(), 0.0);
    /// assert_eq!(p.projected_percentage_of_votes(), 0.0);
    /// ```
    pub fn with_projection(name: impl Into<String>, seats: f64, percentage: f64) -> Party {
        let name = name.into();
        let seats = if seats.is_finite() && seats >= 0.0 {
            seats
        } else {
            warn!("Party {}: number of seats {} replaced by 0", name, seats);
            0.0
        };
        let percentage = if (0.0..=1.0).contains(&percentage) {
            percentage
        } else {
            warn!(
                "Party {}: percentage of votes {} replaced by 0",
                name, percentage
            );
            0.0
        };
        Party {
            name,
            projected_number_of_seats: seats,
            projected_percentage_of_votes: percentage,
            color: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Rgb>) {
        self.color = color;
    }

    pub fn projected_number_of_seats(&self) -> f64 {
        self.projected_number_of_seats
    }

    pub fn projected_percentage_of_votes(&self) -> f64 {
        self.projected_percentage_of_votes
    }

    pub fn set_projected_number_of_seats(&mut self, seats: f64) -> Result<(), PollErrors> {
        if !seats.is_finite() {
            debug!("Party {}: rejecting number of seats {}", self.name, seats);
            return Err(PollErrors::NonFiniteSeats(seats));
        }
        if seats < 0.0 {
            debug!("Party {}: rejecting number of seats {}", self.name, seats);
            return Err(PollErrors::NegativeSeats(seats));
        }
        self.projected_number_of_seats = seats;
        Ok(())
    }

    /// Sets the share of the votes, between 0 and 1 inclusive.
    pub fn set_projected_percentage_of_votes(&mut self, percentage: f64) -> Result<(), PollErrors> {
        if !(0.0..=1.0).contains(&percentage) {
            debug!(
                "Party {}: rejecting percentage of votes {}",
                self.name, percentage
            );
            return Err(PollErrors::PercentageOutOfRange(percentage));
        }
        self.projected_percentage_of_votes = percentage;
        Ok(())
    }

    /// The share of all the seats in the election that this party is projected to win.
    pub fn projected_percent_of_seats(
        &self,
        total_seats_available: i64,
    ) -> Result<f64, PollErrors> {
        if total_seats_available <= 0 {
            return Err(PollErrors::InvalidSeatTotal(total_seats_available));
        }
        Ok(self.projected_number_of_seats / total_seats_available as f64)
    }

    /// One star-bar row for the projected seats, followed by the party summary.
    ///
    /// Each star stands for `seats_per_star` seats. The `|` sits at the column
    /// of a majority of `max_stars * seats_per_star` seats. A row never holds more
    /// than `max_stars` stars.
    pub fn text_visualization_by_seats(&self, max_stars: usize, seats_per_star: f64) -> String {
        self.visualization(self.projected_number_of_seats, seats_per_star, max_stars)
    }

    /// Same as [`Party::text_visualization_by_seats`], for the share of the votes in percent.
    pub fn text_visualization_by_votes(&self, max_stars: usize, votes_per_star: f64) -> String {
        self.visualization(
            self.projected_percentage_of_votes * 100.0,
            votes_per_star,
            max_stars,
        )
    }

    fn visualization(&self, value: f64, value_per_star: f64, max_stars: usize) -> String {
        let stars = if value > 0.0 && value_per_star > 0.0 {
            ((value / value_per_star).round() as usize).min(max_stars)
        } else {
            0
        };
        // Half of max_stars, rounded up.
        let majority_col = (max_stars + 1) / 2;

        let mut row = String::with_capacity(max_stars + 2);
        for i in 0..stars {
            if i == majority_col {
                row.push('|');
            }
            row.push('*');
        }
        if stars <= majority_col {
            row.extend(std::iter::repeat(' ').take(majority_col - stars));
            row.push('|');
        }
        let padding = (max_stars + 1).saturating_sub(row.len());
        row.extend(std::iter::repeat(' ').take(padding));

        format!("{} {}", row, self)
    }
}

/// The party summary: name, color, whole percent of the votes, seats.
impl Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let votes = (self.projected_percentage_of_votes * 100.0).round() as i64;
        match self.color {
            Some(c) => write!(
                f,
                "{} ({}, {}% of votes, {:.1} seats)",
                self.name, c, votes, self.projected_number_of_seats
            ),
            None => write!(
                f,
                "{} ({}% of votes, {:.1} seats)",
                self.name, votes, self.projected_number_of_seats
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(n: usize) -> String {
        " ".repeat(n)
    }

    #[test]
    fn setters_reject_invalid_values() {
        let mut p = Party::new("BQ");
        assert_eq!(p.set_projected_number_of_seats(12.5), Ok(()));
        assert_eq!(
            p.set_projected_number_of_seats(-1.0),
            Err(PollErrors::NegativeSeats(-1.0))
        );
        assert_eq!(p.projected_number_of_seats(), 12.5);
        assert_eq!(
            p.set_projected_number_of_seats(f64::INFINITY),
            Err(PollErrors::NonFiniteSeats(f64::INFINITY))
        );
        assert!(p.set_projected_number_of_seats(f64::NAN).is_err());
        assert_eq!(p.projected_number_of_seats(), 12.5);

        assert_eq!(p.set_projected_percentage_of_votes(0.0), Ok(()));
        assert_eq!(p.set_projected_percentage_of_votes(1.0), Ok(()));
        assert_eq!(
            p.set_projected_percentage_of_votes(1.01),
            Err(PollErrors::PercentageOutOfRange(1.01))
        );
        assert!(p.set_projected_percentage_of_votes(-0.2).is_err());
        assert_eq!(p.projected_percentage_of_votes(), 1.0);
    }

    // The constructor zeroes what the setters would reject.
    #[test]
    fn constructor_coerces_invalid_values() {
        let p = Party::with_projection("CPC", -3.0, 0.4);
        assert_eq!(p.projected_number_of_seats(), 0.0);
        assert_eq!(p.projected_percentage_of_votes(), 0.4);
        let p = Party::with_projection("CPC", 3.0, 1.2);
        assert_eq!(p.projected_number_of_seats(), 3.0);
        assert_eq!(p.projected_percentage_of_votes(), 0.0);
        let p = Party::with_projection("CPC", f64::INFINITY, f64::NAN);
        assert_eq!(p.projected_number_of_seats(), 0.0);
        assert_eq!(p.projected_percentage_of_votes(), 0.0);
    }

    #[test]
    fn percent_of_seats() {
        let p = Party::with_projection("Green", 30.0, 0.1);
        assert_eq!(p.projected_percent_of_seats(120), Ok(0.25));
        assert_eq!(
            p.projected_percent_of_seats(0),
            Err(PollErrors::InvalidSeatTotal(0))
        );
        assert!(p.projected_percent_of_seats(-5).is_err());
    }

    #[test]
    fn summary() {
        let mut p = Party::with_projection("LPC", 157.0, 0.33);
        assert_eq!(p.to_string(), "LPC (33% of votes, 157.0 seats)");
        p.set_color(Some(Rgb::RED));
        assert_eq!(p.to_string(), "LPC ([255,0,0], 33% of votes, 157.0 seats)");
    }

    #[test]
    fn seats_below_majority() {
        let p = Party::with_projection("NDP", 100.0, 0.3);
        assert_eq!(
            p.text_visualization_by_seats(18, 20.0),
            format!("*****    |{} NDP (30% of votes, 100.0 seats)", pad(9))
        );
    }

    #[test]
    fn seats_at_majority() {
        let p = Party::with_projection("NDP", 180.0, 0.3);
        assert_eq!(
            p.text_visualization_by_seats(18, 20.0),
            format!("*********|{} NDP (30% of votes, 180.0 seats)", pad(9))
        );
    }

    #[test]
    fn seats_above_majority() {
        let p = Party::with_projection("NDP", 200.0, 0.3);
        assert_eq!(
            p.text_visualization_by_seats(18, 20.0),
            format!("*********|*{} NDP (30% of votes, 200.0 seats)", pad(8))
        );
    }

    #[test]
    fn row_width_is_fixed() {
        let p = Party::with_projection("NDP", 2.0e7, 0.1);
        let row = p.text_visualization_by_seats(18, 20.0);
        assert_eq!(row, "*********|********* NDP (10% of votes, 20000000.0 seats)");
        assert_eq!(row.len(), 18 + 1 + 1 + p.to_string().len());
    }

    #[test]
    fn no_seats() {
        let p = Party::new("PPC");
        assert_eq!(
            p.text_visualization_by_seats(18, 20.0),
            format!("         |{} PPC (0% of votes, 0.0 seats)", pad(9))
        );
    }

    #[test]
    fn votes_with_color() {
        let mut p = Party::with_projection("LPC", 0.0, 0.5);
        p.set_color(Some(Rgb::RED));
        assert_eq!(
            p.text_visualization_by_votes(18, 6.0),
            format!(
                "******** |{} LPC ([255,0,0], 50% of votes, 0.0 seats)",
                pad(9)
            )
        );
    }
}
