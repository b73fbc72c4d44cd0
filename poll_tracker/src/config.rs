// ********* Shared constants ***********

use std::error::Error;
use std::fmt::Display;

/// The widest star row drawn by the text visualizations.
pub const MAX_STARS_FOR_VISUALIZATION: usize = 18;

/// Capacity given to a poll when a non-positive capacity is requested.
pub const DEFAULT_PARTY_CAPACITY: usize = 10;

/// Capacity given to a poll list when a non-positive capacity is requested.
pub const DEFAULT_POLL_CAPACITY: usize = 5;

/// Seat total given to a poll list when a non-positive total is requested.
pub const DEFAULT_LIST_SEATS: u32 = 10;

/// The name of the synthesized poll holding the averages of a poll list.
pub const AGGREGATE_POLL_NAME: &str = "Aggregate";

// ******** Errors *********

/// Errors reported by the poll model.
///
/// None of them is fatal: the operation that returns one leaves the model
/// exactly as it was before the call.
#[derive(PartialEq, Debug, Clone)]
pub enum PollErrors {
    /// A negative number of seats was written to a party.
    NegativeSeats(f64),
    /// An infinite or NaN number of seats was written to a party.
    NonFiniteSeats(f64),
    /// A vote share outside of `[0, 1]` was written to a party.
    PercentageOutOfRange(f64),
    /// A seat total of zero or less was used to compute a share of seats.
    InvalidSeatTotal(i64),
    /// The poll has no free slot and holds no party with that name.
    PollFull { poll: String, party: String },
    /// The poll holds no party with that name.
    UnknownParty { poll: String, party: String },
    /// Another party of the poll already has that name.
    NameTaken { poll: String, party: String },
    /// The poll list has no free slot.
    PollListFull { poll: String },
}

impl Error for PollErrors {}

impl Display for PollErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollErrors::NegativeSeats(v) => {
                write!(f, "cannot set number of seats to a negative number ({})", v)
            }
            PollErrors::NonFiniteSeats(v) => {
                write!(f, "number of seats must be a finite number (got {})", v)
            }
            PollErrors::PercentageOutOfRange(v) => {
                write!(f, "percentage of votes must be between 0 and 1 (got {})", v)
            }
            PollErrors::InvalidSeatTotal(t) => {
                write!(f, "an election needs at least one seat (got {})", t)
            }
            PollErrors::PollFull { poll, party } => write!(
                f,
                "poll {} is full, party {} cannot be added",
                poll, party
            ),
            PollErrors::UnknownParty { poll, party } => {
                write!(f, "poll {} has no party named {}", poll, party)
            }
            PollErrors::NameTaken { poll, party } => write!(
                f,
                "poll {} already has a party named {}",
                poll, party
            ),
            PollErrors::PollListFull { poll } => write!(
                f,
                "there is no more room in the poll list, poll {} cannot be added",
                poll
            ),
        }
    }
}
