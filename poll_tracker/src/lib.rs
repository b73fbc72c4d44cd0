/*!
Model for tracking election polls.

A [`PollList`] holds the polls of one election. Each [`Poll`] holds the
projection of seats and votes for each [`Party`]. The list can average the
polls into an aggregate poll, and every level can be drawn as star-bar text
charts. A [`Factory`] holds the election settings and builds empty or random
poll lists.

```
use poll_tracker::Factory;
use rand::{rngs::StdRng, SeedableRng};

let factory = Factory::default();
let mut rng = StdRng::seed_from_u64(1);
let polls = factory.create_random_poll_list(3, &mut rng);
let aggregate = polls.aggregate_poll(factory.party_names());
assert_eq!(aggregate.number_of_parties(), 7);
println!("{}", polls.text_visualization_by_votes());
```
*/

mod color;
mod config;
mod factory;
pub mod manual;
mod party;
mod poll;
mod poll_list;
mod slots;

pub use crate::color::{ParseRgbError, Rgb};
pub use crate::config::*;
pub use crate::factory::*;
pub use crate::party::Party;
pub use crate::poll::{PartyEdit, Placement, Poll};
pub use crate::poll_list::PollList;
