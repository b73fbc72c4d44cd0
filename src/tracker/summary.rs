// JSON summary of the polls.

use poll_tracker::*;
use serde_json::json;
use serde_json::Value as JSValue;

fn color_to_json(color: Option<Rgb>) -> JSValue {
    match color {
        Some(c) => json!([c.r, c.g, c.b]),
        None => JSValue::Null,
    }
}

fn poll_to_json(poll: &Poll) -> JSValue {
    let parties: Vec<JSValue> = poll
        .parties()
        .map(|p| {
            json!({
                "name": p.name(),
                "seats": p.projected_number_of_seats(),
                "percentage": p.projected_percentage_of_votes(),
                "color": color_to_json(p.color()),
            })
        })
        .collect();
    json!({"name": poll.poll_name(), "parties": parties})
}

pub fn build_summary_js(factory: &Factory, polls: &PollList, aggregate: &Poll) -> JSValue {
    let parties: Vec<JSValue> = factory
        .party_names()
        .iter()
        .zip(factory.party_colors().iter())
        .map(|(name, color)| json!({"name": name, "color": color_to_json(Some(*color))}))
        .collect();
    let c = json!({
        "numOfSeats": polls.num_of_seats(),
        "numOfPolls": polls.number_of_polls(),
        "parties": parties,
    });
    json!({
        "config": c,
        "polls": polls.polls().map(poll_to_json).collect::<Vec<JSValue>>(),
        "aggregate": poll_to_json(aggregate),
    })
}
