/*!

This is the long-form manual for `poll_tracker` and `polltracker`.

## Star-bar charts

Each party is drawn on one row. A row holds up to 18 stars, then the party
summary:

```text
Poll0
*****    |          NDP ([255,165,0], 30% of votes, 100.0 seats)
*********|***       LPC ([255,0,0], 44% of votes, 245.0 seats)
```

Each star stands for a fixed number of seats (the seats of the election
divided by 18, rounded up) or a fixed share of the votes (6 points). The `|`
marks the majority: half of what a full row stands for. A party reaching the
majority has the bar drawn inside its stars.

## Configuration

`polltracker` reads an optional JSON file given with `--config`:

```json
{
  "numOfSeats": 338,
  "numOfPolls": 2,
  "parties": [
    { "name": "LPC", "color": "red" },
    { "name": "CPC", "color": "#0000ff" }
  ],
  "polls": [
    { "name": "Nanos", "parties": [
        { "name": "LPC", "seats": 160, "percentage": 34 },
        { "name": "CPC", "seats": 120, "percentage": 31 } ] }
  ]
}
```

All the keys are optional. Colors are `#rrggbb` or one of `darkblue`, `blue`,
`green`, `red`, `orange`, `purple`, `gray`, `white`. Percentages in the file
are in points (0 to 100). When `polls` is given, these polls are used as
entered; otherwise the polls are generated at random (`--random`) or left
empty.

The flags `--seats`, `--polls`, `--parties` and `--colors` override the file.
If there are more parties than colors, the extra parties are drawn in white;
if there are more colors than parties, the extra colors become parties named
`Party name unknown`.

## Views

* `--view all` draws every poll then the aggregate poll
* `--view aggregate` only draws the aggregate poll

`--by seats` or `--by votes` chooses what the stars count.

A single poll and the aggregate poll are drawn against the seats that their
parties hold together, not against the seats of the election.

## Output

`--out <file>` (or `--out stdout`) writes a JSON summary of the polls and of
the aggregate. `--reference <file>` compares the drawing with a file and fails
if they differ.
*/
