//! Spoken summaries of station status.

use crate::domain::StationStatus;

/// Wording for a counted noun: none, exactly one, or several (`{n}`).
struct Wording {
    none: &'static str,
    one: &'static str,
    several: &'static str,
}

const BIKES: Wording = Wording {
    none: "none of the bikes are available",
    one: "one bike is available",
    several: "{n} bikes are available",
};

const STANDS: Wording = Wording {
    none: "none of the stands are free",
    one: "one stand is free",
    several: "{n} stands are free",
};

/// Pick the wording matching `count`.
fn conjugate(count: u32, wording: &Wording) -> String {
    match count {
        0 => wording.none.to_string(),
        1 => wording.one.to_string(),
        n => wording.several.replace("{n}", &n.to_string()),
    }
}

/// Describe one station as a sentence.
///
/// Closed stations get no bike or stand counts.
pub fn describe(status: &StationStatus) -> String {
    let mut sentence = format!("Station {}", status.name);

    if !status.address.is_empty() {
        sentence.push_str(", located ");
        sentence.push_str(&status.address);
        sentence.push(',');
    }

    if !status.is_open {
        sentence.push_str(" is closed.");
        return sentence;
    }

    sentence.push_str(" is open: ");
    sentence.push_str(&conjugate(status.available_bikes, &BIKES));
    sentence.push_str(" and ");
    sentence.push_str(&conjugate(status.available_stands, &STANDS));
    sentence.push('.');

    sentence
}

/// Render statuses as one spoken text, stations in input order.
///
/// An empty slice renders to an empty string.
pub fn render(statuses: &[StationStatus]) -> String {
    statuses
        .iter()
        .map(describe)
        .collect::<Vec<_>>()
        .join(" ")
}
