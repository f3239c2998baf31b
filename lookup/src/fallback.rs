//! Fixed local table for when the remote service is unreachable.

use crate::types::Location;

const TABLE: &[(&str, &str, &str)] = &[
    ("560001", "Karnataka", "Bengaluru"),
    ("110001", "Delhi", "New Delhi"),
    ("400001", "Maharashtra", "Mumbai"),
    ("700001", "West Bengal", "Kolkata"),
    ("600001", "Tamil Nadu", "Chennai"),
];

pub(crate) fn local(pin: &str) -> Option<Location> {
    TABLE
        .iter()
        .find(|(code, _, _)| *code == pin)
        .map(|(_, state, city)| Location {
            state: (*state).to_string(),
            city: (*city).to_string(),
        })
}
