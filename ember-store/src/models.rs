use serde::{Deserialize, Serialize};

/// A single generated person, as returned by the people API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: String,
}
