use serde::{Deserialize, Serialize};

/// Free-text fields typed by the guest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestInput {
    pub name: String,
    pub address: String,
}

impl GuestInput {
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    pub fn trimmed_address(&self) -> &str {
        self.address.trim()
    }

    pub fn has_name(&self) -> bool {
        !self.trimmed_name().is_empty()
    }

    pub fn has_address(&self) -> bool {
        !self.trimmed_address().is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.address.clear();
    }
}
