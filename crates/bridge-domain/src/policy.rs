//! Policy acknowledgement flag
//!
//! ```text
//! Unchecked --(user accepts)--> Checked
//! ```
//! There is no way back to `Unchecked` short of clearing storage.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolicyCheck {
    #[default]
    Unchecked,
    Checked,
}

impl PolicyCheck {
    pub fn is_checked(&self) -> bool {
        matches!(self, PolicyCheck::Checked)
    }
}
