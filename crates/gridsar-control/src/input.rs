//! Keypress filtering.
//!
//! The engine forwards every key the user pressed since the last cycle.
//! Only keys bound in the key-action map are kept; everything else is
//! silently dropped. Arrival order is preserved because the decision step
//! honors only the latest surviving press.

use std::collections::BTreeMap;

use tracing::debug;

use gridsar_types::ActionType;

/// Keep only keypresses bound in the key-action map, in arrival order.
pub fn filter_input(key_action_map: &BTreeMap<String, ActionType>, raw: &[String]) -> Vec<String> {
    raw.iter()
        .filter(|key| {
            let known = key_action_map.contains_key(key.as_str());
            if !known {
                debug!(key = %key, "dropping unbound keypress");
            }
            known
        })
        .cloned()
        .collect()
}
