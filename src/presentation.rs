use crate::constants::{SPINNER_FRAMES, SPINNER_RATE_MS};
use crate::i18n::TranslationSet;
use crate::operation::ItemOperation;
use serde::Serialize;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// status label shown next to an item, empty when nothing is in flight
pub fn item_operation_to_string(op: ItemOperation, tr: &TranslationSet) -> &str {
    match op {
        ItemOperation::None => "",
        ItemOperation::Pushing => &tr.pushing_status,
        ItemOperation::Pulling => &tr.pulling_status,
        ItemOperation::FastForwarding => &tr.fast_forwarding,
        ItemOperation::Deleting => &tr.deleting_status,
    }
}

/// same as `item_operation_to_string` for an untyped operation value
/// unknown values render as an empty label
pub fn raw_item_operation_to_string(raw: u8, tr: &TranslationSet) -> &str {
    ItemOperation::from_repr(raw).map_or("", |op| item_operation_to_string(op, tr))
}

/// loader animation frame for the given time since the operation started
#[allow(clippy::cast_possible_truncation)]
pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let index = (elapsed.as_millis() / SPINNER_RATE_MS) % SPINNER_FRAMES.len() as u128;
    SPINNER_FRAMES[index as usize]
}

/// wall-clock position for the loader, so the frame advances between renders
/// clocks set before the epoch give frame zero
pub fn loader_elapsed(now: SystemTime) -> Duration {
    now.duration_since(UNIX_EPOCH).unwrap_or_default()
}

/// item name followed by its status and spinner, if an operation is in flight
pub fn render_row(name: &str, op: ItemOperation, tr: &TranslationSet, elapsed: Duration) -> String {
    use colored::Colorize;

    let label = item_operation_to_string(op, tr);
    if label.is_empty() {
        return name.to_string();
    }
    let status = format!("{label} {}", spinner_frame(elapsed));
    format!("{name} {}", status.cyan())
}

/// a rendered item, for machine-readable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub name: String,
    pub operation: ItemOperation,
    pub status: String,
}

impl ItemRow {
    pub fn new(name: &str, op: ItemOperation, tr: &TranslationSet) -> Self {
        Self {
            name: name.to_string(),
            operation: op,
            status: item_operation_to_string(op, tr).to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
