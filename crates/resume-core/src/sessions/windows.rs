//! Local window drift cleanup.
//!
//! A window can outlive its remote session (killed elsewhere, or the
//! listing changed since the window opened). Bulk operations sweep such
//! stale windows so the local view converges on the remote one.

use std::collections::BTreeSet;

use tracing::warn;

use crate::sessions::types::SESSION_PREFIX;
use crate::terminal::WindowController;

/// Close every namespace window whose label is not in `known`, best-effort.
pub(crate) fn close_stale_windows<W: WindowController>(windows: &W, known: &BTreeSet<String>) {
    let labels = match windows.list_labels_with_prefix(SESSION_PREFIX) {
        Ok(labels) => labels,
        Err(e) => {
            warn!(
                event = "core.session.stale_window_scan_failed",
                error = %e
            );
            return;
        }
    };

    let stale: BTreeSet<String> = labels.difference(known).cloned().collect();
    if stale.is_empty() {
        return;
    }

    for (label, result) in windows.close_all(&stale) {
        if let Err(e) = result {
            warn!(
                event = "core.session.stale_window_close_failed",
                label = %label,
                error = %e
            );
        }
    }
}
