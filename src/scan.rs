//! Corpus scanning: per-dialog modifier tallies and timeline accumulation

use crate::dialog::Dialog;
use crate::lexicon::ModifierLexicon;
use crate::timeline::Timeline;
use tracing::debug;

/// Scan every dialog in a corpus. Fills each dialog's unique-modifier tally
/// and accumulates per-minute occurrence counts into `timeline`.
pub fn scan_corpus(dialogs: &mut [Dialog], lexicon: &mut ModifierLexicon, timeline: &mut Timeline) {
    for dialog in dialogs.iter_mut() {
        debug!(dialog = %dialog.id, "scanning dialog");
        lexicon.reset();
        scan_dialog(dialog, lexicon, timeline);
    }
}

/// Scan one dialog. The opening query is the dialog prompt and is skipped;
/// tallies cover the turns after it.
fn scan_dialog(dialog: &mut Dialog, lexicon: &mut ModifierLexicon, timeline: &mut Timeline) {
    for query in dialog.queries.iter().skip(1) {
        let count = lexicon.mark(&query.text);
        timeline.add(query.time, count);
    }
    dialog.unique_modifiers = lexicon.unique_count();
}

/// Number of dialogs whose unique-modifier tally reaches `limit`
pub fn dialogs_at_or_over(dialogs: &[Dialog], limit: usize) -> usize {
    dialogs
        .iter()
        .filter(|dialog| dialog.unique_modifiers >= limit)
        .count()
}
