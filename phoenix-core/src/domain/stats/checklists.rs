use crate::domain::models::Checklist;

/// Completion percentage for a checklist; an empty checklist reports 0.
pub fn checklist_progress(checklist: &Checklist) -> u8 {
    let total = checklist.items.len();
    if total == 0 {
        return 0;
    }
    let completed = checklist.items.iter().filter(|i| i.is_completed).count();
    (100.0 * completed as f64 / total as f64).round() as u8
}

/// True iff every item is completed. Vacuously true for an empty checklist,
/// which therefore counts as done while reporting 0% progress.
pub fn is_checklist_done(checklist: &Checklist) -> bool {
    checklist.items.iter().all(|i| i.is_completed)
}
