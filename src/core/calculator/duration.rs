use crate::models::attendance::Attendance;

/// Minutes spent in the gym for a closed attendance row.
///
/// `None` while the row is still open: the duration is not applicable yet.
pub fn workout_minutes(a: &Attendance) -> Option<i64> {
    a.check_out
        .map(|out| (out - a.check_in).num_minutes().max(0))
}
