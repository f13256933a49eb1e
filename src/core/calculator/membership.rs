use crate::models::status::MemberStatus;
use chrono::NaiveDate;

/// Membership rule.
///
/// The period starts at the later of the join date and the last settled
/// payment; the member stays `Active` while no more than `days` days have
/// elapsed since then.
pub fn status_on(
    today: NaiveDate,
    join_date: NaiveDate,
    last_paid: Option<NaiveDate>,
    days: i64,
) -> MemberStatus {
    let anchor = match last_paid {
        Some(p) if p > join_date => p,
        _ => join_date,
    };

    if (today - anchor).num_days() <= days {
        MemberStatus::Active
    } else {
        MemberStatus::Inactive
    }
}
