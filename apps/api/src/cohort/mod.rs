//! Weekly cohort computation.
//!
//! Everything here is a pure function over rows the caller has already
//! fetched: the week boundary, the per-user given/received stats, and the
//! "hasn't given a high-five yet this week" reminder set. Nothing is cached
//! between runs — each invocation recomputes from scratch, which keeps the
//! weekly batch correct even when past runs were skipped or failed.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::high_five::HighFiveEdge;
use crate::models::user::UserRow;

/// Per-user activity inside the current week window. Derived on demand,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyStat {
    pub user_id: Uuid,
    pub user_name: String,
    pub given_count: u32,
    pub received_count: u32,
    pub week_start: DateTime<Utc>,
}

/// Returns the most recent Monday at 00:00:00 UTC relative to `now`.
///
/// `dow` is Sunday=0..Saturday=6; the offset `(dow == 0 ? -6 : 1) - dow`
/// lands on Monday of the current week, and on Sundays it reaches back to
/// the Monday of the previous calendar week.
pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let dow = now.weekday().num_days_from_sunday() as i64;
    let offset = if dow == 0 { -6 } else { 1 - dow };
    (now + Duration::days(offset))
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Users with zero outgoing high-fives among `edges` — exactly
/// `users − distinct senders`, preserving the enumeration order of `users`.
pub fn needs_reminder(users: &[UserRow], edges: &[HighFiveEdge]) -> Vec<UserRow> {
    let gave: HashSet<Uuid> = edges.iter().map(|e| e.from_user_id).collect();
    users
        .iter()
        .filter(|u| !gave.contains(&u.id))
        .cloned()
        .collect()
}

/// Given/received counts per user over the window, sorted by received count
/// descending. The sort is stable, so ties keep the enumeration order of
/// `users`.
pub fn weekly_stats(
    users: &[UserRow],
    edges: &[HighFiveEdge],
    week_start: DateTime<Utc>,
) -> Vec<WeeklyStat> {
    let mut counts: HashMap<Uuid, (u32, u32)> = HashMap::new();
    for edge in edges {
        counts.entry(edge.from_user_id).or_default().0 += 1;
        counts.entry(edge.to_user_id).or_default().1 += 1;
    }

    let mut stats: Vec<WeeklyStat> = users
        .iter()
        .map(|user| {
            let (given, received) = counts.get(&user.id).copied().unwrap_or((0, 0));
            WeeklyStat {
                user_id: user.id,
                user_name: user.name.clone(),
                given_count: given,
                received_count: received,
                week_start,
            }
        })
        .collect();

    stats.sort_by(|a, b| b.received_count.cmp(&a.received_count));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    fn make_user(name: &str) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.to_string(),
            organization_id: None,
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    fn edge(from: Uuid, to: Uuid) -> HighFiveEdge {
        HighFiveEdge {
            from_user_id: from,
            to_user_id: to,
        }
    }

    #[test]
    fn test_week_start_is_monday_midnight_for_every_weekday() {
        // 2025-06-09 is a Monday; walk a full week of reference instants.
        for day in 9..=15 {
            let now = Utc.with_ymd_and_hms(2025, 6, day, 14, 37, 5).unwrap();
            let boundary = week_start(now);
            assert_eq!(boundary.weekday(), Weekday::Mon, "day {day}");
            assert_eq!(boundary.time(), NaiveTime::MIN, "day {day}");
            let elapsed = now - boundary;
            assert!(elapsed >= Duration::zero(), "day {day}");
            assert!(elapsed < Duration::days(7), "day {day}");
        }
    }

    #[test]
    fn test_sunday_maps_to_previous_weeks_monday() {
        // 2025-01-05 is a Sunday; its week started on Monday 2024-12-30.
        let sunday = Utc.with_ymd_and_hms(2025, 1, 5, 9, 0, 0).unwrap();
        let boundary = week_start(sunday);
        assert_eq!(boundary, Utc.with_ymd_and_hms(2024, 12, 30, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_monday_truncates_to_same_day_midnight() {
        let monday = Utc.with_ymd_and_hms(2025, 6, 9, 23, 59, 59).unwrap();
        assert_eq!(
            week_start(monday),
            Utc.with_ymd_and_hms(2025, 6, 9, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_needs_reminder_is_set_difference() {
        let alice = make_user("Alice");
        let bob = make_user("Bob");
        let carol = make_user("Carol");
        let users = vec![alice.clone(), bob.clone(), carol.clone()];

        let edges = vec![edge(alice.id, bob.id), edge(alice.id, carol.id)];
        let reminders = needs_reminder(&users, &edges);

        let ids: Vec<Uuid> = reminders.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![bob.id, carol.id]);
    }

    #[test]
    fn test_needs_reminder_empty_window_flags_everyone() {
        let users = vec![make_user("Alice"), make_user("Bob")];
        let reminders = needs_reminder(&users, &[]);
        assert_eq!(reminders.len(), 2);
    }

    #[test]
    fn test_needs_reminder_zero_users_is_empty() {
        assert!(needs_reminder(&[], &[]).is_empty());
    }

    #[test]
    fn test_weekly_stats_counts_given_and_received() {
        let alice = make_user("Alice");
        let bob = make_user("Bob");
        let users = vec![alice.clone(), bob.clone()];
        let boundary = week_start(Utc::now());

        let edges = vec![
            edge(alice.id, bob.id),
            edge(alice.id, bob.id),
            edge(bob.id, alice.id),
        ];
        let stats = weekly_stats(&users, &edges, boundary);

        let by_id: HashMap<Uuid, &WeeklyStat> = stats.iter().map(|s| (s.user_id, s)).collect();
        assert_eq!(by_id[&alice.id].given_count, 2);
        assert_eq!(by_id[&alice.id].received_count, 1);
        assert_eq!(by_id[&bob.id].given_count, 1);
        assert_eq!(by_id[&bob.id].received_count, 2);
    }

    #[test]
    fn test_weekly_stats_sum_invariant() {
        let users: Vec<UserRow> = (0..4).map(|i| make_user(&format!("U{i}"))).collect();
        let edges = vec![
            edge(users[0].id, users[1].id),
            edge(users[1].id, users[2].id),
            edge(users[2].id, users[0].id),
            edge(users[3].id, users[0].id),
            edge(users[3].id, users[1].id),
        ];
        let stats = weekly_stats(&users, &edges, week_start(Utc::now()));

        let given: u32 = stats.iter().map(|s| s.given_count).sum();
        let received: u32 = stats.iter().map(|s| s.received_count).sum();
        assert_eq!(given, received);
        assert_eq!(given, edges.len() as u32);
    }

    #[test]
    fn test_weekly_stats_sorted_by_received_desc_ties_keep_order() {
        let alice = make_user("Alice");
        let bob = make_user("Bob");
        let carol = make_user("Carol");
        let users = vec![alice.clone(), bob.clone(), carol.clone()];

        // Carol receives two, Alice and Bob one each (a tie).
        let edges = vec![
            edge(alice.id, carol.id),
            edge(bob.id, carol.id),
            edge(carol.id, alice.id),
            edge(carol.id, bob.id),
        ];
        let stats = weekly_stats(&users, &edges, week_start(Utc::now()));

        assert_eq!(stats[0].user_id, carol.id);
        // Stable sort: the Alice/Bob tie retains enumeration order.
        assert_eq!(stats[1].user_id, alice.id);
        assert_eq!(stats[2].user_id, bob.id);
    }

    #[test]
    fn test_weekly_stats_zero_users_is_empty() {
        assert!(weekly_stats(&[], &[], week_start(Utc::now())).is_empty());
    }
}
