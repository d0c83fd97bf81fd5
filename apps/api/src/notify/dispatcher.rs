//! Notification dispatch — renders a template, hands it to the mail
//! transport, and appends a delivery-log row.
//!
//! Two entry points, matching the two external triggers: the database
//! change hook fires `notify_high_five_created` once per new high-five, and
//! the scheduler fires `run_weekly_reminder_batch`. Both are short-lived and
//! stateless; every run recomputes from the store.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::cohort;
use crate::errors::AppError;
use crate::mailer::MailTransport;
use crate::models::email_log::EmailKind;
use crate::models::user::UserRow;
use crate::notify::templates;
use crate::store::{DeliveryLog, RecognitionStore, UserDirectory};

const REMINDER_SUBJECT: &str = "🙌 Reminder: Give a High-Five This Week!";

/// Missed-week count reported in reminder emails. Always 1: the batch only
/// looks at the current window and keeps no streak history.
const MISSED_WEEKS: u32 = 1;

/// Per-recipient outcome of the weekly batch. Collected rather than
/// swallowed so callers and tests can assert on individual sends.
#[derive(Debug)]
pub enum ReminderOutcome {
    Sent { user_id: Uuid },
    Failed { user_id: Uuid, reason: String },
}

#[derive(Debug)]
pub struct BatchReport {
    pub reminders_sent: usize,
    pub total_candidates: usize,
    pub outcomes: Vec<ReminderOutcome>,
}

/// Borrows the narrow collaborator interfaces for the duration of one
/// dispatch invocation. No state survives between invocations.
pub struct Dispatcher<'a> {
    pub users: &'a dyn UserDirectory,
    pub high_fives: &'a dyn RecognitionStore,
    pub delivery_log: &'a dyn DeliveryLog,
    pub mailer: &'a dyn MailTransport,
    pub app_url: &'a str,
}

impl Dispatcher<'_> {
    /// On-create dispatch: one email to the recipient of a new high-five.
    ///
    /// Any lookup failure aborts the whole operation before anything is
    /// sent. A transport failure is fatal here (there is nothing to continue
    /// to) and is not retried. A delivery-log failure after a successful
    /// send is warned and swallowed — the send stands.
    pub async fn notify_high_five_created(&self, high_five_id: Uuid) -> Result<(), AppError> {
        let high_five = self.high_fives.get_high_five(high_five_id).await?;
        let sender = self.users.get_user(high_five.from_user_id).await?;
        let recipient = self.users.get_user(high_five.to_user_id).await?;

        let subject = format!(
            "🙌 You received a High-Five from {}!",
            first_name(&sender.name)
        );
        let html = templates::high_five_notification(
            &recipient.name,
            &sender.name,
            &high_five.message,
            self.app_url,
        );

        self.mailer.send(&recipient.email, &subject, &html).await?;
        info!("High-five notification sent to {}", recipient.email);

        if let Err(e) = self
            .delivery_log
            .append(recipient.id, EmailKind::Notification)
            .await
        {
            warn!("Delivery log append failed for user {}: {e}", recipient.id);
        }

        Ok(())
    }

    /// Weekly batch: remind every user who hasn't given a high-five since
    /// the week boundary.
    ///
    /// Fetch failures abort before any send. Per-recipient send failures are
    /// recorded as outcomes and do not stop the loop; the log row for a
    /// recipient is appended only after that recipient's send succeeded.
    pub async fn run_weekly_reminder_batch(
        &self,
        now: DateTime<Utc>,
    ) -> Result<BatchReport, AppError> {
        let boundary = cohort::week_start(now);
        let users = self.users.list_users().await?;
        let edges = self.high_fives.list_edges_since(boundary).await?;
        let candidates = cohort::needs_reminder(&users, &edges);
        let total_candidates = candidates.len();

        let mut outcomes = Vec::with_capacity(total_candidates);
        for user in &candidates {
            outcomes.push(self.send_reminder(user).await);
        }

        let reminders_sent = outcomes
            .iter()
            .filter(|o| matches!(o, ReminderOutcome::Sent { .. }))
            .count();

        info!(
            "Weekly reminder batch for week of {boundary}: {reminders_sent}/{total_candidates} sent"
        );

        Ok(BatchReport {
            reminders_sent,
            total_candidates,
            outcomes,
        })
    }

    async fn send_reminder(&self, user: &UserRow) -> ReminderOutcome {
        let html = templates::weekly_reminder(&user.name, MISSED_WEEKS, self.app_url);

        match self.mailer.send(&user.email, REMINDER_SUBJECT, &html).await {
            Ok(()) => {
                if let Err(e) = self.delivery_log.append(user.id, EmailKind::Reminder).await {
                    warn!("Delivery log append failed for user {}: {e}", user.id);
                }
                ReminderOutcome::Sent { user_id: user.id }
            }
            Err(e) => {
                warn!("Reminder send failed for {}: {e}", user.email);
                ReminderOutcome::Failed {
                    user_id: user.id,
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// First whitespace-separated token of a display name, for subject lines.
fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
