//! Email body rendering. Pure string producers — no I/O, deterministic for
//! a given set of inputs. Values are embedded verbatim (emails go to known
//! colleagues, not arbitrary input).

/// HTML body for the "you received a high-five" notification.
pub fn high_five_notification(
    recipient_name: &str,
    sender_name: &str,
    message: &str,
    app_url: &str,
) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1 style="color: #f9ab12;">🙌 High-Five!</h1>
  <p>Hey {recipient_name}!</p>
  <p><strong>{sender_name}</strong> just gave you a high-five!</p>
  <div style="background-color: #f9fafb; padding: 20px; border-left: 4px solid #f9ab12; margin: 20px 0;">
    <p style="font-style: italic; margin: 0;">"{message}"</p>
  </div>
  <p>Keep up the great work! 🌟</p>
  <p style="margin-top: 30px; color: #6b7280; font-size: 14px;">
    Login to <a href="{app_url}" style="color: #f9ab12;">gib5</a> to see all your high-fives!
  </p>
</div>"#
    )
}

/// HTML body for the weekly "you haven't given a high-five yet" reminder.
pub fn weekly_reminder(user_name: &str, missed_weeks: u32, app_url: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1 style="color: #f9ab12;">🙌 High-Five Reminder</h1>
  <p>Hey {user_name}!</p>
  <p>We noticed you haven't given any high-fives for {missed_weeks} week(s) now.</p>
  <p style="background-color: #fef3e2; padding: 15px; border-radius: 8px; margin: 20px 0;">
    <strong>Remember:</strong> Everyone on the team should give at least one high-five per week to recognize great work! 🌟
  </p>
  <p>Take a moment to appreciate a colleague's contribution:</p>
  <ul style="color: #6b7280;">
    <li>Did someone help you solve a problem?</li>
    <li>Did a teammate deliver excellent work?</li>
    <li>Did someone show great teamwork?</li>
  </ul>
  <p style="text-align: center; margin: 30px 0;">
    <a href="{app_url}/give"
       style="background-color: #f9ab12; color: white; padding: 12px 24px; text-decoration: none; border-radius: 8px; display: inline-block; font-weight: bold;">
      Give a High-Five Now
    </a>
  </p>
  <p style="margin-top: 30px; color: #6b7280; font-size: 14px;">
    Spread the positivity before the weekend! 🎉
  </p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_embeds_all_inputs_verbatim() {
        let html = high_five_notification(
            "Alice Müller",
            "Bob Schmidt",
            "Thanks for the <great> review!",
            "https://gib5.example.com",
        );
        assert!(html.contains("Alice Müller"));
        assert!(html.contains("Bob Schmidt"));
        // No escaping is performed; the message lands verbatim.
        assert!(html.contains("Thanks for the <great> review!"));
        assert!(html.contains(r#"href="https://gib5.example.com""#));
    }

    #[test]
    fn test_notification_is_deterministic() {
        let a = high_five_notification("A", "B", "msg", "http://localhost:4200");
        let b = high_five_notification("A", "B", "msg", "http://localhost:4200");
        assert_eq!(a, b);
    }

    #[test]
    fn test_reminder_links_to_give_view() {
        let html = weekly_reminder("Carol", 1, "https://gib5.example.com");
        assert!(html.contains(r#"href="https://gib5.example.com/give""#));
        assert!(html.contains("Carol"));
        assert!(html.contains("1 week(s)"));
    }
}
