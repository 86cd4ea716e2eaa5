//! Demo mailbox loaded at startup

use chrono::Utc;

use crate::models::{Email, EmailId};

/// Build the demo mailbox, in display order
///
/// Previews are stored as written rather than derived from the body.
pub fn seed_emails() -> Vec<Email> {
    let now = Utc::now();
    vec![
        Email::builder(EmailId::new(1))
            .sender("BaintNode")
            .subject("Node rewards ready")
            .preview("You have 12 BAINT pending. Claim now.")
            .body(
                "Congratulations! Your node has produced 3 blocks this week and earned \
                 12 BAINT tokens. Click here to claim your rewards.",
            )
            .time("2:30 PM")
            .read(false)
            .timestamp(now)
            .build(),
        Email::builder(EmailId::new(2))
            .sender("DAO Gov")
            .subject("Vote: Proposal #12")
            .preview("A proposal that affects storage fees")
            .body(
                "Please review and vote on proposal #12 regarding the adjustment of \
                 storage fees for the network.",
            )
            .time("1:15 PM")
            .read(false)
            .timestamp(now)
            .build(),
        Email::builder(EmailId::new(3))
            .sender("BaintStore")
            .subject("New app: AgentKit")
            .preview("AgentKit is live on BaintStore")
            .body(
                "AgentKit helps you deploy AI agents on the Baint network. \
                 Check it out in the BaintStore.",
            )
            .time("11:45 AM")
            .read(true)
            .timestamp(now)
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<u64> = seed_emails().iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_seed_has_two_unread() {
        assert_eq!(seed_emails().iter().filter(|e| !e.read).count(), 2);
    }

    #[test]
    fn test_seed_bodies_are_joined_cleanly() {
        let emails = seed_emails();
        assert!(emails[0].content.contains("earned 12 BAINT tokens"));
        assert!(emails.iter().all(|e| !e.content.contains("  ")));
        assert!(emails.iter().all(|e| e.to.is_none()));
    }
}
