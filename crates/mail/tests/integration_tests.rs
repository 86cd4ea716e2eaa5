//! Integration tests for the mail crate
//!
//! These tests drive the public API end to end against a seeded store.

use std::sync::Arc;

use mail::actions::{ActionHandler, ReplyRequest, SendRequest};
use mail::models::{EmailFilter, EmailId};
use mail::query::{get_email, list_emails};
use mail::search::search_emails;
use mail::storage::{EmailStore, InMemoryEmailStore};

fn setup() -> (Arc<InMemoryEmailStore>, ActionHandler) {
    let store = Arc::new(InMemoryEmailStore::seeded().unwrap());
    let handler = ActionHandler::new(store.clone());
    (store, handler)
}

#[test]
fn test_send_then_list_and_search() {
    let (store, handler) = setup();

    let sent = handler
        .send_email(&SendRequest {
            to: Some("a@b.com".to_string()),
            subject: Some("Hi".to_string()),
            body: None,
        })
        .unwrap();

    let listing = list_emails(store.as_ref(), "inbox", EmailFilter::All).unwrap();
    assert_eq!(listing.total, 4);
    assert_eq!(listing.emails[0].id, sent.id);
    assert_eq!(listing.emails[0].sender, "You");
    // Sent mail is already read, so the unread count is unchanged
    assert_eq!(listing.unread_count, 2);

    let fetched = get_email(store.as_ref(), &sent.id).unwrap();
    assert_eq!(fetched, sent);

    let results = search_emails(store.as_ref(), "hi").unwrap();
    assert!(results.emails.iter().any(|e| e.id == sent.id));
}

#[test]
fn test_mark_read_updates_unread_count() {
    let (store, handler) = setup();

    handler.mark_read(&EmailId::new(1)).unwrap();
    let listing = list_emails(store.as_ref(), "inbox", EmailFilter::Unread).unwrap();
    assert_eq!(listing.total, 1);
    assert_eq!(listing.unread_count, 1);
    assert_eq!(listing.emails[0].id, EmailId::new(2));

    // Marking again changes nothing
    handler.mark_read(&EmailId::new(1)).unwrap();
    let listing = list_emails(store.as_ref(), "inbox", EmailFilter::All).unwrap();
    assert_eq!(listing.unread_count, 1);
}

#[test]
fn test_reply_chain() {
    let (store, handler) = setup();

    let reply = handler
        .reply_to_email(
            &EmailId::new(1),
            &ReplyRequest {
                body: Some("Claimed, thanks".to_string()),
            },
        )
        .unwrap();
    assert_eq!(reply.subject, "Re: Node rewards ready");
    assert_eq!(reply.to.as_deref(), Some("BaintNode"));

    // Replying to our own reply addresses ourselves
    let second = handler
        .reply_to_email(
            &reply.id,
            &ReplyRequest {
                body: Some("Note to self".to_string()),
            },
        )
        .unwrap();
    assert_eq!(second.subject, "Re: Re: Node rewards ready");
    assert_eq!(second.to.as_deref(), Some("You"));

    let ids: Vec<EmailId> = store.list_emails().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids[0], second.id);
    assert_eq!(ids[1], reply.id);
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_ids_stay_unique() {
    let (store, handler) = setup();

    for i in 0..10 {
        handler
            .send_email(&SendRequest {
                to: Some("a@b.com".to_string()),
                subject: Some(format!("Message {}", i)),
                body: Some("body".to_string()),
            })
            .unwrap();
    }

    let mut ids: Vec<u64> = store.list_emails().unwrap().iter().map(|e| e.id.get()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 13);
}

#[test]
fn test_isolated_stores() {
    let (first, handler) = setup();
    let second = InMemoryEmailStore::seeded().unwrap();

    handler.mark_read(&EmailId::new(2)).unwrap();

    assert!(first.get_email(&EmailId::new(2)).unwrap().unwrap().read);
    assert!(!second.get_email(&EmailId::new(2)).unwrap().unwrap().read);
}

#[test]
fn test_concurrent_sends() {
    let (store, _handler) = setup();

    let workers: Vec<_> = (0..8)
        .map(|i| {
            let handler = ActionHandler::new(store.clone());
            std::thread::spawn(move || {
                handler
                    .send_email(&SendRequest {
                        to: Some(format!("user{}@example.com", i)),
                        subject: Some("Parallel".to_string()),
                        body: None,
                    })
                    .unwrap()
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(store.count_emails().unwrap(), 11);
    let listing = list_emails(store.as_ref(), "inbox", EmailFilter::All).unwrap();
    assert_eq!(listing.total, 11);
}
