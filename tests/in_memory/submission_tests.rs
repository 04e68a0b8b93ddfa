//! Submission flow tests for [`InMemoryContactStore`] behind the service.

use crate::in_memory::helpers::{MemoryService, runtime, service, valid_submission};
use folio::contact::{
    domain::ContactSubmission,
    error::ContactField,
    services::{ContactService, ContactServiceError},
    validation::{ContactValidator, ValidationConfig},
};
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[rstest]
fn stored_message_keeps_submitted_text(
    runtime: io::Result<Runtime>,
    service: MemoryService,
) -> TestResult {
    let rt = runtime?;
    let submission = ContactSubmission::new(
        "  Zoë  ",
        "zoe@example.co.uk",
        "Grüße aus Berlin, let's talk!",
    );

    let stored = rt.block_on(service.submit(&submission))?;

    assert_eq!(stored.name(), "  Zoë  ");
    assert_eq!(stored.email(), "zoe@example.co.uk");
    assert_eq!(stored.message(), "Grüße aus Berlin, let's talk!");
    Ok(())
}

#[rstest]
fn message_length_counts_characters(
    runtime: io::Result<Runtime>,
    service: MemoryService,
) -> TestResult {
    let rt = runtime?;
    let ten_chars = "éééééééééé";
    assert!(ten_chars.len() > 10);

    rt.block_on(service.submit(&ContactSubmission::new(
        "Jane",
        "jane@x.com",
        ten_chars,
    )))?;

    let nine_chars = "ééééééééé";
    let result = rt.block_on(service.submit(&ContactSubmission::new(
        "Jane",
        "jane@x.com",
        nine_chars,
    )));
    match result {
        Err(ContactServiceError::Validation(err)) => {
            assert_eq!(err.fields(), vec![ContactField::Message]);
        }
        other => panic!("expected message rejection, got {other:?}"),
    }
    assert_eq!(service.store().len(), 1);
    Ok(())
}

#[rstest]
#[case(ContactSubmission::new("", "jane@x.com", "Long enough message"), ContactField::Name)]
#[case(ContactSubmission::new("Jane", "jane@", "Long enough message"), ContactField::Email)]
#[case(ContactSubmission::new("Jane", "jane@x.com", "too short"), ContactField::Message)]
fn single_bad_field_is_isolated(
    runtime: io::Result<Runtime>,
    service: MemoryService,
    #[case] submission: ContactSubmission,
    #[case] field: ContactField,
) -> TestResult {
    let rt = runtime?;

    let result = rt.block_on(service.submit(&submission));

    match result {
        Err(ContactServiceError::Validation(err)) => assert_eq!(err.fields(), vec![field]),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(rt.block_on(service.list())?.is_empty());
    Ok(())
}

#[rstest]
fn whitespace_only_name_is_stored(
    runtime: io::Result<Runtime>,
    service: MemoryService,
) -> TestResult {
    let rt = runtime?;

    let stored = rt.block_on(service.submit(&ContactSubmission::new(
        "   ",
        "jane@x.com",
        "Long enough message",
    )))?;

    assert_eq!(stored.name(), "   ");
    assert_eq!(rt.block_on(service.list())?, vec![stored]);
    Ok(())
}

#[rstest]
fn custom_minimum_length_applies(runtime: io::Result<Runtime>, service: MemoryService) -> TestResult {
    let rt = runtime?;
    let strict = ContactService::with_validator(
        Arc::clone(service.store()),
        ContactValidator::with_config(ValidationConfig {
            min_message_chars: 40,
        }),
    );

    let result = rt.block_on(strict.submit(&valid_submission("Jane")));

    assert!(matches!(result, Err(ContactServiceError::Validation(_))));
    rt.block_on(service.submit(&valid_submission("Jane")))?;
    assert_eq!(rt.block_on(strict.list())?.len(), 1);
    Ok(())
}

#[rstest]
fn listing_preserves_creation_order(
    runtime: io::Result<Runtime>,
    service: MemoryService,
) -> TestResult {
    let rt = runtime?;
    let names = ["first", "second", "third"];
    let mut ids = Vec::new();
    for name in names {
        ids.push(rt.block_on(service.submit(&valid_submission(name)))?.id());
    }

    let listed = rt.block_on(service.list())?;

    let listed_ids: Vec<_> = listed.iter().map(|message| message.id()).collect();
    assert_eq!(listed_ids, ids);
    assert!(
        listed
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.created_at() <= b.created_at()))
    );
    Ok(())
}
