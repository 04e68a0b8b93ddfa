//! Parallel submission tests for [`InMemoryContactStore`].

use std::collections::HashSet;

use crate::in_memory::helpers::{MemoryService, service, valid_submission};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_submissions_are_all_kept(service: MemoryService) {
    let handles: Vec<_> = (0..100)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .submit(&valid_submission(&format!("visitor {i}")))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle
            .await
            .expect("task joins")
            .expect("submission accepted");
    }

    let listed = service.list().await.expect("list succeeds");
    assert_eq!(listed.len(), 100);
    let ids: HashSet<_> = listed.iter().map(|message| message.id()).collect();
    assert_eq!(ids.len(), 100);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn listing_during_writes_never_sees_partial_messages(service: MemoryService) {
    let writer = {
        let service = service.clone();
        tokio::spawn(async move {
            for i in 0..50 {
                service
                    .submit(&valid_submission(&format!("writer {i}")))
                    .await
                    .expect("submission accepted");
            }
        })
    };

    for _ in 0..50 {
        let listed = service.list().await.expect("list succeeds");
        assert!(listed.iter().all(|message| !message.name().is_empty()));
    }

    writer.await.expect("writer joins");
    assert_eq!(service.list().await.expect("list succeeds").len(), 50);
}
