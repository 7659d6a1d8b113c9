use super::*;

/// Tests combining an order with both records found.
///
/// Expected: Ok(OrderDetails) with the member's name, the book's title and the order's dates
#[test]
fn builds_view_when_both_found() {
    let order = loan();
    let member = alice(order.member_ref);
    let book = dune(order.book_ref);

    let details = assemble(order, Ok(Lookup::Found(member)), Ok(Lookup::Found(book))).unwrap();

    assert_eq!(details.member_name, "Alice");
    assert_eq!(details.book_title, "Dune");
    assert_eq!(details.initial_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(details.delivery_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
}

/// Tests a missing member with the book found.
///
/// Expected: Err(DanglingReference) naming only the member
#[test]
fn reports_missing_member() {
    let order = loan();
    let order_id = order.id;
    let book = dune(order.book_ref);

    let result = assemble(order, Ok(Lookup::Missing), Ok(Lookup::Found(book)));

    match result {
        Err(EnrichmentError::DanglingReference { order_id: id, missing }) => {
            assert_eq!(id, order_id);
            assert_eq!(missing, vec![ReferenceSide::Member]);
        }
        other => panic!("expected dangling member, got {:?}", other),
    }
}

/// Tests a missing book with the member found.
///
/// Expected: Err(DanglingReference) naming only the book
#[test]
fn reports_missing_book() {
    let order = loan();
    let member = alice(order.member_ref);

    let result = assemble(order, Ok(Lookup::Found(member)), Ok(Lookup::Missing));

    assert!(matches!(
        result,
        Err(EnrichmentError::DanglingReference { ref missing, .. }) if *missing == [ReferenceSide::Book]
    ));
}

/// Tests both references missing.
///
/// Expected: Err(DanglingReference) naming the member and then the book
#[test]
fn reports_both_missing() {
    let result = assemble(loan(), Ok(Lookup::Missing), Ok(Lookup::Missing));

    match result {
        Err(err @ EnrichmentError::DanglingReference { .. }) => {
            assert_eq!(err.kind(), "dangling_reference");
            assert!(err.to_string().contains("member and book"));
        }
        other => panic!("expected dangling references, got {:?}", other),
    }
}

/// Tests a member lookup that timed out while the book was found.
///
/// Expected: Err(UpstreamUnavailable) for the member service with the timeout preserved
#[test]
fn reports_member_timeout() {
    let order = loan();
    let book = dune(order.book_ref);

    let result = assemble(
        order,
        Err(UpstreamFailure::Timeout(Duration::from_millis(200))),
        Ok(Lookup::Found(book)),
    );

    assert!(matches!(
        result,
        Err(EnrichmentError::UpstreamUnavailable {
            upstream: Upstream::MemberService,
            source: UpstreamFailure::Timeout(_),
        })
    ));
}

/// Tests a book lookup answered with a server error.
///
/// Expected: Err(UpstreamUnavailable) for the book service
#[test]
fn reports_book_server_error() {
    let order = loan();
    let member = alice(order.member_ref);

    let result = assemble(
        order,
        Ok(Lookup::Found(member)),
        Err(UpstreamFailure::Status(500)),
    );

    assert!(matches!(
        result,
        Err(EnrichmentError::UpstreamUnavailable {
            upstream: Upstream::BookService,
            source: UpstreamFailure::Status(500),
        })
    ));
}

/// Tests that an unavailable upstream outranks a missing record on the other side.
///
/// Expected: Err(UpstreamUnavailable), never DanglingReference
#[test]
fn prefers_unavailable_over_missing() {
    let member_down = assemble(
        loan(),
        Err(UpstreamFailure::Status(503)),
        Ok(Lookup::Missing),
    );
    assert!(matches!(
        member_down,
        Err(EnrichmentError::UpstreamUnavailable {
            upstream: Upstream::MemberService,
            ..
        })
    ));

    let book_down = assemble(
        loan(),
        Ok(Lookup::Missing),
        Err(UpstreamFailure::Timeout(Duration::from_secs(5))),
    );
    assert!(matches!(
        book_down,
        Err(EnrichmentError::UpstreamUnavailable {
            upstream: Upstream::BookService,
            ..
        })
    ));
}

/// Tests that the member side is reported when both upstreams fail.
///
/// Expected: Err(UpstreamUnavailable) for the member service
#[test]
fn reports_member_first_when_both_unavailable() {
    let result = assemble(
        loan(),
        Err(UpstreamFailure::Status(502)),
        Err(UpstreamFailure::Status(500)),
    );

    assert!(matches!(
        result,
        Err(EnrichmentError::UpstreamUnavailable {
            upstream: Upstream::MemberService,
            source: UpstreamFailure::Status(502),
        })
    ));
}
