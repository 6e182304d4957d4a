//! Integration tests for the GraphQL operations, executed directly
//! against the schema.

use std::time::Duration;

use counter_server::create_schema;
use futures_util::StreamExt;

#[tokio::test]
async fn hello_world_returns_greeting() {
    let schema = create_schema();

    let res = schema.execute("{ helloWorld }").await;
    assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

    let data = res.data.into_json().unwrap();
    assert_eq!(data["helloWorld"], "Hello, World!");
}

#[tokio::test]
async fn hello_world_ignores_variables() {
    let schema = create_schema();

    let req = async_graphql::Request::new("query Hello { helloWorld }")
        .variables(async_graphql::Variables::from_json(
            serde_json::json!({ "unused": 42 }),
        ));

    let res = schema.execute(req).await;
    assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

    let data = res.data.into_json().unwrap();
    assert_eq!(data["helloWorld"], "Hello, World!");
}

#[tokio::test(start_paused = true)]
async fn counter_subscription_emits_increasing_values() {
    let schema = create_schema();

    let mut stream = schema.execute_stream("subscription { incrementCounter }");
    let start = tokio::time::Instant::now();

    for expected in 1..=3 {
        let res = stream.next().await.expect("stream ended early");
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["incrementCounter"], expected);
    }

    // Three values take three full periods to arrive.
    assert!(start.elapsed() >= Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn concurrent_subscribers_get_independent_counters() {
    let schema = create_schema();

    let mut first = schema.execute_stream("subscription { incrementCounter }");

    let data = first.next().await.unwrap().data.into_json().unwrap();
    assert_eq!(data["incrementCounter"], 1);
    let data = first.next().await.unwrap().data.into_json().unwrap();
    assert_eq!(data["incrementCounter"], 2);

    // A subscriber joining later starts from 1, unaffected by the first.
    let mut second = schema.execute_stream("subscription { incrementCounter }");

    let data = second.next().await.unwrap().data.into_json().unwrap();
    assert_eq!(data["incrementCounter"], 1);

    let data = first.next().await.unwrap().data.into_json().unwrap();
    assert_eq!(data["incrementCounter"], 3);

    // Dropping one subscription leaves the other running.
    drop(first);

    let data = second.next().await.unwrap().data.into_json().unwrap();
    assert_eq!(data["incrementCounter"], 2);
}

#[tokio::test]
async fn unknown_field_reports_graphql_error() {
    let schema = create_schema();

    let res = schema.execute("{ goodbyeWorld }").await;
    assert!(!res.errors.is_empty(), "expected a validation error");
}
