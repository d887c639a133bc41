use crate::e2e::helpers;

use chrono::NaiveDate;
use helpers::assertions::assert_number;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use test_context::test_context;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_merge_intake_and_burn_per_day(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Reporter").await.unwrap();
    let token = ctx.token_for(user.user_id);

    ctx.fixtures
        .create_food_log(user.user_id, date("2024-01-01"), Some(Decimal::from(1200)))
        .await
        .unwrap();
    ctx.fixtures
        .create_food_log(user.user_id, date("2024-01-01"), Some(Decimal::from(800)))
        .await
        .unwrap();
    ctx.fixtures
        .create_food_log(user.user_id, date("2024-01-01"), None)
        .await
        .unwrap();
    ctx.fixtures
        .create_health_log(
            user.user_id,
            date("2024-01-01"),
            Some(Decimal::from(500)),
            Some(Decimal::new(75, 1)),
            None,
        )
        .await
        .unwrap();

    let response = ctx.client.get_with_auth("/api/reports", &token).await.unwrap();

    response.assert_status(StatusCode::OK);
    let rows = response.body().get("rows").and_then(|v| v.as_array()).unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.get("date"), Some(&json!("2024-01-01")));
    assert_number(row, "calories_taken", 2000.0);
    assert_number(row, "calories_burned", 500.0);
    assert_number(row, "deficit", 1500.0);
    assert_number(row, "sleep_hours", 7.5);
    assert_eq!(row.get("weight_change_pct"), Some(&json!("unavailable")));
    assert_eq!(row.get("spo2_avg"), Some(&Value::Null));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_compare_weight_against_the_previous_weigh_in(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Reporter").await.unwrap();
    let token = ctx.token_for(user.user_id);

    ctx.fixtures
        .create_weight_log(user.user_id, date("2024-01-01"), Decimal::from(80))
        .await
        .unwrap();
    ctx.fixtures
        .create_food_log(user.user_id, date("2024-01-02"), Some(Decimal::from(1800)))
        .await
        .unwrap();
    ctx.fixtures
        .create_weight_log(user.user_id, date("2024-01-03"), Decimal::from(78))
        .await
        .unwrap();

    let response = ctx.client.get_with_auth("/api/reports", &token).await.unwrap();

    response.assert_status(StatusCode::OK);
    let rows = response.body().get("rows").and_then(|v| v.as_array()).unwrap();
    let changes: Vec<&Value> = rows.iter().filter_map(|r| r.get("weight_change_pct")).collect();
    assert_eq!(
        changes,
        vec![&json!("unavailable"), &json!("unavailable"), &json!("-2.50%")]
    );

    // Weight-only day still reports zero intake
    assert_number(&rows[2], "calories_taken", 0.0);
    assert_number(&rows[2], "deficit", 0.0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_limit_the_report_to_the_requested_range(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Reporter").await.unwrap();
    let token = ctx.token_for(user.user_id);

    for day in ["2024-02-01", "2024-02-02", "2024-02-03", "2024-02-04"] {
        ctx.fixtures
            .create_food_log(user.user_id, date(day), Some(Decimal::from(100)))
            .await
            .unwrap();
    }

    let response = ctx
        .client
        .get_with_auth("/api/reports?from=2024-02-02&to=2024-02-03", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body.get("from"), Some(&json!("2024-02-02")));
    assert_eq!(body.get("to"), Some(&json!("2024-02-03")));

    let dates: Vec<&Value> = body
        .get("rows")
        .and_then(|v| v.as_array())
        .unwrap()
        .iter()
        .filter_map(|r| r.get("date"))
        .collect();
    assert_eq!(dates, vec![&json!("2024-02-02"), &json!("2024-02-03")]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_no_rows_without_data(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Reporter").await.unwrap();
    let other = ctx.fixtures.create_profile("Other").await.unwrap();
    ctx.fixtures
        .create_food_log(other.user_id, date("2024-01-01"), Some(Decimal::from(500)))
        .await
        .unwrap();

    let response = ctx
        .client
        .get_with_auth("/api/reports", &ctx.token_for(user.user_id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body().get("rows"), Some(&json!([])));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_inverted_ranges(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Reporter").await.unwrap();

    let response = ctx
        .client
        .get_with_auth(
            "/api/reports?from=2024-03-10&to=2024-03-01",
            &ctx.token_for(user.user_id),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("from must not be after to");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_authentication_for_reports(ctx: &TestContext) {
    let response = ctx.client.get("/api/reports").await.unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_carry_the_earlier_weigh_in_into_a_ranged_report(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Reporter").await.unwrap();
    let token = ctx.token_for(user.user_id);

    ctx.fixtures
        .create_weight_log(user.user_id, date("2024-01-01"), Decimal::from(80))
        .await
        .unwrap();
    ctx.fixtures
        .create_food_log(user.user_id, date("2024-01-03"), Some(Decimal::from(1900)))
        .await
        .unwrap();
    ctx.fixtures
        .create_health_log(
            user.user_id,
            date("2024-01-04"),
            Some(Decimal::from(400)),
            Some(Decimal::from(7)),
            Some(Decimal::from(96)),
        )
        .await
        .unwrap();
    ctx.fixtures
        .create_weight_log(user.user_id, date("2024-01-05"), Decimal::from(78))
        .await
        .unwrap();

    let full = ctx.client.get_with_auth("/api/reports", &token).await.unwrap();
    full.assert_status(StatusCode::OK);
    let full_rows = full.body().get("rows").and_then(|v| v.as_array()).unwrap().clone();
    assert_eq!(full_rows.len(), 4);

    let ranged = ctx
        .client
        .get_with_auth("/api/reports?from=2024-01-03&to=2024-01-05", &token)
        .await
        .unwrap();
    ranged.assert_status(StatusCode::OK);
    let ranged_rows = ranged.body().get("rows").and_then(|v| v.as_array()).unwrap();

    // The 2024-01-01 weigh-in seeds the change but is not reported
    assert_eq!(ranged_rows.len(), 3);
    assert_eq!(ranged_rows[0].get("date"), Some(&json!("2024-01-03")));
    assert_eq!(&ranged_rows[..], &full_rows[1..]);
    assert_eq!(ranged_rows[2].get("weight_change_pct"), Some(&json!("-2.50%")));
    assert_number(&ranged_rows[1], "spo2_avg", 96.0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_weigh_ins_after_the_range_when_seeding(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Reporter").await.unwrap();
    let token = ctx.token_for(user.user_id);

    ctx.fixtures
        .create_weight_log(user.user_id, date("2024-02-01"), Decimal::from(70))
        .await
        .unwrap();
    ctx.fixtures
        .create_weight_log(user.user_id, date("2024-02-10"), Decimal::from(72))
        .await
        .unwrap();

    let response = ctx
        .client
        .get_with_auth("/api/reports?from=2024-02-01&to=2024-02-05", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let rows = response.body().get("rows").and_then(|v| v.as_array()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("weight_change_pct"), Some(&json!("unavailable")));
}
