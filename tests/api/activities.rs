use anyhow::Result;
use clubhouse::model::seed_activities;
use reqwest::StatusCode;
use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn get_activities_lists_every_seeded_activity() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.get_activities().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    let directory = body.as_object().expect("activities should be a JSON object");

    assert!(directory.contains_key("Chess Club"));
    for activity in seed_activities() {
        assert!(
            directory.contains_key(&activity.name),
            "missing activity: {}",
            activity.name
        );
    }
    assert_eq!(directory.len(), seed_activities().len());

    Ok(())
}

#[tokio::test]
async fn get_activities_exposes_public_fields() -> Result<()> {
    let app = TestApp::spawn().await?;

    let body: Value = app.get_activities().await?.json().await?;
    let chess = &body["Chess Club"];

    assert_eq!(
        chess["description"],
        "Learn strategies and compete in chess tournaments"
    );
    assert_eq!(chess["schedule"], "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess["max_participants"], 12);
    assert_eq!(
        chess["participants"],
        serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
    );

    Ok(())
}

#[tokio::test]
async fn get_activities_reflects_new_signup() -> Result<()> {
    let app = TestApp::spawn().await?;

    app.post_signup("Art Club", "ursula@example.com")
        .await?
        .error_for_status()?;

    let body: Value = app.get_activities().await?.json().await?;
    let participants = body["Art Club"]["participants"]
        .as_array()
        .expect("participants should be an array");

    assert_eq!(
        participants.last().and_then(Value::as_str),
        Some("ursula@example.com")
    );

    Ok(())
}
