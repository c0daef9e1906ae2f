use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;
use trip_checklist::error::{EMPTY_SUBMISSION_MESSAGE, SUBMISSION_FAILED_MESSAGE};
use trip_checklist::models::{Category, TripRequest};
use trip_checklist::{
    AppError, CandidateFile, ChecklistApi, ChecklistController, ChecklistResponse, MemoryView,
    PageState, Result, TripFields, View,
};

/// 记录每次提交内容的假清单服务
struct FakeApi {
    fail: bool,
    seen: Mutex<Vec<(TripFields, Vec<String>)>>,
}

impl FakeApi {
    fn ok() -> Self {
        Self {
            fail: false,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChecklistApi for FakeApi {
    async fn generate_checklist(&self, request: TripRequest<'_>) -> Result<ChecklistResponse> {
        self.seen.lock().unwrap().push((
            request.fields.clone(),
            request.files.iter().map(|f| f.name.clone()).collect(),
        ));

        if self.fail {
            return Err(AppError::BadStatus { status: 500 });
        }

        Ok(ChecklistResponse {
            destination: request.fields.destination.clone(),
            start_date: request.fields.start_date.clone(),
            end_date: request.fields.end_date.clone(),
            checklist: vec![
                Category::new("Documents", &["Passport", "Visa"]),
                Category::new("Clothing", &["Jacket"]),
            ]
            .into_iter()
            .collect(),
        })
    }
}

fn controller(api: FakeApi) -> ChecklistController<MemoryView, FakeApi> {
    ChecklistController::with_today(
        MemoryView::new(),
        api,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    )
}

fn media() -> Vec<CandidateFile> {
    vec![
        CandidateFile::new("shrine.jpg", Some("image/jpeg"), b"jpg".to_vec()),
        CandidateFile::new("itinerary.pdf", Some("application/pdf"), b"pdf".to_vec()),
        CandidateFile::new("street.mp4", Some("video/mp4"), b"mp4".to_vec()),
    ]
}

fn tokyo() -> TripFields {
    TripFields::new("Tokyo, Japan", "2024-03-15", "2024-03-22", "cherry blossoms")
}

#[tokio::test]
async fn test_successful_submission_renders_checklist() {
    let mut c = controller(FakeApi::ok());
    c.fill_form(tokyo());
    c.add_files(media());

    c.submit().await.unwrap();

    assert_eq!(c.page(), PageState::Checklist);
    assert_eq!(
        c.view().page_history(),
        &[PageState::Upload, PageState::Loading, PageState::Checklist]
    );

    let doc = c.view().checklist().unwrap();
    let titles: Vec<&str> = doc.groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Documents", "Clothing"]);
    assert_eq!(doc.groups[0].items[0].label, "Passport");
    assert_eq!(doc.groups[0].items[1].label, "Visa");
    assert_eq!(doc.groups[1].items[0].label, "Jacket");

    let text = c.export_text().unwrap();
    assert!(text.contains("\nDocuments\n---------\n☐ Passport\n☐ Visa\n"));
    assert!(text.contains("\nClothing\n--------\n☐ Jacket\n"));
    assert!(text.contains("Destination: Tokyo, Japan\nTravel Dates: 3/15/2024 - 3/22/2024\n"));
}

#[tokio::test]
async fn test_request_carries_only_admitted_files_and_fields() {
    let mut c = controller(FakeApi::ok());
    c.fill_form(tokyo());
    c.add_files(media());

    c.submit().await.unwrap();

    let seen = c_api_seen(&c);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, tokyo());
    assert_eq!(seen[0].1, vec!["shrine.jpg", "street.mp4"]);
}

fn c_api_seen(c: &ChecklistController<MemoryView, FakeApi>) -> Vec<(TripFields, Vec<String>)> {
    c.api().seen.lock().unwrap().clone()
}

#[tokio::test]
async fn test_empty_session_never_calls_service() {
    let mut c = controller(FakeApi::ok());
    c.fill_form(tokyo());
    c.add_files(vec![CandidateFile::new("notes.txt", Some("text/plain"), vec![])]);

    let err = c.submit().await.unwrap_err();

    assert!(matches!(err, AppError::EmptySubmission));
    assert!(c_api_seen(&c).is_empty());
    assert_eq!(c.page(), PageState::Upload);
    assert_eq!(c.view().page_history(), &[PageState::Upload]);
    assert_eq!(c.view().notifications(), &[EMPTY_SUBMISSION_MESSAGE.to_string()]);
}

#[tokio::test]
async fn test_failure_returns_to_upload_and_keeps_session() {
    let mut c = controller(FakeApi::failing());
    c.fill_form(tokyo());
    c.add_files(media());

    let err = c.submit().await.unwrap_err();

    assert!(err.is_submission_failure());
    assert_eq!(c.page(), PageState::Upload);
    assert_eq!(
        c.view().page_history(),
        &[PageState::Upload, PageState::Loading, PageState::Upload]
    );
    assert_eq!(c.view().notifications(), &[SUBMISSION_FAILED_MESSAGE.to_string()]);
    assert_eq!(c.session().len(), 2);
    assert_eq!(c.view().previews().len(), 2);
    assert!(c.view().checklist().is_none());
    assert!(c.export_text().is_none());

    // 会话保留，可以直接重试
    assert!(c.submit().await.is_err());
    assert_eq!(c_api_seen(&c).len(), 2);
}

#[tokio::test]
async fn test_back_clears_session_and_previews() {
    let mut c = controller(FakeApi::ok());
    c.fill_form(tokyo());
    c.add_files(media());
    c.submit().await.unwrap();

    c.back().unwrap();

    assert_eq!(c.page(), PageState::Upload);
    assert!(c.session().is_empty());
    assert!(c.view().previews().is_empty());
    assert_eq!(c.view().live_handle_count(), 0);
    assert_eq!(c.view().revoked_handles().len(), 2);
    assert_eq!(c.form().fields(), &TripFields::default());

    // 流程可以循环
    c.add_files(media());
    c.fill_form(tokyo());
    c.submit().await.unwrap();
    assert_eq!(c.page(), PageState::Checklist);
}

#[tokio::test]
async fn test_removed_file_is_not_submitted() {
    let mut c = controller(FakeApi::ok());
    c.fill_form(tokyo());
    let ids = c.add_files(media());

    assert!(c.remove_file(ids[0]));
    assert!(!c.remove_file(ids[0]));
    c.submit().await.unwrap();

    assert_eq!(c_api_seen(&c)[0].1, vec!["street.mp4"]);
}

#[test]
fn test_end_date_before_start_is_not_enforced() {
    let mut c = controller(FakeApi::ok());
    c.set_start_date("2024-03-10");
    c.set_end_date("2024-03-12");
    c.set_start_date("2024-03-20");

    assert_eq!(c.form().fields().start_date, "2024-03-20");
    assert_eq!(c.form().fields().end_date, "2024-03-12");
    assert_eq!(c.view().date_bounds(), Some(("2024-03-01", "2024-03-20")));
}

#[tokio::test]
async fn test_inverted_dates_are_submitted_as_given() {
    let mut c = controller(FakeApi::ok());
    c.fill_form(TripFields::new("Oslo", "2024-05-10", "2024-05-01", ""));
    c.add_files(media());

    c.submit().await.unwrap();

    let seen = c_api_seen(&c);
    assert_eq!(seen[0].0.start_date, "2024-05-10");
    assert_eq!(seen[0].0.end_date, "2024-05-01");
}

#[tokio::test]
async fn test_export_ignores_checked_items() {
    let mut c = controller(FakeApi::ok());
    c.fill_form(tokyo());
    c.add_files(media());
    c.submit().await.unwrap();

    assert_eq!(c.toggle_item("item-Documents-0"), Some(true));
    assert!(c.view().checklist().unwrap().item("item-Documents-0").unwrap().checked);

    let text = c.export_text().unwrap();
    assert!(text.contains("☐ Passport"));
}

#[tokio::test]
async fn test_fields_set_one_at_a_time() {
    let mut c = controller(FakeApi::ok());
    c.set_destination("Reykjavik, Iceland");
    c.set_start_date("2024-06-01");
    c.set_end_date("2024-06-08");
    c.set_notes("northern lights");
    c.add_files(media());

    c.submit().await.unwrap();

    let seen = c_api_seen(&c);
    assert_eq!(
        seen[0].0,
        TripFields::new(
            "Reykjavik, Iceland",
            "2024-06-01",
            "2024-06-08",
            "northern lights"
        )
    );
    let text = c.export_text().unwrap();
    assert!(text.contains("Destination: Reykjavik, Iceland\n"));
    assert!(text.contains("Travel Dates: 6/1/2024 - 6/8/2024\n"));
}
