use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;

use super::error_response;
use crate::modules::cv::application::ports::incoming::PageQuery;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListCvsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
}

/// Public listing; the page object itself is the response body.
#[get("/api/cvs")]
pub async fn get_cvs_handler(
    query: web::Query<ListCvsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let page_query = PageQuery {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(10),
        search: query.search.unwrap_or_default(),
    };

    match data.cv_engine.find_all(page_query).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_stubs::{app_state, StubCvEngine};
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::cv::application::ports::incoming::CvPage;
    use crate::modules::cv::domain::entities::test_fixtures::sample_record;

    #[actix_web::test]
    async fn list_response_is_the_bare_page_envelope() {
        let state = app_state(StubCvEngine {
            find_all: Some(Ok(CvPage {
                data: vec![sample_record()],
                total: 13,
                page: 2,
                limit: 10,
                total_pages: 2,
            })),
            ..Default::default()
        });

        let app =
            test::init_service(App::new().app_data(state).service(get_cvs_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/cvs?page=2&limit=10&search=dupont")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["total"], 13);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["data"][0]["personalInfo"]["firstName"], "Jean");
        // Not wrapped in {success, message, data: {...}}.
        assert!(body.get("success").is_none());
    }

    #[actix_web::test]
    async fn listing_requires_no_subject_header() {
        let state = app_state(StubCvEngine {
            find_all: Some(Ok(CvPage {
                data: vec![],
                total: 0,
                page: 1,
                limit: 10,
                total_pages: 0,
            })),
            ..Default::default()
        });

        let app =
            test::init_service(App::new().app_data(state).service(get_cvs_handler)).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/cvs").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
