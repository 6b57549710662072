//! Request handling through the public service surface.

use std::io::{self, BufReader, Cursor, Read};
use std::sync::Arc;

use insta::assert_snapshot;
use records_api::{Method, RecordsService, Response, status};
use records_core::RecordStore;

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("non-nil error"))
    }
}

fn service() -> RecordsService {
    RecordsService::new(Arc::new(RecordStore::new()))
}

fn post(service: &RecordsService, body: &str) -> Response {
    service.handle(Method::Post, "/records", Cursor::new(body.to_string()))
}

fn get(service: &RecordsService, path: &str) -> Response {
    service.handle(Method::Get, path, io::empty())
}

#[test]
fn post_rejects_wrong_method() {
    let response = service().handle(Method::Get, "/records", io::empty());
    assert_eq!(response.status, status::BAD_REQUEST);
    assert_snapshot!(
        response.to_json().unwrap(),
        @r#"{"errors":["this endpoint works with a POST request, not a GET"]}"#
    );
}

#[test]
fn sorted_rejects_wrong_method() {
    let response = service().handle(Method::Delete, "/records/name", io::empty());
    assert_eq!(response.status, status::BAD_REQUEST);
    assert_eq!(
        response.errors,
        vec!["this endpoint works with a GET request, not a DELETE"]
    );
}

#[test]
fn body_read_failure_is_internal() {
    let service = service();
    let response = service.handle(Method::Post, "/records", BufReader::new(FailingReader));
    assert_eq!(response.status, status::INTERNAL_SERVER_ERROR);
    assert_eq!(response.errors, vec!["unexpected error"]);
    assert!(service.store().is_empty().unwrap());
}

#[test]
fn post_reports_structural_problem() {
    let response = post(&service(), "hey|there|you");
    assert_eq!(response.status, status::BAD_REQUEST);
    assert_eq!(
        response.errors,
        vec!["there were 3 fields when there should have been 5"]
    );
}

#[test]
fn post_reports_mixed_separators() {
    let response = post(&service(), "hey,there buddy");
    assert_eq!(response.status, status::BAD_REQUEST);
    assert_snapshot!(
        response.to_json().unwrap(),
        @r#"{"errors":["there should only be one type of separator but multiple (',', ' ') were specified"]}"#
    );
}

#[test]
fn post_reports_every_field_problem() {
    let response = post(&service(), "Grey,Gandalf,Male,,1100-04-");
    assert_eq!(response.status, status::BAD_REQUEST);
    assert_eq!(
        response.errors,
        vec![
            "favorite color (field 4) must be a non-empty string",
            "date of birth (field 5) must have the format YYYY-MM-DD",
        ]
    );
}

#[test]
fn post_stores_first_line_only() {
    let service = service();
    let response = post(
        &service,
        "  Grey,Gandalf,Male,Rainbow,1100-04-03\r\nthis\nis\nignored",
    );
    assert_eq!(response.status, status::OK);
    assert_snapshot!(response.to_json().unwrap(), @"{}");

    let stored = service.store().snapshot().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].to_record_line(), "Grey,Gandalf,Male,Rainbow,04/03/1100");
}

#[test]
fn sorted_listings_do_not_reorder_the_store() {
    let service = service();
    let records = [
        "Avatar,Aang,Male,Light-Orange,1760-12-13",
        "MeatAndSarcasmGuy|Sokka|Male|Blue|1845-10-17",
        "SoFullOfHope Katara Female Blue 1846-09-21",
        "BlindBandit,Toph,Female,Green,1846-03-29",
        "Lee|Zuko|Male|Red|1842-07-04",
        "Crazy Azula Female Blood-Red 1842-12-30",
        "Uncle,Iroh,Male,White,1820-08-24",
    ];
    for record in records {
        assert_eq!(post(&service, record).status, status::OK, "{record}");
    }

    for (path, first) in [
        ("/records/gender", "BlindBandit"),
        ("/records/birthdate", "Avatar"),
        ("/records/name", "Uncle"),
    ] {
        let response = get(&service, path);
        assert_eq!(response.status, status::OK);
        assert_eq!(response.data.len(), records.len());
        assert_eq!(response.data[0].last_name(), first, "{path}");
    }

    let stored = service.store().snapshot().unwrap();
    assert_eq!(stored[0].last_name(), "Avatar");
    assert_eq!(stored[6].last_name(), "Uncle");
}

#[test]
fn listing_serializes_camel_case_records() {
    let service = service();
    post(&service, "Lee|Zuko|Male|Red|1842-07-04");
    assert_snapshot!(
        get(&service, "/records/birthdate").to_json().unwrap(),
        @r#"{"data":[{"lastName":"Lee","firstName":"Zuko","gender":"Male","favoriteColor":"Red","dateOfBirth":"1842-07-04"}]}"#
    );
}

#[test]
fn empty_listing_has_empty_body() {
    let response = get(&service(), "/records/gender");
    assert_eq!(response.status, status::OK);
    assert_eq!(response.to_json().unwrap(), "{}");
}

#[test]
fn health_check_answers_any_method() {
    let service = service();
    assert_eq!(get(&service, "/healthcheck").status, status::OK);
    assert_eq!(
        service.handle(Method::Head, "/healthcheck", io::empty()).status,
        status::OK
    );
}

#[test]
fn unknown_path_is_not_found() {
    let response = get(&service(), "/people");
    assert_eq!(response.status, status::NOT_FOUND);
    assert_eq!(response.errors, vec!["no route for /people"]);
}
