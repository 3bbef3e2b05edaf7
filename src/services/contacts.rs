// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contacts and categories endpoints of the REST API.

use crate::models::contact::{Category, Contact, NewContact, OrderBy};
use crate::services::http_client::{HttpClient, HttpError};

/// Remote operations the UI depends on. Implemented over HTTP in production
/// and by in-memory fakes in tests.
pub trait ContactsBackend: Send + Sync {
    /// `GET /contacts?orderBy=..`
    fn list_contacts(&self, order_by: OrderBy) -> Result<Vec<Contact>, HttpError>;

    /// `POST /contacts`. Servers that answer with an empty body yield `None`.
    fn create_contact(&self, contact: &NewContact) -> Result<Option<Contact>, HttpError>;

    /// `GET /categories`
    fn list_categories(&self) -> Result<Vec<Category>, HttpError>;
}

/// HTTP-backed implementation of [`ContactsBackend`].
#[derive(Clone, Debug)]
pub struct ContactsService {
    http: HttpClient,
}

impl ContactsService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl ContactsBackend for ContactsService {
    fn list_contacts(&self, order_by: OrderBy) -> Result<Vec<Contact>, HttpError> {
        self.http.get(&format!("/contacts?orderBy={}", order_by.as_str()))
    }

    fn create_contact(&self, contact: &NewContact) -> Result<Option<Contact>, HttpError> {
        self.http.post("/contacts", Some(contact))
    }

    fn list_categories(&self) -> Result<Vec<Category>, HttpError> {
        self.http.get("/categories")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::RecordId;
    use httpmock::prelude::*;
    use serde_json::json;
    use url::Url;

    fn service_for(server: &MockServer) -> ContactsService {
        ContactsService::new(HttpClient::new(&Url::parse(&server.base_url()).unwrap()))
    }

    #[test]
    fn list_contacts_passes_order_parameter() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/contacts")
                .query_param("orderBy", "desc");
            then.status(200).json_body(json!([
                {"id": 2, "name": "Bob", "email": null, "phone": null, "category_id": null},
                {"id": 1, "name": "Ann", "email": "a@b.com", "phone": "1234"}
            ]));
        });

        let contacts = service_for(&server).list_contacts(OrderBy::Desc).unwrap();

        mock.assert();
        let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Ann"]);
    }

    #[test]
    fn create_contact_posts_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/contacts").json_body(json!({
                "name": "Ann",
                "email": "a@b.com",
                "phone": "(11) 98765-4321",
                "category_id": "c-1"
            }));
            then.status(200).json_body(json!({
                "id": "x-1",
                "name": "Ann",
                "email": "a@b.com",
                "phone": "(11) 98765-4321",
                "category_id": "c-1"
            }));
        });

        let body = NewContact::new(
            "Ann",
            "a@b.com",
            "(11) 98765-4321",
            Some(RecordId::new("c-1")),
        );
        let created = service_for(&server).create_contact(&body).unwrap();

        mock.assert();
        assert_eq!(created.map(|c| c.id), Some(RecordId::new("x-1")));
    }

    #[test]
    fn list_categories_propagates_http_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/categories");
            then.status(503).json_body(json!({"message": "maintenance"}));
        });

        let err = service_for(&server).list_categories().unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert!(err.to_string().contains("maintenance"));
    }
}
