//! Glossary flows through the service layer.

use lodestone_shared::paging::{PageRequest, SequencingOrder};
use lodestone_shared::requests::{
    NewGlossaryRequest, NewGlossaryTermRequest, SearchRequest, UpdateGlossaryTermRequest,
};

use crate::services::ServiceError;

use super::{test_app, DENIED_USER, USER};

fn glossary_request() -> NewGlossaryRequest {
    NewGlossaryRequest {
        qualified_name: "glossary::enterprise".to_string(),
        display_name: Some("Enterprise glossary".to_string()),
        ..Default::default()
    }
}

fn term_request(name: &str) -> NewGlossaryTermRequest {
    NewGlossaryTermRequest {
        qualified_name: format!("term::{name}"),
        display_name: Some(name.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_search_update_delete_lifecycle() {
    let app = test_app();
    let service = &app.services.glossary;

    let glossary = service.create_glossary(USER, glossary_request()).await.unwrap();

    for name in ["customer", "customer-id", "order"] {
        service
            .create_term(USER, glossary.header.guid, term_request(name))
            .await
            .unwrap();
    }

    // Search with sequencing and paging
    let mut search = SearchRequest::new("customer");
    search.sequencing.order = SequencingOrder::Property;
    search.sequencing.property = Some("displayName".to_string());
    search.paging = PageRequest::new(0, 10);
    let found = service.find_terms(USER, &search).await.unwrap();
    let names: Vec<_> = found
        .iter()
        .filter_map(|t| t.display_name.as_deref())
        .collect();
    assert_eq!(names, vec!["customer", "customer-id"]);

    // Merge update keeps the display name
    let term_guid = found[0].header.guid;
    let updated = service
        .update_term(
            USER,
            term_guid,
            UpdateGlossaryTermRequest {
                summary: Some("A paying party".to_string()),
                ..Default::default()
            },
            false,
        )
        .await
        .unwrap();
    assert_eq!(updated.display_name.as_deref(), Some("customer"));
    assert_eq!(updated.summary.as_deref(), Some("A paying party"));

    // Soft delete hides the term from reads and listings
    service.delete_term(USER, term_guid, false).await.unwrap();
    assert!(matches!(
        service.get_term(USER, term_guid).await.unwrap_err(),
        ServiceError::UnknownGuid { .. }
    ));
    let remaining = service
        .terms_for_glossary(USER, glossary.header.guid, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(remaining.len(), 2);
}

#[tokio::test]
async fn denied_users_surface_not_authorized() {
    let app = test_app();
    let err = app
        .services
        .glossary
        .create_glossary(DENIED_USER, glossary_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotAuthorized { .. }));

    let fault = err.fault();
    assert_eq!(fault.message_id, "LODESTONE-OMAS-403-001");
    assert!(fault.message.contains(DENIED_USER));
}

#[tokio::test]
async fn oversized_page_is_refused() {
    let app = test_app();
    let glossary = app
        .services
        .glossary
        .create_glossary(USER, glossary_request())
        .await
        .unwrap();

    let err = app
        .services
        .glossary
        .terms_for_glossary(USER, glossary.header.guid, PageRequest::new(0, 100_000))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidPaging { .. }));
}

#[tokio::test]
async fn extended_properties_survive_create_and_read() {
    let app = test_app();
    let service = &app.services.glossary;
    let glossary = service.create_glossary(USER, glossary_request()).await.unwrap();

    let mut request = term_request("pii");
    request
        .extended_properties
        .insert("sensitivity".to_string(), "restricted".to_string());
    let term = service
        .create_term(USER, glossary.header.guid, request)
        .await
        .unwrap();

    assert_eq!(
        term.extended_properties.get("sensitivity"),
        Some(&serde_json::Value::String("restricted".to_string()))
    );
    // Modeled properties never leak into the extended bag
    assert!(!term.extended_properties.contains_key("qualifiedName"));
}
