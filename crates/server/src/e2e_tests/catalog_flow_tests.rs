//! Asset-catalog and lineage flows through the service layer.

use lodestone_domain::type_registry::type_names;
use lodestone_domain::{EntityDetail, InstanceProperties, PropertyValue};
use lodestone_shared::paging::PageRequest;
use lodestone_shared::requests::{NewSoftwareCapabilityRequest, SearchRequest};

use super::{test_app, USER};

async fn seed_entity(
    app: &crate::app::App,
    type_name: &str,
    properties: InstanceProperties,
) -> EntityDetail {
    let mut skeleton = app.helper.new_entity_skeleton(type_name).unwrap();
    skeleton.properties = properties;
    app.repository.add_entity(USER, skeleton).await.unwrap()
}

#[tokio::test]
async fn capability_conversion_example_scenario() {
    // The canonical mapping scenario: qualifiedName and name are modeled,
    // everything else sweeps into extended properties.
    let app = test_app();
    let mut request = NewSoftwareCapabilityRequest {
        qualified_name: "db.schema.table".to_string(),
        display_name: Some("table".to_string()),
        ..Default::default()
    };
    request
        .extended_properties
        .insert("unknownProp".to_string(), "x".to_string());

    let created = app
        .services
        .asset_catalog
        .create_software_capability(USER, request)
        .await
        .unwrap();
    let fetched = app
        .services
        .asset_catalog
        .get_software_capability(USER, created.header.guid)
        .await
        .unwrap();

    assert_eq!(fetched.qualified_name.as_deref(), Some("db.schema.table"));
    assert_eq!(fetched.display_name.as_deref(), Some("table"));
    assert_eq!(fetched.extended_properties.len(), 1);
    assert_eq!(
        fetched.extended_properties.get("unknownProp"),
        Some(&serde_json::Value::String("x".to_string()))
    );
}

#[tokio::test]
async fn capability_search_pages_through_matches() {
    let app = test_app();
    for index in 0..5 {
        app.services
            .asset_catalog
            .create_software_capability(
                USER,
                NewSoftwareCapabilityRequest {
                    qualified_name: format!("cap::engine-{index}"),
                    display_name: Some(format!("engine {index}")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    let mut search = SearchRequest::new("engine");
    search.paging = PageRequest::new(2, 2);
    search.sequencing = lodestone_shared::paging::Sequencing::by_property("qualifiedName");
    let page = app
        .services
        .asset_catalog
        .find_software_capabilities(USER, &search)
        .await
        .unwrap();
    let names: Vec<_> = page
        .iter()
        .filter_map(|c| c.qualified_name.as_deref())
        .collect();
    assert_eq!(names, vec!["cap::engine-2", "cap::engine-3"]);
}

#[tokio::test]
async fn lineage_walk_spans_data_flows_and_process_calls() {
    let app = test_app();
    let source = seed_entity(
        &app,
        type_names::DATA_SET,
        InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string("ds::raw-orders"))
            .with("name", PropertyValue::string("Raw orders")),
    )
    .await;
    let transform = seed_entity(
        &app,
        type_names::PROCESS,
        InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string("proc::transform"))
            .with("name", PropertyValue::string("Transform")),
    )
    .await;
    let publish = seed_entity(
        &app,
        type_names::PROCESS,
        InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string("proc::publish"))
            .with("name", PropertyValue::string("Publish")),
    )
    .await;

    let flow = app
        .helper
        .new_relationship_skeleton(type_names::DATA_FLOW, source.as_proxy(), transform.as_proxy())
        .unwrap();
    app.repository.add_relationship(USER, flow).await.unwrap();
    let mut call = app
        .helper
        .new_relationship_skeleton(
            type_names::PROCESS_CALL,
            transform.as_proxy(),
            publish.as_proxy(),
        )
        .unwrap();
    call.properties = InstanceProperties::new().with("lineNumber", PropertyValue::int(7));
    app.repository.add_relationship(USER, call).await.unwrap();

    let graph = app
        .services
        .lineage
        .lineage_graph(USER, source.guid, Some(5))
        .await
        .unwrap();
    assert_eq!(graph.edges.len(), 2);
    assert_eq!(graph.anchor.unique_name.as_deref(), Some("ds::raw-orders"));
    assert!(!graph.truncated);

    let calls = app
        .services
        .lineage
        .process_calls(USER, transform.guid, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].line_number, Some(7));
    assert_eq!(calls[0].called.unique_name.as_deref(), Some("proc::publish"));
}

#[tokio::test]
async fn related_assets_and_profile_views_compose() {
    let app = test_app();
    let orders = seed_entity(
        &app,
        type_names::DATA_SET,
        InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string("ds::orders"))
            .with("name", PropertyValue::string("Orders")),
    )
    .await;
    let load = seed_entity(
        &app,
        type_names::PROCESS,
        InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string("proc::load"))
            .with("name", PropertyValue::string("Load")),
    )
    .await;
    let flow = app
        .helper
        .new_relationship_skeleton(type_names::DATA_FLOW, load.as_proxy(), orders.as_proxy())
        .unwrap();
    app.repository.add_relationship(USER, flow).await.unwrap();

    let related = app
        .services
        .asset_catalog
        .related_assets(USER, orders.guid, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].asset.display_name.as_deref(), Some("Load"));

    let profile = seed_entity(
        &app,
        type_names::IT_PROFILE,
        InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string("profile::loader"))
            .with("name", PropertyValue::string("Loader engine")),
    )
    .await;
    let identity = seed_entity(
        &app,
        type_names::USER_IDENTITY,
        InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string("identity::loader01"))
            .with("userId", PropertyValue::string("loader01")),
    )
    .await;
    let link = app
        .helper
        .new_relationship_skeleton(
            type_names::PROFILE_IDENTITY,
            profile.as_proxy(),
            identity.as_proxy(),
        )
        .unwrap();
    app.repository.add_relationship(USER, link).await.unwrap();

    let bean = app
        .services
        .asset_catalog
        .get_it_profile(USER, profile.guid)
        .await
        .unwrap();
    assert_eq!(bean.user_identities.len(), 1);
    assert_eq!(bean.user_identities[0].user_id.as_deref(), Some("loader01"));
}
