//! Glossary view client.

use std::sync::Arc;

use lodestone_domain::elements::{Glossary, GlossaryTerm};
use lodestone_domain::EntityGuid;
use lodestone_shared::paging::PageRequest;
use lodestone_shared::requests::{
    NewGlossaryRequest, NewGlossaryTermRequest, SearchRequest, UpdateGlossaryTermRequest,
};

use crate::error::ClientError;
use crate::rest::{paging_query, RestClient};

pub struct GlossaryClient {
    rest: Arc<RestClient>,
}

impl GlossaryClient {
    pub(crate) fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }

    pub async fn create_glossary(
        &self,
        request: &NewGlossaryRequest,
    ) -> Result<Glossary, ClientError> {
        self.rest.post_element("glossaries", request).await
    }

    pub async fn list_glossaries(&self, paging: PageRequest) -> Result<Vec<Glossary>, ClientError> {
        self.rest.get_list("glossaries", &paging_query(paging)).await
    }

    pub async fn create_term(
        &self,
        glossary_guid: EntityGuid,
        request: &NewGlossaryTermRequest,
    ) -> Result<GlossaryTerm, ClientError> {
        self.rest
            .post_element(&format!("glossaries/{glossary_guid}/terms"), request)
            .await
    }

    pub async fn get_term(&self, term_guid: EntityGuid) -> Result<GlossaryTerm, ClientError> {
        self.rest.get_element(&format!("terms/{term_guid}"), &[]).await
    }

    pub async fn find_terms(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<GlossaryTerm>, ClientError> {
        self.rest.post_list("terms/by-search-string", request).await
    }

    pub async fn terms_for_glossary(
        &self,
        glossary_guid: EntityGuid,
        paging: PageRequest,
    ) -> Result<Vec<GlossaryTerm>, ClientError> {
        self.rest
            .get_list(
                &format!("glossaries/{glossary_guid}/terms"),
                &paging_query(paging),
            )
            .await
    }

    pub async fn update_term(
        &self,
        term_guid: EntityGuid,
        request: &UpdateGlossaryTermRequest,
        is_replace: bool,
    ) -> Result<GlossaryTerm, ClientError> {
        self.rest
            .put_element(
                &format!("terms/{term_guid}"),
                &[("is_replace", is_replace.to_string())],
                request,
            )
            .await
    }

    pub async fn delete_term(
        &self,
        term_guid: EntityGuid,
        is_purge: bool,
    ) -> Result<(), ClientError> {
        self.rest
            .delete_void(
                &format!("terms/{term_guid}"),
                &[("is_purge", is_purge.to_string())],
            )
            .await
    }
}
