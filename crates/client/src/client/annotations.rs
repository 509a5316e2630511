//! Annotation API operations.

use grafana_core::query::AnnotationQuery;
use grafana_core::types::{
    Annotation, CreateAnnotation, CreateGraphiteAnnotation, CreatedAnnotation,
    CreatedGraphiteAnnotation, DeleteAnnotations, UpdateAnnotation,
};

use crate::error::Result;
use crate::http::RestClient;

const ANNOTATION_API: &str = "/api/annotations";

#[derive(Debug, Clone, Copy)]
pub struct Annotations<'a> {
    rest: &'a RestClient,
}

impl<'a> Annotations<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn list(&self, query: &AnnotationQuery) -> Result<Vec<Annotation>> {
        self.rest.get(ANNOTATION_API).query(query).fetch().await
    }

    pub async fn create(&self, annotation: &CreateAnnotation) -> Result<CreatedAnnotation> {
        self.rest.post(ANNOTATION_API).json(annotation).fetch().await
    }

    /// Create an annotation in the Graphite event format.
    pub async fn create_graphite(
        &self,
        annotation: &CreateGraphiteAnnotation,
    ) -> Result<CreatedGraphiteAnnotation> {
        self.rest
            .post(ANNOTATION_API)
            .sub_path("/graphite")
            .json(annotation)
            .fetch()
            .await
    }

    pub async fn update(&self, annotation: &UpdateAnnotation) -> Result<()> {
        self.rest
            .put(ANNOTATION_API)
            .sub_path("/:id")
            .path_param("id", annotation.id)
            .json(annotation)
            .execute()
            .await
    }

    pub async fn delete(&self, annotation_id: i64) -> Result<()> {
        self.rest
            .delete(ANNOTATION_API)
            .sub_path("/:id")
            .path_param("id", annotation_id)
            .execute()
            .await
    }

    /// Delete every annotation matching the filter.
    pub async fn mass_delete(&self, filter: &DeleteAnnotations) -> Result<()> {
        self.rest
            .post(ANNOTATION_API)
            .sub_path("/mass-delete")
            .json(filter)
            .execute()
            .await
    }
}
