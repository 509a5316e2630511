//! Data source API operations.

use grafana_core::types::{DataSource, DataSourceForm, DataSourceId, DataSourceWriteResponse};

use crate::error::Result;
use crate::http::RestClient;

const DATASOURCE_API: &str = "/api/datasources";

#[derive(Debug, Clone, Copy)]
pub struct DataSources<'a> {
    rest: &'a RestClient,
}

impl<'a> DataSources<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn list(&self) -> Result<Vec<DataSource>> {
        self.rest.get(DATASOURCE_API).fetch().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<DataSource> {
        self.rest
            .get(DATASOURCE_API)
            .sub_path("/:id")
            .path_param("id", id)
            .fetch()
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<DataSource> {
        self.rest
            .get(DATASOURCE_API)
            .sub_path("/name/:name")
            .path_param("name", name)
            .fetch()
            .await
    }

    pub async fn id_by_name(&self, name: &str) -> Result<i64> {
        let found: DataSourceId = self
            .rest
            .get(DATASOURCE_API)
            .sub_path("/id/:name")
            .path_param("name", name)
            .fetch()
            .await?;
        Ok(found.id)
    }

    pub async fn create(&self, datasource: &DataSourceForm) -> Result<DataSourceWriteResponse> {
        self.rest.post(DATASOURCE_API).json(datasource).fetch().await
    }

    pub async fn update(
        &self,
        id: i64,
        datasource: &DataSourceForm,
    ) -> Result<DataSourceWriteResponse> {
        self.rest
            .put(DATASOURCE_API)
            .sub_path("/:id")
            .path_param("id", id)
            .json(datasource)
            .fetch()
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.rest
            .delete(DATASOURCE_API)
            .sub_path("/:id")
            .path_param("id", id)
            .execute()
            .await
    }

    pub async fn delete_by_name(&self, name: &str) -> Result<()> {
        self.rest
            .delete(DATASOURCE_API)
            .sub_path("/name/:name")
            .path_param("name", name)
            .execute()
            .await
    }
}
