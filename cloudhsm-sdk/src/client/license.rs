//! Software license operations.

use async_trait::async_trait;
use urlencoding::encode;

use super::error::{GENERIC, NOT_FOUND, UNPROCESSABLE, classify};
use super::{Error, HsmClient};
use crate::objects::cloudhsm::{CloudHsmEnvelope, PaginatedCloudHsmList};
use crate::objects::license::{
    CloudHsmLicense, CreateCloudHsmLicense, LicenseServiceClass, UpdateCloudHsmLicense,
};

const COLLECTION: &str = "cloudhsm/licenses/";

/// CRUD over software licenses. Licenses are not tied to a partition.
#[async_trait]
pub trait LicenseApi: Send + Sync {
    async fn list(&self) -> Result<Vec<CloudHsmLicense>, Error>;
    async fn create(&self, params: LicenseCreateParams) -> Result<CloudHsmLicense, Error>;
    async fn read(&self, id: &str) -> Result<CloudHsmLicense, Error>;
    async fn update(&self, id: &str, params: LicenseUpdateParams) -> Result<CloudHsmLicense, Error>;
    async fn delete(&self, id: &str) -> Result<(), Error>;
}

/// `service_class` defaults to [`LicenseServiceClass::L7`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseCreateParams {
    pub service_class: Option<LicenseServiceClass>,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Full replacement; `None` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseUpdateParams {
    pub service_class: Option<LicenseServiceClass>,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LicenseOp {
    client: HsmClient,
}

impl LicenseOp {
    pub fn new(client: HsmClient) -> Self {
        Self { client }
    }
}

fn resource_path(id: &str) -> String {
    format!("{COLLECTION}{}/", encode(id))
}

#[async_trait]
impl LicenseApi for LicenseOp {
    /// `GET cloudhsm/licenses/`
    async fn list(&self) -> Result<Vec<CloudHsmLicense>, Error> {
        const OP: &str = "License.List";
        let resp: PaginatedCloudHsmList<CloudHsmLicense> = self
            .client
            .get(OP, COLLECTION)
            .await
            .map_err(|e| classify(OP, GENERIC, e))?;
        Ok(resp.cloud_hsms)
    }

    /// `POST cloudhsm/licenses/`
    async fn create(&self, params: LicenseCreateParams) -> Result<CloudHsmLicense, Error> {
        const OP: &str = "License.Create";
        let body = CloudHsmEnvelope {
            cloud_hsm: CreateCloudHsmLicense {
                service_class: params.service_class.unwrap_or_default(),
                name: params.name,
                description: params.description,
                tags: params.tags,
            },
        };
        let resp: CloudHsmEnvelope<CloudHsmLicense> = self
            .client
            .post(OP, COLLECTION, &body)
            .await
            .map_err(|e| classify(OP, UNPROCESSABLE, e))?;
        Ok(resp.cloud_hsm)
    }

    /// `GET cloudhsm/licenses/{id}/`
    async fn read(&self, id: &str) -> Result<CloudHsmLicense, Error> {
        const OP: &str = "License.Read";
        let resp: CloudHsmEnvelope<CloudHsmLicense> = self
            .client
            .get(OP, &resource_path(id))
            .await
            .map_err(|e| classify(OP, NOT_FOUND, e))?;
        Ok(resp.cloud_hsm)
    }

    /// `PUT cloudhsm/licenses/{id}/`
    async fn update(&self, id: &str, params: LicenseUpdateParams) -> Result<CloudHsmLicense, Error> {
        const OP: &str = "License.Update";
        let body = CloudHsmEnvelope {
            cloud_hsm: UpdateCloudHsmLicense {
                service_class: params.service_class.unwrap_or_default(),
                name: params.name,
                description: params.description.unwrap_or_default(),
                tags: params.tags,
            },
        };
        let resp: CloudHsmEnvelope<CloudHsmLicense> = self
            .client
            .put(OP, &resource_path(id), &body)
            .await
            .map_err(|e| classify(OP, UNPROCESSABLE, e))?;
        Ok(resp.cloud_hsm)
    }

    /// `DELETE cloudhsm/licenses/{id}/`
    async fn delete(&self, id: &str) -> Result<(), Error> {
        const OP: &str = "License.Delete";
        self.client
            .delete(OP, &resource_path(id))
            .await
            .map_err(|e| classify(OP, NOT_FOUND, e))?;
        Ok(())
    }
}
