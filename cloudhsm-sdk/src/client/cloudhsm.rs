//! HSM partition operations.

use async_trait::async_trait;
use urlencoding::encode;

use super::error::{GENERIC, NOT_FOUND, UNPROCESSABLE, classify};
use super::{Error, HsmClient};
use crate::objects::Availability;
use crate::objects::cloudhsm::{
    CloudHsm, CloudHsmEnvelope, CreateCloudHsm, PaginatedCloudHsmList, PartitionServiceClass,
    UpdateCloudHsm,
};

const COLLECTION: &str = "cloudhsm/cloudhsms/";

/// CRUD over HSM partitions.
#[async_trait]
pub trait CloudHsmApi: Send + Sync {
    async fn list(&self) -> Result<Vec<CloudHsm>, Error>;
    async fn create(&self, params: CloudHsmCreateParams) -> Result<CloudHsm, Error>;
    async fn read(&self, id: &str) -> Result<CloudHsm, Error>;
    async fn update(&self, id: &str, params: CloudHsmUpdateParams) -> Result<CloudHsm, Error>;
    async fn delete(&self, id: &str) -> Result<(), Error>;
}

/// Parameters for [`CloudHsmApi::create`].
///
/// Availability and service class are chosen by the library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudHsmCreateParams {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub ipv4_network_address: String,
    pub ipv4_prefix_length: u8,
}

/// Parameters for [`CloudHsmApi::update`].
///
/// This is a full replacement: fields left at their default are sent as
/// empty values, and `None` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudHsmUpdateParams {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub ipv4_network_address: String,
    pub ipv4_prefix_length: u8,
}

/// Partition operations backed by an [`HsmClient`].
#[derive(Debug, Clone)]
pub struct CloudHsmOp {
    client: HsmClient,
}

impl CloudHsmOp {
    pub fn new(client: HsmClient) -> Self {
        Self { client }
    }
}

fn resource_path(id: &str) -> String {
    format!("{COLLECTION}{}/", encode(id))
}

#[async_trait]
impl CloudHsmApi for CloudHsmOp {
    /// `GET cloudhsm/cloudhsms/`
    async fn list(&self) -> Result<Vec<CloudHsm>, Error> {
        const OP: &str = "CloudHSM.List";
        let resp: PaginatedCloudHsmList<CloudHsm> = self
            .client
            .get(OP, COLLECTION)
            .await
            .map_err(|e| classify(OP, GENERIC, e))?;
        Ok(resp.cloud_hsms)
    }

    /// `POST cloudhsm/cloudhsms/`
    async fn create(&self, params: CloudHsmCreateParams) -> Result<CloudHsm, Error> {
        const OP: &str = "CloudHSM.Create";
        let body = CloudHsmEnvelope {
            cloud_hsm: CreateCloudHsm {
                name: params.name,
                description: params.description,
                tags: params.tags,
                availability: Availability::Available,
                service_class: PartitionServiceClass::Partition,
                ipv4_network_address: params.ipv4_network_address,
                ipv4_prefix_length: params.ipv4_prefix_length,
            },
        };
        let resp: CloudHsmEnvelope<CloudHsm> = self
            .client
            .post(OP, COLLECTION, &body)
            .await
            .map_err(|e| classify(OP, UNPROCESSABLE, e))?;
        Ok(resp.cloud_hsm)
    }

    /// `GET cloudhsm/cloudhsms/{id}/`
    async fn read(&self, id: &str) -> Result<CloudHsm, Error> {
        const OP: &str = "CloudHSM.Read";
        let resp: CloudHsmEnvelope<CloudHsm> = self
            .client
            .get(OP, &resource_path(id))
            .await
            .map_err(|e| classify(OP, NOT_FOUND, e))?;
        Ok(resp.cloud_hsm)
    }

    /// `PUT cloudhsm/cloudhsms/{id}/`
    async fn update(&self, id: &str, params: CloudHsmUpdateParams) -> Result<CloudHsm, Error> {
        const OP: &str = "CloudHSM.Update";
        let body = CloudHsmEnvelope {
            cloud_hsm: UpdateCloudHsm {
                service_class: PartitionServiceClass::Partition,
                availability: Availability::Available,
                name: params.name,
                description: params.description.unwrap_or_default(),
                tags: params.tags,
                ipv4_network_address: params.ipv4_network_address,
                ipv4_prefix_length: params.ipv4_prefix_length,
            },
        };
        let resp: CloudHsmEnvelope<CloudHsm> = self
            .client
            .put(OP, &resource_path(id), &body)
            .await
            .map_err(|e| classify(OP, UNPROCESSABLE, e))?;
        Ok(resp.cloud_hsm)
    }

    /// `DELETE cloudhsm/cloudhsms/{id}/`
    async fn delete(&self, id: &str) -> Result<(), Error> {
        const OP: &str = "CloudHSM.Delete";
        self.client
            .delete(OP, &resource_path(id))
            .await
            .map_err(|e| classify(OP, NOT_FOUND, e))?;
        Ok(())
    }
}
