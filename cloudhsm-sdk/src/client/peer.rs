//! Peer (VPN router) operations, scoped to one partition.

use async_trait::async_trait;
use urlencoding::encode;

use super::error::{NOT_FOUND, UNPROCESSABLE, classify};
use super::{Error, HsmClient, ensure_available};
use crate::objects::cloudhsm::CloudHsm;
use crate::objects::peer::{CloudHsmPeer, CreateCloudHsmPeer, PeerEnvelope, PeerList};

/// Peer management for one partition.
#[async_trait]
pub trait PeerApi: Send + Sync {
    async fn list(&self) -> Result<Vec<CloudHsmPeer>, Error>;
    async fn create(&self, params: PeerCreateParams) -> Result<(), Error>;
    async fn delete(&self, id: &str) -> Result<(), Error>;
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct PeerCreateParams {
    /// Router identifier; becomes the peer ID.
    pub router_id: String,
    /// Pre-shared key. Write-only.
    pub secret_key: String,
}

impl std::fmt::Debug for PeerCreateParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeerCreateParams")
            .field("router_id", &self.router_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Peer operations for one `available` partition.
#[derive(Debug, Clone)]
pub struct PeerOp {
    client: HsmClient,
    hsm_id: String,
}

impl PeerOp {
    /// Fails with [`Error::Unavailable`] unless `hsm` is `available`.
    pub fn new(client: HsmClient, hsm: &CloudHsm) -> Result<Self, Error> {
        ensure_available("PeerOp.New", hsm)?;
        Ok(Self {
            client,
            hsm_id: hsm.id.clone(),
        })
    }

    pub fn hsm_id(&self) -> &str {
        &self.hsm_id
    }

    fn collection_path(&self) -> String {
        format!("cloudhsm/cloudhsms/{}/peers/", encode(&self.hsm_id))
    }
}

#[async_trait]
impl PeerApi for PeerOp {
    /// `GET cloudhsm/cloudhsms/{hsm}/peers/`
    async fn list(&self) -> Result<Vec<CloudHsmPeer>, Error> {
        const OP: &str = "Peer.List";
        let resp: PeerList = self
            .client
            .get(OP, &self.collection_path())
            .await
            .map_err(|e| classify(OP, NOT_FOUND, e))?;
        Ok(resp.peers)
    }

    /// `POST cloudhsm/cloudhsms/{hsm}/peers/`
    ///
    /// The API answers without the assigned identifier. Callers that need it
    /// must [`list`](PeerApi::list) before and after and diff the results.
    async fn create(&self, params: PeerCreateParams) -> Result<(), Error> {
        const OP: &str = "Peer.Create";
        let body = PeerEnvelope {
            peer: CreateCloudHsmPeer {
                id: params.router_id,
                secret_key: params.secret_key,
            },
        };
        self.client
            .post_discarding(OP, &self.collection_path(), &body)
            .await
            .map_err(|e| classify(OP, UNPROCESSABLE, e))?;
        Ok(())
    }

    /// `DELETE cloudhsm/cloudhsms/{hsm}/peers/{id}/`
    async fn delete(&self, id: &str) -> Result<(), Error> {
        const OP: &str = "Peer.Delete";
        let path = format!("{}{}/", self.collection_path(), encode(id));
        self.client
            .delete(OP, &path)
            .await
            .map_err(|e| classify(OP, NOT_FOUND, e))?;
        Ok(())
    }
}
