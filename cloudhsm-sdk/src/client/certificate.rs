//! Client certificate operations, scoped to one partition.

use async_trait::async_trait;
use urlencoding::encode;

use super::error::{GENERIC, NOT_FOUND, UNPROCESSABLE, classify};
use super::{Error, HsmClient, ensure_available};
use crate::objects::Availability;
use crate::objects::certificate::{
    ClientEnvelope, CloudHsmClient, CreateCloudHsmClient, PaginatedClientList,
    UpdateCloudHsmClient,
};
use crate::objects::cloudhsm::CloudHsm;

/// CRUD over the client certificates of one partition.
#[async_trait]
pub trait ClientApi: Send + Sync {
    async fn list(&self) -> Result<Vec<CloudHsmClient>, Error>;
    async fn create(&self, params: ClientCreateParams) -> Result<CloudHsmClient, Error>;
    async fn read(&self, id: &str) -> Result<CloudHsmClient, Error>;
    async fn update(&self, id: &str, params: ClientUpdateParams) -> Result<CloudHsmClient, Error>;
    async fn delete(&self, id: &str) -> Result<(), Error>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientCreateParams {
    pub name: String,
    /// PEM-encoded certificate.
    pub certificate: String,
}

/// Only the name of a registered certificate can change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientUpdateParams {
    pub name: String,
}

/// Client certificate operations for one `available` partition.
#[derive(Debug, Clone)]
pub struct ClientOp {
    client: HsmClient,
    hsm_id: String,
}

impl ClientOp {
    /// Fails with [`Error::Unavailable`] unless `hsm` is `available`.
    ///
    /// Availability is checked once, here; later calls do not re-check it.
    pub fn new(client: HsmClient, hsm: &CloudHsm) -> Result<Self, Error> {
        ensure_available("ClientOp.New", hsm)?;
        Ok(Self {
            client,
            hsm_id: hsm.id.clone(),
        })
    }

    pub fn hsm_id(&self) -> &str {
        &self.hsm_id
    }

    fn collection_path(&self) -> String {
        format!("cloudhsm/cloudhsms/{}/clients/", encode(&self.hsm_id))
    }

    fn resource_path(&self, id: &str) -> String {
        format!("{}{}/", self.collection_path(), encode(id))
    }
}

#[async_trait]
impl ClientApi for ClientOp {
    /// `GET cloudhsm/cloudhsms/{hsm}/clients/`
    async fn list(&self) -> Result<Vec<CloudHsmClient>, Error> {
        const OP: &str = "CloudHSMClient.List";
        let resp: PaginatedClientList = self
            .client
            .get(OP, &self.collection_path())
            .await
            .map_err(|e| classify(OP, GENERIC, e))?;
        Ok(resp.clients)
    }

    /// `POST cloudhsm/cloudhsms/{hsm}/clients/`
    async fn create(&self, params: ClientCreateParams) -> Result<CloudHsmClient, Error> {
        const OP: &str = "CloudHSMClient.Create";
        // The API insists on `precreate` for new certificates.
        let body = ClientEnvelope {
            client: CreateCloudHsmClient {
                name: params.name,
                certificate: params.certificate,
                availability: Availability::Precreate,
            },
        };
        let resp: ClientEnvelope<CloudHsmClient> = self
            .client
            .post(OP, &self.collection_path(), &body)
            .await
            .map_err(|e| classify(OP, UNPROCESSABLE, e))?;
        Ok(resp.client)
    }

    /// `GET cloudhsm/cloudhsms/{hsm}/clients/{id}/`
    async fn read(&self, id: &str) -> Result<CloudHsmClient, Error> {
        const OP: &str = "CloudHSMClient.Read";
        let resp: ClientEnvelope<CloudHsmClient> = self
            .client
            .get(OP, &self.resource_path(id))
            .await
            .map_err(|e| classify(OP, NOT_FOUND, e))?;
        Ok(resp.client)
    }

    /// `PUT cloudhsm/cloudhsms/{hsm}/clients/{id}/`
    async fn update(&self, id: &str, params: ClientUpdateParams) -> Result<CloudHsmClient, Error> {
        const OP: &str = "CloudHSMClient.Update";
        // Availability cannot be updated, but the schema rejects an empty one.
        let body = ClientEnvelope {
            client: UpdateCloudHsmClient {
                name: params.name,
                availability: Availability::Available,
            },
        };
        let resp: ClientEnvelope<CloudHsmClient> = self
            .client
            .put(OP, &self.resource_path(id), &body)
            .await
            .map_err(|e| classify(OP, UNPROCESSABLE, e))?;
        Ok(resp.client)
    }

    /// `DELETE cloudhsm/cloudhsms/{hsm}/clients/{id}/`
    async fn delete(&self, id: &str) -> Result<(), Error> {
        const OP: &str = "CloudHSMClient.Delete";
        self.client
            .delete(OP, &self.resource_path(id))
            .await
            .map_err(|e| classify(OP, NOT_FOUND, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ErrorKind;
    use crate::client::testing::{client_json, cloudhsm, error_body, mock_client};
    use serde_json::json;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    const HSM_ID: &str = "110000000001";

    #[tokio::test]
    async fn test_unavailable_partition_is_rejected() {
        let (server, client) = mock_client().await;

        for availability in ["precreate", "unavailable", "migrating", "failed"] {
            let hsm = cloudhsm(HSM_ID, availability);
            let err = ClientOp::new(client.clone(), &hsm).unwrap_err();
            assert!(err.is_unavailable(), "{availability}");
            assert_eq!(err.operation(), "ClientOp.New");
        }

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path(format!("/cloudhsm/cloudhsms/{HSM_ID}/clients/")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Count": 1,
                "From": 0,
                "Total": 1,
                "Clients": [client_json("client-1", "client-name")],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ClientOp::new(client, &cloudhsm(HSM_ID, "available")).unwrap();
        let clients = api.list().await.unwrap();

        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, "client-1");
        assert_eq!(clients[0].name, "client-name");
        assert!(clients[0].certificate.starts_with("-----BEGIN CERTIFICATE-----"));
    }

    #[tokio::test]
    async fn test_create_forces_precreate() {
        let (server, client) = mock_client().await;
        Mock::given(method("POST"))
            .and(path(format!("/cloudhsm/cloudhsms/{HSM_ID}/clients/")))
            .and(body_json(json!({
                "Client": {
                    "Name": "client-name",
                    "Certificate": "cert-1",
                    "Availability": "precreate",
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "Client": client_json("client-1", "client-name"),
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ClientOp::new(client, &cloudhsm(HSM_ID, "available")).unwrap();
        let created = api
            .create(ClientCreateParams {
                name: "client-name".to_string(),
                certificate: "cert-1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, "client-1");
        assert_eq!(created.name, "client-name");
    }

    #[tokio::test]
    async fn test_read() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path(format!("/cloudhsm/cloudhsms/{HSM_ID}/clients/client-1/")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Client": client_json("client-1", "client-name"),
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ClientOp::new(client, &cloudhsm(HSM_ID, "available")).unwrap();
        let read = api.read("client-1").await.unwrap();
        assert_eq!(read.id, "client-1");
        assert_eq!(read.availability, Availability::Available);
    }

    #[tokio::test]
    async fn test_update_sends_name_and_fixed_availability() {
        let (server, client) = mock_client().await;
        Mock::given(method("PUT"))
            .and(path(format!("/cloudhsm/cloudhsms/{HSM_ID}/clients/client-1/")))
            .and(body_json(json!({
                "Client": { "Name": "updated-name", "Availability": "available" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Client": client_json("client-1", "updated-name"),
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ClientOp::new(client, &cloudhsm(HSM_ID, "available")).unwrap();
        let updated = api
            .update(
                "client-1",
                ClientUpdateParams {
                    name: "updated-name".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "updated-name");
    }

    #[tokio::test]
    async fn test_delete() {
        let (server, client) = mock_client().await;
        Mock::given(method("DELETE"))
            .and(path(format!("/cloudhsm/cloudhsms/{HSM_ID}/clients/client-1/")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let api = ClientOp::new(client, &cloudhsm(HSM_ID, "available")).unwrap();
        api.delete("client-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_status_classification() {
        let cases = [
            ("list", 404, ErrorKind::Internal),
            ("list", 500, ErrorKind::Internal),
            ("create", 422, ErrorKind::InvalidParameter),
            ("create", 400, ErrorKind::Internal),
            ("read", 404, ErrorKind::NotFound),
            ("read", 500, ErrorKind::Internal),
            ("update", 422, ErrorKind::InvalidParameter),
            ("update", 500, ErrorKind::Internal),
            ("delete", 404, ErrorKind::NotFound),
            ("delete", 500, ErrorKind::Internal),
        ];

        for (op, status, expected) in cases {
            let (server, client) = mock_client().await;
            Mock::given(any())
                .respond_with(ResponseTemplate::new(status).set_body_json(error_body("error")))
                .mount(&server)
                .await;
            let api = ClientOp::new(client, &cloudhsm(HSM_ID, "available")).unwrap();

            let err = match op {
                "list" => api.list().await.map(|_| ()),
                "create" => api.create(ClientCreateParams::default()).await.map(|_| ()),
                "read" => api.read("client-1").await.map(|_| ()),
                "update" => api.update("client-1", ClientUpdateParams::default()).await.map(|_| ()),
                "delete" => api.delete("client-1").await,
                _ => unreachable!(),
            }
            .unwrap_err();

            assert_eq!(err.kind(), Some(expected), "{op} {status}");
            assert!(err.operation().starts_with("CloudHSMClient."));
        }
    }
}
