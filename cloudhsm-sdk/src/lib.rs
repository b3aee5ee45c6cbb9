//! Client library for the Sakura Cloud CloudHSM API.
//!
//! ```ignore
//! use cloudhsm_sdk::client::{CloudHsmApi, CloudHsmOp, HsmClient, PeerApi, PeerOp};
//! use cloudhsm_sdk::config::{ClientConfig, Zone};
//!
//! let config = ClientConfig::new()
//!     .with_zone(Zone::Tk1a)
//!     .with_api_keys(token, secret);
//! let client = HsmClient::new(config)?;
//!
//! let hsm = CloudHsmOp::new(client.clone()).read("110000000001").await?;
//! let peers = PeerOp::new(client, &hsm)?.list().await?;
//! ```

pub mod objects;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod config;
