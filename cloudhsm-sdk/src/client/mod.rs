//! HTTP client and resource operations for the CloudHSM API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the wire types do not pull in `reqwest`.

mod certificate;
mod cloudhsm;
pub mod error;
mod license;
mod peer;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use certificate::{ClientApi, ClientCreateParams, ClientOp, ClientUpdateParams};
pub use cloudhsm::{CloudHsmApi, CloudHsmCreateParams, CloudHsmOp, CloudHsmUpdateParams};
pub use error::{ApiError, Error, ErrorKind, TransportError};
pub use license::{LicenseApi, LicenseCreateParams, LicenseOp, LicenseUpdateParams};
pub use peer::{PeerApi, PeerCreateParams, PeerOp};
pub use transport::HsmClient;

use crate::objects::{Availability, CloudHsm};

/// Certificate and peer operations require an `available` parent partition.
fn ensure_available(operation: &'static str, hsm: &CloudHsm) -> Result<(), Error> {
    if hsm.availability == Availability::Available {
        return Ok(());
    }
    tracing::debug!(operation, hsm_id = %hsm.id, availability = %hsm.availability, "partition not available");
    Err(Error::Unavailable {
        operation,
        availability: hsm.availability,
    })
}
