//! Subcommands, one per SDK operation.

use std::path::PathBuf;

use clap::Subcommand;
use cloudhsm_sdk::client::{
    ClientApi, ClientCreateParams, ClientOp, ClientUpdateParams, CloudHsmApi,
    CloudHsmCreateParams, CloudHsmOp, CloudHsmUpdateParams, HsmClient, LicenseApi,
    LicenseCreateParams, LicenseOp, LicenseUpdateParams, PeerApi, PeerCreateParams, PeerOp,
};
use cloudhsm_sdk::objects::LicenseServiceClass;
use serde::Serialize;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage HSM partitions
    #[command(subcommand)]
    Hsm(HsmCommand),

    /// Manage the client certificates of a partition
    Client {
        /// Partition ID
        #[arg(long, env = "SAKURACLOUD_CLOUDHSM_ID")]
        hsm: String,
        #[command(subcommand)]
        command: ClientCommand,
    },

    /// Manage the peers of a partition
    Peer {
        /// Partition ID
        #[arg(long, env = "SAKURACLOUD_CLOUDHSM_ID")]
        hsm: String,
        #[command(subcommand)]
        command: PeerCommand,
    },

    /// Manage software licenses
    #[command(subcommand)]
    License(LicenseCommand),
}

/// Partition fields shared by create and update.
#[derive(clap::Args, Debug)]
pub struct HsmFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: Option<String>,
    /// Repeatable
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// e.g. 172.16.0.0
    #[arg(long)]
    network: String,
    #[arg(long, default_value_t = 28)]
    prefix_length: u8,
}

#[derive(Subcommand, Debug)]
pub enum HsmCommand {
    List,
    Read { id: String },
    Create(HsmFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: HsmFields,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    List,
    Read {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        /// Path to a PEM-encoded certificate
        #[arg(long)]
        certificate: PathBuf,
    },
    Update {
        id: String,
        #[arg(long)]
        name: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PeerCommand {
    List,
    Create {
        #[arg(long)]
        router_id: String,
        #[arg(long, env = "CLOUDHSM_PEER_SECRET_KEY", hide_env_values = true)]
        secret_key: String,
    },
    Delete {
        id: String,
    },
}

/// License fields shared by create and update.
#[derive(clap::Args, Debug)]
pub struct LicenseFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Defaults to l7
    #[arg(long)]
    service_class: Option<LicenseServiceClass>,
}

#[derive(Subcommand, Debug)]
pub enum LicenseCommand {
    List,
    Read { id: String },
    Create(LicenseFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: LicenseFields,
    },
    Delete { id: String },
}

/// Execute `command` against the API, printing results to stdout as JSON.
pub async fn run(command: Command, client: HsmClient) -> anyhow::Result<()> {
    match command {
        Command::Hsm(command) => run_hsm(command, CloudHsmOp::new(client)).await,
        Command::Client { hsm, command } => {
            let hsm = CloudHsmOp::new(client.clone()).read(&hsm).await?;
            run_client(command, ClientOp::new(client, &hsm)?).await
        }
        Command::Peer { hsm, command } => {
            let hsm = CloudHsmOp::new(client.clone()).read(&hsm).await?;
            run_peer(command, PeerOp::new(client, &hsm)?).await
        }
        Command::License(command) => run_license(command, LicenseOp::new(client)).await,
    }
}

async fn run_hsm(command: HsmCommand, api: impl CloudHsmApi) -> anyhow::Result<()> {
    match command {
        HsmCommand::List => print_json(&api.list().await?),
        HsmCommand::Read { id } => print_json(&api.read(&id).await?),
        HsmCommand::Create(fields) => {
            let created = api
                .create(CloudHsmCreateParams {
                    name: fields.name,
                    description: fields.description,
                    tags: fields.tags,
                    ipv4_network_address: fields.network,
                    ipv4_prefix_length: fields.prefix_length,
                })
                .await?;
            tracing::info!(id = %created.id, "Partition created");
            print_json(&created)
        }
        HsmCommand::Update { id, fields } => {
            let params = CloudHsmUpdateParams {
                name: fields.name,
                description: fields.description,
                tags: fields.tags,
                ipv4_network_address: fields.network,
                ipv4_prefix_length: fields.prefix_length,
            };
            print_json(&api.update(&id, params).await?)
        }
        HsmCommand::Delete { id } => {
            api.delete(&id).await?;
            tracing::info!(%id, "Partition deleted");
            Ok(())
        }
    }
}

async fn run_client(command: ClientCommand, api: impl ClientApi) -> anyhow::Result<()> {
    match command {
        ClientCommand::List => print_json(&api.list().await?),
        ClientCommand::Read { id } => print_json(&api.read(&id).await?),
        ClientCommand::Create { name, certificate } => {
            let certificate = tokio::fs::read_to_string(&certificate).await?;
            let created = api.create(ClientCreateParams { name, certificate }).await?;
            tracing::info!(id = %created.id, "Client certificate registered");
            print_json(&created)
        }
        ClientCommand::Update { id, name } => {
            print_json(&api.update(&id, ClientUpdateParams { name }).await?)
        }
        ClientCommand::Delete { id } => {
            api.delete(&id).await?;
            tracing::info!(%id, "Client certificate deleted");
            Ok(())
        }
    }
}

async fn run_peer(command: PeerCommand, api: impl PeerApi) -> anyhow::Result<()> {
    match command {
        PeerCommand::List => print_json(&api.list().await?),
        PeerCommand::Create {
            router_id,
            secret_key,
        } => {
            api.create(PeerCreateParams {
                router_id: router_id.clone(),
                secret_key,
            })
            .await?;
            tracing::info!(%router_id, "Peer created");
            Ok(())
        }
        PeerCommand::Delete { id } => {
            api.delete(&id).await?;
            tracing::info!(%id, "Peer deleted");
            Ok(())
        }
    }
}

async fn run_license(command: LicenseCommand, api: impl LicenseApi) -> anyhow::Result<()> {
    match command {
        LicenseCommand::List => print_json(&api.list().await?),
        LicenseCommand::Read { id } => print_json(&api.read(&id).await?),
        LicenseCommand::Create(fields) => {
            let created = api
                .create(LicenseCreateParams {
                    service_class: fields.service_class,
                    name: fields.name,
                    description: fields.description,
                    tags: fields.tags,
                })
                .await?;
            tracing::info!(id = %created.id, "License created");
            print_json(&created)
        }
        LicenseCommand::Update { id, fields } => {
            let params = LicenseUpdateParams {
                service_class: fields.service_class,
                name: fields.name,
                description: fields.description,
                tags: fields.tags,
            };
            print_json(&api.update(&id, params).await?)
        }
        LicenseCommand::Delete { id } => {
            api.delete(&id).await?;
            tracing::info!(%id, "License deleted");
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cloudhsm_sdk::client::Error;
    use cloudhsm_sdk::objects::CloudHsmPeer;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingPeers {
        created: Arc<Mutex<Vec<(String, String)>>>,
        deleted: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl PeerApi for RecordingPeers {
        async fn list(&self) -> Result<Vec<CloudHsmPeer>, Error> {
            Ok(vec![])
        }

        async fn create(&self, params: PeerCreateParams) -> Result<(), Error> {
            self.created
                .lock()
                .unwrap()
                .push((params.router_id, params.secret_key));
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), Error> {
            self.deleted.lock().unwrap().push(id.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_peer_commands_reach_the_api() {
        let peers = RecordingPeers::default();

        run_peer(
            PeerCommand::Create {
                router_id: "router-1".to_string(),
                secret_key: "psk".to_string(),
            },
            peers.clone(),
        )
        .await
        .unwrap();
        run_peer(PeerCommand::Delete { id: "router-1".to_string() }, peers.clone())
            .await
            .unwrap();

        assert_eq!(
            *peers.created.lock().unwrap(),
            vec![("router-1".to_string(), "psk".to_string())]
        );
        assert_eq!(*peers.deleted.lock().unwrap(), vec!["router-1".to_string()]);
    }

    #[test]
    fn test_parse_license_create() {
        use clap::Parser;

        #[derive(Parser)]
        struct Cli {
            #[command(subcommand)]
            command: Command,
        }

        let cli = Cli::parse_from([
            "cloudhsm", "license", "create", "--name", "lic", "--tag", "a", "--tag", "b",
            "--service-class", "l7",
        ]);
        match cli.command {
            Command::License(LicenseCommand::Create(fields)) => {
                assert_eq!(fields.name, "lic");
                assert_eq!(fields.tags, vec!["a", "b"]);
                assert_eq!(fields.service_class, Some(LicenseServiceClass::L7));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
