//! Client registration

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use core_kernel::{CompanyIdentifier, Email, PhoneNumber};

use crate::client::Client;
use crate::error::ClientError;
use crate::ports::ClientRepository;

/// Input for registering a new client
#[derive(Debug, Clone)]
pub enum CreateClientCommand {
    Person {
        name: String,
        email: String,
        phone: String,
        birth_date: NaiveDate,
    },
    Company {
        name: String,
        email: String,
        phone: String,
        company_identifier: String,
    },
}

/// Registers a person or company client
///
/// Duplicate email, and for companies duplicate identifier, is rejected
/// before the write; the store's unique constraints remain authoritative
/// if a concurrent insert slips through the check.
pub struct CreateClientUseCase {
    clients: Arc<dyn ClientRepository>,
}

impl CreateClientUseCase {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    pub async fn execute(&self, command: CreateClientCommand) -> Result<Client, ClientError> {
        let client = match command {
            CreateClientCommand::Person {
                name,
                email,
                phone,
                birth_date,
            } => {
                let email = Email::new(&email)?;
                let phone = PhoneNumber::new(&phone)?;
                self.ensure_email_free(&email).await?;
                Client::person(name, email, phone, birth_date)?
            }
            CreateClientCommand::Company {
                name,
                email,
                phone,
                company_identifier,
            } => {
                let email = Email::new(&email)?;
                let phone = PhoneNumber::new(&phone)?;
                let identifier = CompanyIdentifier::new(&company_identifier)?;
                self.ensure_email_free(&email).await?;
                if self.clients.exists_by_company_identifier(&identifier).await? {
                    return Err(ClientError::DuplicateIdentifier(
                        identifier.value().to_string(),
                    ));
                }
                Client::company(name, email, phone, identifier)?
            }
        };

        let identifier = match &client.kind {
            crate::client::ClientKind::Company { identifier } => Some(identifier.value().to_string()),
            crate::client::ClientKind::Person { .. } => None,
        };
        self.clients.save(&client).await.map_err(|e| {
            ClientError::from_conflict(e, client.email.value(), identifier.as_deref())
        })?;

        info!(client_id = %client.id, client_type = %client.client_type(), "client created");
        Ok(client)
    }

    async fn ensure_email_free(&self, email: &Email) -> Result<(), ClientError> {
        if self.clients.exists_by_email(email).await? {
            return Err(ClientError::DuplicateEmail(email.value().to_string()));
        }
        Ok(())
    }
}
