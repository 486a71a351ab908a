//! Client contact-detail updates

use std::sync::Arc;

use tracing::info;

use core_kernel::{ClientId, Email, PhoneNumber};

use crate::client::Client;
use crate::error::ClientError;
use crate::ports::ClientRepository;

/// Input for updating a client's name and contact details
#[derive(Debug, Clone)]
pub struct UpdateClientCommand {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Replaces a client's name, email and phone
///
/// Birth date and company identifier are immutable and not part of the
/// command. A change to an email already held by another client is
/// rejected.
pub struct UpdateClientUseCase {
    clients: Arc<dyn ClientRepository>,
}

impl UpdateClientUseCase {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    pub async fn execute(
        &self,
        id: ClientId,
        command: UpdateClientCommand,
    ) -> Result<Client, ClientError> {
        let mut client = self
            .clients
            .find_by_id(id)
            .await?
            .ok_or(ClientError::ClientNotFound(id))?;

        let email = Email::new(&command.email)?;
        let phone = PhoneNumber::new(&command.phone)?;

        if email != client.email && self.clients.exists_by_email(&email).await? {
            return Err(ClientError::DuplicateEmail(email.value().to_string()));
        }

        client.update_info(command.name, email, phone)?;
        self.clients
            .save(&client)
            .await
            .map_err(|e| ClientError::from_conflict(e, client.email.value(), None))?;

        info!(client_id = %client.id, "client updated");
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockRepository;
    use chrono::NaiveDate;

    fn person(email: &str) -> Client {
        Client::person(
            "Jean",
            Email::new(email).unwrap(),
            PhoneNumber::new("+41791234567").unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        )
        .unwrap()
    }

    fn command(email: &str) -> UpdateClientCommand {
        UpdateClientCommand {
            name: "Jean Dupont".to_string(),
            email: email.to_string(),
            phone: "+41799876543".to_string(),
        }
    }

    #[tokio::test]
    async fn test_updates_and_persists() {
        let client = person("jean@example.com");
        let id = client.id;
        let repo = Arc::new(MockRepository::with_clients(vec![client]).await);
        let usecase = UpdateClientUseCase::new(repo.clone());

        let updated = usecase.execute(id, command("new@example.com")).await.unwrap();
        assert_eq!(updated.email.value(), "new@example.com");
        assert_eq!(updated.name, "Jean Dupont");

        let stored = ClientRepository::find_by_id(repo.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.email.value(), "new@example.com");
    }

    #[tokio::test]
    async fn test_keeping_own_email_is_allowed() {
        let client = person("jean@example.com");
        let id = client.id;
        let repo = Arc::new(MockRepository::with_clients(vec![client]).await);
        let usecase = UpdateClientUseCase::new(repo);

        assert!(usecase.execute(id, command("jean@example.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_email_taken_by_other_client_rejected() {
        let first = person("jean@example.com");
        let second = person("luca@example.com");
        let second_id = second.id;
        let repo = Arc::new(MockRepository::with_clients(vec![first, second]).await);
        let usecase = UpdateClientUseCase::new(repo);

        let result = usecase.execute(second_id, command("jean@example.com")).await;
        assert!(matches!(result, Err(ClientError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_unknown_client_is_not_found() {
        let repo = Arc::new(MockRepository::new());
        let usecase = UpdateClientUseCase::new(repo);
        let result = usecase
            .execute(ClientId::new_v7(), command("jean@example.com"))
            .await;
        assert!(matches!(result, Err(ClientError::ClientNotFound(_))));
    }
}
