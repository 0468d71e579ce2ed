pub mod validate;

use std::sync::Arc;

use thiserror::Error;

use crate::codegen::generate_code;
use crate::models::{CreateLinkRequest, Link, NewLink, UpdateLinkRequest};
use crate::storage::{Storage, StorageError};

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Invalid values in the following fields: {}.", .0.join(", "))]
    Validation(Vec<&'static str>),
    #[error("Specified short code is already taken!")]
    CodeTaken,
    #[error("A link with that code already exists!")]
    CodeConflict,
    #[error("No link was found with the specified ID!")]
    NotFound,
    #[error("Internal server error")]
    Store(#[source] anyhow::Error),
}

/// Business logic over the link store: code allocation, validation and
/// uniqueness rules for mutations, and code resolution with view counting.
pub struct LinkService {
    storage: Arc<dyn Storage>,
    code_length: usize,
}

impl LinkService {
    pub fn new(storage: Arc<dyn Storage>, code_length: usize) -> Self {
        Self {
            storage,
            code_length,
        }
    }

    /// Resolve the code a new link will be stored under.
    ///
    /// A supplied code is only checked for availability, never regenerated.
    /// Without one, candidates are generated until a free code turns up; any
    /// store failure aborts the loop rather than retrying blindly.
    pub async fn allocate_code(&self, requested: Option<&str>) -> Result<String, LinkError> {
        if let Some(code) = requested {
            let taken = self
                .storage
                .find_by_code(code)
                .await
                .map_err(LinkError::Store)?
                .is_some();
            if taken {
                return Err(LinkError::CodeTaken);
            }
            return Ok(code.to_owned());
        }

        loop {
            let candidate = generate_code(self.code_length);
            let taken = self
                .storage
                .find_by_code(&candidate)
                .await
                .map_err(LinkError::Store)?
                .is_some();
            if !taken {
                return Ok(candidate);
            }
        }
    }

    pub async fn create(&self, request: CreateLinkRequest) -> Result<Link, LinkError> {
        let title = request
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        let original_link = request.original_link.as_deref();
        let requested_code = request
            .link_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let fields = validate::validate_create(title, original_link, requested_code);
        if !fields.is_empty() {
            return Err(LinkError::Validation(fields));
        }

        let link_code = self.allocate_code(requested_code).await?;

        let new_link = NewLink {
            title: title.map(str::to_owned),
            original_link: original_link.unwrap_or_default().to_owned(),
            link_code,
        };

        // The availability check above is only a fast path; a concurrent
        // writer can still win the code, surfacing as a constraint violation.
        match self.storage.insert(&new_link).await {
            Ok(link) => Ok(link),
            Err(StorageError::Conflict) => Err(LinkError::CodeTaken),
            Err(StorageError::Other(e)) => Err(LinkError::Store(e)),
        }
    }

    pub async fn update(&self, id: i64, request: UpdateLinkRequest) -> Result<Link, LinkError> {
        self.storage
            .find_by_id(id)
            .await
            .map_err(LinkError::Store)?
            .ok_or(LinkError::NotFound)?;

        let title = request
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        let link_code = request
            .link_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let fields = validate::validate_update(title, link_code);
        let link_code = match link_code {
            Some(code) if fields.is_empty() => code,
            _ => return Err(LinkError::Validation(fields)),
        };

        if let Some(holder) = self
            .storage
            .find_by_code(link_code)
            .await
            .map_err(LinkError::Store)?
        {
            if holder.id != id {
                return Err(LinkError::CodeConflict);
            }
        }

        match self.storage.update(id, title, link_code).await {
            Ok(Some(link)) => Ok(link),
            Ok(None) => Err(LinkError::NotFound),
            Err(StorageError::Conflict) => Err(LinkError::CodeConflict),
            Err(StorageError::Other(e)) => Err(LinkError::Store(e)),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), LinkError> {
        match self.storage.delete(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(LinkError::NotFound),
            Err(e) => Err(LinkError::Store(e)),
        }
    }

    /// Look up a code and return its redirect target, counting the view.
    ///
    /// The increment runs on a spawned task so the redirect response never
    /// waits on it; the write itself is a single atomic store statement.
    pub async fn resolve(&self, link_code: &str) -> Result<String, LinkError> {
        let link = self
            .storage
            .find_by_code(link_code)
            .await
            .map_err(LinkError::Store)?
            .ok_or(LinkError::NotFound)?;

        let storage = Arc::clone(&self.storage);
        let id = link.id;
        let code = link.link_code.clone();
        tokio::spawn(async move {
            if let Err(err) = storage.increment_views(id).await {
                tracing::warn!(link_code = %code, error = %err, "failed to record view");
            }
        });

        Ok(link.original_link)
    }

    pub async fn list(&self) -> Result<Vec<Link>, LinkError> {
        self.storage.find_all().await.map_err(LinkError::Store)
    }
}
