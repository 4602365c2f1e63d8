use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::RwLock;

use super::Role;

#[derive(Debug, thiserror::Error)]
pub enum RoleStoreError {
    #[error("could not read role document {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("role document {path:?} is not a valid role list: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Immutable view of one loaded role document, keyed by lower-cased id.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RoleIndex {
    roles: HashMap<String, Role>,
}

impl RoleIndex {
    pub fn get(&self, key: &str) -> Option<&Role> {
        self.roles.get(&key.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl FromIterator<Role> for RoleIndex {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        let mut roles = HashMap::new();

        for role in iter {
            let key = role.id.to_lowercase();
            if let Some(previous) = roles.insert(key, role) {
                log::warn!("duplicate role id \"{}\", keeping the last entry", previous.id);
            }
        }

        Self { roles }
    }
}

/// Shared role index backed by a JSON document on disk.
///
/// Reloads build a whole new [`RoleIndex`] before swapping it in, so readers
/// holding a snapshot never see a partially replaced index.
#[derive(Debug)]
pub struct RoleStore {
    path: PathBuf,
    index: RwLock<Arc<RoleIndex>>,
}

impl RoleStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, RoleStoreError> {
        let path = path.into();
        let index = Self::parse(&path).await?;

        Ok(Self {
            path,
            index: RwLock::new(Arc::new(index)),
        })
    }

    /// Re-reads the document and replaces the active index wholesale.
    ///
    /// On failure the previous index stays in place.
    pub async fn reload(&self) -> Result<usize, RoleStoreError> {
        let index = Self::parse(&self.path).await?;
        let len = index.len();

        *self.index.write().await = Arc::new(index);

        Ok(len)
    }

    pub async fn snapshot(&self) -> Arc<RoleIndex> {
        self.index.read().await.clone()
    }

    pub async fn lookup(&self, key: &str) -> Option<Role> {
        self.snapshot().await.get(key).cloned()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn parse(path: &Path) -> Result<RoleIndex, RoleStoreError> {
        let raw = tokio::fs::read(path)
            .await
            .map_err(|source| RoleStoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let roles: Vec<Role> =
            serde_json::from_slice(&raw).map_err(|source| RoleStoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let index: RoleIndex = roles.into_iter().collect();
        log::info!("Loaded {} roles from {path:?}", index.len());

        Ok(index)
    }
}
