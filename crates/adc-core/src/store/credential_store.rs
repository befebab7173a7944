//! Enumeration and mutation of the store directory

use crate::config::StoreConfig;
use crate::credential::{CredentialParser, CredentialRecord};
use crate::error::{AdcError, AdcResult};
use crate::resolver::NameResolver;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for `CredentialStore::add_with`
#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions {
    /// Replace a stored file that has the same base name
    pub overwrite: bool,
}

impl AddOptions {
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Directory of service-account keys plus the default user-account file
#[derive(Debug, Clone)]
pub struct CredentialStore {
    config: StoreConfig,
}

impl CredentialStore {
    /// Create a store over the given configuration
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Create a store with default paths under `~/.config`
    pub fn with_defaults() -> Self {
        Self::new(StoreConfig::default())
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Create the store directory (and any missing parents)
    pub fn ensure_initialized(&self) -> AdcResult<()> {
        let dir = self.config.store_dir();
        fs::create_dir_all(dir).map_err(|e| AdcError::store_write_failed(dir, e.to_string()))?;
        debug!("Credential store ready at {}", dir.display());
        Ok(())
    }

    /// Load every credential, sorted by canonical name
    ///
    /// Fails as a whole if any stored file is malformed.
    pub fn list(&self) -> AdcResult<Vec<CredentialRecord>> {
        let dir = self.config.store_dir();
        let mut records = Vec::new();

        for path in self.stored_files()? {
            let bytes = fs::read(&path)
                .map_err(|e| AdcError::store_unavailable(&path, e.to_string()))?;
            debug!("Loaded stored credential {}", path.display());
            records.push(CredentialParser::parse(&bytes, path)?);
        }

        if let Some(record) =
            CredentialParser::parse_default_file(self.config.default_credential_path())?
        {
            records.push(record);
        }

        records.sort_by(|a, b| {
            a.canonical_name()
                .cmp(&b.canonical_name())
                .then_with(|| a.source_path().cmp(b.source_path()))
        });

        debug!("Listed {} credentials from {}", records.len(), dir.display());
        Ok(records)
    }

    /// Resolve a name or unique prefix against a fresh listing
    pub fn find(&self, name: &str) -> AdcResult<Option<CredentialRecord>> {
        let records = self.list()?;
        Ok(NameResolver::resolve_by_prefix(&records, name)?.cloned())
    }

    /// Copy a credential file into the store, rejecting collisions
    pub fn add(&self, source: &Path) -> AdcResult<CredentialRecord> {
        self.add_with(source, AddOptions::default())
    }

    /// Copy a credential file into the store
    ///
    /// The source is validated before anything is written, so a file that
    /// would break `list` never enters the store. The copy goes through a
    /// temporary file and a rename; the caller's file is left untouched.
    pub fn add_with(&self, source: &Path, options: AddOptions) -> AdcResult<CredentialRecord> {
        let bytes =
            fs::read(source).map_err(|e| AdcError::source_unreadable(source, e.to_string()))?;
        let incoming = CredentialParser::parse(&bytes, source)?;

        if incoming.is_user_account() {
            return Err(AdcError::immutable(
                incoming.canonical_name(),
                "user-account credentials are owned by the external login flow and cannot be added",
            ));
        }

        let file_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.starts_with('.'))
            .ok_or_else(|| {
                AdcError::invalid_input(format!(
                    "{} has no usable file name",
                    source.display()
                ))
            })?;
        let destination = self.config.stored_path(file_name);

        self.check_collision(&incoming, &destination, options)?;
        self.write_atomically(&destination, &bytes)?;
        info!(
            "Added credential {} as {}",
            incoming.canonical_name(),
            destination.display()
        );

        let stored = fs::read(&destination)
            .map_err(|e| AdcError::store_unavailable(&destination, e.to_string()))?;
        CredentialParser::parse(&stored, destination)
    }

    /// Delete a stored credential file
    ///
    /// The user account and any file living outside the store directory are
    /// refused with `ImmutableCredential`.
    pub fn remove(&self, record: &CredentialRecord) -> AdcResult<()> {
        if record.is_user_account() {
            return Err(AdcError::immutable(
                record.canonical_name(),
                "the user-account credential is managed by the external login flow",
            ));
        }
        if !self.owns(record.source_path()) {
            return Err(AdcError::immutable(
                record.canonical_name(),
                format!(
                    "{} is not inside the store directory",
                    record.source_path().display()
                ),
            ));
        }

        fs::remove_file(record.source_path())
            .map_err(|e| AdcError::store_write_failed(record.source_path(), e.to_string()))?;
        info!(
            "Removed credential {} ({})",
            record.canonical_name(),
            record.source_path().display()
        );
        Ok(())
    }

    /// Regular, non-hidden files directly inside the store directory
    fn stored_files(&self) -> AdcResult<Vec<PathBuf>> {
        let dir = self.config.store_dir();
        let unavailable = |e: io::Error| AdcError::store_unavailable(dir, e.to_string());

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(unavailable)? {
            let entry = entry.map_err(unavailable)?;
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if hidden {
                continue;
            }
            // Follows symlinks, so a linked key file still counts.
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => files.push(entry.path()),
                Ok(_) => debug!("Skipping non-file entry {}", entry.path().display()),
                Err(e) => return Err(AdcError::store_unavailable(entry.path(), e.to_string())),
            }
        }
        Ok(files)
    }

    fn check_collision(
        &self,
        incoming: &CredentialRecord,
        destination: &Path,
        options: AddOptions,
    ) -> AdcResult<()> {
        let name = incoming.canonical_name();

        if destination.exists() && !options.overwrite {
            return Err(AdcError::name_collision(name, destination));
        }

        // A second file with the same canonical name would make the name
        // unresolvable, so this is refused even with `overwrite`.
        let clash = self
            .list()?
            .into_iter()
            .find(|r| r.canonical_name() == name && r.source_path() != destination);
        if let Some(existing) = clash {
            return Err(AdcError::name_collision(name, existing.source_path()));
        }

        Ok(())
    }

    fn write_atomically(&self, destination: &Path, bytes: &[u8]) -> AdcResult<()> {
        let file_name = destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let temp = self
            .config
            .stored_path(&format!(".{}.{}.tmp", file_name, std::process::id()));

        let result = fs::write(&temp, bytes).and_then(|()| fs::rename(&temp, destination));
        if let Err(e) = result {
            let _ = fs::remove_file(&temp);
            return Err(AdcError::store_write_failed(destination, e.to_string()));
        }
        Ok(())
    }

    fn owns(&self, path: &Path) -> bool {
        path.parent()
            .is_some_and(|parent| same_dir(parent, self.config.store_dir()))
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
