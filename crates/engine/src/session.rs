//! RecallSession: one application session
//!
//! Wires a backend, the change bus, the contact store and the country
//! preference together from a [`RecallConfig`]. Everything a front end
//! needs hangs off this type; there is no global state.
//!
//! ```text
//! RecallSession
//!   ├── config     RecallConfig
//!   ├── bus        Arc<ChangeBus>
//!   ├── contacts   ContactStore      ─┐
//!   └── country    CountryPreference ─┴─ Arc<dyn KvBackend>
//! ```

use std::path::Path;
use std::sync::Arc;

use phonerecall_core::Result;
use phonerecall_phone::CountryCode;
use phonerecall_storage::{FileBackend, KvBackend, MemoryBackend};

use crate::bus::ChangeBus;
use crate::config::{RecallConfig, CONFIG_FILE_NAME};
use crate::country::CountryPreference;
use crate::game::GameSession;
use crate::store::ContactStore;

/// Backend shared by every component of a session
pub type SharedBackend = Arc<dyn KvBackend>;

/// Config, storage and notification wiring for one session
pub struct RecallSession {
    config: RecallConfig,
    bus: Arc<ChangeBus>,
    contacts: ContactStore<SharedBackend>,
    country: CountryPreference<SharedBackend>,
}

impl RecallSession {
    /// Open a session as described by `config`
    ///
    /// With a `data_dir` the values live in files there; without one they
    /// live in memory for the lifetime of the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the data directory
    /// cannot be created.
    pub fn open(config: RecallConfig) -> Result<Self> {
        config.validate()?;
        let backend: SharedBackend = match &config.data_dir {
            Some(dir) => Arc::new(FileBackend::open(dir)?),
            None => Arc::new(MemoryBackend::new()),
        };
        Self::with_backend(config, backend)
    }

    /// Open a file-backed session rooted at `dir`
    ///
    /// Creates `dir` and a default `phonerecall.toml` in it on first use.
    /// A `data_dir` set in the file overrides `dir` for the value files.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or config file cannot be created,
    /// read or parsed.
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let config_path = dir.join(CONFIG_FILE_NAME);
        RecallConfig::write_default_if_missing(&config_path)?;

        let mut config = RecallConfig::from_file(&config_path)?;
        if config.data_dir.is_none() {
            config.data_dir = Some(dir.to_path_buf());
        }
        Self::open(config)
    }

    /// In-memory session with default settings
    pub fn ephemeral() -> Self {
        let config = RecallConfig::default();
        let fallback = config.fallback_country().unwrap_or_default();
        Self::assemble(config, Arc::new(MemoryBackend::new()), fallback)
    }

    /// Session over a caller-supplied backend
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid.
    pub fn with_backend(config: RecallConfig, backend: SharedBackend) -> Result<Self> {
        config.validate()?;
        let fallback = config.fallback_country()?;
        Ok(Self::assemble(config, backend, fallback))
    }

    fn assemble(config: RecallConfig, backend: SharedBackend, fallback: CountryCode) -> Self {
        let bus = Arc::new(ChangeBus::new());
        let contacts = ContactStore::new(
            Arc::clone(&backend),
            config.contacts_key(),
            Arc::clone(&bus),
        );
        let country = CountryPreference::new(backend, config.country_key(), fallback);

        tracing::info!(
            target: "phonerecall::session",
            namespace = %config.namespace,
            data_dir = ?config.data_dir,
            fallback = %fallback,
            "Opened recall session"
        );
        Self {
            config,
            bus,
            contacts,
            country,
        }
    }

    /// Settings this session was opened with
    pub fn config(&self) -> &RecallConfig {
        &self.config
    }

    /// Bus notified after every persisted contact change
    pub fn bus(&self) -> &Arc<ChangeBus> {
        &self.bus
    }

    /// Contact collection
    pub fn contacts(&self) -> &ContactStore<SharedBackend> {
        &self.contacts
    }

    /// Country preference
    pub fn country_preference(&self) -> &CountryPreference<SharedBackend> {
        &self.country
    }

    /// Current dialing country
    pub fn country(&self) -> CountryCode {
        self.country.get()
    }

    /// Change the dialing country
    pub fn set_country(&self, code: CountryCode) {
        self.country.set(code);
    }

    /// Render `raw` for display in the current country
    pub fn format(&self, raw: &str) -> String {
        phonerecall_phone::format(raw, self.country())
    }

    /// Whether two inputs denote the same number in the current country
    pub fn numbers_match(&self, a: &str, b: &str) -> bool {
        phonerecall_phone::numbers_match(a, b, self.country())
    }

    /// Start a quiz over the current contacts
    pub fn new_game(&self) -> GameSession {
        GameSession::new(self.contacts.list_all())
    }
}

impl std::fmt::Debug for RecallSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecallSession")
            .field("config", &self.config)
            .field("contacts", &self.contacts)
            .field("country", &self.country)
            .finish()
    }
}
