//! Lookup of collations by ID, name and charset.

use std::collections::{BTreeMap, HashMap};

use crate::charset::Charset;
use crate::collation::{Collation, CollationId};
use crate::error::{Error, Result};
use crate::options::{LogSettings, RegistryOptions};

/// Collects collations during startup. Consumed by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    options: RegistryOptions,
    collations: BTreeMap<CollationId, &'static dyn Collation>,
    names: HashMap<String, CollationId>,
    defaults: HashMap<Charset, CollationId>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Registers `collation`, optionally as the default collation of its charset.
    ///
    /// Fails if the ID is the reserved `0`, if the ID or (case-insensitive) name is
    /// already taken, or if the charset already has a default.
    pub fn register(
        &mut self,
        collation: &'static dyn Collation,
        is_charset_default: bool,
    ) -> Result<&mut Self> {
        let id = collation.id();
        let name = collation.name();
        let charset = collation.charset();

        if id.0 == 0 {
            return Err(Error::InvalidId {
                name: name.to_owned(),
            });
        }

        if let Some(existing) = self.collations.get(&id) {
            return Err(Error::DuplicateId {
                id,
                existing: existing.name().to_owned(),
                name: name.to_owned(),
            });
        }

        let key = name.to_ascii_lowercase();

        if self.names.contains_key(&key) {
            return Err(Error::DuplicateName(name.to_owned()));
        }

        if is_charset_default {
            if let Some(existing) = self.defaults.get(&charset) {
                return Err(Error::DuplicateDefault {
                    charset,
                    existing: self.collations[existing].name().to_owned(),
                    name: name.to_owned(),
                });
            }

            self.defaults.insert(charset, id);
        }

        self.collations.insert(id, collation);
        self.names.insert(key, id);

        registry_event!(
            self.options.log_settings.registrations_level,
            id = id.0,
            collation = name,
            charset = %charset,
            is_charset_default,
            "registered collation"
        );

        Ok(self)
    }

    /// Finishes registration and resolves the server default collation.
    pub fn build(self) -> Result<Registry> {
        let server_default = self.resolve_server_default()?;

        let registry = Registry {
            collations: self.collations,
            names: self.names,
            defaults: self.defaults,
            server_default,
            log_settings: self.options.log_settings,
        };

        registry_event!(
            registry.log_settings.registrations_level,
            collations = registry.len(),
            server_default = ?registry.server_default().map(|c| c.name()),
            "collation registry built"
        );

        Ok(registry)
    }

    fn resolve_server_default(&self) -> Result<Option<CollationId>> {
        let charset = self.options.server_charset;

        let Some(name) = &self.options.server_collation else {
            let charset = charset.unwrap_or(Charset::Latin1);
            return Ok(self.defaults.get(&charset).copied());
        };

        let id = *self
            .names
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| Error::CollationNotFound(name.clone()))?;

        let actual = self.collations[&id].charset();

        match charset {
            Some(expected) if expected != actual => Err(Error::CharsetMismatch {
                collation: name.clone(),
                expected,
                actual,
            }),
            _ => Ok(Some(id)),
        }
    }
}

/// An immutable set of collations, indexed by ID, name and charset.
///
/// Build one at startup with [`RegistryBuilder`] and share it; lookups never mutate.
#[derive(Debug)]
pub struct Registry {
    collations: BTreeMap<CollationId, &'static dyn Collation>,
    names: HashMap<String, CollationId>,
    defaults: HashMap<Charset, CollationId>,
    server_default: Option<CollationId>,
    log_settings: LogSettings,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Looks up a collation by its MySQL ID.
    pub fn get(&self, id: CollationId) -> Option<&'static dyn Collation> {
        let collation = self.collations.get(&id).copied();

        if collation.is_none() {
            registry_event!(
                self.log_settings.lookup_misses_level,
                id = id.0,
                "unknown collation ID"
            );
        }

        collation
    }

    /// Looks up a collation by name, ignoring ASCII case as MySQL does.
    pub fn by_name(&self, name: &str) -> Option<&'static dyn Collation> {
        let collation = self
            .names
            .get(&name.to_ascii_lowercase())
            .map(|id| self.collations[id]);

        if collation.is_none() {
            registry_event!(
                self.log_settings.lookup_misses_level,
                collation = name,
                "unknown collation name"
            );
        }

        collation
    }

    /// The default collation of `charset`, if one was registered.
    pub fn default_for(&self, charset: Charset) -> Option<&'static dyn Collation> {
        self.defaults.get(&charset).map(|id| self.collations[id])
    }

    /// The collation of the emulated server, as configured by [`RegistryOptions`].
    pub fn server_default(&self) -> Option<&'static dyn Collation> {
        self.server_default.map(|id| self.collations[&id])
    }

    /// Iterates over all collations in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn Collation> + '_ {
        self.collations.values().copied()
    }

    pub fn len(&self) -> usize {
        self.collations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collations.is_empty()
    }
}
