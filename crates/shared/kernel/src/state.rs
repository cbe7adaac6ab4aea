use crate::handoff::ServiceHandoff;
use crate::http::ApiClient;
use crate::notify::Notifier;
use fxhash::FxHashMap;
use gway_domain::config::SiteConfig;
use gway_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[gway_derive::gway_error]
pub enum SiteStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("State missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct SiteStateInner {
    pub config: SiteConfig,
    pub api: ApiClient,
    pub notifier: Notifier,
    pub handoff: ServiceHandoff,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Everything a page needs: config, shared services and the initialized slices.
#[derive(Debug, Clone)]
pub struct SiteState {
    inner: Arc<SiteStateInner>,
}

impl SiteState {
    #[must_use]
    pub fn builder() -> SiteStateBuilder {
        SiteStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast_ref::<T>)
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, SiteStateError> {
        self.get_slice::<T>().ok_or_else(|| SiteStateError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Names of the registered slices (for diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(|slice| slice.name)
    }
}

impl Deref for SiteState {
    type Target = SiteStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct SiteStateBuilder {
    config: Option<SiteConfig>,
    api: Option<ApiClient>,
    notifier: Option<Notifier>,
    handoff: Option<ServiceHandoff>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl SiteStateBuilder {
    #[must_use]
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn api(mut self, api: ApiClient) -> Self {
        self.api = Some(api);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn handoff(mut self, handoff: ServiceHandoff) -> Self {
        self.handoff = Some(handoff);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        for slice in slices {
            self.slices.insert(slice.id, slice);
        }
        self
    }

    /// Finalizes the state. Missing services are derived from the config.
    ///
    /// # Errors
    /// Returns [`SiteStateError::Validation`] if no config was provided or the
    /// API client cannot be built from it.
    pub fn build(self) -> Result<SiteState, SiteStateError> {
        let config = self.config.ok_or_else(|| SiteStateError::Validation {
            message: "SiteConfig not provided".into(),
            context: None,
        })?;

        let api = match self.api {
            Some(api) => api,
            None => ApiClient::new(&config.api).map_err(|err| SiteStateError::Validation {
                message: err.to_string().into(),
                context: Some("Building API client".into()),
            })?,
        };
        let notifier = self.notifier.unwrap_or_else(|| Notifier::new(&config.notifications));
        let handoff = self.handoff.unwrap_or_default();

        Ok(SiteState {
            inner: Arc::new(SiteStateInner { config, api, notifier, handoff, slices: self.slices }),
        })
    }
}
