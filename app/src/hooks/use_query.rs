use std::rc::Rc;

use dioxus::prelude::*;
use duels_api::prelude::*;

use super::{HttpTransport, InjectedWallet};

pub type DuelsClient = Rc<ContractClient<HttpTransport, InjectedWallet>>;

pub fn new_client() -> DuelsClient {
    let config = ClientConfig::default();
    let reader = HttpTransport::new(config.chain.rpc_url);
    Rc::new(ContractClient::new(config, reader, InjectedWallet))
}

/// Shared read cache plus the epoch that tells subscribed reads to run again.
///
/// Reads subscribe to `epoch` only; the cache itself is touched through
/// `peek` so storing a result does not wake every view.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: Signal<QueryCache>,
    epoch: Signal<u64>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: Signal::new(QueryCache::new()),
            epoch: Signal::new(0),
        }
    }

    /// Current epoch; reading it subscribes the caller.
    pub fn epoch(&self) -> u64 {
        (self.epoch)()
    }

    pub fn fresh<T: Cached>(&self, key: &ReadCall) -> Option<T> {
        self.cache.peek().get(key)
    }

    pub fn last<T: Cached>(&self, key: &ReadCall) -> Option<T> {
        self.cache.peek().peek(key)
    }

    pub fn store(&self, key: ReadCall, value: QueryValue) {
        let mut cache = self.cache;
        cache.write().insert(key, value);
    }

    pub fn invalidate(&self, rules: &[Invalidate]) {
        let mut signal = self.cache;
        let (hit, cached) = {
            let mut cache = signal.write();
            (cache.invalidate(rules), cache.entry_count())
        };
        let mut epoch = self.epoch;
        *epoch.write() += 1;
        tracing::debug!(hit, cached, "reads invalidated");
    }
}

/// One cached contract read as seen by a view.
#[derive(Clone)]
pub struct Query<T: 'static> {
    key: Option<ReadCall>,
    resource: Resource<ReadState<T>>,
    query: QueryClient,
}

impl<T: Cached + 'static> Query<T> {
    /// The read's state. While a refetch runs the last value stays visible.
    pub fn state(&self) -> ReadState<T> {
        match (&*self.resource.read(), &self.key) {
            (Some(state), _) => state.clone(),
            (None, None) => ReadState::Disabled,
            (None, Some(key)) => match self.query.last::<T>(key) {
                Some(value) => ReadState::Ready(value),
                None => ReadState::Loading,
            },
        }
    }

    pub fn value(&self) -> Option<T> {
        self.state().value().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.resource.read().is_none() && self.key.is_some()
    }

    pub fn error(&self) -> Option<ClientError> {
        self.state().error().cloned()
    }

    /// Marks this read stale so it and every view sharing it fetch again.
    pub fn refetch(&self) {
        if let Some(key) = &self.key {
            self.query.invalidate(&[Invalidate::Exact(key.clone())]);
        }
    }
}

/// Runs `key` through the shared cache. `None` disables the read: no request
/// is made and the state is [`ReadState::Disabled`].
pub fn use_read<T: Cached + 'static>(key: Option<ReadCall>) -> Query<T> {
    let client = use_context::<DuelsClient>();
    let query = use_context::<QueryClient>();

    let resource = use_resource(use_reactive!(|(key,)| {
        let client = client.clone();
        let _epoch = query.epoch();
        async move {
            let Some(key) = key else {
                return ReadState::Disabled;
            };
            if let Some(value) = query.fresh::<T>(&key) {
                return ReadState::Ready(value);
            }
            let result = client.fetch(&key).await.and_then(|value| {
                let typed = T::from_value(&value).ok_or_else(|| {
                    ClientError::decode(key.signature(), "unexpected record type")
                });
                query.store(key.clone(), value);
                typed
            });
            if let Err(e) = &result {
                tracing::warn!(?key, error = %e, "read failed");
            }
            ReadState::from_result(result)
        }
    }));

    Query {
        key,
        resource,
        query,
    }
}
