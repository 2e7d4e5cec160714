//! Header/footer fragment loading.
//!
//! Fragments are fetched concurrently and spliced into their placeholder
//! containers. A failed load (untrusted URL, network error, non-2xx status,
//! missing container) is logged as a warning and leaves that container's
//! existing content alone; it never fails the caller and never blocks the
//! other loads.
//!
//! TRADE-OFFS
//! ==========
//! Markup is inserted verbatim. The trust boundary is the URL: only
//! same-origin relative paths are fetched, so the HTML comes from the same
//! static server as the page itself. Loading from anywhere else needs a
//! sanitizer in front of [`FragmentTarget::replace`].

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

use std::future::Future;

use crate::config::FragmentSpec;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FragmentError {
    #[error("refusing to load fragment from untrusted url `{0}`")]
    Untrusted(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("missing container `#{0}`")]
    MissingContainer(String),
}

/// Outcome of one fragment load. Failures are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentStatus {
    Loaded,
    Failed(FragmentError),
}

impl FragmentStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// Where fragment markup comes from.
pub trait FragmentSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FragmentError>>;
}

/// Where fragment markup goes.
pub trait FragmentTarget {
    /// Replace the inner content of `#container_id` with `html`.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentError::MissingContainer`] when the container does not
    /// exist; the document must be left unchanged in that case.
    fn replace(&self, container_id: &str, html: &str) -> Result<(), FragmentError>;
}

/// Same-origin relative paths only: no scheme, no protocol-relative `//`.
pub fn is_trusted_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() || url.starts_with("//") || url.starts_with("\\\\") {
        return false;
    }
    let head = url.split(['/', '?', '#']).next().unwrap_or_default();
    !head.contains(':')
}

/// Load a single fragment. Never panics or returns an error; see [`FragmentStatus`].
pub async fn load_fragment<S, T>(source: &S, target: &T, spec: &FragmentSpec) -> FragmentStatus
where
    S: FragmentSource,
    T: FragmentTarget,
{
    match try_load(source, target, spec).await {
        Ok(()) => {
            log::debug!("loaded fragment {} into #{}", spec.url, spec.container_id);
            FragmentStatus::Loaded
        }
        Err(err) => {
            log::warn!("fragment load failed: {} ({err})", spec.url);
            FragmentStatus::Failed(err)
        }
    }
}

/// Load every fragment concurrently; resolves once all have settled.
/// Statuses are returned in `specs` order regardless of completion order.
pub async fn load_all<S, T>(source: &S, target: &T, specs: &[FragmentSpec]) -> Vec<FragmentStatus>
where
    S: FragmentSource,
    T: FragmentTarget,
{
    futures::future::join_all(specs.iter().map(|spec| load_fragment(source, target, spec))).await
}

async fn try_load<S, T>(source: &S, target: &T, spec: &FragmentSpec) -> Result<(), FragmentError>
where
    S: FragmentSource,
    T: FragmentTarget,
{
    if !is_trusted_url(&spec.url) {
        return Err(FragmentError::Untrusted(spec.url.clone()));
    }
    let html = source.fetch(&spec.url).await?;
    target.replace(&spec.container_id, &html)
}

/// Plain `GET` via `gloo-net`.
#[cfg(feature = "browser")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

#[cfg(feature = "browser")]
impl FragmentSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String, FragmentError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FragmentError::Network(e.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(FragmentError::Status(status));
        }
        resp.text()
            .await
            .map_err(|e| FragmentError::Network(e.to_string()))
    }
}

/// Writes fragments into the live document via `innerHTML`.
#[cfg(feature = "browser")]
#[derive(Clone, Debug)]
pub struct DocumentTarget {
    document: web_sys::Document,
}

#[cfg(feature = "browser")]
impl DocumentTarget {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

#[cfg(feature = "browser")]
impl FragmentTarget for DocumentTarget {
    fn replace(&self, container_id: &str, html: &str) -> Result<(), FragmentError> {
        let container = self
            .document
            .get_element_by_id(container_id)
            .ok_or_else(|| FragmentError::MissingContainer(container_id.to_owned()))?;
        container.set_inner_html(html);
        Ok(())
    }
}
