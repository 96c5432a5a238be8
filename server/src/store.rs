//! Session and content storage over the TTL cache.
//!
//! One cache holds three namespaces keyed by identifier: `session:` for raw
//! templates, `ct:` for each session's content type, and `content:` for
//! rendered documents. Template entries never slide, so a session dies a
//! fixed interval after creation; content-type and document entries slide on
//! every read.

use std::sync::Arc;

use chrono::TimeDelta;
use mockable::Clock;

use crate::cache::TtlCache;
use crate::session::{
    ContentId, DEFAULT_CONTENT_TTL_MINUTES, DEFAULT_CONTENT_TYPE, SessionId,
};

/// Storage facade used by the HTTP handlers.
pub struct MockStore {
    cache: TtlCache,
    content_ttl: TimeDelta,
}

impl MockStore {
    /// Create a store reading time from `clock` with the default document
    /// lifetime.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_content_ttl(clock, TimeDelta::minutes(DEFAULT_CONTENT_TTL_MINUTES))
    }

    /// Create a store with an explicit rendered-document lifetime.
    #[must_use]
    pub fn with_content_ttl(clock: Arc<dyn Clock>, content_ttl: TimeDelta) -> Self {
        Self {
            cache: TtlCache::new(clock),
            content_ttl,
        }
    }

    /// Register a template under a freshly minted session identifier.
    ///
    /// The content type entry shares the session lifetime but slides on
    /// access, so an actively polled session keeps serving its configured
    /// type even as the template entry runs down.
    pub fn create_session(
        &self,
        template: &str,
        content_type: &str,
        session_ttl: TimeDelta,
    ) -> SessionId {
        let session = SessionId::mint();
        self.cache
            .insert(template_key(session), template, session_ttl);
        self.cache
            .insert(content_type_key(session), content_type, session_ttl);
        session
    }

    /// Fetch a session's template without extending its lifetime.
    #[must_use]
    pub fn template(&self, session: SessionId) -> Option<String> {
        self.cache.get(&template_key(session))
    }

    /// Fetch a session's content type, sliding its expiry. Falls back to
    /// the protocol default once the entry has expired.
    #[must_use]
    pub fn content_type(&self, session: SessionId) -> String {
        self.cache
            .get_sliding(&content_type_key(session))
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_owned())
    }

    /// Cache a rendered document under `content`.
    pub fn store_document(&self, content: ContentId, body: &str) {
        self.cache.insert(document_key(content), body, self.content_ttl);
    }

    /// Cache a rendered document unless one already exists, returning the
    /// body that survives. Racing regenerations of one content identifier
    /// all serve the first writer's bytes.
    pub fn store_document_if_absent(&self, content: ContentId, body: &str) -> String {
        self.cache
            .insert_if_absent(document_key(content), body, self.content_ttl)
    }

    /// Fetch a cached document, sliding its expiry.
    #[must_use]
    pub fn document(&self, content: ContentId) -> Option<String> {
        self.cache.get_sliding(&document_key(content))
    }

    /// Reclaim expired entries across all namespaces.
    pub fn evict_expired(&self) -> usize {
        self.cache.evict_expired()
    }
}

fn template_key(session: SessionId) -> String {
    format!("session:{session}")
}

fn content_type_key(session: SessionId) -> String {
    format!("ct:{session}")
}

fn document_key(content: ContentId) -> String {
    format!("content:{content}")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::test_support::MutableClock;

    struct Harness {
        clock: Arc<MutableClock>,
        store: MockStore,
    }

    #[fixture]
    fn harness() -> Harness {
        let clock = Arc::new(MutableClock::new(Utc::now()));
        let store = MockStore::new(Arc::clone(&clock) as Arc<dyn Clock>);
        Harness { clock, store }
    }

    #[rstest]
    fn created_sessions_serve_their_template_and_type(harness: Harness) {
        let session = harness
            .store
            .create_session("{{ hash }}", "text/xml", TimeDelta::minutes(60));
        assert_eq!(harness.store.template(session), Some("{{ hash }}".to_owned()));
        assert_eq!(harness.store.content_type(session), "text/xml");
    }

    #[rstest]
    fn sessions_expire_after_their_configured_lifetime(harness: Harness) {
        let session = harness
            .store
            .create_session("{{ hash }}", "text/xml", TimeDelta::minutes(2));
        harness.clock.advance_seconds(3 * 60);
        assert_eq!(harness.store.template(session), None);
    }

    #[rstest]
    fn template_reads_do_not_extend_the_session(harness: Harness) {
        let session = harness
            .store
            .create_session("{{ hash }}", "text/xml", TimeDelta::minutes(2));
        harness.clock.advance_seconds(90);
        assert!(harness.store.template(session).is_some());
        harness.clock.advance_seconds(60);
        assert_eq!(harness.store.template(session), None);
    }

    #[rstest]
    fn content_type_falls_back_to_the_default_when_expired(harness: Harness) {
        let session = harness
            .store
            .create_session("{{ hash }}", "text/xml", TimeDelta::minutes(2));
        harness.clock.advance_seconds(3 * 60);
        assert_eq!(harness.store.content_type(session), "application/json");
    }

    #[rstest]
    fn documents_slide_on_every_read(harness: Harness) {
        let session = harness
            .store
            .create_session("{{ hash }}", "text/xml", TimeDelta::minutes(60));
        let _ = session;
        let content = ContentId::mint();
        harness.store.store_document(content, "body");
        // Default document lifetime is 15 minutes; read at 14 to renew it.
        harness.clock.advance_seconds(14 * 60);
        assert!(harness.store.document(content).is_some());
        harness.clock.advance_seconds(14 * 60);
        assert_eq!(harness.store.document(content), Some("body".to_owned()));
        harness.clock.advance_seconds(16 * 60);
        assert_eq!(harness.store.document(content), None);
    }

    #[rstest]
    fn document_regeneration_keeps_the_first_writer(harness: Harness) {
        let content = ContentId::mint();
        let first = harness.store.store_document_if_absent(content, "first");
        let second = harness.store.store_document_if_absent(content, "second");
        assert_eq!(first, "first");
        assert_eq!(second, "first");
    }

    #[rstest]
    fn namespaces_do_not_collide(harness: Harness) {
        let session = harness
            .store
            .create_session("{{ hash }}", "text/xml", TimeDelta::minutes(60));
        // Reuse the session UUID as a content identifier.
        let content: ContentId = session
            .to_string()
            .parse()
            .expect("session UUID parses as content id");
        assert_eq!(harness.store.document(content), None);
        harness.store.store_document(content, "body");
        assert_eq!(harness.store.template(session), Some("{{ hash }}".to_owned()));
    }

    #[rstest]
    fn eviction_sweeps_all_namespaces(harness: Harness) {
        let session = harness
            .store
            .create_session("{{ hash }}", "text/xml", TimeDelta::minutes(1));
        let _ = session;
        let content = ContentId::mint();
        harness.store.store_document(content, "body");
        harness.clock.advance_seconds(20 * 60);
        assert_eq!(harness.store.evict_expired(), 3);
    }
}
